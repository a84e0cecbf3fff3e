// SPDX-License-Identifier: Apache-2.0

//! Compile-time configuration validation
//!
//! The default limits depend on each other; these checks keep a change to one
//! constant from silently breaking another.

use crate::config::{CHUNK_SIZE, MAX_DEPTH, NUMBER_MAX_LEN, STRING_MAX_LEN, TAB_WIDTH};

const _: () = assert!(CHUNK_SIZE > 0, "CHUNK_SIZE must be non-zero");

// A number literal must be decidable from at most one chunk of lookahead.
const _: () = assert!(
    NUMBER_MAX_LEN > 0 && NUMBER_MAX_LEN <= CHUNK_SIZE,
    "NUMBER_MAX_LEN must be between 1 and CHUNK_SIZE"
);

// The string loop needs to load at least one chunk before giving up.
const _: () = assert!(
    STRING_MAX_LEN >= CHUNK_SIZE,
    "STRING_MAX_LEN must be at least one CHUNK_SIZE"
);

const _: () = assert!(MAX_DEPTH > 0, "MAX_DEPTH must be non-zero");

const _: () = assert!(TAB_WIDTH > 0, "TAB_WIDTH must be non-zero");

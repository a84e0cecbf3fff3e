// SPDX-License-Identifier: Apache-2.0

//! A bounded-memory, pull-based JSON reader.
//!
//! [`JsonChunkReader`] pulls its input from any [`std::io::Read`] in fixed-size
//! chunks and only ever holds the unconsumed part of the document. Tokens may
//! straddle chunk boundaries; errors carry the 1-based line and column of the
//! offending byte.
//!
//! Two leniencies over strict JSON are accepted: a comma right before `}` or
//! `]`, and number literals with leading zeros (`01` reads as `1`).
//!
//! ```
//! use jsonchunk::{ChunkReader, JsonChunkReader, Number};
//!
//! let json = br#"[1, 2.5, "three", null, true,]"#;
//! let mut reader = JsonChunkReader::new(ChunkReader::new(json, 4));
//!
//! let items = reader.get_array().unwrap();
//! assert_eq!(items.len(), 5);
//! assert_eq!(items[1].as_number(), Some(&Number::Float(2.5)));
//! assert!(reader.is_eof());
//! ```

// Compile-time configuration validation
mod config_check;

mod config;
pub use config::{ReaderConfig, CHUNK_SIZE, MAX_DEPTH, NUMBER_MAX_LEN, STRING_MAX_LEN, TAB_WIDTH};

mod chunk_reader;
pub use chunk_reader::ChunkReader;

mod chunk_source;

mod sliding_buffer;

mod position;
pub use position::Position;

mod cursor;

mod escape_processor;

mod int_parser;

mod json_number;
pub use json_number::Number;

mod scanner;
pub use scanner::TokenKind;

mod parse_error;
pub use parse_error::{ErrorKind, ParseError};

mod value;
pub use value::{Map, Value};

mod reader;
pub use reader::{from_reader, from_slice, JsonChunkReader};

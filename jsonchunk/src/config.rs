// SPDX-License-Identifier: Apache-2.0

/// Number of bytes requested from the source per read (matches a typical OS I/O block).
pub const CHUNK_SIZE: usize = 64 * 1024;

/// Buffered size at which an unfinished string literal is rejected.
pub const STRING_MAX_LEN: usize = 1024 * 1024;

/// Longest number literal the reader will buffer and accept.
pub const NUMBER_MAX_LEN: usize = 100;

/// Deepest object/array nesting accepted before `DepthLimitExceeded` is raised.
pub const MAX_DEPTH: usize = 512;

/// Columns a tab character advances the position by.
pub const TAB_WIDTH: usize = 8;

/// Runtime limits of a [`JsonChunkReader`](crate::JsonChunkReader).
///
/// The defaults equal the crate constants. Every setter clamps its value to at
/// least 1, so a config can never stall the reader.
///
/// # Example
/// ```
/// use jsonchunk::{JsonChunkReader, ReaderConfig};
///
/// let config = ReaderConfig::default().with_chunk_size(16).with_max_depth(8);
/// let mut reader = JsonChunkReader::with_config(&br#"[1, [2, [3]]]"#[..], config);
/// assert_eq!(reader.get_array().unwrap().len(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReaderConfig {
    chunk_size: usize,
    string_max_len: usize,
    number_max_len: usize,
    max_depth: usize,
}

impl ReaderConfig {
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size.max(1);
        self
    }

    pub fn with_string_max_len(mut self, string_max_len: usize) -> Self {
        self.string_max_len = string_max_len.max(1);
        self
    }

    pub fn with_number_max_len(mut self, number_max_len: usize) -> Self {
        self.number_max_len = number_max_len.max(1);
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth.max(1);
        self
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    pub fn string_max_len(&self) -> usize {
        self.string_max_len
    }

    pub fn number_max_len(&self) -> usize {
        self.number_max_len
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            chunk_size: CHUNK_SIZE,
            string_max_len: STRING_MAX_LEN,
            number_max_len: NUMBER_MAX_LEN,
            max_depth: MAX_DEPTH,
        }
    }
}

//! A convenience [`Read`] implementation for simulating streamed input.
//!
//! [`ChunkReader`] serves an in-memory byte slice but limits every `read()`
//! call to a fixed number of bytes. It behaves like a slow network socket or
//! a pipe, and is the easiest way to check that a document decodes the same
//! no matter where the chunk boundaries fall.
//!
//! For real inputs you hand any [`Read`] to the reader directly:
//!
//! - **File I/O**: `std::fs::File` (see [`JsonChunkReader::open`](crate::JsonChunkReader::open))
//! - **Network**: `std::net::TcpStream`
//! - **In-memory**: `&[u8]` or `std::io::Cursor`
//!
//! # Examples
//!
//! ```rust
//! use jsonchunk::{ChunkReader, JsonChunkReader};
//!
//! // Deliver the document three bytes at a time
//! let json = br#"{"name": "Alice", "age": 30}"#;
//! let mut reader = JsonChunkReader::new(ChunkReader::new(json, 3));
//!
//! let object = reader.get_object().unwrap();
//! assert_eq!(object["name"].as_str(), Some("Alice"));
//! reader.get_eof().unwrap();
//! ```

use std::io::{self, Read};

/// A [`Read`] over a byte slice that returns at most `chunk_size` bytes per call.
///
/// # Example: Full Slice
///
/// ```rust
/// use jsonchunk::{ChunkReader, JsonChunkReader};
///
/// let reader = ChunkReader::full_slice(br#"{"status": "ok"}"#);
/// let mut reader = JsonChunkReader::new(reader);
/// assert!(reader.is_object());
/// ```
#[derive(Debug)]
pub struct ChunkReader<'a> {
    data: &'a [u8],
    pos: usize,
    chunk_size: usize,
}

impl<'a> ChunkReader<'a> {
    /// Create a reader that returns at most `chunk_size` bytes per `read()` (minimum 1).
    pub fn new(data: &'a [u8], chunk_size: usize) -> Self {
        Self {
            data,
            pos: 0,
            chunk_size: chunk_size.max(1),
        }
    }

    /// Create a reader that fills as much of each read buffer as it can.
    pub fn full_slice(data: &'a [u8]) -> Self {
        Self {
            data,
            pos: 0,
            chunk_size: usize::MAX,
        }
    }

    /// Bytes not yet handed out.
    pub fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.pos)
    }
}

impl Read for ChunkReader<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let to_copy = self.remaining().min(buf.len()).min(self.chunk_size);
        if to_copy == 0 {
            return Ok(0);
        }
        let end = self.pos.saturating_add(to_copy);
        if let (Some(dest), Some(src)) = (buf.get_mut(..to_copy), self.data.get(self.pos..end)) {
            dest.copy_from_slice(src);
        }
        self.pos = end;
        Ok(to_copy)
    }
}

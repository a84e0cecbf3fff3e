// SPDX-License-Identifier: Apache-2.0

use std::io::Read;

use log::debug;

use crate::chunk_source::ChunkSource;
use crate::position::{is_whitespace, Position, PositionTracker};
use crate::sliding_buffer::SlidingBuffer;

/// All mutable parsing state: the source, the unconsumed window and the
/// position of the window's first byte.
///
/// Between public reader calls the cursor is either at end of input (empty
/// window, source exhausted) or positioned on the first byte of a token.
pub(crate) struct Cursor<R> {
    source: ChunkSource<R>,
    buffer: SlidingBuffer,
    tracker: PositionTracker,
}

impl<R: Read> Cursor<R> {
    pub fn new(reader: R, chunk_size: usize) -> Self {
        Self {
            source: ChunkSource::new(reader, chunk_size),
            buffer: SlidingBuffer::new(),
            tracker: PositionTracker::new(),
        }
    }

    /// Drop the consumed prefix and append the next chunk.
    /// Returns `false` once the source is exhausted.
    pub fn load_chunk(&mut self) -> bool {
        let discarded = self.buffer.compact();
        if discarded > 0 {
            debug!("discarded {discarded} consumed bytes");
        }
        self.source.read_chunk(&mut self.buffer)
    }

    /// Load chunks until at least `len` bytes are buffered.
    /// Returns `false` if the stream ended first.
    pub fn ensure(&mut self, len: usize) -> bool {
        while self.buffer.size() < len {
            if !self.load_chunk() {
                return false;
            }
        }
        true
    }

    /// Skip whitespace, loading chunks as needed, until a significant byte
    /// is at the front or the stream is exhausted.
    pub fn skip_whitespace(&mut self) {
        loop {
            let skip = self
                .buffer
                .window()
                .iter()
                .take_while(|&&b| is_whitespace(b))
                .count();
            let skipped = self.buffer.consume(skip);
            self.tracker.advance_all(skipped);

            if !self.buffer.is_empty() || !self.load_chunk() {
                return;
            }
        }
    }

    /// Consume `count` bytes, updating the position.
    pub fn consume(&mut self, count: usize) -> &[u8] {
        let bytes = self.buffer.consume(count);
        self.tracker.advance_all(bytes);
        bytes
    }

    pub fn window(&self) -> &[u8] {
        self.buffer.window()
    }

    pub fn current_byte(&self) -> Option<u8> {
        self.buffer.current_byte()
    }

    /// The character at the front of the window, for error messages.
    pub fn current_char(&self) -> Option<char> {
        let window = self.buffer.window();
        let first = *window.first()?;
        if first.is_ascii() {
            return Some(char::from(first));
        }
        let candidate = window.get(..4).unwrap_or(window);
        let valid = match core::str::from_utf8(candidate) {
            Ok(s) => s,
            Err(e) => candidate
                .get(..e.valid_up_to())
                .and_then(|bytes| core::str::from_utf8(bytes).ok())
                .unwrap_or_default(),
        };
        Some(valid.chars().next().unwrap_or(char::REPLACEMENT_CHARACTER))
    }

    pub fn size(&self) -> usize {
        self.buffer.size()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn position(&self) -> Position {
        self.tracker.position()
    }

    /// Close the source and release the buffered bytes.
    pub fn shutdown(&mut self) {
        self.source.close();
        self.buffer.clear();
    }

    pub fn is_closed(&self) -> bool {
        self.source.is_closed()
    }
}

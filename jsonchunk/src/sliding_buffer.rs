// SPDX-License-Identifier: Apache-2.0

/// The window of bytes read from the source but not yet consumed.
///
/// Key design principles:
/// - `buffer[position..]` is the unconsumed window, `buffer[..position]` is
///   already visited and is dropped by [`compact`](Self::compact)
/// - New chunks are always appended after compaction, so memory stays bounded
///   by the longest token plus one chunk
pub(crate) struct SlidingBuffer {
    buffer: Vec<u8>,
    /// Offset of the first unconsumed byte
    position: usize,
}

impl SlidingBuffer {
    pub fn new() -> Self {
        Self {
            buffer: Vec::new(),
            position: 0,
        }
    }

    /// Number of unconsumed bytes.
    pub fn size(&self) -> usize {
        self.buffer.len().saturating_sub(self.position)
    }

    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// The unconsumed window.
    pub fn window(&self) -> &[u8] {
        self.buffer.get(self.position..).unwrap_or(&[])
    }

    pub fn current_byte(&self) -> Option<u8> {
        self.buffer.get(self.position).copied()
    }

    /// Consume `count` bytes and return them.
    pub fn consume(&mut self, count: usize) -> &[u8] {
        let start = self.position;
        let end = start.saturating_add(count).min(self.buffer.len());
        self.position = end;
        self.buffer.get(start..end).unwrap_or(&[])
    }

    /// Drop the consumed prefix. Returns the number of bytes discarded.
    pub fn compact(&mut self) -> usize {
        let discarded = self.position;
        if discarded != 0 {
            self.buffer.drain(..discarded);
            self.position = 0;
        }
        discarded
    }

    #[cfg(test)]
    pub fn append(&mut self, bytes: &[u8]) {
        self.buffer.extend_from_slice(bytes);
    }

    /// Scratch space of `len` bytes after the window, for the source to read into.
    /// Must be followed by [`commit_fill`](Self::commit_fill).
    pub fn fill_slice(&mut self, len: usize) -> &mut [u8] {
        let start = self.buffer.len();
        self.buffer.resize(start.saturating_add(len), 0);
        self.buffer.get_mut(start..).unwrap_or(&mut [])
    }

    /// Keep `filled` bytes of the last [`fill_slice`](Self::fill_slice) and drop the rest.
    pub fn commit_fill(&mut self, requested: usize, filled: usize) {
        let unused = requested.saturating_sub(filled);
        let new_len = self.buffer.len().saturating_sub(unused);
        self.buffer.truncate(new_len);
    }

    /// Release all buffered bytes.
    pub fn clear(&mut self) {
        self.buffer = Vec::new();
        self.position = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_buffer_is_empty() {
        let buffer = SlidingBuffer::new();
        assert!(buffer.is_empty());
        assert_eq!(buffer.size(), 0);
        assert_eq!(buffer.current_byte(), None);
        assert_eq!(buffer.window(), b"");
    }

    #[test]
    fn test_consume_and_window() {
        let mut buffer = SlidingBuffer::new();
        buffer.append(b"hello world");
        assert_eq!(buffer.consume(6), b"hello ");
        assert_eq!(buffer.window(), b"world");
        assert_eq!(buffer.current_byte(), Some(b'w'));
        assert_eq!(buffer.size(), 5);
    }

    #[test]
    fn test_consume_past_end_is_clamped() {
        let mut buffer = SlidingBuffer::new();
        buffer.append(b"abc");
        assert_eq!(buffer.consume(10), b"abc");
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_compact_discards_consumed_prefix() {
        let mut buffer = SlidingBuffer::new();
        buffer.append(b"0123456789");
        buffer.consume(4);
        assert_eq!(buffer.compact(), 4);
        assert_eq!(buffer.window(), b"456789");
        // Nothing left to discard
        assert_eq!(buffer.compact(), 0);
        buffer.append(b"ab");
        assert_eq!(buffer.window(), b"456789ab");
    }

    #[test]
    fn test_fill_slice_partial_commit() {
        let mut buffer = SlidingBuffer::new();
        buffer.append(b"x");
        let fill = buffer.fill_slice(8);
        assert_eq!(fill.len(), 8);
        fill[..3].copy_from_slice(b"abc");
        buffer.commit_fill(8, 3);
        assert_eq!(buffer.window(), b"xabc");
    }

    #[test]
    fn test_fill_slice_zero_commit() {
        let mut buffer = SlidingBuffer::new();
        buffer.fill_slice(16);
        buffer.commit_fill(16, 0);
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut buffer = SlidingBuffer::new();
        buffer.append(b"abc");
        buffer.clear();
        assert!(buffer.is_empty());
    }
}

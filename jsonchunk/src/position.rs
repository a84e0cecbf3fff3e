// SPDX-License-Identifier: Apache-2.0

use crate::config::TAB_WIDTH;

/// A 1-based line and column in the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Default for Position {
    fn default() -> Self {
        Self { line: 1, column: 1 }
    }
}

impl core::fmt::Display for Position {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Tracks line and column as bytes are consumed.
///
/// `column` counts the characters already consumed on the current line, so the
/// next byte sits at `column + 1`. Only `\n` starts a new line; `\r` counts as
/// an ordinary column.
///
/// Columns are character columns, not byte offsets: UTF-8 continuation bytes
/// do not advance the column, so `é` (two bytes) moves it by one.
#[derive(Debug, Clone)]
pub(crate) struct PositionTracker {
    line: usize,
    column: usize,
}

impl PositionTracker {
    pub fn new() -> Self {
        Self { line: 1, column: 0 }
    }

    pub fn advance(&mut self, byte: u8) {
        match byte {
            b'\n' => {
                self.line = self.line.saturating_add(1);
                self.column = 0;
            }
            b'\t' => self.column = self.column.saturating_add(TAB_WIDTH),
            0x80..=0xBF => {}
            _ => self.column = self.column.saturating_add(1),
        }
    }

    pub fn advance_all(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.advance(byte);
        }
    }

    /// Position of the next unconsumed byte.
    pub fn position(&self) -> Position {
        Position {
            line: self.line,
            column: self.column.saturating_add(1),
        }
    }
}

/// The insignificant whitespace skipped between tokens.
pub(crate) const fn is_whitespace(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\r')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_one_one() {
        assert_eq!(PositionTracker::new().position(), Position::default());
    }

    #[test]
    fn test_newline_resets_column() {
        let mut tracker = PositionTracker::new();
        tracker.advance_all(b"\"x\"\n  ");
        assert_eq!(tracker.position(), Position { line: 2, column: 3 });
    }

    #[test]
    fn test_carriage_return_is_a_column() {
        let mut tracker = PositionTracker::new();
        tracker.advance_all(b"a\r");
        assert_eq!(tracker.position(), Position { line: 1, column: 3 });
        tracker.advance(b'\n');
        assert_eq!(tracker.position(), Position { line: 2, column: 1 });
    }

    #[test]
    fn test_tab_advances_by_tab_width() {
        let mut tracker = PositionTracker::new();
        tracker.advance(b'\t');
        assert_eq!(tracker.position().column, TAB_WIDTH + 1);
    }

    #[test]
    fn test_multibyte_character_is_one_column() {
        let mut tracker = PositionTracker::new();
        tracker.advance_all("é".as_bytes());
        assert_eq!(tracker.position().column, 2);
    }

    #[test]
    fn test_whitespace_set() {
        for byte in [b' ', b'\t', b'\n', b'\r'] {
            assert!(is_whitespace(byte));
        }
        assert!(!is_whitespace(b'x'));
        assert!(!is_whitespace(0x0C));
    }
}

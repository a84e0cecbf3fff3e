// SPDX-License-Identifier: Apache-2.0

use crate::position::Position;

/// The reason a parse failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// The byte at the cursor does not start the expected value or structure.
    UnexpectedCharacter(char),
    /// A literal or punctuation (`null`, `true`, `:`, `}` ...) did not match.
    ExpectedLiteral(&'static str),
    /// No number could be recognized at the cursor, or it overflowed.
    InvalidNumber,
    /// A number literal was longer than the configured maximum.
    NumberTooLong,
    /// A string contained an invalid escape, control byte or lone surrogate.
    InvalidString(&'static str),
    /// The decoded string bytes were not valid UTF-8.
    InvalidUtf8,
    /// The stream ended inside a string literal.
    UnterminatedString,
    /// The buffered string reached the configured maximum before it ended.
    StringTooLong,
    /// A value was expected but the stream is exhausted.
    UnexpectedEof,
    /// Non-whitespace bytes remain where the end of the document was expected.
    TrailingGarbage,
    /// Objects and arrays are nested deeper than the configured maximum.
    DepthLimitExceeded,
    /// The reader was closed before the input was exhausted.
    ClosedEarly,
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ErrorKind::UnexpectedCharacter(c) => write!(f, "unexpected character {c:?}"),
            ErrorKind::ExpectedLiteral(text) => write!(f, "expected '{text}'"),
            ErrorKind::InvalidNumber => f.write_str("invalid number"),
            ErrorKind::NumberTooLong => f.write_str("number literal exceeds maximum length"),
            ErrorKind::InvalidString(reason) => write!(f, "invalid string: {reason}"),
            ErrorKind::InvalidUtf8 => f.write_str("invalid UTF-8 in string"),
            ErrorKind::UnterminatedString => f.write_str("invalid string: missing closing quote"),
            ErrorKind::StringTooLong => f.write_str("string exceeds maximum length"),
            ErrorKind::UnexpectedEof => f.write_str("unexpected end of file"),
            ErrorKind::TrailingGarbage => f.write_str("trailing garbage after document"),
            ErrorKind::DepthLimitExceeded => f.write_str("nesting depth limit exceeded"),
            ErrorKind::ClosedEarly => f.write_str("reader closed before end of input"),
        }
    }
}

/// A fatal parse failure and the 1-based position of the offending byte.
///
/// String errors (`InvalidString`, `InvalidUtf8`, `UnterminatedString`,
/// `StringTooLong`) and number errors point at the first byte of the literal,
/// not at the byte inside it that caused the failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    kind: ErrorKind,
    line: usize,
    column: usize,
}

impl ParseError {
    pub fn new(kind: ErrorKind, position: Position) -> Self {
        Self {
            kind,
            line: position.line,
            column: position.column,
        }
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn column(&self) -> usize {
        self.column
    }

    pub fn position(&self) -> Position {
        Position {
            line: self.line,
            column: self.column,
        }
    }
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{} at line {}, column {}",
            self.kind, self.line, self.column
        )
    }
}

impl std::error::Error for ParseError {}

impl From<ParseError> for std::io::Error {
    fn from(error: ParseError) -> Self {
        std::io::Error::new(std::io::ErrorKind::InvalidData, error)
    }
}

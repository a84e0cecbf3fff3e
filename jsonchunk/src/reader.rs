// SPDX-License-Identifier: Apache-2.0

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use log::{debug, trace};

use crate::config::ReaderConfig;
use crate::cursor::Cursor;
use crate::escape_processor::{EscapeError, EscapeProcessor};
use crate::json_number::{parse_number, Number};
use crate::parse_error::{ErrorKind, ParseError};
use crate::position::Position;
use crate::scanner::{scan_number, scan_string, StringScan, TokenKind};
use crate::value::{Map, Value};

/// A pull-based JSON reader over any [`Read`] source.
///
/// The reader pulls the input in fixed-size chunks and keeps only the
/// unconsumed part in memory. Callers walk the document with the `is_*`
/// queries, which never consume, and the `get_*` operations, which validate,
/// consume and decode exactly one value.
///
/// Every error is fatal: the source is closed when the error is raised and
/// every later `get_*` call returns the same error.
///
/// # Example
/// ```
/// use jsonchunk::{JsonChunkReader, Value};
///
/// let json = r#"{"name": "Ménard", "age": 52, "tags": ["a", "b"]}"#.as_bytes();
/// let mut reader = JsonChunkReader::new(json);
///
/// let person = reader.get_object().unwrap();
/// assert_eq!(person["name"], Value::from("Ménard"));
/// assert_eq!(person["age"].as_i64(), Some(52));
/// reader.get_eof().unwrap();
/// ```
pub struct JsonChunkReader<R> {
    cursor: Cursor<R>,
    config: ReaderConfig,
    /// Current object/array nesting
    depth: usize,
    /// The first error raised, replayed by every later call
    failure: Option<ParseError>,
}

impl<R: Read> JsonChunkReader<R> {
    /// Create a reader with the default configuration.
    pub fn new(reader: R) -> Self {
        Self::with_config(reader, ReaderConfig::default())
    }

    /// Create a reader with custom limits.
    ///
    /// The first chunk is loaded and leading whitespace skipped before this returns.
    pub fn with_config(reader: R, config: ReaderConfig) -> Self {
        let mut cursor = Cursor::new(reader, config.chunk_size());
        cursor.skip_whitespace();
        Self {
            cursor,
            config,
            depth: 0,
            failure: None,
        }
    }

    /// Classify the token at the cursor without consuming it.
    pub fn peek_token(&self) -> TokenKind {
        if self.failure.is_some() {
            return TokenKind::None;
        }
        self.cursor
            .current_byte()
            .map_or(TokenKind::None, TokenKind::classify)
    }

    /// Position of the next unconsumed byte.
    pub fn position(&self) -> Position {
        self.cursor.position()
    }

    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }

    /// Close the source and drop buffered input. Idempotent.
    ///
    /// Closing before the input is exhausted is recorded as
    /// [`ErrorKind::ClosedEarly`]: afterwards `is_eof` is false and every
    /// `get_*` returns that error.
    pub fn close(&mut self) {
        let exhausted = self.cursor.is_closed() && self.cursor.is_empty();
        if !exhausted && self.failure.is_none() {
            let error = ParseError::new(ErrorKind::ClosedEarly, self.cursor.position());
            debug!("{error}");
            self.failure = Some(error);
        }
        self.cursor.shutdown();
    }

    pub fn is_closed(&self) -> bool {
        self.cursor.is_closed()
    }

    pub fn is_null(&self) -> bool {
        self.peek_token() == TokenKind::Null
    }

    pub fn is_bool(&self) -> bool {
        self.peek_token() == TokenKind::Bool
    }

    pub fn is_number(&self) -> bool {
        self.peek_token() == TokenKind::Number
    }

    pub fn is_string(&self) -> bool {
        self.peek_token() == TokenKind::String
    }

    pub fn is_object(&self) -> bool {
        self.peek_token() == TokenKind::Object
    }

    pub fn is_array(&self) -> bool {
        self.peek_token() == TokenKind::Array
    }

    pub fn is_value(&self) -> bool {
        self.peek_token() != TokenKind::None
    }

    /// True when only whitespace remained and the stream is exhausted.
    pub fn is_eof(&self) -> bool {
        self.failure.is_none() && self.cursor.is_empty()
    }

    /// Consume a `null` literal.
    pub fn get_null(&mut self) -> Result<(), ParseError> {
        self.expect_start(TokenKind::Null)?;
        self.expect_token("null")
    }

    /// Consume a `true` or `false` literal.
    pub fn get_bool(&mut self) -> Result<bool, ParseError> {
        self.expect_start(TokenKind::Bool)?;
        if self.cursor.current_byte() == Some(b't') {
            self.expect_token("true")?;
            Ok(true)
        } else {
            self.expect_token("false")?;
            Ok(false)
        }
    }

    /// Consume a number literal.
    pub fn get_number(&mut self) -> Result<Number, ParseError> {
        self.expect_start(TokenKind::Number)?;
        let start = self.cursor.position();
        let max_len = self.config.number_max_len();

        // One byte past the limit tells a too-long literal from one that ends exactly there
        self.cursor.ensure(max_len.saturating_add(1));
        let Some(scan) = scan_number(self.cursor.window()) else {
            return self.fail_at(ErrorKind::InvalidNumber, start);
        };
        if scan.len > max_len {
            return self.fail_at(ErrorKind::NumberTooLong, start);
        }

        let Some(number) = parse_number(self.cursor.consume(scan.len)) else {
            return self.fail_at(ErrorKind::InvalidNumber, start);
        };
        self.cursor.skip_whitespace();
        Ok(number)
    }

    /// Consume a string literal and decode its escapes.
    ///
    /// Every string error is reported at the opening quote.
    pub fn get_string(&mut self) -> Result<String, ParseError> {
        self.expect_start(TokenKind::String)?;
        let start = self.cursor.position();
        let max_len = self.config.string_max_len();

        let mut resume_at = 1;
        let len = loop {
            match scan_string(self.cursor.window(), resume_at) {
                StringScan::Complete { len } => break len,
                StringScan::Incomplete { resume_at: next } => {
                    resume_at = next;
                    if self.cursor.size() >= max_len {
                        return self.fail_at(ErrorKind::StringTooLong, start);
                    }
                    if !self.cursor.load_chunk() {
                        return self.fail_at(ErrorKind::UnterminatedString, start);
                    }
                }
                StringScan::Invalid(reason) => {
                    return self.fail_at(ErrorKind::InvalidString(reason), start);
                }
            }
        };

        let literal = self.cursor.consume(len);
        let body = literal.get(1..len.saturating_sub(1)).unwrap_or_default();
        let decoded = EscapeProcessor::decode(body);
        match decoded {
            Ok(s) => {
                self.cursor.skip_whitespace();
                Ok(s)
            }
            Err(EscapeError::InvalidEscape(reason)) => {
                self.fail_at(ErrorKind::InvalidString(reason), start)
            }
            Err(EscapeError::InvalidUtf8) => self.fail_at(ErrorKind::InvalidUtf8, start),
        }
    }

    /// Consume an object. A comma before the closing `}` is tolerated;
    /// duplicate keys keep the last value.
    pub fn get_object(&mut self) -> Result<Map, ParseError> {
        self.expect_start(TokenKind::Object)?;
        self.enter()?;
        self.expect_token("{")?;

        let mut map = Map::new();
        while self.cursor.current_byte() != Some(b'}') {
            let key = self.get_string()?;
            self.expect_token(":")?;
            let value = self.get_value()?;
            map.insert(key, value);
            if self.cursor.current_byte() != Some(b',') {
                break;
            }
            self.expect_token(",")?;
        }

        self.expect_token("}")?;
        self.depth -= 1;
        Ok(map)
    }

    /// Consume an array. A comma before the closing `]` is tolerated.
    pub fn get_array(&mut self) -> Result<Vec<Value>, ParseError> {
        self.expect_start(TokenKind::Array)?;
        self.enter()?;
        self.expect_token("[")?;

        let mut items = Vec::new();
        while self.cursor.current_byte() != Some(b']') {
            items.push(self.get_value()?);
            if self.cursor.current_byte() != Some(b',') {
                break;
            }
            self.expect_token(",")?;
        }

        self.expect_token("]")?;
        self.depth -= 1;
        Ok(items)
    }

    /// Consume whichever value is at the cursor.
    pub fn get_value(&mut self) -> Result<Value, ParseError> {
        self.check_failed()?;
        let token = self.peek_token();
        trace!("dispatching {token:?} at {}", self.cursor.position());
        match token {
            TokenKind::String => self.get_string().map(Value::String),
            TokenKind::Number => self.get_number().map(Value::Number),
            TokenKind::Object => self.get_object().map(Value::Object),
            TokenKind::Array => self.get_array().map(Value::Array),
            TokenKind::Null => self.get_null().map(|()| Value::Null),
            TokenKind::Bool => self.get_bool().map(Value::Bool),
            TokenKind::None => self.fail_unexpected(),
        }
    }

    /// Assert that only whitespace remains.
    pub fn get_eof(&mut self) -> Result<(), ParseError> {
        self.check_failed()?;
        if !self.cursor.is_empty() {
            let position = self.cursor.position();
            return self.fail_at(ErrorKind::TrailingGarbage, position);
        }
        self.cursor.shutdown();
        Ok(())
    }

    fn check_failed(&self) -> Result<(), ParseError> {
        match &self.failure {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }

    /// Raise `kind` at `position`: close the source and remember the error.
    fn fail_at<T>(&mut self, kind: ErrorKind, position: Position) -> Result<T, ParseError> {
        let error = ParseError::new(kind, position);
        debug!("parse failed: {error}");
        self.cursor.shutdown();
        self.failure = Some(error.clone());
        Err(error)
    }

    /// Raise the error for a byte (or end of input) that starts no expected value.
    fn fail_unexpected<T>(&mut self) -> Result<T, ParseError> {
        let position = self.cursor.position();
        let kind = match self.cursor.current_char() {
            Some(c) => ErrorKind::UnexpectedCharacter(c),
            None => ErrorKind::UnexpectedEof,
        };
        self.fail_at(kind, position)
    }

    /// Check that the byte at the cursor can start a `token`.
    fn expect_start(&mut self, token: TokenKind) -> Result<(), ParseError> {
        self.check_failed()?;
        if self.peek_token() == token {
            Ok(())
        } else {
            self.fail_unexpected()
        }
    }

    /// Consume the exact `text`, then skip whitespace.
    fn expect_token(&mut self, text: &'static str) -> Result<(), ParseError> {
        self.cursor.ensure(text.len());
        if !self.cursor.window().starts_with(text.as_bytes()) {
            let position = self.cursor.position();
            return self.fail_at(ErrorKind::ExpectedLiteral(text), position);
        }
        self.cursor.consume(text.len());
        self.cursor.skip_whitespace();
        Ok(())
    }

    /// Count one more level of nesting.
    fn enter(&mut self) -> Result<(), ParseError> {
        if self.depth >= self.config.max_depth() {
            let position = self.cursor.position();
            return self.fail_at(ErrorKind::DepthLimitExceeded, position);
        }
        self.depth += 1;
        Ok(())
    }
}

impl<'a> JsonChunkReader<&'a [u8]> {
    /// Create a reader over an in-memory document.
    pub fn from_slice(bytes: &'a [u8]) -> Self {
        Self::new(bytes)
    }
}

impl JsonChunkReader<File> {
    /// Open the file at `path` and create a reader over it.
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        Self::open_with_config(path, ReaderConfig::default())
    }

    pub fn open_with_config(path: impl AsRef<Path>, config: ReaderConfig) -> io::Result<Self> {
        let file = File::open(path.as_ref())?;
        debug!("opened {}", path.as_ref().display());
        Ok(Self::with_config(file, config))
    }
}

/// Decode a single document from `reader`, rejecting anything after it.
pub fn from_reader<R: Read>(reader: R) -> Result<Value, ParseError> {
    let mut reader = JsonChunkReader::new(reader);
    let value = reader.get_value()?;
    reader.get_eof()?;
    Ok(value)
}

/// Decode a single in-memory document, rejecting anything after it.
pub fn from_slice(bytes: &[u8]) -> Result<Value, ParseError> {
    from_reader(bytes)
}

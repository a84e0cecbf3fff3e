// SPDX-License-Identifier: Apache-2.0

/// Why a string body could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum EscapeError {
    /// Malformed escape sequence; the payload describes it.
    InvalidEscape(&'static str),
    /// The decoded bytes are not UTF-8.
    InvalidUtf8,
}

/// Decoding of JSON string bodies (the bytes between the quotes).
pub(crate) struct EscapeProcessor;

impl EscapeProcessor {
    /// Map the character following a backslash to the byte it stands for.
    ///
    /// # Examples
    /// ```ignore
    /// // Internal API - see unit tests for usage examples
    /// assert_eq!(EscapeProcessor::process_simple_escape(b'n'), Some(b'\n'));
    /// ```
    pub fn process_simple_escape(escape_char: u8) -> Option<u8> {
        match escape_char {
            b'n' => Some(b'\n'),
            b't' => Some(b'\t'),
            b'r' => Some(b'\r'),
            b'\\' => Some(b'\\'),
            b'"' => Some(b'"'),
            b'/' => Some(b'/'),
            b'b' => Some(0x08), // Backspace
            b'f' => Some(0x0C), // Form feed
            _ => None,
        }
    }

    /// Numeric value (0-15) of a hex digit.
    pub fn hex_digit_value(byte: u8) -> Option<u32> {
        match byte {
            b'0'..=b'9' => Some(u32::from(byte - b'0')),
            b'a'..=b'f' => Some(u32::from(byte - b'a') + 10),
            b'A'..=b'F' => Some(u32::from(byte - b'A') + 10),
            _ => None,
        }
    }

    pub fn is_high_surrogate(codepoint: u32) -> bool {
        (0xD800..=0xDBFF).contains(&codepoint)
    }

    pub fn is_low_surrogate(codepoint: u32) -> bool {
        (0xDC00..=0xDFFF).contains(&codepoint)
    }

    /// Combine a UTF-16 surrogate pair into one codepoint.
    pub fn combine_surrogate_pair(high: u32, low: u32) -> u32 {
        0x10000 + ((high & 0x3FF) << 10) + (low & 0x3FF)
    }

    /// Parse the four hex digits of a `\uXXXX` escape.
    fn parse_hex4(hex: &[u8]) -> Result<u32, EscapeError> {
        if hex.len() != 4 {
            return Err(EscapeError::InvalidEscape("truncated unicode escape"));
        }
        hex.iter().try_fold(0u32, |acc, &byte| {
            Self::hex_digit_value(byte)
                .map(|digit| (acc << 4) | digit)
                .ok_or(EscapeError::InvalidEscape("invalid unicode escape"))
        })
    }

    /// Decode a string body, resolving every escape sequence.
    ///
    /// Surrogate pairs written as two consecutive `\uXXXX` escapes are joined;
    /// a lone surrogate is rejected.
    pub fn decode(body: &[u8]) -> Result<String, EscapeError> {
        if !body.contains(&b'\\') {
            return String::from_utf8(body.to_vec()).map_err(|_| EscapeError::InvalidUtf8);
        }

        let mut out = Vec::with_capacity(body.len());
        let mut pending_high_surrogate: Option<u32> = None;
        let mut rest = body;

        while let Some((&byte, tail)) = rest.split_first() {
            if byte != b'\\' {
                if pending_high_surrogate.is_some() {
                    return Err(EscapeError::InvalidEscape("unpaired surrogate"));
                }
                out.push(byte);
                rest = tail;
                continue;
            }

            let Some((&escape_char, tail)) = tail.split_first() else {
                return Err(EscapeError::InvalidEscape("truncated escape sequence"));
            };

            if escape_char != b'u' {
                if pending_high_surrogate.is_some() {
                    return Err(EscapeError::InvalidEscape("unpaired surrogate"));
                }
                let unescaped = Self::process_simple_escape(escape_char)
                    .ok_or(EscapeError::InvalidEscape("invalid escape sequence"))?;
                out.push(unescaped);
                rest = tail;
                continue;
            }

            let hex = tail.get(..4).unwrap_or(tail);
            let codepoint = Self::parse_hex4(hex)?;
            rest = tail.get(4..).unwrap_or(&[]);

            let ch = match pending_high_surrogate.take() {
                Some(high) if Self::is_low_surrogate(codepoint) => {
                    char::from_u32(Self::combine_surrogate_pair(high, codepoint))
                }
                Some(_) => return Err(EscapeError::InvalidEscape("unpaired surrogate")),
                None if Self::is_high_surrogate(codepoint) => {
                    pending_high_surrogate = Some(codepoint);
                    continue;
                }
                None if Self::is_low_surrogate(codepoint) => {
                    return Err(EscapeError::InvalidEscape("unpaired surrogate"))
                }
                None => char::from_u32(codepoint),
            };
            let ch = ch.ok_or(EscapeError::InvalidEscape("invalid unicode codepoint"))?;
            let mut utf8 = [0u8; 4];
            out.extend_from_slice(ch.encode_utf8(&mut utf8).as_bytes());
        }

        if pending_high_surrogate.is_some() {
            return Err(EscapeError::InvalidEscape("unpaired surrogate"));
        }
        String::from_utf8(out).map_err(|_| EscapeError::InvalidUtf8)
    }
}

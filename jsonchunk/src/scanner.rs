// SPDX-License-Identifier: Apache-2.0

//! Anchored byte-class scanners for the value recognizers.
//!
//! Every scanner starts matching at offset 0 of the window it is given and
//! walks forward once; nothing is ever re-examined, so there is no
//! backtracking regardless of input.

use crate::escape_processor::EscapeProcessor;

/// Classification of the byte at the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    String,
    Number,
    Object,
    Array,
    Null,
    Bool,
    /// End of input, or a byte that starts no value.
    None,
}

impl TokenKind {
    pub const fn classify(byte: u8) -> TokenKind {
        match byte {
            b'"' => TokenKind::String,
            b'-' | b'0'..=b'9' => TokenKind::Number,
            b'{' => TokenKind::Object,
            b'[' => TokenKind::Array,
            b'n' => TokenKind::Null,
            b't' | b'f' => TokenKind::Bool,
            _ => TokenKind::None,
        }
    }
}

/// Outcome of scanning a quoted string.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum StringScan {
    /// A complete literal of `len` bytes, both quotes included.
    Complete { len: usize },
    /// The window ended first; scanning can resume at `resume_at` once more
    /// bytes are appended. `resume_at` never points inside an escape sequence.
    Incomplete { resume_at: usize },
    /// The literal is malformed.
    Invalid(&'static str),
}

/// Scan a string literal whose opening quote is `window[0]`, starting at `from` (≥ 1).
pub(crate) fn scan_string(window: &[u8], from: usize) -> StringScan {
    let mut i = from.max(1);
    while let Some(&byte) = window.get(i) {
        match byte {
            b'"' => return StringScan::Complete { len: i + 1 },
            b'\\' => {
                let Some(&escape_char) = window.get(i + 1) else {
                    return StringScan::Incomplete { resume_at: i };
                };
                if escape_char == b'u' {
                    let Some(hex) = window.get(i + 2..i + 6) else {
                        return StringScan::Incomplete { resume_at: i };
                    };
                    if !hex
                        .iter()
                        .all(|&b| EscapeProcessor::hex_digit_value(b).is_some())
                    {
                        return StringScan::Invalid("invalid unicode escape");
                    }
                    i += 6;
                } else if EscapeProcessor::process_simple_escape(escape_char).is_some() {
                    i += 2;
                } else {
                    return StringScan::Invalid("invalid escape sequence");
                }
            }
            0x00..=0x1F => return StringScan::Invalid("control character in string"),
            _ => i += 1,
        }
    }
    StringScan::Incomplete { resume_at: i }
}

/// A recognized number literal.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct NumberScan {
    pub len: usize,
}

fn count_digits(window: &[u8], from: usize) -> usize {
    window
        .get(from..)
        .map_or(0, |rest| rest.iter().take_while(|b| b.is_ascii_digit()).count())
}

/// Scan `-? digits (. digits)? ([eE] [+-]? digits)?` anchored at `window[0]`.
///
/// Optional parts are only taken when complete, so `1.` yields `1` and
/// `2e+` yields `2`. Leading zeros are accepted.
pub(crate) fn scan_number(window: &[u8]) -> Option<NumberScan> {
    let mut i = usize::from(window.first() == Some(&b'-'));

    let int_digits = count_digits(window, i);
    if int_digits == 0 {
        return None;
    }
    i += int_digits;

    if window.get(i) == Some(&b'.') {
        let frac_digits = count_digits(window, i + 1);
        if frac_digits > 0 {
            i += 1 + frac_digits;
        }
    }

    if matches!(window.get(i), Some(b'e' | b'E')) {
        let mut j = i + 1;
        if matches!(window.get(j), Some(b'+' | b'-')) {
            j += 1;
        }
        let exp_digits = count_digits(window, j);
        if exp_digits > 0 {
            i = j + exp_digits;
        }
    }

    Some(NumberScan { len: i })
}

// SPDX-License-Identifier: Apache-2.0

use core::str::FromStr;

use crate::int_parser::from_ascii_i64;

/// A decoded JSON number.
///
/// Literals without a fraction or exponent become [`Number::Int`]; everything
/// else, and integers too large for `i64`, become [`Number::Float`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    /// Get the number as an `i64` if it is an integer.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Number::Int(val) => Some(*val),
            Number::Float(_) => None,
        }
    }

    /// Get the number as an `f64`, converting integers.
    pub fn as_f64(&self) -> f64 {
        match self {
            Number::Int(val) => *val as f64,
            Number::Float(val) => *val,
        }
    }

    pub fn is_integer(&self) -> bool {
        matches!(self, Number::Int(_))
    }

    pub fn is_float(&self) -> bool {
        !self.is_integer()
    }
}

impl From<i64> for Number {
    fn from(val: i64) -> Self {
        Number::Int(val)
    }
}

impl From<f64> for Number {
    fn from(val: f64) -> Self {
        Number::Float(val)
    }
}

impl core::fmt::Display for Number {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Number::Int(val) => write!(f, "{val}"),
            // Debug keeps a `.` or exponent, so the text decodes back to a float
            Number::Float(val) if val.is_finite() => write!(f, "{val:?}"),
            Number::Float(_) => f.write_str("null"),
        }
    }
}

/// Detects if a number literal is an integer (no decimal point or exponent).
pub(crate) fn is_integer(bytes: &[u8]) -> bool {
    !bytes.iter().any(|&b| matches!(b, b'.' | b'e' | b'E'))
}

/// Convert a recognized number literal. Returns `None` if it does not fit a finite `f64`.
pub(crate) fn parse_number(bytes: &[u8]) -> Option<Number> {
    if is_integer(bytes) {
        if let Ok(val) = from_ascii_i64(bytes) {
            return Some(Number::Int(val));
        }
    }
    let s = core::str::from_utf8(bytes).ok()?;
    match f64::from_str(s) {
        Ok(val) if val.is_finite() => Some(Number::Float(val)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integers() {
        assert_eq!(parse_number(b"56"), Some(Number::Int(56)));
        assert_eq!(parse_number(b"-123"), Some(Number::Int(-123)));
        assert_eq!(parse_number(b"01"), Some(Number::Int(1)));
    }

    #[test]
    fn test_floats() {
        assert_eq!(parse_number(b"3.25"), Some(Number::Float(3.25)));
        assert_eq!(parse_number(b"1e3"), Some(Number::Float(1000.0)));
        assert_eq!(parse_number(b"-2.5E-1"), Some(Number::Float(-0.25)));
    }

    #[test]
    fn test_integer_overflow_becomes_float() {
        assert_eq!(
            parse_number(b"12345678901234567890"),
            Some(Number::Float(12345678901234567890.0))
        );
    }

    #[test]
    fn test_float_overflow_is_rejected() {
        assert_eq!(parse_number(b"1e400"), None);
    }

    #[test]
    fn test_accessors() {
        let int = Number::Int(42);
        assert_eq!(int.as_i64(), Some(42));
        assert_eq!(int.as_f64(), 42.0);
        assert!(int.is_integer());

        let float = Number::Float(1.5);
        assert_eq!(float.as_i64(), None);
        assert_eq!(float.as_f64(), 1.5);
        assert!(float.is_float());
    }

    #[test]
    fn test_display_keeps_float_marker() {
        assert_eq!(Number::Int(3).to_string(), "3");
        assert_eq!(Number::Float(3.0).to_string(), "3.0");
        assert_eq!(Number::Float(0.1).to_string(), "0.1");
        assert_eq!(Number::Float(1e300).to_string(), "1e300");
        assert_eq!(Number::Float(f64::NAN).to_string(), "null");
    }
}

// SPDX-License-Identifier: Apache-2.0

// Panic-free base-10 parser, mostly borrowed from core::num::parse::radix

/// Why an integer literal could not be parsed.
#[derive(Debug, PartialEq, Eq, Clone)]
pub(crate) enum IntParseError {
    /// The input byte slice was empty.
    Empty,
    /// The input consisted only of a sign character (`+` or `-`).
    SignOnly,
    /// An invalid character was found that was not a base-10 digit.
    InvalidDigit,
    /// The number overflowed or underflowed `i64`.
    Overflow,
}

/// Parses an ASCII byte slice into an `i64` in a `const` context.
///
/// Leading zeros are accepted. This function is guaranteed not to panic.
pub(crate) const fn from_ascii_i64(src: &[u8]) -> Result<i64, IntParseError> {
    let (is_negative, mut digits) = match src {
        [] => return Err(IntParseError::Empty),
        [b'+', rest @ ..] => (false, rest),
        [b'-', rest @ ..] => (true, rest),
        _ => (false, src),
    };

    if digits.is_empty() {
        return Err(IntParseError::SignOnly);
    }

    let mut result: i64 = 0;

    while let Some((&byte, rest)) = digits.split_first() {
        let digit = match byte {
            b'0'..=b'9' => (byte - b'0') as i64,
            _ => return Err(IntParseError::InvalidDigit),
        };

        result = match result.checked_mul(10) {
            Some(val) => val,
            None => return Err(IntParseError::Overflow),
        };

        // Building the number negatively from the start handles i64::MIN.
        result = if is_negative {
            match result.checked_sub(digit) {
                Some(val) => val,
                None => return Err(IntParseError::Overflow),
            }
        } else {
            match result.checked_add(digit) {
                Some(val) => val,
                None => return Err(IntParseError::Overflow),
            }
        };

        digits = rest;
    }

    Ok(result)
}

// SPDX-License-Identifier: Apache-2.0

// Error kinds and the positions they are reported at

use jsonchunk::{from_slice, ErrorKind, JsonChunkReader, ParseError, Position};

use test_log::test;

fn parse_error(json: &[u8]) -> ParseError {
    match from_slice(json) {
        Ok(value) => panic!("expected {json:?} to fail, got {value}"),
        Err(e) => e,
    }
}

fn assert_error_at(json: &[u8], kind: ErrorKind, line: usize, column: usize) {
    let error = parse_error(json);
    assert_eq!(error.kind(), &kind, "input {json:?}");
    assert_eq!(
        error.position(),
        Position { line, column },
        "input {json:?}: {error}"
    );
}

#[test]
fn test_truncated_literal_at_end_of_input() {
    let mut reader = JsonChunkReader::from_slice(b"nul");
    let error = reader.get_null().unwrap_err();
    assert_eq!(error.kind(), &ErrorKind::ExpectedLiteral("null"));
    assert_eq!((error.line(), error.column()), (1, 1));
    assert_eq!(error.to_string(), "expected 'null' at line 1, column 1");
}

#[test]
fn test_misspelled_literals() {
    assert_error_at(br#"{"a": tru}"#, ErrorKind::ExpectedLiteral("true"), 1, 7);
    assert_error_at(b"[fals]", ErrorKind::ExpectedLiteral("false"), 1, 2);
    assert_error_at(b"nil", ErrorKind::ExpectedLiteral("null"), 1, 1);
}

#[test]
fn test_unexpected_characters() {
    assert_error_at(br#"{1: 2}"#, ErrorKind::UnexpectedCharacter('1'), 1, 2);
    assert_error_at(b"[1,,2]", ErrorKind::UnexpectedCharacter(','), 1, 4);
    assert_error_at(b"'single'", ErrorKind::UnexpectedCharacter('\''), 1, 1);
    assert_error_at("\u{e9}".as_bytes(), ErrorKind::UnexpectedCharacter('\u{e9}'), 1, 1);
}

#[test]
fn test_structural_errors() {
    assert_error_at(br#"{"a" 1}"#, ErrorKind::ExpectedLiteral(":"), 1, 6);
    assert_error_at(br#"{"a": 1 "b": 2}"#, ErrorKind::ExpectedLiteral("}"), 1, 9);
    assert_error_at(b"[1,2", ErrorKind::ExpectedLiteral("]"), 1, 5);
    assert_error_at(b"[", ErrorKind::UnexpectedEof, 1, 2);
    assert_error_at(b"", ErrorKind::UnexpectedEof, 1, 1);
}

#[test]
fn test_trailing_garbage() {
    assert_error_at(br#"{"a":1} {"b":2}"#, ErrorKind::TrailingGarbage, 1, 9);
    assert_error_at(b"1\n\n  x", ErrorKind::TrailingGarbage, 3, 3);
}

#[test]
fn test_string_errors() {
    let cases: [(&[u8], &str); 5] = [
        (br#""\q""#, "invalid escape sequence"),
        (br#""\u12G4""#, "invalid unicode escape"),
        (br#""\ud800""#, "unpaired surrogate"),
        (br#""\udc00x""#, "unpaired surrogate"),
        (b"\"a\tb\"", "control character in string"),
    ];
    for (json, reason) in cases {
        assert_error_at(json, ErrorKind::InvalidString(reason), 1, 1);
    }
}

#[test]
fn test_string_errors_point_at_opening_quote() {
    let error = parse_error(b"{\"key\": \"valid text then \\x\"}");
    assert_eq!(error.kind(), &ErrorKind::InvalidString("invalid escape sequence"));
    assert_eq!(error.position(), Position { line: 1, column: 9 });
}

#[test]
fn test_invalid_utf8_in_string() {
    assert_error_at(b"[1, \"\xFF\"]", ErrorKind::InvalidUtf8, 1, 5);
}

#[test]
fn test_unterminated_string() {
    assert_error_at(b"[\n  \"open", ErrorKind::UnterminatedString, 2, 3);
}

#[test]
fn test_invalid_numbers() {
    assert_error_at(b"-", ErrorKind::InvalidNumber, 1, 1);
    assert_error_at(b"[-x]", ErrorKind::InvalidNumber, 1, 2);
    assert_error_at(b"1e400", ErrorKind::InvalidNumber, 1, 1);
    let long = format!("[{}]", "9".repeat(101));
    assert_error_at(long.as_bytes(), ErrorKind::NumberTooLong, 1, 2);
}

#[test]
fn test_position_across_lines_and_tabs() {
    assert_error_at(b"{\n  \"a\": [1,\n    @]\n}", ErrorKind::UnexpectedCharacter('@'), 3, 5);
    assert_error_at(b"\t@", ErrorKind::UnexpectedCharacter('@'), 1, 9);
    // Multi-byte characters count as one column
    assert_error_at("[\"\u{e9}\u{e9}\", x]".as_bytes(), ErrorKind::UnexpectedCharacter('x'), 1, 8);
    assert_error_at(b"[\r\n!]", ErrorKind::UnexpectedCharacter('!'), 2, 1);
}

#[test]
fn test_error_is_std_error() {
    let error = parse_error(b"[true false]");
    let source: &dyn std::error::Error = &error;
    assert_eq!(source.to_string(), "expected ']' at line 1, column 7");
}

#[test]
fn test_failure_is_fatal() {
    let mut reader = JsonChunkReader::from_slice(b"[1, oops] [2]");
    let first = reader.get_value().unwrap_err();
    assert_eq!(first.kind(), &ErrorKind::UnexpectedCharacter('o'));

    // Everything after the first failure replays it
    assert!(!reader.is_array());
    assert!(!reader.is_eof());
    assert_eq!(reader.get_array(), Err(first.clone()));
    assert_eq!(reader.get_null(), Err(first.clone()));
    assert_eq!(reader.get_eof(), Err(first));
    assert!(reader.is_closed());
}

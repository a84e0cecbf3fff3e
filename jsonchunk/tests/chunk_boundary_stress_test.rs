// SPDX-License-Identifier: Apache-2.0

// Decoding must not depend on where the input is split into chunks

use jsonchunk::{
    from_slice, ChunkReader, ErrorKind, JsonChunkReader, ReaderConfig, Value, CHUNK_SIZE,
    STRING_MAX_LEN,
};

use test_log::test;

/// Exercises every token kind, escapes that straddle reads and multi-byte text.
const DOCUMENT: &str = r#"
{
    "name": "chunk\tboundary \"stress\"",
    "unicode": "\u00e9\u4e2d\ud83d\ude00 raw: ü",
    "numbers": [0, -1, 12345678901, 3.14159, -2.5e-3, 6E+2, 01],
    "literals": [true, false, null],
    "nested": {"a": {"b": {"c": [[], {}, [{"d": "e"}]]}}},
    "trailing": [1, 2, 3,],
    "empty": ""
}
"#;

/// Decode `json` with both the source and the reader limited to `chunk_size` bytes per read.
fn decode_in_chunks(json: &[u8], chunk_size: usize) -> Result<Value, jsonchunk::ParseError> {
    let config = ReaderConfig::default().with_chunk_size(chunk_size);
    let mut reader = JsonChunkReader::with_config(ChunkReader::new(json, chunk_size), config);
    let value = reader.get_value()?;
    reader.get_eof()?;
    Ok(value)
}

macro_rules! chunk_size_tests {
    ($($size:expr),*) => {
        $(
            paste::paste! {
                #[test]
                fn [<test_document_with_chunk_size_ $size>]() {
                    let expected = from_slice(DOCUMENT.as_bytes()).unwrap();
                    let actual = decode_in_chunks(DOCUMENT.as_bytes(), $size).unwrap();
                    assert_eq!(actual, expected, "chunk size {}", $size);
                }

                #[test]
                fn [<test_error_position_with_chunk_size_ $size>]() {
                    let json = b"{\n  \"list\": [1, 2,\n    \"ok\", tru ]\n}";
                    let expected = from_slice(json).unwrap_err();
                    let actual = decode_in_chunks(json, $size).unwrap_err();
                    assert_eq!(actual, expected, "chunk size {}", $size);
                    assert_eq!(actual.kind(), &ErrorKind::ExpectedLiteral("true"));
                    assert_eq!((actual.line(), actual.column()), (3, 11));
                }
            }
        )*
    };
}

chunk_size_tests!(1, 2, 3, 4, 5, 7, 8, 13, 16, 31, 64, 256);

#[test]
fn test_single_buffer_matches_expected_tree() {
    let value = from_slice(DOCUMENT.as_bytes()).unwrap();
    assert_eq!(
        value.get("unicode").and_then(Value::as_str),
        Some("\u{e9}\u{4e2d}\u{1F600} raw: \u{fc}")
    );
    assert_eq!(
        value.get("nested").map(ToString::to_string).as_deref(),
        Some(r#"{"a":{"b":{"c":[[],{},[{"d":"e"}]]}}}"#)
    );
    assert_eq!(
        value.get("numbers").map(ToString::to_string).as_deref(),
        Some("[0,-1,12345678901,3.14159,-0.0025,600.0,1]")
    );
}

#[test]
fn test_every_split_of_small_document() {
    let json = r#"[{"k":"v\\\"w"},-0.75e1,"Aß"]"#.as_bytes();
    let expected = from_slice(json).unwrap();
    for chunk_size in 1..=json.len() {
        assert_eq!(decode_in_chunks(json, chunk_size).unwrap(), expected);
    }
}

fn string_document(body_len: usize) -> Vec<u8> {
    let mut json = Vec::with_capacity(body_len + 2);
    json.push(b'"');
    json.extend((0..body_len).map(|i| b'a' + (i % 26) as u8));
    json.push(b'"');
    json
}

#[test]
fn test_strings_around_default_chunk_size() {
    // Literal lengths CHUNK_SIZE - 1 ..= CHUNK_SIZE + 1, quotes included
    for literal_len in [CHUNK_SIZE - 1, CHUNK_SIZE, CHUNK_SIZE + 1] {
        let json = string_document(literal_len - 2);
        let mut reader = JsonChunkReader::new(&json[..]);
        let decoded = reader.get_string().unwrap();
        assert_eq!(decoded.len(), literal_len - 2);
        assert!(decoded.starts_with("abc"));
        reader.get_eof().unwrap();
    }
}

#[test]
fn test_string_spanning_many_chunks_inside_array() {
    let body = "xyz".repeat(CHUNK_SIZE);
    let json = format!(r#"[ "{body}", "tail" ]"#);
    let value = decode_in_chunks(json.as_bytes(), 4096).unwrap();
    let items = value.as_array().unwrap();
    assert_eq!(items[0].as_str().map(str::len), Some(body.len()));
    assert_eq!(items[1].as_str(), Some("tail"));
}

#[test]
fn test_string_over_maximum_length() {
    let json = string_document(STRING_MAX_LEN + 16);
    let mut reader = JsonChunkReader::new(&json[..]);
    let error = reader.get_string().unwrap_err();
    assert_eq!(error.kind(), &ErrorKind::StringTooLong);
    assert_eq!((error.line(), error.column()), (1, 1));
    assert!(reader.is_closed());
}

#[test]
fn test_number_at_chunk_boundary_is_whole() {
    // The number starts one byte before the end of the first chunk
    let mut json = vec![b' '; CHUNK_SIZE - 1];
    json.extend_from_slice(b"-98765.4321e-2");
    let mut reader = JsonChunkReader::new(&json[..]);
    let number = reader.get_number().unwrap();
    assert_eq!(number.as_f64(), -98765.4321e-2);
    reader.get_eof().unwrap();
}

#[test]
fn test_literal_split_across_chunks() {
    for chunk_size in 1..=4 {
        let mut reader = JsonChunkReader::with_config(
            ChunkReader::new(b"  false", chunk_size),
            ReaderConfig::default().with_chunk_size(chunk_size),
        );
        assert_eq!(reader.get_bool(), Ok(false));
        assert!(reader.is_eof());
    }
}

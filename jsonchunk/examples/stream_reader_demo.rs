// Example walking a document with JsonChunkReader over a ChunkReader

use jsonchunk::{ChunkReader, JsonChunkReader, ParseError, ReaderConfig, TokenKind};

fn main() -> Result<(), ParseError> {
    println!("🚀 JsonChunkReader Demo with ChunkReader");
    println!("========================================");

    let json = br#"[
        {"name": "hello\nworld", "items": [1, 2.5, true, null], "count": 42},
        {"name": "caf\u00e9", "items": [], "count": -7}
    ]"#;

    println!("📄 Input JSON: {}", String::from_utf8_lossy(json));
    println!("📏 Total size: {} bytes", json.len());
    println!();

    // Read 8 bytes at a time to simulate small network packets
    let chunk_size = 8;
    let config = ReaderConfig::default().with_chunk_size(chunk_size);
    let mut reader = JsonChunkReader::with_config(ChunkReader::new(json, chunk_size), config);

    println!("🔄 Reading records one value at a time:");
    println!("   Chunk size: {} bytes", chunk_size);
    println!();

    // Check what the document starts with, then decode the outer array in one call
    let mut records = 0;
    match reader.peek_token() {
        TokenKind::Array => {
            let items = reader.get_array()?;
            for item in &items {
                records += 1;
                let name = item.get("name").and_then(|v| v.as_str()).unwrap_or("?");
                let count = item.get("count").and_then(|v| v.as_i64()).unwrap_or(0);
                let items = item.get("items").map(|v| v.to_string()).unwrap_or_default();
                println!("  📝 Record {}: name={:?} count={} items={}", records, name, count, items);
            }
        }
        other => {
            println!("❌ Expected an array, found {:?}", other);
            return Ok(());
        }
    }

    reader.get_eof()?;
    println!();
    println!("✅ Read {} records, ending at {}", records, reader.position());

    // Errors carry the position of the offending byte
    let broken = b"{\n  \"key\": nul\n}";
    let mut reader = JsonChunkReader::with_config(ChunkReader::new(broken, chunk_size), config);
    match reader.get_object() {
        Ok(_) => println!("❗ Unexpectedly parsed the broken document"),
        Err(e) => println!("💡 Broken document rejected: {}", e),
    }
    Ok(())
}

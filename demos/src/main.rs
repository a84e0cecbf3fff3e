// SPDX-License-Identifier: Apache-2.0

use std::path::PathBuf;
use std::process;

use clap::Parser;
use jsonchunk::{JsonChunkReader, ReaderConfig, Value, CHUNK_SIZE, MAX_DEPTH};
use log::info;

/// Decode a JSON file in fixed-size chunks and print it as compact JSON.
#[derive(Parser, Debug)]
#[command(name = "jsonchunk-cat", version)]
struct Args {
    /// File to decode
    path: PathBuf,

    /// Bytes pulled from the file per read
    #[arg(long, default_value_t = CHUNK_SIZE)]
    chunk_size: usize,

    /// Deepest object/array nesting accepted
    #[arg(long, default_value_t = MAX_DEPTH)]
    max_depth: usize,
}

fn decode(args: &Args) -> Result<Value, String> {
    let config = ReaderConfig::default()
        .with_chunk_size(args.chunk_size)
        .with_max_depth(args.max_depth);
    let mut reader = JsonChunkReader::open_with_config(&args.path, config)
        .map_err(|e| format!("unable to open '{}': {}", args.path.display(), e))?;

    let value = reader.get_value().map_err(|e| e.to_string())?;
    reader.get_eof().map_err(|e| e.to_string())?;
    info!("decoded {} ending at {}", args.path.display(), reader.position());
    Ok(value)
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    match decode(&args) {
        Ok(value) => println!("{value}"),
        Err(e) => {
            eprintln!("Error: {}: {}", args.path.display(), e);
            process::exit(1);
        }
    }
}

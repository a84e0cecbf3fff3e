// SPDX-License-Identifier: Apache-2.0

use std::io::{self, Read};

use log::{debug, warn};

use crate::sliding_buffer::SlidingBuffer;

/// Owns the input stream and hands it out one chunk at a time.
///
/// The stream is closed (dropped) exactly once: at end of stream, on a read
/// failure, on an explicit [`close`](Self::close) or on drop, whichever happens first.
pub(crate) struct ChunkSource<R> {
    reader: Option<R>,
    chunk_size: usize,
}

impl<R: Read> ChunkSource<R> {
    pub fn new(reader: R, chunk_size: usize) -> Self {
        Self {
            reader: Some(reader),
            chunk_size: chunk_size.max(1),
        }
    }

    /// Append up to one chunk to `buffer`.
    ///
    /// Returns `false` when no more data will ever arrive. A zero-length read
    /// and a read error both mean end of stream and close the source.
    pub fn read_chunk(&mut self, buffer: &mut SlidingBuffer) -> bool {
        let Some(reader) = self.reader.as_mut() else {
            return false;
        };
        let requested = self.chunk_size;
        loop {
            let fill = buffer.fill_slice(requested);
            match reader.read(fill) {
                Ok(0) => {
                    buffer.commit_fill(requested, 0);
                    debug!("end of stream reached");
                    self.close();
                    return false;
                }
                Ok(read) => {
                    let read = read.min(requested);
                    buffer.commit_fill(requested, read);
                    debug!("loaded chunk of {read} bytes");
                    return true;
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {
                    buffer.commit_fill(requested, 0);
                }
                Err(e) => {
                    buffer.commit_fill(requested, 0);
                    warn!("read failed, treating as end of stream: {e}");
                    self.close();
                    return false;
                }
            }
        }
    }
}

impl<R> ChunkSource<R> {
    /// Close the underlying stream. Returns `true` only on the call that closed it.
    pub fn close(&mut self) -> bool {
        match self.reader.take() {
            Some(reader) => {
                drop(reader);
                debug!("source closed");
                true
            }
            None => false,
        }
    }

    pub fn is_closed(&self) -> bool {
        self.reader.is_none()
    }
}

impl<R> Drop for ChunkSource<R> {
    fn drop(&mut self) {
        self.close();
    }
}

//! Adapter for any `io::Read` as a random source.

use super::{ByteSource, SourceError};
use std::io::Read;

/// Reads random bytes from an arbitrary reader (e.g. `/dev/urandom`).
///
/// Uses read-exact semantics: a reader that ends early fails the fill
/// with an `UnexpectedEof` I/O error.
#[derive(Debug)]
pub struct ReaderSource<R> {
    reader: R,
}

impl<R: Read> ReaderSource<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    /// Returns the wrapped reader.
    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl<R: Read> ByteSource for ReaderSource<R> {
    fn fill(&mut self, buf: &mut [u8]) -> Result<(), SourceError> {
        self.reader.read_exact(buf).map_err(|e| {
            tracing::warn!(requested = buf.len(), error = %e, "random reader failed");
            SourceError::Io(e)
        })
    }
}

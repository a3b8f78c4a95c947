//! OS-backed cryptographic random source.

use super::{ByteSource, SourceError};
use rand_core::{OsRng, RngCore};

/// Reads from the operating system CSPRNG.
///
/// Stateless: every call goes straight to the OS, so independent
/// copies may be used from any number of threads concurrently.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsSource;

impl OsSource {
    pub fn new() -> Self {
        Self
    }
}

impl ByteSource for OsSource {
    fn fill(&mut self, buf: &mut [u8]) -> Result<(), SourceError> {
        OsRng.try_fill_bytes(buf).map_err(|e| {
            tracing::warn!(requested = buf.len(), error = %e, "OS random source failed");
            SourceError::Os(e.to_string())
        })
    }
}

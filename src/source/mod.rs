//! Random byte suppliers.
//!
//! Generation reads its randomness through the [`ByteSource`] trait so
//! the OS-backed source used in production can be swapped for a fixed
//! buffer in tests (golden vectors, exhaustion) without any global state.

mod fixed;
mod os;
mod reader;

pub use fixed::FixedSource;
pub use os::OsSource;
pub use reader::ReaderSource;

use thiserror::Error;

/// Errors that can occur while filling a buffer with random bytes.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("random source exhausted: requested {requested} bytes, {available} available")]
    Exhausted { requested: usize, available: usize },
    #[error("OS random source failed: {0}")]
    Os(String),
    #[error("failed to read random source: {0}")]
    Io(#[from] std::io::Error),
}

/// Trait for random byte suppliers.
///
/// A call to [`fill`](ByteSource::fill) either fills the entire buffer
/// or fails; short reads are never reported as success. Bytes handed
/// out by one call are never handed out again.
pub trait ByteSource {
    /// Fills `buf` completely with random bytes.
    fn fill(&mut self, buf: &mut [u8]) -> Result<(), SourceError>;
}

impl<S: ByteSource + ?Sized> ByteSource for &mut S {
    fn fill(&mut self, buf: &mut [u8]) -> Result<(), SourceError> {
        (**self).fill(buf)
    }
}

impl<S: ByteSource + ?Sized> ByteSource for Box<S> {
    fn fill(&mut self, buf: &mut [u8]) -> Result<(), SourceError> {
        (**self).fill(buf)
    }
}

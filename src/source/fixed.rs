//! In-memory random source for reproducible generation.

use super::{ByteSource, SourceError};
use zeroize::Zeroize;

/// Hands out a fixed byte sequence front to back.
///
/// NOT a source of entropy. Useful for golden-vector tests and for
/// simulating an exhausted source: once fewer bytes remain than a fill
/// requests, every further fill fails.
#[derive(Debug, Clone, Default)]
pub struct FixedSource {
    data: Vec<u8>,
    position: usize,
}

impl FixedSource {
    /// Creates a source that yields `data` and then runs dry.
    pub fn new(data: impl Into<Vec<u8>>) -> Self {
        Self {
            data: data.into(),
            position: 0,
        }
    }

    /// Creates a source with no bytes at all.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns the number of bytes not yet handed out.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.data.len() - self.position
    }

    /// Returns the number of bytes handed out so far.
    #[inline]
    pub fn consumed(&self) -> usize {
        self.position
    }
}

impl ByteSource for FixedSource {
    fn fill(&mut self, buf: &mut [u8]) -> Result<(), SourceError> {
        let available = self.remaining();
        if buf.len() > available {
            return Err(SourceError::Exhausted {
                requested: buf.len(),
                available,
            });
        }

        let end = self.position + buf.len();
        buf.copy_from_slice(&self.data[self.position..end]);
        self.position = end;
        Ok(())
    }
}

impl Drop for FixedSource {
    fn drop(&mut self) {
        self.data.zeroize();
    }
}

//! Artifact assembly.
//!
//! A [`Generator`] owns its random source and the [`Limits`] requests
//! are validated against. Both artifact types run through the same
//! loop: fill a fresh buffer, extract indices, look the symbols up and
//! join them.

mod passphrase;
mod password;

pub use passphrase::PassphraseRequest;
pub use password::PasswordRequest;

use crate::config::Limits;
use crate::error::Result;
use crate::extraction::{extract_indices, BitPlan};
use crate::source::{ByteSource, OsSource};
use crate::universe::{Casing, Symbol, SymbolUniverse};
use zeroize::Zeroizing;

/// Generates passwords and passphrases from a random byte source.
///
/// Calls are all-or-nothing: if any artifact fails, nothing is
/// returned. Nothing is retried.
#[derive(Debug)]
pub struct Generator<S = OsSource> {
    source: S,
    limits: Limits,
}

impl Generator<OsSource> {
    /// Creates a generator backed by the OS CSPRNG with default limits.
    pub fn new() -> Self {
        Self::with_source(OsSource::new())
    }
}

impl Default for Generator<OsSource> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: ByteSource> Generator<S> {
    /// Creates a generator reading from `source` with default limits.
    pub fn with_source(source: S) -> Self {
        Self {
            source,
            limits: Limits::default(),
        }
    }

    /// Replaces the limits requests are validated against.
    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    /// Returns the active limits.
    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    /// Returns a reference to the random source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Consumes the generator, returning its random source.
    pub fn into_source(self) -> S {
        self.source
    }
}

/// Generates `count` passwords of `length` characters from `alphabet`
/// using the OS CSPRNG and default limits.
pub fn generate_passwords(count: usize, length: usize, alphabet: &str) -> Result<Vec<String>> {
    Generator::new().passwords(&PasswordRequest::new(count, length, alphabet))
}

/// Generates `count` passphrases of `word_count` words from `words`
/// using the OS CSPRNG and default limits.
pub fn generate_passphrases<W: AsRef<str>>(
    count: usize,
    word_count: usize,
    separator: char,
    casing: Casing,
    words: &[W],
) -> Result<Vec<String>> {
    let request = PassphraseRequest::new(
        count,
        word_count,
        separator,
        casing,
        words.iter().map(|w| w.as_ref().to_owned()),
    );
    Generator::new().passphrases(&request)
}

/// Builds `count` artifacts of `length` symbols each.
///
/// `separator`, when set, goes between symbols but never before the
/// first or after the last.
fn assemble<U, S>(
    source: &mut S,
    universe: &U,
    count: usize,
    length: usize,
    separator: Option<char>,
) -> Result<Vec<String>>
where
    U: SymbolUniverse,
    S: ByteSource,
{
    let plan = BitPlan::new(universe.len(), length);

    tracing::debug!(
        count,
        universe_size = plan.universe_size(),
        bits_per_symbol = plan.bits_per_symbol(),
        bytes_per_artifact = plan.bytes_per_artifact(),
        "Generating artifacts"
    );

    let mut artifacts = Vec::with_capacity(count);
    for n in 0..count {
        let mut buffer = Zeroizing::new(vec![0u8; plan.bytes_per_artifact()]);
        if let Err(e) = source.fill(&mut buffer) {
            tracing::warn!(
                artifact = n,
                requested = buffer.len(),
                "Random source failed; discarding all artifacts"
            );
            return Err(e.into());
        }

        let indices = Zeroizing::new(extract_indices(&buffer, &plan));

        let mut artifact = String::new();
        for (i, &index) in indices.iter().enumerate() {
            if i > 0 {
                if let Some(sep) = separator {
                    artifact.push(sep);
                }
            }
            universe.symbol(index).append_to(&mut artifact);
        }

        tracing::trace!(artifact = n, "Artifact assembled");
        artifacts.push(artifact);
    }

    Ok(artifacts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::FixedSource;
    use crate::universe::Alphabet;

    #[test]
    fn test_assemble_without_separator() {
        let alphabet = Alphabet::new("abcde").unwrap();
        let mut source = FixedSource::new(vec![0b1011_0010, 0b1000_0000]);

        let out = assemble(&mut source, &alphabet, 1, 3, None).unwrap();
        assert_eq!(out, vec!["aea"]);
    }

    #[test]
    fn test_assemble_with_separator() {
        let alphabet = Alphabet::new("ab").unwrap();
        let mut source = FixedSource::new(vec![0b1010_0000]);

        let out = assemble(&mut source, &alphabet, 1, 3, Some('.')).unwrap();
        assert_eq!(out, vec!["b.a.b"]);
    }

    #[test]
    fn test_fresh_buffer_per_artifact() {
        let alphabet = Alphabet::new("ab").unwrap();
        let mut source = FixedSource::new(vec![0xFF, 0x00]);

        let out = assemble(&mut source, &alphabet, 2, 8, None).unwrap();
        assert_eq!(out, vec!["bbbbbbbb", "aaaaaaaa"]);
        assert_eq!(source.remaining(), 0);
    }

    #[test]
    fn test_exhaustion_discards_earlier_artifacts() {
        let alphabet = Alphabet::new("ab").unwrap();
        // Enough for two artifacts out of three
        let mut source = FixedSource::new(vec![0xAA, 0x55]);

        let result = assemble(&mut source, &alphabet, 3, 8, None);
        assert!(matches!(
            result,
            Err(crate::Error::InsufficientEntropy(_))
        ));
    }
}

//! Password requests.

use super::{assemble, Generator};
use crate::charset::ALPHABET_DEFAULT;
use crate::config::{COUNT_DEFAULT, PASSWORD_LENGTH_DEFAULT};
use crate::error::{Parameter, Result};
use crate::source::ByteSource;
use crate::universe::Alphabet;

/// Parameters for one password generation call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordRequest {
    count: usize,
    length: usize,
    alphabet: String,
}

impl PasswordRequest {
    /// Creates a request for `count` passwords of `length` characters
    /// drawn from `alphabet` (duplicates allowed).
    pub fn new(count: usize, length: usize, alphabet: impl Into<String>) -> Self {
        Self {
            count,
            length,
            alphabet: alphabet.into(),
        }
    }

    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }

    #[inline]
    pub fn length(&self) -> usize {
        self.length
    }

    /// Returns the raw, not yet deduplicated alphabet.
    #[inline]
    pub fn alphabet(&self) -> &str {
        &self.alphabet
    }
}

impl Default for PasswordRequest {
    fn default() -> Self {
        Self::new(COUNT_DEFAULT, PASSWORD_LENGTH_DEFAULT, ALPHABET_DEFAULT)
    }
}

impl<S: ByteSource> Generator<S> {
    /// Generates passwords, each exactly `request.length()` characters.
    ///
    /// Fails with `OutOfRange` for a count or length outside the limits,
    /// `InvalidUniverse` for an alphabet with fewer than two unique
    /// characters, and `InsufficientEntropy` if the source runs dry.
    pub fn passwords(&mut self, request: &PasswordRequest) -> Result<Vec<String>> {
        let limits = &self.limits.password;
        limits.count.check(Parameter::Count, request.count)?;
        limits.length.check(Parameter::Length, request.length)?;

        let alphabet = Alphabet::new(&request.alphabet)?;

        assemble(
            &mut self.source,
            &alphabet,
            request.count,
            request.length,
            None,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, UniverseKind};
    use crate::source::FixedSource;

    #[test]
    fn test_default_request() {
        let mut generator = Generator::new();
        let passwords = generator.passwords(&PasswordRequest::default()).unwrap();

        assert_eq!(passwords.len(), COUNT_DEFAULT);
        for password in &passwords {
            assert_eq!(password.chars().count(), PASSWORD_LENGTH_DEFAULT);
            assert!(password.chars().all(|c| ALPHABET_DEFAULT.contains(c)));
        }
    }

    #[test]
    fn test_multibyte_alphabet_counts_characters() {
        let mut generator = Generator::new();
        let request = PasswordRequest::new(5, 20, "üê¶🐱");
        let passwords = generator.passwords(&request).unwrap();

        for password in &passwords {
            assert_eq!(password.chars().count(), 20);
            assert!(password.chars().all(|c| "üê¦🐱".contains(c)));
        }
    }

    #[test]
    fn test_count_out_of_range() {
        let mut generator = Generator::new();
        for count in [0, 1001] {
            let result = generator.passwords(&PasswordRequest::new(count, 16, "ab"));
            assert!(matches!(
                result,
                Err(Error::OutOfRange {
                    parameter: Parameter::Count,
                    ..
                })
            ));
        }
    }

    #[test]
    fn test_length_out_of_range() {
        let mut generator = Generator::new();
        for length in [0, 1001] {
            let result = generator.passwords(&PasswordRequest::new(1, length, "ab"));
            assert!(matches!(
                result,
                Err(Error::OutOfRange {
                    parameter: Parameter::Length,
                    ..
                })
            ));
        }
    }

    #[test]
    fn test_count_checked_before_length() {
        let mut generator = Generator::new();
        let result = generator.passwords(&PasswordRequest::new(0, 0, "ab"));
        assert!(matches!(
            result,
            Err(Error::OutOfRange {
                parameter: Parameter::Count,
                ..
            })
        ));
    }

    #[test]
    fn test_alphabet_too_small() {
        let mut generator = Generator::new();
        for alphabet in ["", "x", "xxxx"] {
            assert!(matches!(
                generator.passwords(&PasswordRequest::new(1, 16, alphabet)),
                Err(Error::InvalidUniverse {
                    kind: UniverseKind::Alphabet,
                    ..
                })
            ));
        }
    }

    #[test]
    fn test_invalid_request_reads_no_entropy() {
        let mut generator = Generator::with_source(FixedSource::new(vec![0u8; 64]));
        assert!(generator.passwords(&PasswordRequest::new(1, 16, "x")).is_err());
        assert_eq!(generator.source().consumed(), 0);
    }

    #[test]
    fn test_empty_source_fails() {
        let mut generator = Generator::with_source(FixedSource::empty());
        assert!(matches!(
            generator.passwords(&PasswordRequest::default()),
            Err(Error::InsufficientEntropy(_))
        ));
    }
}

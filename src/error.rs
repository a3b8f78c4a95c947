//! Error types surfaced by generation calls.
//!
//! Every variant aborts the whole call: no partial output is returned
//! and nothing is retried.

use crate::source::SourceError;
use std::fmt;
use thiserror::Error;

/// Request parameter checked against configured bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parameter {
    /// Number of artifacts to generate.
    Count,
    /// Password length in characters.
    Length,
    /// Passphrase length in words.
    WordCount,
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Parameter::Count => "count",
            Parameter::Length => "length",
            Parameter::WordCount => "word count",
        })
    }
}

/// Kind of symbol universe, used when reporting an undersized one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UniverseKind {
    /// Characters drawn for passwords.
    Alphabet,
    /// Words drawn for passphrases.
    WordList,
}

impl UniverseKind {
    fn unit(self) -> &'static str {
        match self {
            UniverseKind::Alphabet => "characters",
            UniverseKind::WordList => "words",
        }
    }
}

impl fmt::Display for UniverseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            UniverseKind::Alphabet => "alphabet",
            UniverseKind::WordList => "word list",
        })
    }
}

/// Errors that can occur while generating passwords or passphrases.
#[derive(Debug, Error)]
pub enum Error {
    #[error("{parameter} must be at least {min} and at most {max} (got {value})")]
    OutOfRange {
        parameter: Parameter,
        value: usize,
        min: usize,
        max: usize,
    },

    #[error("{kind} must contain at least {min} unique {}", .kind.unit())]
    InvalidUniverse { kind: UniverseKind, min: usize },

    #[error("invalid word casing: {0:?}")]
    InvalidCasingPolicy(String),

    #[error("insufficient entropy: {0}")]
    InsufficientEntropy(#[from] SourceError),
}

/// Result alias for generation calls.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_names_parameter_and_bounds() {
        let err = Error::OutOfRange {
            parameter: Parameter::WordCount,
            value: 0,
            min: 1,
            max: 1000,
        };
        assert_eq!(
            err.to_string(),
            "word count must be at least 1 and at most 1000 (got 0)"
        );
    }

    #[test]
    fn test_invalid_universe_message() {
        let err = Error::InvalidUniverse {
            kind: UniverseKind::Alphabet,
            min: 2,
        };
        assert_eq!(
            err.to_string(),
            "alphabet must contain at least 2 unique characters"
        );

        let err = Error::InvalidUniverse {
            kind: UniverseKind::WordList,
            min: 2,
        };
        assert_eq!(
            err.to_string(),
            "word list must contain at least 2 unique words"
        );
    }
}

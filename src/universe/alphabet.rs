//! Character universe for passwords.

use super::{dedup_stable, SymbolUniverse, MIN_UNIQUE_SYMBOLS};
use crate::error::{Error, Result, UniverseKind};

/// Deduplicated set of characters passwords are drawn from.
///
/// Characters are compared by Unicode scalar value; multi-byte
/// characters count as one symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    chars: Vec<char>,
}

impl Alphabet {
    /// Builds an alphabet from the unique characters of `raw`.
    ///
    /// Fails with [`Error::InvalidUniverse`] when fewer than
    /// [`MIN_UNIQUE_SYMBOLS`] unique characters remain.
    pub fn new(raw: &str) -> Result<Self> {
        let chars = dedup_stable(raw.chars());

        if chars.len() < MIN_UNIQUE_SYMBOLS {
            return Err(Error::InvalidUniverse {
                kind: UniverseKind::Alphabet,
                min: MIN_UNIQUE_SYMBOLS,
            });
        }

        Ok(Self { chars })
    }

    /// Returns the unique characters in index order.
    #[inline]
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Returns true if `c` is part of the alphabet.
    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }
}

impl SymbolUniverse for Alphabet {
    type Symbol = char;

    #[inline]
    fn len(&self) -> usize {
        self.chars.len()
    }

    #[inline]
    fn symbol(&self, index: usize) -> &char {
        &self.chars[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicates_collapse() {
        let alphabet = Alphabet::new("abcabcabc").unwrap();
        assert_eq!(alphabet.chars(), &['a', 'b', 'c']);
        assert_eq!(alphabet.len(), 3);
    }

    #[test]
    fn test_multibyte_characters() {
        let alphabet = Alphabet::new("üê¶🐱ü").unwrap();
        assert_eq!(alphabet.len(), 4);
        assert_eq!(*alphabet.symbol(3), '🐱');
    }

    #[test]
    fn test_single_character_rejected() {
        assert!(matches!(
            Alphabet::new("x"),
            Err(Error::InvalidUniverse {
                kind: UniverseKind::Alphabet,
                min: 2
            })
        ));
        assert!(Alphabet::new("xxxx").is_err());
    }

    #[test]
    fn test_empty_rejected() {
        assert!(Alphabet::new("").is_err());
    }

    #[test]
    fn test_contains() {
        let alphabet = Alphabet::new("01").unwrap();
        assert!(alphabet.contains('1'));
        assert!(!alphabet.contains('2'));
    }
}

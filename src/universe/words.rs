//! Word universe for passphrases.

use super::{dedup_stable, Casing, SymbolUniverse, MIN_UNIQUE_SYMBOLS};
use crate::error::{Error, Result, UniverseKind};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Deduplicated set of words passphrases are drawn from.
///
/// The casing transform runs before deduplication, so words that only
/// differ in case collapse under [`Casing::Lower`] or [`Casing::Upper`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordList {
    words: Vec<String>,
    casing: Casing,
}

impl WordList {
    /// Builds a word list from `words` after applying `casing`.
    ///
    /// Fails with [`Error::InvalidUniverse`] when fewer than
    /// [`MIN_UNIQUE_SYMBOLS`] unique words remain.
    pub fn new<I, S>(words: I, casing: Casing) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = dedup_stable(words.into_iter().map(|w| casing.apply(w.as_ref())));

        if words.len() < MIN_UNIQUE_SYMBOLS {
            return Err(Error::InvalidUniverse {
                kind: UniverseKind::WordList,
                min: MIN_UNIQUE_SYMBOLS,
            });
        }

        Ok(Self { words, casing })
    }

    /// Returns the unique words in index order.
    #[inline]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Returns the casing the words were normalized with.
    #[inline]
    pub fn casing(&self) -> Casing {
        self.casing
    }

    /// Returns true if `word` is part of the list (post-casing).
    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }
}

impl SymbolUniverse for WordList {
    type Symbol = str;

    #[inline]
    fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    fn symbol(&self, index: usize) -> &str {
        &self.words[index]
    }
}

/// Reads a newline-delimited word list.
///
/// Surrounding whitespace is trimmed from every line and blank lines are
/// skipped. No casing or deduplication is applied here.
pub fn read_word_list<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    let mut words = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let word = line.trim();
        if !word.is_empty() {
            words.push(word.to_owned());
        }
    }
    Ok(words)
}

/// Reads a newline-delimited word list from a file.
pub fn read_word_list_file(path: impl AsRef<Path>) -> io::Result<Vec<String>> {
    let file = File::open(path.as_ref())?;
    let words = read_word_list(BufReader::new(file))?;
    tracing::debug!(
        path = %path.as_ref().display(),
        words = words.len(),
        "Loaded word list"
    );
    Ok(words)
}

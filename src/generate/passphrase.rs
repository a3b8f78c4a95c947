//! Passphrase requests.

use super::{assemble, Generator};
use crate::charset::{default_words, SEPARATOR_DEFAULT};
use crate::config::{COUNT_DEFAULT, PASSPHRASE_WORD_COUNT_DEFAULT};
use crate::error::{Parameter, Result};
use crate::source::ByteSource;
use crate::universe::{Casing, WordList};

/// Parameters for one passphrase generation call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassphraseRequest {
    count: usize,
    word_count: usize,
    separator: char,
    casing: Casing,
    words: Vec<String>,
}

impl PassphraseRequest {
    /// Creates a request for `count` passphrases of `word_count` words
    /// drawn from `words` (duplicates allowed) after applying `casing`.
    pub fn new<I, W>(
        count: usize,
        word_count: usize,
        separator: char,
        casing: Casing,
        words: I,
    ) -> Self
    where
        I: IntoIterator<Item = W>,
        W: Into<String>,
    {
        Self {
            count,
            word_count,
            separator,
            casing,
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }

    #[inline]
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    #[inline]
    pub fn separator(&self) -> char {
        self.separator
    }

    #[inline]
    pub fn casing(&self) -> Casing {
        self.casing
    }

    /// Returns the raw word list, before casing and deduplication.
    #[inline]
    pub fn words(&self) -> &[String] {
        &self.words
    }
}

impl Default for PassphraseRequest {
    fn default() -> Self {
        Self::new(
            COUNT_DEFAULT,
            PASSPHRASE_WORD_COUNT_DEFAULT,
            SEPARATOR_DEFAULT,
            Casing::default(),
            default_words(),
        )
    }
}

impl<S: ByteSource> Generator<S> {
    /// Generates passphrases of exactly `request.word_count()` words
    /// joined by the request separator.
    ///
    /// Fails with `OutOfRange` for a count or word count outside the
    /// limits, `InvalidUniverse` when fewer than two unique words remain
    /// after casing, and `InsufficientEntropy` if the source runs dry.
    pub fn passphrases(&mut self, request: &PassphraseRequest) -> Result<Vec<String>> {
        let limits = &self.limits.passphrase;
        limits.count.check(Parameter::Count, request.count)?;
        limits.word_count.check(Parameter::WordCount, request.word_count)?;

        let words = WordList::new(&request.words, request.casing)?;

        assemble(
            &mut self.source,
            &words,
            request.count,
            request.word_count,
            Some(request.separator),
        )
    }
}

//! Symbol universes.
//!
//! A universe is the deduplicated, indexable set of symbols an artifact
//! is drawn from: characters for passwords, words for passphrases.
//! Extraction only needs the universe size and an index lookup, so both
//! kinds share the [`SymbolUniverse`] capability.

mod alphabet;
mod casing;
mod words;

pub use alphabet::Alphabet;
pub use casing::Casing;
pub use words::{read_word_list, read_word_list_file, WordList};

use std::collections::HashSet;
use std::hash::Hash;

/// Minimum number of unique symbols a universe must hold.
pub const MIN_UNIQUE_SYMBOLS: usize = 2;

/// A symbol that can be appended to an artifact under construction.
pub trait Symbol {
    /// Appends the symbol to `out`.
    fn append_to(&self, out: &mut String);
}

impl Symbol for char {
    #[inline]
    fn append_to(&self, out: &mut String) {
        out.push(*self);
    }
}

impl Symbol for str {
    #[inline]
    fn append_to(&self, out: &mut String) {
        out.push_str(self);
    }
}

/// Indexable, deduplicated symbol set.
///
/// Index order is fixed for the lifetime of the value, so a given index
/// always resolves to the same symbol.
pub trait SymbolUniverse {
    /// Symbol type stored in the universe.
    type Symbol: Symbol + ?Sized;

    /// Returns the number of unique symbols.
    fn len(&self) -> usize;

    /// Returns the symbol at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    fn symbol(&self, index: usize) -> &Self::Symbol;

    /// Returns true if the universe holds no symbols.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Deduplicates `items`, keeping the first occurrence of each value in
/// input order.
fn dedup_stable<T, I>(items: I) -> Vec<T>
where
    T: Eq + Hash + Clone,
    I: IntoIterator<Item = T>,
{
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}

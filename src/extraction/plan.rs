//! Bit budget for one artifact.

/// Derived bit and byte counts for a universe size and artifact length.
///
/// Computed once per generation call and reused for every artifact in
/// that call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitPlan {
    universe_size: usize,
    bits_per_symbol: u32,
    symbols: usize,
}

impl BitPlan {
    /// Creates a plan for `symbols` symbols drawn from a universe of
    /// `universe_size` entries.
    ///
    /// # Panics
    ///
    /// Panics if `universe_size < 2`; universes that small are rejected
    /// at construction and never reach extraction.
    pub fn new(universe_size: usize, symbols: usize) -> Self {
        Self {
            universe_size,
            bits_per_symbol: bits_per_symbol(universe_size),
            symbols,
        }
    }

    /// Returns the universe size the plan was built for.
    #[inline]
    pub fn universe_size(&self) -> usize {
        self.universe_size
    }

    /// Returns the number of symbols per artifact.
    #[inline]
    pub fn symbols(&self) -> usize {
        self.symbols
    }

    /// Returns ceil(log2(universe size)).
    #[inline]
    pub fn bits_per_symbol(&self) -> u32 {
        self.bits_per_symbol
    }

    /// Returns the number of bits one artifact consumes.
    #[inline]
    pub fn bits_per_artifact(&self) -> usize {
        self.bits_per_symbol as usize * self.symbols
    }

    /// Returns the number of random bytes one artifact needs, counting a
    /// trailing partial byte in full.
    #[inline]
    pub fn bytes_per_artifact(&self) -> usize {
        self.bits_per_artifact().div_ceil(8)
    }
}

/// Returns the minimum number of bits that can index `universe_size`
/// symbols, i.e. ceil(log2(universe_size)).
///
/// # Panics
///
/// Panics if `universe_size < 2`.
pub fn bits_per_symbol(universe_size: usize) -> u32 {
    assert!(
        universe_size >= 2,
        "universe must hold at least 2 symbols, got {universe_size}"
    );
    usize::BITS - (universe_size - 1).leading_zeros()
}

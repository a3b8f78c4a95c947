//! Bit-sliced symbol index extraction.
//!
//! This module turns a buffer of random bytes into symbol indices. The
//! buffer is read as one big-endian bitstream; each symbol takes the
//! next `bits_per_symbol` bits, and the resulting integer is reduced
//! modulo the universe size.
//!
//! The modulo reduction is biased whenever the universe size is not a
//! power of two. The behavior is kept as-is so that a given buffer
//! always maps to the same indices.

mod bitstream;
mod plan;

pub use bitstream::BitReader;
pub use plan::{bits_per_symbol, BitPlan};

/// Extracts `plan.symbols()` indices in `[0, plan.universe_size())`
/// from `buffer`.
///
/// # Panics
///
/// Panics if `buffer` is shorter than `plan.bytes_per_artifact()`.
pub fn extract_indices(buffer: &[u8], plan: &BitPlan) -> Vec<usize> {
    assert!(
        buffer.len() >= plan.bytes_per_artifact(),
        "random buffer too short: {} bytes, plan needs {}",
        buffer.len(),
        plan.bytes_per_artifact()
    );

    let mut reader = BitReader::new(buffer);
    (0..plan.symbols())
        .map(|_| reader.read_bits(plan.bits_per_symbol()) % plan.universe_size())
        .collect()
}

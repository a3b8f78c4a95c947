//! Big-endian bit cursor over a byte buffer.

/// Reads a byte buffer as a bitstream, most significant bit of byte 0
/// first.
///
/// The cursor only moves forward, so consecutive reads consume
/// consecutive, non-overlapping bit ranges.
pub struct BitReader<'a> {
    data: &'a [u8],
    /// Index of the next bit to read.
    cursor: usize,
}

impl<'a> BitReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, cursor: 0 }
    }

    /// Returns the number of bits already read.
    #[inline]
    pub fn position(&self) -> usize {
        self.cursor
    }

    /// Returns the number of unread bits.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.data.len() * 8 - self.cursor
    }

    /// Reads the next bit.
    ///
    /// # Panics
    ///
    /// Panics if the buffer has no bits left.
    #[inline]
    pub fn read_bit(&mut self) -> bool {
        let byte = self.data[self.cursor / 8];
        let shift = 7 - (self.cursor % 8);
        self.cursor += 1;
        (byte >> shift) & 1 == 1
    }

    /// Reads `count` bits and assembles them MSB first.
    ///
    /// # Panics
    ///
    /// Panics if `count` exceeds the width of `usize` or the bits
    /// remaining in the buffer.
    pub fn read_bits(&mut self, count: u32) -> usize {
        assert!(count <= usize::BITS, "cannot read {count} bits into usize");
        assert!(
            count as usize <= self.remaining(),
            "bitstream underrun: need {count} bits, {} left",
            self.remaining()
        );

        let mut value = 0usize;
        for _ in 0..count {
            value = (value << 1) | usize::from(self.read_bit());
        }
        value
    }
}

impl std::fmt::Debug for BitReader<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Buffer contents are secret material; only report sizes.
        f.debug_struct("BitReader")
            .field("bytes", &self.data.len())
            .field("cursor", &self.cursor)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_msb_first_order() {
        let data = [0b1000_0001];
        let mut reader = BitReader::new(&data);

        assert!(reader.read_bit());
        for _ in 0..6 {
            assert!(!reader.read_bit());
        }
        assert!(reader.read_bit());
        assert_eq!(reader.remaining(), 0);
    }

    #[test]
    fn test_reads_span_byte_boundaries() {
        // 1011 0010 | 1100 0000
        let data = [0xB2, 0xC0];
        let mut reader = BitReader::new(&data);

        assert_eq!(reader.read_bits(3), 0b101);
        assert_eq!(reader.read_bits(7), 0b10010_11);
        assert_eq!(reader.position(), 10);
        assert_eq!(reader.read_bits(6), 0);
    }

    #[test]
    fn test_full_width_read() {
        let data = [0xFF; 16];
        let mut reader = BitReader::new(&data);
        assert_eq!(reader.read_bits(usize::BITS), usize::MAX);
    }

    #[test]
    fn test_zero_bit_read_is_zero() {
        let mut reader = BitReader::new(&[]);
        assert_eq!(reader.read_bits(0), 0);
    }

    #[test]
    #[should_panic(expected = "bitstream underrun")]
    fn test_underrun_panics() {
        let data = [0u8; 1];
        let mut reader = BitReader::new(&data);
        reader.read_bits(9);
    }
}

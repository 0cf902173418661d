//! Reading bit streams

/// Reads individual bits from a byte slice.
///
/// Bits are consumed most significant first within each byte.
#[derive(Debug, Clone)]
pub struct BitReader<'a> {
    data: &'a [u8],
    /// position in bits from the start of `data`
    pos: usize,
}

impl<'a> BitReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        BitReader { data, pos: 0 }
    }

    /// The number of bits consumed so far.
    pub fn bits_read(&self) -> usize {
        self.pos
    }

    /// The number of bits left in the underlying data.
    pub fn remaining(&self) -> usize {
        (self.data.len() * 8).saturating_sub(self.pos)
    }

    /// Read one bit, or `None` if the data is exhausted.
    pub fn read_bit(&mut self) -> Option<bool> {
        let byte = self.data.get(self.pos / 8)?;
        let bit = 7 - (self.pos % 8);
        self.pos += 1;
        Some(byte & (1 << bit) != 0)
    }

    /// Read an unsigned value of `n_bits` (at most 32), first bit most significant.
    pub fn read_bits(&mut self, n_bits: u8) -> Option<u32> {
        debug_assert!(n_bits <= 32);
        if self.remaining() < n_bits as usize {
            return None;
        }
        let mut value = 0u32;
        for _ in 0..n_bits {
            value = (value << 1) | self.read_bit()? as u32;
        }
        Some(value)
    }

    /// Read `len` bits, appending them to `out`.
    ///
    /// Nothing is appended if fewer than `len` bits remain.
    pub fn read_into(&mut self, len: usize, out: &mut Vec<bool>) -> Option<()> {
        if self.remaining() < len {
            return None;
        }
        out.reserve(len);
        for _ in 0..len {
            out.push(self.read_bit()?);
        }
        Some(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn msb_first() {
        let mut reader = BitReader::new(&[0b1010_0000, 0b0000_0001]);
        assert_eq!(reader.read_bit(), Some(true));
        assert_eq!(reader.read_bit(), Some(false));
        assert_eq!(reader.read_bits(2), Some(0b10));
        assert_eq!(reader.bits_read(), 4);
        assert_eq!(reader.read_bits(12), Some(1));
        assert_eq!(reader.read_bit(), None);
    }

    #[test]
    fn short_read_consumes_nothing() {
        let mut reader = BitReader::new(&[0xff]);
        let mut out = Vec::new();
        assert!(reader.read_into(9, &mut out).is_none());
        assert!(out.is_empty());
        assert_eq!(reader.remaining(), 8);
    }
}

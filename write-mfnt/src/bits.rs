//! Writing bit streams

/// Accumulates bits most significant bit first.
///
/// The final byte is padded with zero bits.
#[derive(Clone, Debug, Default)]
pub struct BitWriter {
    bytes: Vec<u8>,
    bit_len: usize,
}

impl BitWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// The number of bits written so far.
    pub fn bit_len(&self) -> usize {
        self.bit_len
    }

    pub fn push_bit(&mut self, bit: bool) {
        let shift = 7 - (self.bit_len % 8);
        if shift == 7 {
            self.bytes.push(0);
        }
        if bit {
            // a byte was pushed above if this one was full
            if let Some(last) = self.bytes.last_mut() {
                *last |= 1 << shift;
            }
        }
        self.bit_len += 1;
    }

    /// Write the low `n_bits` of `value`, high bit first.
    pub fn push_bits(&mut self, value: u32, n_bits: u8) {
        for i in (0..n_bits).rev() {
            self.push_bit((value >> i) & 1 == 1);
        }
    }

    pub fn extend(&mut self, bits: impl IntoIterator<Item = bool>) {
        bits.into_iter().for_each(|bit| self.push_bit(bit));
    }

    /// The padded bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use read_mfnt::BitReader;

    #[test]
    fn pads_final_byte() {
        let mut writer = BitWriter::new();
        writer.push_bits(0b10, 2);
        writer.extend([true, false, true, false, true, false, true, false]);
        writer.push_bits(0b001, 3);
        assert_eq!(writer.bit_len(), 13);
        assert_eq!(writer.into_bytes(), mfnt_test_data::streams::ALTERNATING_8X2);
    }

    #[test]
    fn reader_agrees() {
        let mut writer = BitWriter::new();
        writer.push_bits(0x2d5, 10);
        writer.push_bit(true);
        let bytes = writer.into_bytes();
        let mut reader = BitReader::new(&bytes);
        assert_eq!(reader.read_bits(10), Some(0x2d5));
        assert_eq!(reader.read_bit(), Some(true));
        assert_eq!(reader.remaining(), 5);
    }

    #[test]
    fn empty() {
        assert!(BitWriter::new().into_bytes().is_empty());
    }
}

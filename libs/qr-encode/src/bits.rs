//! Bit-level buffer used to assemble the data segment.

#[derive(Debug, Clone, Default)]
pub(crate) struct BitBuffer {
    bits: Vec<bool>,
}

impl BitBuffer {
    pub(crate) fn with_capacity(bits: usize) -> Self {
        Self {
            bits: Vec::with_capacity(bits),
        }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.bits.len()
    }

    /// Appends the low `len` bits of `value`, most significant first.
    pub(crate) fn append_bits(&mut self, value: u32, len: usize) {
        debug_assert!(len <= 31 && value >> len == 0);
        self.bits
            .extend((0..len).rev().map(|i| (value >> i) & 1 != 0));
    }

    /// Packs the bits into bytes, big-endian within each byte.
    /// The length must already be a multiple of 8.
    pub(crate) fn to_codewords(&self) -> Vec<u8> {
        debug_assert_eq!(self.bits.len() % 8, 0);
        self.bits
            .chunks(8)
            .map(|chunk| chunk.iter().fold(0u8, |acc, &bit| (acc << 1) | u8::from(bit)))
            .collect()
    }
}

//! # Encoder
//!
//! Byte-mode segment assembly, version selection, error correction and
//! interleaving, then drawing and masking on a [`Canvas`].

use tracing::{debug, instrument};

use crate::bits::BitBuffer;
use crate::canvas::Canvas;
use crate::ec_level::EcLevel;
use crate::error::EncodingError;
use crate::matrix::QrMatrix;
use crate::reed_solomon::ReedSolomon;
use crate::version::{Version, MODE_INDICATOR_BITS};

/// Byte mode indicator.
const MODE_BYTE: u32 = 0b0100;

/// Alternating pad codewords that fill unused data capacity.
const PAD_CODEWORDS: [u32; 2] = [0xEC, 0x11];

/// QR symbol encoder at a fixed error correction level.
///
/// # Example
///
/// ```rust
/// use qr_encode::{EcLevel, QrEncoder};
///
/// let encoder = QrEncoder::new(EcLevel::Medium);
/// let matrix = encoder.encode_text("hello").unwrap();
/// assert_eq!(matrix.ec_level(), EcLevel::Medium);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QrEncoder {
    ec_level: EcLevel,
}

impl QrEncoder {
    /// Creates an encoder for the given level.
    pub fn new(ec_level: EcLevel) -> Self {
        Self { ec_level }
    }

    /// Error correction level used for every symbol.
    pub fn ec_level(&self) -> EcLevel {
        self.ec_level
    }

    /// Encodes the UTF-8 bytes of `text`.
    pub fn encode_text(&self, text: &str) -> Result<QrMatrix, EncodingError> {
        self.encode_bytes(text.as_bytes())
    }

    /// Encodes raw bytes in byte mode.
    #[instrument(level = "debug", skip_all, fields(len = data.len(), ec = %self.ec_level))]
    pub fn encode_bytes(&self, data: &[u8]) -> Result<QrMatrix, EncodingError> {
        let version = self.select_version(data.len())?;
        let codewords = self.data_codewords(data, version);
        let interleaved = self.add_ecc_and_interleave(&codewords, version);

        let mut canvas = Canvas::new(version, self.ec_level);
        canvas.draw_codewords(&interleaved);
        let mask = canvas.select_mask();
        let matrix = canvas.finish(mask);

        debug!(
            version = version.number(),
            mask = mask.index(),
            dark_modules = matrix.dark_module_count(),
            "encoded QR symbol"
        );
        Ok(matrix)
    }

    /// Smallest version whose data capacity holds `len` bytes.
    ///
    /// # Example
    ///
    /// ```rust
    /// use qr_encode::QrEncoder;
    ///
    /// let encoder = QrEncoder::default();
    /// assert_eq!(encoder.select_version(17).unwrap().number(), 1);
    /// assert_eq!(encoder.select_version(18).unwrap().number(), 2);
    /// assert!(encoder.select_version(5000).is_err());
    /// ```
    pub fn select_version(&self, len: usize) -> Result<Version, EncodingError> {
        Version::all()
            .find(|&v| segment_bits(len, v) <= v.data_codewords(self.ec_level) * 8)
            .ok_or_else(|| {
                EncodingError::data_too_long(len, Version::MAX.max_byte_capacity(self.ec_level))
            })
    }

    /// Mode indicator, count, data, terminator and padding, as codewords.
    fn data_codewords(&self, data: &[u8], version: Version) -> Vec<u8> {
        let capacity_bits = version.data_codewords(self.ec_level) * 8;
        let mut bits = BitBuffer::with_capacity(capacity_bits);

        bits.append_bits(MODE_BYTE, MODE_INDICATOR_BITS);
        bits.append_bits(data.len() as u32, version.char_count_bits());
        for &byte in data {
            bits.append_bits(u32::from(byte), 8);
        }
        debug_assert!(bits.len() <= capacity_bits);

        bits.append_bits(0, (capacity_bits - bits.len()).min(4));
        bits.append_bits(0, (8 - bits.len() % 8) % 8);
        for pad in PAD_CODEWORDS.iter().cycle() {
            if bits.len() >= capacity_bits {
                break;
            }
            bits.append_bits(*pad, 8);
        }
        bits.to_codewords()
    }

    /// Splits data into blocks, appends each block's Reed-Solomon codewords,
    /// and interleaves the result column by column.
    fn add_ecc_and_interleave(&self, data: &[u8], version: Version) -> Vec<u8> {
        let num_blocks = version.error_correction_blocks(self.ec_level);
        let ecc_len = version.ecc_codewords_per_block(self.ec_level);
        let raw_codewords = version.total_codewords();
        let num_short_blocks = num_blocks - raw_codewords % num_blocks;
        let short_block_len = raw_codewords / num_blocks;
        let short_data_len = short_block_len - ecc_len;

        let rs = ReedSolomon::new(ecc_len);
        let mut blocks: Vec<Vec<u8>> = Vec::with_capacity(num_blocks);
        let mut offset = 0;
        for i in 0..num_blocks {
            let data_len = short_data_len + usize::from(i >= num_short_blocks);
            let block_data = &data[offset..offset + data_len];
            offset += data_len;

            let mut block = block_data.to_vec();
            let ecc = rs.remainder(block_data);
            if i < num_short_blocks {
                // Placeholder keeps every block the same length; skipped below.
                block.push(0);
            }
            block.extend_from_slice(&ecc);
            blocks.push(block);
        }

        let mut result = Vec::with_capacity(raw_codewords);
        for i in 0..short_block_len + 1 {
            for (j, block) in blocks.iter().enumerate() {
                if i != short_data_len || j >= num_short_blocks {
                    result.push(block[i]);
                }
            }
        }
        debug_assert_eq!(result.len(), raw_codewords);
        result
    }
}

/// Bits needed for a byte-mode segment of `len` bytes in `version`.
fn segment_bits(len: usize, version: Version) -> usize {
    MODE_INDICATOR_BITS + version.char_count_bits() + 8 * len
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_codewords_for_single_byte() {
        let encoder = QrEncoder::default();
        let codewords = encoder.data_codewords(b"A", Version::MIN);
        assert_eq!(codewords.len(), 19);
        // 0100 00000001 01000001 0000 then pads
        assert_eq!(&codewords[..3], &[0x40, 0x14, 0x10]);
        assert_eq!(&codewords[3..7], &[0xEC, 0x11, 0xEC, 0x11]);
    }

    #[test]
    fn test_data_codewords_when_full() {
        let encoder = QrEncoder::default();
        let data = [0xFFu8; 17];
        let codewords = encoder.data_codewords(&data, Version::MIN);
        // 4 + 8 + 136 = 148 bits, 4 bits of terminator reach 152 = 19 bytes
        assert_eq!(codewords.len(), 19);
        assert_eq!(codewords[18], 0xF0);
    }

    #[test]
    fn test_interleave_single_block_is_identity_prefix() {
        let encoder = QrEncoder::default();
        let data: Vec<u8> = (0..19).collect();
        let all = encoder.add_ecc_and_interleave(&data, Version::MIN);
        assert_eq!(all.len(), 26);
        assert_eq!(&all[..19], data.as_slice());
    }

    #[test]
    fn test_interleave_uneven_blocks() {
        // 5-Q: 2 blocks of 15 data + 2 blocks of 16 data, 18 ECC each
        let encoder = QrEncoder::new(EcLevel::Quartile);
        let version = Version::new(5).unwrap();
        let data_len = version.data_codewords(EcLevel::Quartile);
        assert_eq!(data_len, 62);
        let data: Vec<u8> = (0..data_len as u8).collect();
        let all = encoder.add_ecc_and_interleave(&data, version);
        assert_eq!(all.len(), version.total_codewords());
        // First column takes the first byte of each block.
        assert_eq!(&all[..4], &[0, 15, 30, 46]);
        // The extra data byte of the long blocks comes right after column 14.
        assert_eq!(&all[60..62], &[45, 61]);
    }

    #[test]
    fn test_select_version_boundaries() {
        let encoder = QrEncoder::default();
        assert_eq!(encoder.select_version(0).unwrap(), Version::MIN);
        assert_eq!(encoder.select_version(2953).unwrap(), Version::MAX);
        assert_eq!(
            encoder.select_version(2954),
            Err(EncodingError::DataTooLong {
                length: 2954,
                capacity: 2953
            })
        );
    }
}

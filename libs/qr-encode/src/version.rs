//! # Symbol Versions
//!
//! Version numbers, symbol sizes, alignment pattern positions and the
//! per-version error correction block tables.

use crate::ec_level::EcLevel;
use crate::error::EncodingError;
use config::constants::{MAX_QR_VERSION, MIN_QR_VERSION};

/// Error correction codewords per block, indexed by `[level][version]`.
/// Column 0 is unused.
const ECC_CODEWORDS_PER_BLOCK: [[u8; 41]; 4] = [
    [
        0, 7, 10, 15, 20, 26, 18, 20, 24, 30, 18, 20, 24, 26, 30, 22, 24, 28, 30, 28, 28, 28, 28,
        30, 30, 26, 28, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30,
    ],
    [
        0, 10, 16, 26, 18, 24, 16, 18, 22, 22, 26, 30, 22, 22, 24, 24, 28, 28, 26, 26, 26, 26, 28,
        28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28,
    ],
    [
        0, 13, 22, 18, 26, 18, 24, 18, 22, 20, 24, 28, 26, 24, 20, 30, 24, 28, 28, 26, 30, 28, 30,
        30, 30, 30, 28, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30,
    ],
    [
        0, 17, 28, 22, 16, 22, 28, 26, 26, 24, 28, 24, 28, 22, 24, 24, 30, 28, 28, 26, 28, 30, 24,
        30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30,
    ],
];

/// Number of error correction blocks, indexed by `[level][version]`.
/// Column 0 is unused.
const ERROR_CORRECTION_BLOCKS: [[u8; 41]; 4] = [
    [
        0, 1, 1, 1, 1, 1, 2, 2, 2, 2, 4, 4, 4, 4, 4, 6, 6, 6, 6, 7, 8, 8, 9, 9, 10, 12, 12, 12, 13,
        14, 15, 16, 17, 18, 19, 19, 20, 21, 22, 24, 25,
    ],
    [
        0, 1, 1, 1, 2, 2, 4, 4, 4, 5, 5, 5, 8, 9, 9, 10, 10, 11, 13, 14, 16, 17, 17, 18, 20, 21,
        23, 25, 26, 28, 29, 31, 33, 35, 37, 38, 40, 43, 45, 47, 49,
    ],
    [
        0, 1, 1, 2, 2, 4, 4, 6, 6, 8, 8, 8, 10, 12, 16, 12, 17, 16, 18, 21, 20, 23, 23, 25, 27,
        29, 34, 34, 35, 38, 40, 43, 45, 48, 51, 53, 56, 59, 62, 65, 68,
    ],
    [
        0, 1, 1, 2, 4, 4, 4, 5, 6, 8, 8, 11, 11, 16, 16, 18, 16, 19, 21, 25, 25, 25, 34, 30, 32,
        35, 37, 40, 42, 45, 48, 51, 54, 57, 60, 63, 66, 70, 74, 77, 81,
    ],
];

/// Mode indicator length for byte mode.
pub(crate) const MODE_INDICATOR_BITS: usize = 4;

/// BCH(18,6) generator for version information.
const VERSION_INFO_GENERATOR: u32 = 0x1F25;

/// A QR symbol version, 1 through 40.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version(u8);

impl Version {
    /// Smallest version (21×21 modules).
    pub const MIN: Version = Version(MIN_QR_VERSION);

    /// Largest version (177×177 modules).
    pub const MAX: Version = Version(MAX_QR_VERSION);

    /// Creates a version, rejecting numbers outside 1..=40.
    ///
    /// # Example
    ///
    /// ```rust
    /// use qr_encode::Version;
    ///
    /// assert_eq!(Version::new(2).unwrap().size(), 25);
    /// assert!(Version::new(41).is_err());
    /// ```
    pub fn new(number: u8) -> Result<Self, EncodingError> {
        if (MIN_QR_VERSION..=MAX_QR_VERSION).contains(&number) {
            Ok(Self(number))
        } else {
            Err(EncodingError::InvalidVersion(number))
        }
    }

    /// All versions in ascending order.
    pub fn all() -> impl Iterator<Item = Version> {
        (MIN_QR_VERSION..=MAX_QR_VERSION).map(Version)
    }

    /// The version number.
    #[inline]
    pub fn number(self) -> u8 {
        self.0
    }

    /// Side length of the symbol in modules.
    #[inline]
    pub fn size(self) -> usize {
        17 + 4 * self.0 as usize
    }

    /// Row/column coordinates of alignment pattern centres, ascending.
    ///
    /// Version 1 has none. The full set of centres is every pair from this
    /// list except the three that collide with finder patterns.
    pub fn alignment_positions(self) -> Vec<usize> {
        if self.0 == 1 {
            return Vec::new();
        }
        let count = self.0 as usize / 7 + 2;
        let step = (self.0 as usize * 8 + count * 3 + 5) / (count * 4 - 4) * 2;
        let mut positions = vec![6];
        let mut pos = self.size() - 7;
        while positions.len() < count {
            positions.insert(1, pos);
            pos -= step;
        }
        positions
    }

    /// Number of modules available for data and error correction bits,
    /// after all function patterns are excluded. Includes remainder bits.
    pub fn raw_data_modules(self) -> usize {
        let ver = self.0 as usize;
        let mut result = (16 * ver + 128) * ver + 64;
        if ver >= 2 {
            let align = ver / 7 + 2;
            result -= (25 * align - 10) * align - 55;
            if ver >= 7 {
                result -= 36;
            }
        }
        result
    }

    /// Total codewords (data plus error correction).
    #[inline]
    pub fn total_codewords(self) -> usize {
        self.raw_data_modules() / 8
    }

    /// Error correction codewords in each block at `ec_level`.
    #[inline]
    pub fn ecc_codewords_per_block(self, ec_level: EcLevel) -> usize {
        ECC_CODEWORDS_PER_BLOCK[ec_level.ordinal()][self.0 as usize] as usize
    }

    /// Number of error correction blocks at `ec_level`.
    #[inline]
    pub fn error_correction_blocks(self, ec_level: EcLevel) -> usize {
        ERROR_CORRECTION_BLOCKS[ec_level.ordinal()][self.0 as usize] as usize
    }

    /// Number of data codewords at `ec_level`.
    pub fn data_codewords(self, ec_level: EcLevel) -> usize {
        self.total_codewords()
            - self.ecc_codewords_per_block(ec_level) * self.error_correction_blocks(ec_level)
    }

    /// Width of the byte-mode character count field.
    #[inline]
    pub fn char_count_bits(self) -> usize {
        if self.0 <= 9 {
            8
        } else {
            16
        }
    }

    /// Largest number of bytes this version holds in byte mode.
    ///
    /// # Example
    ///
    /// ```rust
    /// use qr_encode::{EcLevel, Version};
    ///
    /// assert_eq!(Version::MIN.max_byte_capacity(EcLevel::Low), 17);
    /// assert_eq!(Version::MAX.max_byte_capacity(EcLevel::Low), 2953);
    /// ```
    pub fn max_byte_capacity(self, ec_level: EcLevel) -> usize {
        (self.data_codewords(ec_level) * 8 - MODE_INDICATOR_BITS - self.char_count_bits()) / 8
    }

    /// 18-bit version information word (6 data bits, 12 BCH bits).
    /// Only placed in the symbol for versions 7 and up.
    pub(crate) fn info_bits(self) -> u32 {
        let data = self.0 as u32;
        let mut rem = data;
        for _ in 0..12 {
            rem = (rem << 1) ^ ((rem >> 11) * VERSION_INFO_GENERATOR);
        }
        data << 12 | rem
    }
}

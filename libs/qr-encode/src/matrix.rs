//! # QR Matrix
//!
//! The finished, immutable module grid of a QR symbol.

use std::fmt;

use crate::ec_level::EcLevel;
use crate::mask::Mask;
use crate::version::Version;

/// A square grid of dark/light modules produced by the encoder.
///
/// Side length is `17 + 4 * version`. The quiet zone is not part of the
/// matrix. Values of this type are only created by
/// [`QrEncoder`](crate::QrEncoder) and cannot be modified.
///
/// # Example
///
/// ```rust
/// let matrix = qr_encode::encode("A").unwrap();
/// assert_eq!(matrix.size(), 21);
/// assert!(matrix.is_dark(0, 0)); // finder pattern corner
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrMatrix {
    size: usize,
    modules: Vec<bool>,
    version: Version,
    ec_level: EcLevel,
    mask: Mask,
}

impl QrMatrix {
    pub(crate) fn new(
        size: usize,
        modules: Vec<bool>,
        version: Version,
        ec_level: EcLevel,
        mask: Mask,
    ) -> Self {
        debug_assert_eq!(modules.len(), size * size);
        Self {
            size,
            modules,
            version,
            ec_level,
            mask,
        }
    }

    /// Side length in modules.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether the module at `(row, col)` is dark. Positions outside the
    /// symbol are light, like the quiet zone.
    #[inline]
    pub fn is_dark(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size && self.modules[row * self.size + col]
    }

    /// Number of dark modules in the symbol.
    pub fn dark_module_count(&self) -> usize {
        self.modules.iter().filter(|&&m| m).count()
    }

    /// Rows of the symbol, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        self.modules.chunks(self.size)
    }

    /// Symbol version.
    #[inline]
    pub fn version(&self) -> Version {
        self.version
    }

    /// Error correction level.
    #[inline]
    pub fn ec_level(&self) -> EcLevel {
        self.ec_level
    }

    /// Data mask applied to the symbol.
    #[inline]
    pub fn mask(&self) -> Mask {
        self.mask
    }
}

/// Renders the symbol as text, `#` for dark and `.` for light, one line per row.
impl fmt::Display for QrMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for &dark in row {
                f.write_str(if dark { "#" } else { "." })?;
            }
        }
        Ok(())
    }
}

//! # Conversion Report
//!
//! Summary of what a conversion produced, for logging and host display.

use qr_encode::QrMatrix;
use serde::Serialize;

/// What was encoded and how large the output is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversionReport {
    /// QR version (1-40).
    pub version: u8,
    /// Error correction level symbol (`L`, `M`, `Q` or `H`).
    pub ec_level: char,
    /// Data mask pattern index (0-7).
    pub mask: u8,
    /// Symbol side in modules, quiet zone excluded.
    pub symbol_size: usize,
    pub dark_modules: usize,
    pub triangles: usize,
    /// STL buffer length in bytes.
    pub byte_length: usize,
}

impl ConversionReport {
    pub(crate) fn new(matrix: &QrMatrix, triangles: usize, byte_length: usize) -> Self {
        Self {
            version: matrix.version().number(),
            ec_level: matrix.ec_level().symbol(),
            mask: matrix.mask().index(),
            symbol_size: matrix.size(),
            dark_modules: matrix.dark_module_count(),
            triangles,
            byte_length,
        }
    }
}

/// STL bytes together with their report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    pub stl: Vec<u8>,
    pub report: ConversionReport,
}

//! # QR Encode
//!
//! Browser-safe QR symbol encoder (ISO/IEC 18004, byte mode).
//!
//! ## Architecture
//!
//! ```text
//! text → byte segment → data codewords → Reed-Solomon blocks → interleave
//!      → canvas (function patterns + zig-zag placement) → best mask → QrMatrix
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use qr_encode::{encode, EcLevel};
//!
//! let matrix = encode("A").unwrap();
//! assert_eq!(matrix.version().number(), 1);
//! assert_eq!(matrix.ec_level(), EcLevel::Low);
//! ```

mod bits;
mod canvas;
pub mod ec_level;
pub mod encoder;
pub mod error;
pub mod mask;
pub mod matrix;
mod reed_solomon;
pub mod version;

pub use ec_level::EcLevel;
pub use encoder::QrEncoder;
pub use error::EncodingError;
pub use mask::Mask;
pub use matrix::QrMatrix;
pub use version::Version;

/// Encodes text at the pipeline's fixed error correction level (Low).
///
/// # Errors
///
/// Returns [`EncodingError::DataTooLong`] when the UTF-8 bytes of `text`
/// exceed 2953, the byte-mode capacity of version 40 at level Low.
pub fn encode(text: &str) -> Result<QrMatrix, EncodingError> {
    QrEncoder::default().encode_text(text)
}

#[cfg(test)]
mod tests;

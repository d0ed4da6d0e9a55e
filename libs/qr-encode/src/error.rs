//! # Encoding Errors
//!
//! Error types for QR symbol encoding.

use thiserror::Error;

/// Errors that can occur while encoding text into a QR symbol.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodingError {
    /// The input does not fit in the largest symbol version.
    #[error("Data too long: {length} bytes (max: {capacity})")]
    DataTooLong { length: usize, capacity: usize },

    /// A version number outside 1..=40 was requested.
    #[error("Invalid QR version: {0} (expected 1..=40)")]
    InvalidVersion(u8),
}

impl EncodingError {
    /// Creates a data-too-long error.
    pub fn data_too_long(length: usize, capacity: usize) -> Self {
        Self::DataTooLong { length, capacity }
    }
}

//! # Conversion Errors
//!
//! The single error type every conversion failure is reported as.

use qr_encode::EncodingError;
use qr_mesh::MeshError;
use stl_export::StlError;
use thiserror::Error;

/// Errors returned by [`crate::convert`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConvertError {
    /// The text does not fit any QR version at the fixed error correction
    /// level.
    #[error("Encoding failed: {0}")]
    Encoding(#[from] EncodingError),

    /// A numeric parameter is missing, unparseable, or out of range.
    #[error("Invalid parameter `{name}`: {message}")]
    InvalidParameter { name: &'static str, message: String },

    /// An internal invariant was violated while building or writing the
    /// mesh. Valid input never produces this.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ConvertError {
    /// Creates an invalid parameter error.
    pub fn invalid_parameter(name: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            message: message.into(),
        }
    }
}

impl From<MeshError> for ConvertError {
    fn from(err: MeshError) -> Self {
        match err {
            MeshError::InvalidParameter { name, message } => Self::InvalidParameter { name, message },
            MeshError::DegenerateGeometry { .. } => Self::Internal(err.to_string()),
        }
    }
}

impl From<StlError> for ConvertError {
    fn from(err: StlError) -> Self {
        Self::Internal(err.to_string())
    }
}

//! # QR STL
//!
//! Turns text into a 3D-printable QR code plate as a binary STL buffer.
//!
//! ## Pipeline
//!
//! ```text
//! (text, "base_height", "base_size", "pixel_size")
//!     → params::parse_params → GeometryParams
//!     → QrEncoder::encode_bytes → QrMatrix
//!     → qr_mesh::build       → Mesh
//!     → stl_export::serialize → Vec<u8>
//! ```
//!
//! Every call is independent; nothing is cached between calls.
//!
//! ## Usage
//!
//! ```rust
//! let stl = qr_stl::convert("A", "1", "50", "2").unwrap();
//! assert_eq!(stl.len(), 84 + 50 * 12 * (1 + 226));
//! ```

pub mod error;
pub mod params;
pub mod report;

pub use error::ConvertError;
pub use qr_mesh::GeometryParams;
pub use report::{Conversion, ConversionReport};

use qr_encode::QrEncoder;
use tracing::{info, instrument};

/// Converts `text` into binary STL bytes.
///
/// The numeric parameters are parsed from text; see
/// [`params::parse_params`].
///
/// # Errors
///
/// - [`ConvertError::InvalidParameter`] for an unparseable or out-of-range
///   dimension; checked before encoding
/// - [`ConvertError::Encoding`] when the text is too long for a QR symbol
/// - [`ConvertError::Internal`] on an invariant violation
pub fn convert(
    text: &str,
    base_height: &str,
    base_size: &str,
    pixel_size: &str,
) -> Result<Vec<u8>, ConvertError> {
    convert_with_report(text, base_height, base_size, pixel_size).map(|c| c.stl)
}

/// Like [`convert`], also returning a [`ConversionReport`].
///
/// # Errors
///
/// Same as [`convert`].
pub fn convert_with_report(
    text: &str,
    base_height: &str,
    base_size: &str,
    pixel_size: &str,
) -> Result<Conversion, ConvertError> {
    let params = params::parse_params(base_height, base_size, pixel_size)?;
    convert_with_params(text, &params)
}

/// Like [`convert_with_report`], encoding raw bytes instead of text.
///
/// Byte mode carries arbitrary octets, so input that is not UTF-8 (a file
/// in another encoding, binary data) is encoded as-is.
///
/// # Errors
///
/// Same as [`convert`].
///
/// # Example
///
/// ```rust
/// let conversion = qr_stl::convert_bytes_with_report(&[0xff, 0xfe, 0x00], "1", "50", "2").unwrap();
/// assert_eq!(conversion.report.version, 1);
/// ```
pub fn convert_bytes_with_report(
    data: &[u8],
    base_height: &str,
    base_size: &str,
    pixel_size: &str,
) -> Result<Conversion, ConvertError> {
    let params = params::parse_params(base_height, base_size, pixel_size)?;
    convert_bytes_with_params(data, &params)
}

/// Converts `text` with already validated parameters.
///
/// # Errors
///
/// [`ConvertError::Encoding`], or [`ConvertError::InvalidParameter`] when the
/// parameters cannot be resolved for the symbol size at single precision.
///
/// # Example
///
/// ```rust
/// use qr_stl::{convert_with_params, GeometryParams};
///
/// let params = GeometryParams::new(1.0, 50.0, 2.0).unwrap();
/// let conversion = convert_with_params("HELLO", &params).unwrap();
/// assert_eq!(conversion.report.version, 1);
/// assert_eq!(conversion.report.byte_length, conversion.stl.len());
/// ```
pub fn convert_with_params(text: &str, params: &GeometryParams) -> Result<Conversion, ConvertError> {
    convert_bytes_with_params(text.as_bytes(), params)
}

/// Converts raw bytes with already validated parameters.
///
/// # Errors
///
/// Same as [`convert_with_params`].
#[instrument(level = "debug", skip_all, fields(data_len = data.len()))]
pub fn convert_bytes_with_params(
    data: &[u8],
    params: &GeometryParams,
) -> Result<Conversion, ConvertError> {
    let matrix = QrEncoder::default().encode_bytes(data)?;
    let mesh = qr_mesh::build(&matrix, params)?;
    let stl = stl_export::serialize(&mesh)?;

    let report = ConversionReport::new(&matrix, mesh.triangle_count(), stl.len());
    info!(
        version = report.version,
        mask = report.mask,
        triangles = report.triangles,
        bytes = report.byte_length,
        "Converted input to STL"
    );
    Ok(Conversion { stl, report })
}

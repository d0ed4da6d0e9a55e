//! # Parameter Parsing
//!
//! Hosts hand over the plate dimensions as text (form fields, command-line
//! arguments). Parsing and range validation report the same error kind, so a
//! caller cannot tell "not a number" from "not positive" by type alone; the
//! message says which.

use qr_mesh::GeometryParams;

use crate::error::ConvertError;

/// Parses the three dimension strings into validated geometry parameters.
///
/// Surrounding whitespace is ignored. Anything `f64::from_str` rejects,
/// including the empty string, is [`ConvertError::InvalidParameter`].
///
/// # Example
///
/// ```rust
/// use qr_stl::params::parse_params;
///
/// let params = parse_params(" 1 ", "50", "2.5").unwrap();
/// assert_eq!(params.pixel_size(), 2.5);
/// assert!(parse_params("1", "abc", "2").is_err());
/// ```
pub fn parse_params(
    base_height: &str,
    base_size: &str,
    pixel_size: &str,
) -> Result<GeometryParams, ConvertError> {
    let base_height = parse_dimension("base_height", base_height)?;
    let base_size = parse_dimension("base_size", base_size)?;
    let pixel_size = parse_dimension("pixel_size", pixel_size)?;
    Ok(GeometryParams::new(base_height, base_size, pixel_size)?)
}

fn parse_dimension(name: &'static str, text: &str) -> Result<f64, ConvertError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ConvertError::invalid_parameter(name, "is empty"));
    }
    trimmed
        .parse::<f64>()
        .map_err(|_| ConvertError::invalid_parameter(name, format!("{trimmed:?} is not a number")))
}

//! # Geometry Parameters
//!
//! Validated plate dimensions in output units (millimetres by convention).

use crate::error::MeshError;

/// Plate thickness, plate side length and module height.
///
/// Construction guarantees all three are finite, strictly positive and
/// representable as normal single-precision floats.
///
/// # Example
///
/// ```rust
/// use qr_mesh::GeometryParams;
///
/// let params = GeometryParams::new(1.0, 50.0, 2.0).unwrap();
/// assert_eq!(params.top_height(), 3.0);
/// assert!(GeometryParams::new(1.0, 0.0, 2.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeometryParams {
    base_height: f64,
    base_size: f64,
    pixel_size: f64,
}

impl GeometryParams {
    /// Validates and bundles the three dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::InvalidParameter`] naming the first offending
    /// parameter.
    pub fn new(base_height: f64, base_size: f64, pixel_size: f64) -> Result<Self, MeshError> {
        Ok(Self {
            base_height: check_dimension("base_height", base_height)?,
            base_size: check_dimension("base_size", base_size)?,
            pixel_size: check_dimension("pixel_size", pixel_size)?,
        })
    }

    /// Thickness of the base plate (z extent).
    #[inline]
    pub fn base_height(&self) -> f64 {
        self.base_height
    }

    /// Side length of the square base plate.
    #[inline]
    pub fn base_size(&self) -> f64 {
        self.base_size
    }

    /// Height of each raised module above the plate.
    #[inline]
    pub fn pixel_size(&self) -> f64 {
        self.pixel_size
    }

    /// Z coordinate of the module tops.
    #[inline]
    pub fn top_height(&self) -> f64 {
        self.base_height + self.pixel_size
    }
}

fn check_dimension(name: &'static str, value: f64) -> Result<f64, MeshError> {
    if !value.is_finite() {
        return Err(MeshError::invalid_parameter(
            name,
            format!("must be a finite number, got {value}"),
        ));
    }
    if value <= 0.0 {
        return Err(MeshError::invalid_parameter(
            name,
            format!("must be greater than zero, got {value}"),
        ));
    }
    let narrowed = value as f32;
    if narrowed.is_infinite() {
        return Err(MeshError::invalid_parameter(
            name,
            format!("{value} exceeds single-precision range"),
        ));
    }
    if narrowed < f32::MIN_POSITIVE {
        return Err(MeshError::invalid_parameter(
            name,
            format!("{value} is below single-precision resolution"),
        ));
    }
    Ok(value)
}

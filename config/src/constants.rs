//! # Configuration Constants
//!
//! Centralized constants for the QR to STL pipeline.
//!
//! ## Categories
//!
//! - **QR**: Symbol version range and quiet zone
//! - **Geometry**: Cuboid layout and numeric tolerances
//! - **STL**: Binary file layout
//! - **Defaults**: Front-end parameter defaults

// =============================================================================
// QR CONSTANTS
// =============================================================================

/// Smallest QR symbol version.
///
/// # Example
///
/// ```rust
/// use config::constants::MIN_QR_VERSION;
///
/// assert_eq!(17 + 4 * MIN_QR_VERSION as usize, 21);
/// ```
pub const MIN_QR_VERSION: u8 = 1;

/// Largest QR symbol version.
///
/// # Example
///
/// ```rust
/// use config::constants::MAX_QR_VERSION;
///
/// assert_eq!(17 + 4 * MAX_QR_VERSION as usize, 177);
/// ```
pub const MAX_QR_VERSION: u8 = 40;

/// Width of the light margin required around a QR symbol, in modules.
///
/// The quiet zone is folded into the plate footprint: a symbol of side `S`
/// is laid out on a grid of side `S + 2 * QUIET_ZONE_MODULES`.
///
/// # Example
///
/// ```rust
/// use config::constants::QUIET_ZONE_MODULES;
///
/// let symbol_side = 25;
/// let grid_side = symbol_side + 2 * QUIET_ZONE_MODULES;
/// assert_eq!(grid_side, 33);
/// ```
pub const QUIET_ZONE_MODULES: usize = 4;

// =============================================================================
// GEOMETRY CONSTANTS
// =============================================================================

/// Number of triangles emitted for one axis-aligned cuboid (2 per face).
///
/// # Example
///
/// ```rust
/// use config::constants::TRIANGLES_PER_CUBOID;
///
/// let dark_modules = 10;
/// let triangles = TRIANGLES_PER_CUBOID * (1 + dark_modules);
/// assert_eq!(triangles, 132);
/// ```
pub const TRIANGLES_PER_CUBOID: usize = 12;

/// Squared cross-product length below which a triangle counts as degenerate.
///
/// # Example
///
/// ```rust
/// use config::constants::DEGENERATE_AREA_EPSILON;
///
/// let cross_len_sq: f64 = 0.0;
/// assert!(cross_len_sq <= DEGENERATE_AREA_EPSILON);
/// ```
pub const DEGENERATE_AREA_EPSILON: f64 = 0.0;

/// Tolerance used when checking that a stored normal has unit length.
///
/// # Example
///
/// ```rust
/// use config::constants::UNIT_NORMAL_TOLERANCE;
///
/// let length: f64 = 1.0 + 1e-9;
/// assert!((length - 1.0).abs() < UNIT_NORMAL_TOLERANCE);
/// ```
pub const UNIT_NORMAL_TOLERANCE: f64 = 1e-5;

// =============================================================================
// STL CONSTANTS
// =============================================================================

/// Size of the free-form binary STL header, in bytes.
pub const STL_HEADER_LEN: usize = 80;

/// Size of the little-endian triangle count that follows the header.
pub const STL_COUNT_LEN: usize = 4;

/// Size of the fixed preamble (header plus triangle count).
///
/// # Example
///
/// ```rust
/// use config::constants::STL_PREAMBLE_LEN;
///
/// assert_eq!(STL_PREAMBLE_LEN, 84);
/// ```
pub const STL_PREAMBLE_LEN: usize = STL_HEADER_LEN + STL_COUNT_LEN;

/// Size of one triangle record: normal, three vertices, attribute word.
///
/// # Example
///
/// ```rust
/// use config::constants::STL_TRIANGLE_RECORD_LEN;
///
/// let floats = 4 * 3;
/// assert_eq!(STL_TRIANGLE_RECORD_LEN, floats * 4 + 2);
/// ```
pub const STL_TRIANGLE_RECORD_LEN: usize = 50;

/// Identifying text written at the start of every STL header.
pub const STL_HEADER_TEXT: &str = "qr-stl binary STL";

/// Exact length of a binary STL buffer holding `triangle_count` triangles.
///
/// # Example
///
/// ```rust
/// use config::constants::stl_buffer_len;
///
/// assert_eq!(stl_buffer_len(0), 84);
/// assert_eq!(stl_buffer_len(2), 184);
/// ```
pub const fn stl_buffer_len(triangle_count: usize) -> usize {
    STL_PREAMBLE_LEN + STL_TRIANGLE_RECORD_LEN * triangle_count
}

// =============================================================================
// DEFAULT PARAMETERS
// =============================================================================

/// Default z-thickness of the base plate, used by the command line.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_BASE_HEIGHT;
///
/// let user_value: Option<f64> = None;
/// assert_eq!(user_value.unwrap_or(DEFAULT_BASE_HEIGHT), 1.0);
/// ```
pub const DEFAULT_BASE_HEIGHT: f64 = 1.0;

/// Default side length of the square base plate, used by the command line.
pub const DEFAULT_BASE_SIZE: f64 = 50.0;

/// Default extrusion height of a dark module, used by the command line.
pub const DEFAULT_PIXEL_SIZE: f64 = 2.0;

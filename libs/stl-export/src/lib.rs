//! # STL Export
//!
//! Binary STL writer.
//!
//! ## Layout
//!
//! ```text
//! offset      size  content
//! 0           80    header, zero padded
//! 80          4     triangle count (u32 LE)
//! 84 + 50*i   50    normal, vertex 1, vertex 2, vertex 3 (3 x f32 LE each),
//!                   attribute byte count (u16 LE, always 0)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use qr_mesh::{primitives::push_cuboid, Mesh};
//! use glam::DVec3;
//!
//! let mut mesh = Mesh::new();
//! push_cuboid(&mut mesh, DVec3::ZERO, DVec3::ONE).unwrap();
//! let bytes = stl_export::serialize(&mesh).unwrap();
//! assert_eq!(bytes.len(), 84 + 50 * 12);
//! ```

pub mod error;

pub use error::StlError;

use config::constants::{STL_HEADER_LEN, STL_HEADER_TEXT};
use glam::Vec3;
use qr_mesh::{Mesh, Triangle};
use tracing::{debug, instrument};

/// Serializes `mesh` with the default identifying header.
///
/// # Errors
///
/// See [`serialize_with_header`].
pub fn serialize(mesh: &Mesh) -> Result<Vec<u8>, StlError> {
    serialize_with_header(mesh, STL_HEADER_TEXT.as_bytes())
}

/// Serializes `mesh` with a caller-supplied header.
///
/// The header is truncated to 80 bytes and zero padded. It should not start
/// with `solid`, which some readers take as the ASCII format.
///
/// # Errors
///
/// - [`StlError::TooManyTriangles`] when the count exceeds `u32::MAX`
/// - [`StlError::NonFiniteVertex`] / [`StlError::DegenerateTriangle`] for a
///   triangle that does not survive narrowing to f32
///
/// No partial buffer is returned on error.
#[instrument(level = "debug", skip_all, fields(triangles = mesh.triangle_count()))]
pub fn serialize_with_header(mesh: &Mesh, header: &[u8]) -> Result<Vec<u8>, StlError> {
    let count = mesh.triangle_count();
    let count_field = u32::try_from(count).map_err(|_| StlError::TooManyTriangles { count })?;

    let mut out = Vec::with_capacity(config::constants::stl_buffer_len(count));

    let mut padded = [0u8; STL_HEADER_LEN];
    let copy_n = header.len().min(STL_HEADER_LEN);
    padded[..copy_n].copy_from_slice(&header[..copy_n]);
    out.extend_from_slice(&padded);
    out.extend_from_slice(&count_field.to_le_bytes());

    for (index, triangle) in mesh.triangles().iter().enumerate() {
        write_record(&mut out, index, triangle)?;
    }

    debug!(bytes = out.len(), "Serialized binary STL");
    Ok(out)
}

fn write_record(out: &mut Vec<u8>, index: usize, triangle: &Triangle) -> Result<(), StlError> {
    let normal = triangle.normal().as_vec3();
    let [a, b, c] = *triangle.vertices();
    let (a, b, c) = (a.as_vec3(), b.as_vec3(), c.as_vec3());

    if ![normal, a, b, c].iter().all(|v| v.is_finite()) {
        return Err(StlError::NonFiniteVertex { index });
    }
    // Area test in f64 on the narrowed coordinates so tiny but distinct
    // vertices do not underflow.
    let (da, db, dc) = (a.as_dvec3(), b.as_dvec3(), c.as_dvec3());
    if (db - da).cross(dc - da).length_squared() <= 0.0 {
        return Err(StlError::DegenerateTriangle { index });
    }

    for v in [normal, a, b, c] {
        push_vec3(out, v);
    }
    out.extend_from_slice(&0u16.to_le_bytes());
    Ok(())
}

fn push_vec3(out: &mut Vec<u8>, v: Vec3) {
    out.extend_from_slice(&v.x.to_le_bytes());
    out.extend_from_slice(&v.y.to_le_bytes());
    out.extend_from_slice(&v.z.to_le_bytes());
}

//! # Cuboid Primitive
//!
//! Generates the 12 triangles of an axis-aligned box.

use crate::error::MeshError;
use crate::mesh::{Mesh, Triangle};
use glam::DVec3;

/// Appends an axis-aligned cuboid spanning `min`..`max` to `mesh`.
///
/// Adds 12 triangles (2 per face), wound counter-clockwise as seen from
/// outside so every normal points away from the box.
///
/// # Errors
///
/// Returns [`MeshError::DegenerateGeometry`] unless `min < max` on every
/// axis.
///
/// # Example
///
/// ```rust
/// use qr_mesh::{primitives::push_cuboid, Mesh};
/// use glam::DVec3;
///
/// let mut mesh = Mesh::new();
/// push_cuboid(&mut mesh, DVec3::ZERO, DVec3::splat(10.0)).unwrap();
/// assert_eq!(mesh.triangle_count(), 12);
/// ```
pub fn push_cuboid(mesh: &mut Mesh, min: DVec3, max: DVec3) -> Result<(), MeshError> {
    let extent = max - min;
    if !(extent.x > 0.0 && extent.y > 0.0 && extent.z > 0.0) {
        return Err(MeshError::degenerate(format!(
            "Cuboid extent must be positive: {min:?}..{max:?}"
        )));
    }

    // Bottom face (z = min.z)
    let v0 = DVec3::new(min.x, min.y, min.z); // left-front-bottom
    let v1 = DVec3::new(max.x, min.y, min.z); // right-front-bottom
    let v2 = DVec3::new(max.x, max.y, min.z); // right-back-bottom
    let v3 = DVec3::new(min.x, max.y, min.z); // left-back-bottom

    // Top face (z = max.z)
    let v4 = DVec3::new(min.x, min.y, max.z); // left-front-top
    let v5 = DVec3::new(max.x, min.y, max.z); // right-front-top
    let v6 = DVec3::new(max.x, max.y, max.z); // right-back-top
    let v7 = DVec3::new(min.x, max.y, max.z); // left-back-top

    let faces = [
        // Bottom, looking from below
        [v0, v2, v1],
        [v0, v3, v2],
        // Top, looking from above
        [v4, v5, v6],
        [v4, v6, v7],
        // Front (y = min.y)
        [v0, v1, v5],
        [v0, v5, v4],
        // Back (y = max.y)
        [v2, v3, v7],
        [v2, v7, v6],
        // Left (x = min.x)
        [v3, v0, v4],
        [v3, v4, v7],
        // Right (x = max.x)
        [v1, v2, v6],
        [v1, v6, v5],
    ];

    for [a, b, c] in faces {
        mesh.push(Triangle::new(a, b, c)?);
    }
    Ok(())
}

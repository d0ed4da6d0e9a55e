//! # Mesh Data Structure
//!
//! Triangle soup with per-triangle outward normals, the shape binary STL
//! stores directly.

use config::constants::{DEGENERATE_AREA_EPSILON, UNIT_NORMAL_TOLERANCE};
use glam::DVec3;

use crate::error::MeshError;

/// A triangle with its unit normal.
///
/// The normal is derived from the vertex order by the right-hand rule, so a
/// counter-clockwise winding seen from outside gives an outward normal.
///
/// # Example
///
/// ```rust
/// use qr_mesh::Triangle;
/// use glam::DVec3;
///
/// let tri = Triangle::new(DVec3::ZERO, DVec3::X, DVec3::Y).unwrap();
/// assert_eq!(tri.normal(), DVec3::Z);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    normal: DVec3,
    vertices: [DVec3; 3],
}

impl Triangle {
    /// Creates a triangle, computing its normal.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::DegenerateGeometry`] for zero-area or
    /// non-finite triangles.
    pub fn new(v0: DVec3, v1: DVec3, v2: DVec3) -> Result<Self, MeshError> {
        let cross = (v1 - v0).cross(v2 - v0);
        let len_sq = cross.length_squared();
        if !len_sq.is_finite() || len_sq <= DEGENERATE_AREA_EPSILON {
            return Err(MeshError::degenerate(format!(
                "zero-area triangle {v0:?}, {v1:?}, {v2:?}"
            )));
        }
        Ok(Self {
            normal: cross / len_sq.sqrt(),
            vertices: [v0, v1, v2],
        })
    }

    /// Unit outward normal.
    #[inline]
    pub fn normal(&self) -> DVec3 {
        self.normal
    }

    /// Vertices in winding order.
    #[inline]
    pub fn vertices(&self) -> &[DVec3; 3] {
        &self.vertices
    }

    /// Surface area.
    pub fn area(&self) -> f64 {
        let [v0, v1, v2] = self.vertices;
        0.5 * (v1 - v0).cross(v2 - v0).length()
    }

    /// Mean of the three vertices.
    pub fn centroid(&self) -> DVec3 {
        let [v0, v1, v2] = self.vertices;
        (v0 + v1 + v2) / 3.0
    }
}

/// An ordered list of self-contained triangles.
///
/// All geometry uses f64 internally. Narrowing to f32 only happens in the
/// STL writer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    triangles: Vec<Triangle>,
}

impl Mesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mesh with pre-allocated capacity.
    pub fn with_capacity(triangle_count: usize) -> Self {
        Self {
            triangles: Vec::with_capacity(triangle_count),
        }
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Returns true if the mesh has no triangles.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Appends a triangle.
    pub fn push(&mut self, triangle: Triangle) {
        self.triangles.push(triangle);
    }

    /// Returns a reference to the triangles.
    #[inline]
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        let mut vertices = self.triangles.iter().flat_map(|t| t.vertices);
        let Some(first) = vertices.next() else {
            return (DVec3::ZERO, DVec3::ZERO);
        };
        vertices.fold((first, first), |(min, max), v| (min.min(v), max.max(v)))
    }

    /// Validates the mesh for correctness.
    ///
    /// Checks:
    /// - Every normal has unit length
    /// - No degenerate triangles (zero area)
    /// - Every normal agrees with its winding
    ///
    /// Returns true if valid.
    pub fn validate(&self) -> bool {
        self.triangles.iter().all(|tri| {
            let [v0, v1, v2] = tri.vertices;
            let cross = (v1 - v0).cross(v2 - v0);
            (tri.normal.length() - 1.0).abs() < UNIT_NORMAL_TOLERANCE
                && cross.length_squared() > DEGENERATE_AREA_EPSILON
                && cross.dot(tri.normal) > 0.0
        })
    }
}

//! # STL Errors

use thiserror::Error;

/// Errors raised while serializing a mesh.
///
/// Every variant indicates a mesh that should never have been built; none of
/// them is reachable from validated geometry parameters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StlError {
    /// The triangle has zero area once narrowed to f32.
    #[error("Triangle {index} is degenerate at single precision")]
    DegenerateTriangle { index: usize },

    /// A normal or vertex component is NaN or infinite after narrowing.
    #[error("Triangle {index} has a non-finite coordinate")]
    NonFiniteVertex { index: usize },

    /// The triangle count does not fit the 32-bit count field.
    #[error("Mesh has {count} triangles, more than a binary STL can hold")]
    TooManyTriangles { count: usize },
}

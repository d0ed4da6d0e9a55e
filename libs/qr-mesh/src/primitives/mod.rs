//! # Primitives
//!
//! Mesh generators for the solids a QR plate is assembled from.

mod cuboid;

pub use cuboid::push_cuboid;

//! # QR Mesh
//!
//! Browser-safe mesh generation for 3D-printable QR plates.
//!
//! ## Architecture
//!
//! ```text
//! qr-encode (QrMatrix) → qr-mesh (Mesh) → stl-export (bytes)
//! ```
//!
//! The plate is a single cuboid; every dark module adds another cuboid on
//! top of it. Cuboids are independent triangle sets and are not merged.
//!
//! ## Usage
//!
//! ```rust
//! use qr_mesh::{build, GeometryParams};
//!
//! let matrix = qr_encode::encode("HELLO").unwrap();
//! let params = GeometryParams::new(1.0, 50.0, 2.0).unwrap();
//! let mesh = build(&matrix, &params).unwrap();
//! assert!(mesh.validate());
//! ```

pub mod builder;
pub mod error;
pub mod grid;
pub mod mesh;
pub mod params;
pub mod primitives;

pub use builder::{build, ModuleLayout};
pub use error::MeshError;
pub use grid::ModuleGrid;
pub use mesh::{Mesh, Triangle};
pub use params::GeometryParams;

//! # Config Crate
//!
//! Centralized configuration constants for the QR to STL pipeline.
//! Every magic number shared between the encoder, the mesh builder, the STL
//! writer and the front ends is defined here once.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{stl_buffer_len, QUIET_ZONE_MODULES, TRIANGLES_PER_CUBOID};
//!
//! // A version 1 symbol (21 modules) plus the quiet zone on both sides.
//! let grid = 21 + 2 * QUIET_ZONE_MODULES;
//! assert_eq!(grid, 29);
//!
//! // A plate with no raised modules is a single cuboid.
//! assert_eq!(stl_buffer_len(TRIANGLES_PER_CUBOID), 84 + 50 * 12);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Browser-Safe**: No platform-specific values
//! - **Standard Compatible**: QR and STL values follow the published formats

pub mod constants;

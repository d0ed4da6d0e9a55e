//! # Plate Builder
//!
//! Extrudes a module grid into a plate plus one raised cuboid per dark
//! module.
//!
//! The quiet zone is part of the plate: a symbol of side `S` is laid out on
//! a grid of side `S + 2 * QUIET_ZONE_MODULES` that spans the whole plate.
//! Symbol row 0 lands at the largest y so the code reads correctly from
//! above.

use config::constants::{QUIET_ZONE_MODULES, TRIANGLES_PER_CUBOID};
use glam::{DVec2, DVec3};
use tracing::{debug, instrument};

use crate::error::MeshError;
use crate::grid::ModuleGrid;
use crate::mesh::Mesh;
use crate::params::GeometryParams;
use crate::primitives::push_cuboid;

/// Placement of symbol modules on the plate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModuleLayout {
    grid_size: usize,
    pitch: f64,
}

impl ModuleLayout {
    /// Lays a symbol of side `symbol_size` over a plate of side `base_size`.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::InvalidParameter`] for `base_size` when the
    /// module pitch would vanish in single precision.
    pub fn new(symbol_size: usize, base_size: f64) -> Result<Self, MeshError> {
        let grid_size = symbol_size + 2 * QUIET_ZONE_MODULES;
        let pitch = base_size / grid_size as f64;
        if (pitch as f32) < f32::MIN_POSITIVE {
            return Err(MeshError::invalid_parameter(
                "base_size",
                format!("{base_size} is too small for a {grid_size}x{grid_size} module grid"),
            ));
        }
        Ok(Self { grid_size, pitch })
    }

    /// Side of the layout grid in modules, quiet zone included.
    #[inline]
    pub fn grid_size(&self) -> usize {
        self.grid_size
    }

    /// Edge length of one module.
    #[inline]
    pub fn pitch(&self) -> f64 {
        self.pitch
    }

    /// Lower-left and upper-right plate corners of symbol cell (row, col).
    ///
    /// Corners are computed from integer grid lines, so neighbouring cells
    /// share edges exactly.
    pub fn cell_bounds(&self, row: usize, col: usize) -> (DVec2, DVec2) {
        let gx = col + QUIET_ZONE_MODULES;
        let gy = self.grid_size - 1 - (row + QUIET_ZONE_MODULES);
        let min = DVec2::new(gx as f64 * self.pitch, gy as f64 * self.pitch);
        let max = DVec2::new((gx + 1) as f64 * self.pitch, (gy + 1) as f64 * self.pitch);
        (min, max)
    }
}

/// Builds the plate mesh for `grid`.
///
/// Emits the base plate first, then one cuboid per dark module in row-major
/// order, for `12 * (1 + dark modules)` triangles.
///
/// # Errors
///
/// - [`MeshError::InvalidParameter`] when the layout cannot be resolved in
///   single precision
/// - [`MeshError::DegenerateGeometry`] if a cuboid collapses, which valid
///   parameters rule out
///
/// # Example
///
/// ```rust
/// use qr_mesh::{build, GeometryParams};
///
/// let matrix = qr_encode::encode("A").unwrap();
/// let params = GeometryParams::new(1.0, 50.0, 2.0).unwrap();
/// let mesh = build(&matrix, &params).unwrap();
/// assert_eq!(mesh.triangle_count(), 12 * (1 + 226));
/// ```
#[instrument(level = "debug", skip_all, fields(symbol_size = grid.size()))]
pub fn build<G>(grid: &G, params: &GeometryParams) -> Result<Mesh, MeshError>
where
    G: ModuleGrid + ?Sized,
{
    let layout = ModuleLayout::new(grid.size(), params.base_size())?;

    let bottom = params.base_height();
    let top = params.top_height();
    if (top as f32).is_infinite() || (top as f32) <= (bottom as f32) {
        return Err(MeshError::invalid_parameter(
            "pixel_size",
            format!(
                "{} cannot be resolved above base_height {bottom} in single precision",
                params.pixel_size()
            ),
        ));
    }

    let dark = grid.dark_module_count();
    let mut mesh = Mesh::with_capacity(TRIANGLES_PER_CUBOID * (1 + dark));

    let side = params.base_size();
    push_cuboid(&mut mesh, DVec3::ZERO, DVec3::new(side, side, bottom))?;

    let size = grid.size();
    for row in 0..size {
        for col in 0..size {
            if grid.is_dark(row, col) {
                let (min, max) = layout.cell_bounds(row, col);
                push_cuboid(&mut mesh, min.extend(bottom), max.extend(top))?;
            }
        }
    }

    debug!(
        dark_modules = dark,
        triangles = mesh.triangle_count(),
        pitch = layout.pitch(),
        "Built plate mesh"
    );
    Ok(mesh)
}

//! # Module Grids
//!
//! The builder only needs to ask "is this cell dark?", so it works over any
//! square boolean grid: encoded symbols and hand-written test patterns alike.

use qr_encode::QrMatrix;

/// A square grid of light/dark modules addressed by (row, column), row 0 at
/// the top.
pub trait ModuleGrid {
    /// Side length in modules.
    fn size(&self) -> usize;

    /// Whether the module at (row, col) is dark. Positions outside the grid
    /// are light.
    fn is_dark(&self, row: usize, col: usize) -> bool;

    /// Number of dark modules.
    fn dark_module_count(&self) -> usize {
        let size = self.size();
        (0..size)
            .flat_map(|row| (0..size).map(move |col| (row, col)))
            .filter(|&(row, col)| self.is_dark(row, col))
            .count()
    }
}

impl ModuleGrid for QrMatrix {
    fn size(&self) -> usize {
        QrMatrix::size(self)
    }

    fn is_dark(&self, row: usize, col: usize) -> bool {
        QrMatrix::is_dark(self, row, col)
    }

    fn dark_module_count(&self) -> usize {
        QrMatrix::dark_module_count(self)
    }
}

/// Rows of booleans. The side length is the row count; short rows are
/// padded with light modules.
impl ModuleGrid for [Vec<bool>] {
    fn size(&self) -> usize {
        self.len()
    }

    fn is_dark(&self, row: usize, col: usize) -> bool {
        col < self.len()
            && self
                .get(row)
                .and_then(|cells| cells.get(col))
                .copied()
                .unwrap_or(false)
    }
}

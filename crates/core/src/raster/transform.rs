//! Grid anchoring: cell/world coordinate conversion

use serde::{Deserialize, Serialize};

/// North-up, square-cell anchor for an occupancy grid.
///
/// Converts between cell indices (row, col) and planar coordinates (x, y).
/// Row 0 is the northernmost row, matching the usual raster convention:
///
/// ```text
/// x = origin_x + col * cell_size
/// y = origin_y - row * cell_size
/// ```
///
/// The cell size is an arbitrary positive float: box sizes are halved
/// repeatedly and quickly become fractional.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridTransform {
    /// X coordinate of the upper-left corner
    pub origin_x: f64,
    /// Y coordinate of the upper-left corner
    pub origin_y: f64,
    /// Cell side length
    pub cell_size: f64,
}

impl GridTransform {
    /// Create a transform anchored at the given upper-left corner
    pub fn new(origin_x: f64, origin_y: f64, cell_size: f64) -> Self {
        Self {
            origin_x,
            origin_y,
            cell_size,
        }
    }

    /// Coordinates of the center of cell (row, col)
    pub fn cell_to_geo(&self, row: usize, col: usize) -> (f64, f64) {
        let x = self.origin_x + (col as f64 + 0.5) * self.cell_size;
        let y = self.origin_y - (row as f64 + 0.5) * self.cell_size;
        (x, y)
    }

    /// Fractional cell indices (row, col) for a coordinate pair.
    ///
    /// Use `.floor()` for integer indices; values may be negative or exceed
    /// the grid dimensions for coordinates outside the extent.
    pub fn geo_to_cell(&self, x: f64, y: f64) -> (f64, f64) {
        let col = (x - self.origin_x) / self.cell_size;
        let row = (self.origin_y - y) / self.cell_size;
        (row, col)
    }

    /// Bounding box (min_x, min_y, max_x, max_y) for a grid of the given shape
    pub fn bounds(&self, rows: usize, cols: usize) -> (f64, f64, f64, f64) {
        (
            self.origin_x,
            self.origin_y - rows as f64 * self.cell_size,
            self.origin_x + cols as f64 * self.cell_size,
            self.origin_y,
        )
    }
}

impl Default for GridTransform {
    fn default() -> Self {
        Self::new(0.0, 0.0, 1.0)
    }
}

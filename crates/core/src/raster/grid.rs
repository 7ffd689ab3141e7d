//! Occupancy grid: a rasterized feature pattern

use crate::error::{Error, Result};
use crate::raster::GridTransform;
use ndarray::Array2;

/// A rasterized pattern at one box size.
///
/// Cells hold the attribute value assigned by the rasterizer ("most frequent
/// value" for points, "maximum covered length" for polylines); `NaN` marks
/// empty cells. The analysis pipelines consume the grid through two queries:
/// [`occupied_count`](Self::occupied_count) and
/// [`occupied_centers`](Self::occupied_centers).
#[derive(Debug, Clone)]
pub struct OccupancyGrid {
    data: Array2<f64>,
    transform: GridTransform,
}

impl OccupancyGrid {
    /// Create an empty grid (all cells unoccupied)
    pub fn empty(rows: usize, cols: usize, transform: GridTransform) -> Self {
        Self {
            data: Array2::from_elem((rows, cols), f64::NAN),
            transform,
        }
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.data.nrows()
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.data.ncols()
    }

    /// Dimensions as (rows, cols)
    pub fn shape(&self) -> (usize, usize) {
        self.data.dim()
    }

    /// Cell side length
    pub fn cell_size(&self) -> f64 {
        self.transform.cell_size
    }

    /// The grid's anchoring transform
    pub fn transform(&self) -> &GridTransform {
        &self.transform
    }

    /// Geographic bounds (min_x, min_y, max_x, max_y)
    pub fn bounds(&self) -> (f64, f64, f64, f64) {
        self.transform.bounds(self.rows(), self.cols())
    }

    /// Cell value at (row, col); `None` for unoccupied cells
    pub fn get(&self, row: usize, col: usize) -> Result<Option<f64>> {
        let value = self
            .data
            .get((row, col))
            .copied()
            .ok_or(Error::IndexOutOfBounds {
                row,
                col,
                rows: self.rows(),
                cols: self.cols(),
            })?;
        Ok(if value.is_nan() { None } else { Some(value) })
    }

    /// Label cell (row, col) with an attribute value
    pub fn set(&mut self, row: usize, col: usize, value: f64) -> Result<()> {
        if row >= self.rows() || col >= self.cols() {
            return Err(Error::IndexOutOfBounds {
                row,
                col,
                rows: self.rows(),
                cols: self.cols(),
            });
        }
        self.data[(row, col)] = value;
        Ok(())
    }

    /// Whether cell (row, col) is occupied
    pub fn is_occupied(&self, row: usize, col: usize) -> Result<bool> {
        Ok(self.get(row, col)?.is_some())
    }

    /// Number of occupied cells, the n(δ) of box counting.
    ///
    /// A cell holding several features still counts once; aggregation into a
    /// single label is the rasterizer's business.
    pub fn occupied_count(&self) -> u64 {
        self.data.iter().filter(|v| !v.is_nan()).count() as u64
    }

    /// Center coordinates of every occupied cell, in row-major order.
    ///
    /// This is the grid-as-points representation the moving box counter works
    /// on: it decouples window counting from raster alignment.
    pub fn occupied_centers(&self) -> Vec<(f64, f64)> {
        self.data
            .indexed_iter()
            .filter(|(_, v)| !v.is_nan())
            .map(|((row, col), _)| self.transform.cell_to_geo(row, col))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn grid_3x3() -> OccupancyGrid {
        OccupancyGrid::empty(3, 3, GridTransform::new(0.0, 30.0, 10.0))
    }

    #[test]
    fn test_empty_grid() {
        let grid = grid_3x3();
        assert_eq!(grid.shape(), (3, 3));
        assert_eq!(grid.occupied_count(), 0);
        assert!(grid.occupied_centers().is_empty());
    }

    #[test]
    fn test_set_and_count() {
        let mut grid = grid_3x3();
        grid.set(0, 0, 7.0).unwrap();
        grid.set(2, 1, 3.0).unwrap();
        assert_eq!(grid.occupied_count(), 2);
        assert_eq!(grid.get(0, 0).unwrap(), Some(7.0));
        assert_eq!(grid.get(1, 1).unwrap(), None);
    }

    #[test]
    fn test_occupied_centers() {
        let mut grid = grid_3x3();
        grid.set(0, 0, 1.0).unwrap();
        grid.set(2, 2, 1.0).unwrap();

        let centers = grid.occupied_centers();
        assert_eq!(centers.len(), 2);
        // Row 0 is the northernmost row
        assert_relative_eq!(centers[0].0, 5.0);
        assert_relative_eq!(centers[0].1, 25.0);
        assert_relative_eq!(centers[1].0, 25.0);
        assert_relative_eq!(centers[1].1, 5.0);
    }

    #[test]
    fn test_out_of_bounds() {
        let mut grid = grid_3x3();
        assert!(grid.get(3, 0).is_err());
        assert!(grid.set(0, 3, 1.0).is_err());
    }
}

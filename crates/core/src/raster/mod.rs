//! Occupancy raster structures

mod grid;
mod transform;

pub use grid::OccupancyGrid;
pub use transform::GridTransform;

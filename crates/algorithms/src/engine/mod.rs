//! Geoprocessing engine seam
//!
//! The analysis pipelines consume exactly two geoprocessing primitives:
//! rasterize a pattern into an occupancy grid at a given cell size, and
//! buffer points by a radius with overlaps dissolved. Both are traits so any
//! backend honoring the contracts can stand in; [`NativeEngine`] is the
//! built-in computational-geometry implementation.

mod buffer;
mod rasterize;

use fractus_core::{FeaturePattern, OccupancyGrid, Result, StudyArea};
use geo::Contains;
use geo_types::{MultiPolygon, Point};
use serde::{Deserialize, Serialize};

/// Converts a feature pattern into an occupancy grid.
///
/// Contract: the grid covers the study-area extent at the requested cell
/// size; point layers aggregate by most frequent attribute value per cell,
/// polyline layers by maximum covered length per cell. Features outside the
/// extent are ignored. Fractional cell sizes must be supported.
pub trait Rasterizer {
    fn rasterize(
        &self,
        pattern: &FeaturePattern,
        cell_size: f64,
        extent: &StudyArea,
    ) -> Result<OccupancyGrid>;
}

/// Builds the union of radius-r disks around a point set.
pub trait BufferEngine {
    fn buffer_union(&self, points: &[Point<f64>], radius: f64) -> Result<BufferRegion>;
}

/// A dissolved buffer region: the (possibly multi-part) union polygon of all
/// per-point disks at one radius, plus its planar area.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BufferRegion {
    /// Dissolved buffer geometry
    pub geometry: MultiPolygon<f64>,
    /// Planar area of the region, in square map units
    pub area: f64,
    /// Radius the region was built with
    pub radius: f64,
}

impl BufferRegion {
    /// Whether the study area is completely contained in the region:
    /// the coverage termination test of the radial-density estimator.
    pub fn covers(&self, study_area: &StudyArea) -> bool {
        self.geometry.contains(&study_area.to_polygon())
    }
}

/// Built-in engine: binning rasterizer plus polygon-approximation buffers.
#[derive(Debug, Clone)]
pub struct NativeEngine {
    /// Number of segments approximating each buffer circle
    pub circle_segments: usize,
}

impl Default for NativeEngine {
    fn default() -> Self {
        Self {
            circle_segments: 64,
        }
    }
}

impl NativeEngine {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Rasterizer for NativeEngine {
    fn rasterize(
        &self,
        pattern: &FeaturePattern,
        cell_size: f64,
        extent: &StudyArea,
    ) -> Result<OccupancyGrid> {
        rasterize::rasterize_pattern(pattern, cell_size, extent)
    }
}

impl BufferEngine for NativeEngine {
    fn buffer_union(&self, points: &[Point<f64>], radius: f64) -> Result<BufferRegion> {
        buffer::buffer_union_points(points, radius, self.circle_segments)
    }
}

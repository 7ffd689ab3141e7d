//! Study area extent

use crate::error::{Error, Result};
use geo_types::{LineString, Polygon};
use serde::{Deserialize, Serialize};

/// Axis-aligned analysis extent in planar coordinates.
///
/// The study area bounds both the rasterization extent of the box-counting
/// pipelines and the coverage termination test of the radial-density
/// estimator. Immutable once constructed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StudyArea {
    min_x: f64,
    min_y: f64,
    max_x: f64,
    max_y: f64,
}

impl StudyArea {
    /// Create a study area from corner coordinates.
    ///
    /// # Errors
    /// Returns [`Error::InvalidExtent`] if the extent is degenerate
    /// (non-positive width or height, or any non-finite coordinate).
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Result<Self> {
        let finite = [min_x, min_y, max_x, max_y].iter().all(|v| v.is_finite());
        if !finite || max_x <= min_x || max_y <= min_y {
            return Err(Error::InvalidExtent {
                min_x,
                min_y,
                max_x,
                max_y,
            });
        }
        Ok(Self {
            min_x,
            min_y,
            max_x,
            max_y,
        })
    }

    /// Western edge
    pub fn min_x(&self) -> f64 {
        self.min_x
    }

    /// Southern edge
    pub fn min_y(&self) -> f64 {
        self.min_y
    }

    /// Eastern edge
    pub fn max_x(&self) -> f64 {
        self.max_x
    }

    /// Northern edge
    pub fn max_y(&self) -> f64 {
        self.max_y
    }

    /// Extent width (east-west)
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Extent height (north-south)
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Planar area of the extent
    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    /// Center coordinates
    pub fn center(&self) -> (f64, f64) {
        (
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }

    /// Whether a point lies within the extent (boundary inclusive)
    pub fn contains_point(&self, x: f64, y: f64) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }

    /// The extent as a closed polygon ring
    pub fn to_polygon(&self) -> Polygon<f64> {
        Polygon::new(
            LineString::from(vec![
                (self.min_x, self.min_y),
                (self.max_x, self.min_y),
                (self.max_x, self.max_y),
                (self.min_x, self.max_y),
                (self.min_x, self.min_y),
            ]),
            vec![],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_study_area_basic() {
        let area = StudyArea::new(0.0, 0.0, 100.0, 50.0).unwrap();
        assert_eq!(area.width(), 100.0);
        assert_eq!(area.height(), 50.0);
        assert_eq!(area.area(), 5000.0);
        assert_eq!(area.center(), (50.0, 25.0));
    }

    #[test]
    fn test_study_area_contains() {
        let area = StudyArea::new(0.0, 0.0, 10.0, 10.0).unwrap();
        assert!(area.contains_point(5.0, 5.0));
        assert!(area.contains_point(0.0, 10.0)); // boundary
        assert!(!area.contains_point(10.1, 5.0));
    }

    #[test]
    fn test_study_area_rejects_degenerate() {
        assert!(StudyArea::new(10.0, 0.0, 0.0, 10.0).is_err());
        assert!(StudyArea::new(0.0, 0.0, 10.0, 0.0).is_err());
        assert!(StudyArea::new(0.0, f64::NAN, 10.0, 10.0).is_err());
    }

    #[test]
    fn test_study_area_polygon_ring() {
        let area = StudyArea::new(1.0, 2.0, 5.0, 8.0).unwrap();
        let poly = area.to_polygon();
        assert_eq!(poly.exterior().0.len(), 5); // closed ring
    }
}

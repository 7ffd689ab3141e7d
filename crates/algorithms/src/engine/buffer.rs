//! Native point buffering with dissolve
//!
//! Buffers every point by a radius as an n-gon circle approximation and
//! dissolves the overlapping disks into one (possibly multi-part) region.

use super::BufferRegion;
use fractus_core::{Error, Result};
use geo::{unary_union, Area};
use geo_types::{LineString, MultiPolygon, Point, Polygon};
use std::f64::consts::PI;

/// Build the dissolved union of radius-r disks around the given points.
///
/// An empty point set yields an empty region with zero area.
pub(crate) fn buffer_union_points(
    points: &[Point<f64>],
    radius: f64,
    segments: usize,
) -> Result<BufferRegion> {
    if !(radius > 0.0) || !radius.is_finite() {
        return Err(Error::invalid_parameter(
            "radius",
            radius,
            "must be a positive finite number",
        ));
    }

    if points.is_empty() {
        return Ok(BufferRegion {
            geometry: MultiPolygon::new(vec![]),
            area: 0.0,
            radius,
        });
    }

    let disks: Vec<Polygon<f64>> = points
        .iter()
        .map(|p| circle(p, radius, segments))
        .collect();

    let geometry = unary_union(disks.iter());
    let area = geometry.unsigned_area();

    Ok(BufferRegion {
        geometry,
        area,
        radius,
    })
}

/// A circle around `center` approximated as a closed n-gon ring
fn circle(center: &Point<f64>, radius: f64, segments: usize) -> Polygon<f64> {
    let n = segments.max(4);
    let (cx, cy) = (center.x(), center.y());

    let mut coords = Vec::with_capacity(n + 1);
    for i in 0..n {
        let angle = 2.0 * PI * i as f64 / n as f64;
        coords.push((cx + radius * angle.cos(), cy + radius * angle.sin()));
    }
    coords.push(coords[0]);

    Polygon::new(LineString::from(coords), vec![])
}

#[cfg(test)]
mod tests {
    use super::*;
    use fractus_core::StudyArea;

    #[test]
    fn test_single_disk_area() {
        let region =
            buffer_union_points(&[Point::new(0.0, 0.0)], 10.0, 128).unwrap();

        // Inscribed polygon area approaches π r²
        let expected = PI * 100.0;
        let error = (region.area - expected).abs() / expected;
        assert!(
            error < 0.01,
            "disk area error {:.2}% (expected {:.1}, got {:.1})",
            error * 100.0,
            expected,
            region.area
        );
    }

    #[test]
    fn test_disjoint_disks_sum_areas() {
        let region = buffer_union_points(
            &[Point::new(0.0, 0.0), Point::new(1000.0, 0.0)],
            10.0,
            64,
        )
        .unwrap();

        assert_eq!(region.geometry.0.len(), 2);
        let one_disk = buffer_union_points(&[Point::new(0.0, 0.0)], 10.0, 64)
            .unwrap()
            .area;
        assert!((region.area - 2.0 * one_disk).abs() < 1e-6);
    }

    #[test]
    fn test_overlapping_disks_dissolve() {
        let region = buffer_union_points(
            &[Point::new(0.0, 0.0), Point::new(5.0, 0.0)],
            10.0,
            64,
        )
        .unwrap();

        // One merged part, smaller than two full disks
        assert_eq!(region.geometry.0.len(), 1);
        let one_disk = buffer_union_points(&[Point::new(0.0, 0.0)], 10.0, 64)
            .unwrap()
            .area;
        assert!(region.area < 2.0 * one_disk);
        assert!(region.area > one_disk);
    }

    #[test]
    fn test_coverage_test() {
        let area = StudyArea::new(0.0, 0.0, 10.0, 10.0).unwrap();

        let small = buffer_union_points(&[Point::new(5.0, 5.0)], 2.0, 64).unwrap();
        assert!(!small.covers(&area));

        // Corner distance is sqrt(50) ≈ 7.07; radius 10 covers comfortably
        let big = buffer_union_points(&[Point::new(5.0, 5.0)], 10.0, 64).unwrap();
        assert!(big.covers(&area));
    }

    #[test]
    fn test_empty_points_empty_region() {
        let region = buffer_union_points(&[], 10.0, 64).unwrap();
        assert_eq!(region.area, 0.0);
        assert!(region.geometry.0.is_empty());
    }

    #[test]
    fn test_rejects_nonpositive_radius() {
        assert!(buffer_union_points(&[Point::new(0.0, 0.0)], 0.0, 64).is_err());
        assert!(buffer_union_points(&[Point::new(0.0, 0.0)], -1.0, 64).is_err());
    }
}

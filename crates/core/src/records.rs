//! Analysis result records

use serde::{Deserialize, Serialize};

/// One `(δ, n(δ))` measurement of a box-counting run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaleEntry {
    /// Box size
    pub delta: f64,
    /// Number of occupied boxes of that size
    pub count: u64,
}

/// Ordered `(δ, n(δ))` pairs, one per requested iteration.
///
/// Box sizes strictly halve from the first entry; counts come straight from
/// the rasterizer and are not post-processed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScaleSeries {
    entries: Vec<ScaleEntry>,
}

impl ScaleSeries {
    /// Empty series
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a measurement
    pub fn push(&mut self, delta: f64, count: u64) {
        self.entries.push(ScaleEntry { delta, count });
    }

    /// Number of measurements
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the series holds no measurements
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The measurements in iteration order
    pub fn entries(&self) -> &[ScaleEntry] {
        &self.entries
    }

    /// Iterate over the measurements
    pub fn iter(&self) -> impl Iterator<Item = &ScaleEntry> {
        self.entries.iter()
    }
}

/// One moving box-counting measurement: the number of occupied cells of one
/// box size found inside one sampling window. Immutable once written.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoxSample {
    /// Sampling window identifier (row-major scan order, starting at 1)
    pub window_id: u64,
    /// Center of the sampling window
    pub center: (f64, f64),
    /// Box size sampled
    pub box_size: f64,
    /// Occupied-cell count inside the window. For the largest box size this
    /// is clamped to 0/1 (binary presence).
    pub count: u64,
}

/// One radius step of the radial-density estimator
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RadialDensityRecord {
    /// Buffer radius in map units (meters)
    pub radius: f64,
    /// Buffer radius in kilometers
    pub radius_km: f64,
    /// Area of the dissolved buffer region, in square map units
    pub area: f64,
    /// Number of points in the pattern
    pub point_count: usize,
    /// Point density in points per square kilometer
    pub density: f64,
}

impl RadialDensityRecord {
    /// Build a record, deriving `radius_km` and `density`.
    ///
    /// Density is `point_count / area × 10^6` (points per km² when the area
    /// is in m²). A zero area yields NaN rather than a division fault.
    pub fn new(radius: f64, area: f64, point_count: usize) -> Self {
        let density = if area > 0.0 {
            point_count as f64 / area * 1e6
        } else {
            f64::NAN
        };
        Self {
            radius,
            radius_km: radius / 1000.0,
            area,
            point_count,
            density,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_scale_series_order() {
        let mut series = ScaleSeries::new();
        series.push(100.0, 1);
        series.push(50.0, 2);
        series.push(25.0, 4);

        assert_eq!(series.len(), 3);
        assert_eq!(series.entries()[0].delta, 100.0);
        assert_eq!(series.entries()[2].count, 4);
    }

    #[test]
    fn test_radial_density_record() {
        // 12 points over 4 km²
        let record = RadialDensityRecord::new(2000.0, 4_000_000.0, 12);
        assert_relative_eq!(record.radius_km, 2.0);
        assert_relative_eq!(record.density, 3.0);
    }

    #[test]
    fn test_radial_density_zero_area_is_nan() {
        let record = RadialDensityRecord::new(100.0, 0.0, 0);
        assert!(record.density.is_nan());
    }
}

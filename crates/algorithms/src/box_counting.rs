//! Box-counting fractal dimension estimator
//!
//! Tiles the study area with square boxes of halving size and counts, per
//! size, how many boxes contain at least one feature. The slope of
//! log n(δ) against log δ estimates the fractal dimension of the pattern.
//!
//! Reference:
//! Mandelbrot, B. (1983). The Fractal Geometry of Nature. W. H. Freeman.

use crate::engine::Rasterizer;
use fractus_core::{Error, FeaturePattern, OccupancyGrid, Result, ScaleSeries, StudyArea};

/// Parameters for box counting
#[derive(Debug, Clone)]
pub struct BoxCountParams {
    /// Largest box size δ0; halved at each iteration
    pub initial_delta: f64,
    /// Number of box sizes to sample (≥ 1)
    pub iterations: usize,
}

impl Default for BoxCountParams {
    fn default() -> Self {
        Self {
            initial_delta: 1000.0,
            iterations: 4,
        }
    }
}

/// Output of a box-counting run
#[derive(Debug, Clone)]
pub struct BoxCountResult {
    /// `(δ, n(δ))` pairs in iteration order, largest box first
    pub series: ScaleSeries,
    /// The rasterized grid for each scale, aligned with the series
    pub grids: Vec<OccupancyGrid>,
}

/// Run box counting over a pattern.
///
/// For `step = 0 .. iterations`, the pattern is rasterized at
/// `δ = δ0 / 2^step` over the study-area extent and the occupied cells are
/// counted. Halving is exact; δ turns fractional without rounding.
///
/// An empty pattern is legal and yields a zero count at every scale.
///
/// # Errors
/// [`Error::InvalidParameter`] for `iterations < 1` or a non-positive
/// `initial_delta`; rasterizer errors are propagated.
pub fn box_count<R: Rasterizer>(
    engine: &R,
    pattern: &FeaturePattern,
    study_area: &StudyArea,
    params: &BoxCountParams,
) -> Result<BoxCountResult> {
    if params.iterations < 1 {
        return Err(Error::invalid_parameter(
            "iterations",
            params.iterations,
            "at least one iteration is required",
        ));
    }
    if !(params.initial_delta > 0.0) || !params.initial_delta.is_finite() {
        return Err(Error::invalid_parameter(
            "initial_delta",
            params.initial_delta,
            "must be a positive finite number",
        ));
    }

    let mut series = ScaleSeries::new();
    let mut grids = Vec::with_capacity(params.iterations);
    let mut delta = params.initial_delta;

    for step in 0..params.iterations {
        let grid = engine.rasterize(pattern, delta, study_area)?;
        let count = grid.occupied_count();
        tracing::debug!(step, delta, count, "box counting scale done");

        series.push(delta, count);
        grids.push(grid);
        delta /= 2.0;
    }

    Ok(BoxCountResult { series, grids })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::NativeEngine;
    use geo_types::Point;

    fn area_100() -> StudyArea {
        StudyArea::new(0.0, 0.0, 100.0, 100.0).unwrap()
    }

    fn corner_points() -> FeaturePattern {
        FeaturePattern::from_points(vec![
            (Point::new(5.0, 5.0), 1.0),
            (Point::new(95.0, 5.0), 1.0),
            (Point::new(5.0, 95.0), 1.0),
            (Point::new(95.0, 95.0), 1.0),
        ])
    }

    #[test]
    fn test_series_length_and_deltas() {
        let result = box_count(
            &NativeEngine::new(),
            &corner_points(),
            &area_100(),
            &BoxCountParams {
                initial_delta: 100.0,
                iterations: 3,
            },
        )
        .unwrap();

        assert_eq!(result.series.len(), 3);
        assert_eq!(result.grids.len(), 3);
        let deltas: Vec<f64> = result.series.iter().map(|e| e.delta).collect();
        assert_eq!(deltas, vec![100.0, 50.0, 25.0]);
    }

    #[test]
    fn test_counts_non_decreasing_as_delta_shrinks() {
        let result = box_count(
            &NativeEngine::new(),
            &corner_points(),
            &area_100(),
            &BoxCountParams {
                initial_delta: 100.0,
                iterations: 4,
            },
        )
        .unwrap();

        let counts: Vec<u64> = result.series.iter().map(|e| e.count).collect();
        assert_eq!(counts[0], 1); // one 100 m box holds all four points
        for pair in counts.windows(2) {
            assert!(pair[1] >= pair[0], "counts must not drop: {counts:?}");
        }
    }

    #[test]
    fn test_well_separated_corners_split() {
        let result = box_count(
            &NativeEngine::new(),
            &corner_points(),
            &area_100(),
            &BoxCountParams {
                initial_delta: 100.0,
                iterations: 2,
            },
        )
        .unwrap();

        // At δ = 50 every corner point sits in its own quadrant
        assert_eq!(result.series.entries()[1].count, 4);
    }

    #[test]
    fn test_fractional_deltas() {
        let result = box_count(
            &NativeEngine::new(),
            &corner_points(),
            &area_100(),
            &BoxCountParams {
                initial_delta: 100.0,
                iterations: 5,
            },
        )
        .unwrap();

        let deltas: Vec<f64> = result.series.iter().map(|e| e.delta).collect();
        assert_eq!(deltas, vec![100.0, 50.0, 25.0, 12.5, 6.25]);
    }

    #[test]
    fn test_empty_pattern_zero_counts() {
        let result = box_count(
            &NativeEngine::new(),
            &FeaturePattern::from_points(vec![]),
            &area_100(),
            &BoxCountParams {
                initial_delta: 100.0,
                iterations: 3,
            },
        )
        .unwrap();

        assert!(result.series.iter().all(|e| e.count == 0));
    }

    #[test]
    fn test_rejects_bad_params() {
        let engine = NativeEngine::new();
        let pattern = corner_points();
        let area = area_100();

        let zero_iter = box_count(
            &engine,
            &pattern,
            &area,
            &BoxCountParams {
                initial_delta: 100.0,
                iterations: 0,
            },
        );
        assert!(matches!(zero_iter, Err(Error::InvalidParameter { .. })));

        let bad_delta = box_count(
            &engine,
            &pattern,
            &area,
            &BoxCountParams {
                initial_delta: 0.0,
                iterations: 3,
            },
        );
        assert!(matches!(bad_delta, Err(Error::InvalidParameter { .. })));
    }
}

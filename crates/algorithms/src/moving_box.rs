//! Moving box-counting over a grid of sampling windows
//!
//! Lays a fixed grid of overlapping square windows over the study area and
//! box-counts every window at several box sizes. Each window yields one
//! sample per size, so local scaling exponents can be mapped instead of a
//! single global dimension.
//!
//! The pattern is rasterized once per size and each grid is reduced to the
//! center points of its occupied cells; window counting is then plain point
//! containment, decoupled from raster alignment.

use crate::engine::Rasterizer;
use fractus_core::{BoxSample, Error, FeaturePattern, Result, StudyArea};
use rayon::prelude::*;

/// Relative tolerance for the dislocation stride check
const STRIDE_TOLERANCE: f64 = 1e-9;

/// Parameters for moving box counting
#[derive(Debug, Clone)]
pub struct MovingBoxParams {
    /// Largest box size B; also the fixed side of every sampling window
    pub max_box: f64,
    /// Number of box sizes to sample per window (≥ 1)
    pub iterations: usize,
    /// Stride between consecutive window origins. Must equal `max_box` or
    /// `max_box / 2`: any other stride lets windows sample partial pixels
    /// of the coarsest raster and is rejected.
    pub dislocation: f64,
}

impl Default for MovingBoxParams {
    fn default() -> Self {
        Self {
            max_box: 1000.0,
            iterations: 2,
            dislocation: 500.0,
        }
    }
}

/// Output of a moving box-counting run
#[derive(Debug, Clone)]
pub struct MovingBoxResult {
    /// One sample per (window, box size), windows in scan order with the
    /// largest box first within each window
    pub samples: Vec<BoxSample>,
    /// Number of sampling windows generated
    pub window_count: u64,
}

/// A sampling window, anchored at its north-west corner
#[derive(Debug, Clone, Copy)]
struct Window {
    id: u64,
    min_x: f64,
    max_y: f64,
}

/// Run moving box counting over a pattern.
///
/// Windows start at the study area's north-west corner and stride east, then
/// south, as long as they fit inside the extent; IDs increment from 1 in scan
/// order. Every window is counted against each box size
/// `B, B/2, …, B/2^(k-1)`, always over the window's fixed `B × B` extent.
///
/// The coarsest size reuses the second size's point set and reports only
/// binary presence (0 or 1). A window striding by `B/2` can clip half pixels
/// of the coarsest raster, which would miscount; this substitution is the
/// method's intended correction and is kept as-is.
///
/// # Errors
/// [`Error::InvalidParameter`] for `iterations < 1`, a non-positive
/// `max_box`, or a dislocation stride other than `B` or `B/2`.
pub fn moving_box_count<R: Rasterizer>(
    engine: &R,
    pattern: &FeaturePattern,
    study_area: &StudyArea,
    params: &MovingBoxParams,
) -> Result<MovingBoxResult> {
    validate(params)?;

    let b = params.max_box;
    let stride = params.dislocation;

    // One grid per size, reduced to occupied-cell centers
    let mut point_sets = Vec::with_capacity(params.iterations);
    let mut sizes = Vec::with_capacity(params.iterations);
    let mut delta = b;
    for _ in 0..params.iterations {
        let grid = engine.rasterize(pattern, delta, study_area)?;
        tracing::debug!(
            delta,
            occupied = grid.occupied_count(),
            "moving box scale rasterized"
        );
        point_sets.push(grid.occupied_centers());
        sizes.push(delta);
        delta /= 2.0;
    }

    // Coarsest-scale correction: count the largest box against the second
    // size's points. With a single size there is nothing to substitute, but
    // the binary clamp below still applies.
    if point_sets.len() >= 2 {
        point_sets[0] = point_sets[1].clone();
    }

    let windows = enumerate_windows(study_area, b, stride);
    tracing::debug!(windows = windows.len(), "sampling windows generated");

    let samples: Vec<BoxSample> = windows
        .par_iter()
        .flat_map_iter(|w| {
            let center = (w.min_x + b / 2.0, w.max_y - b / 2.0);
            point_sets
                .iter()
                .zip(sizes.iter())
                .enumerate()
                .map(|(scale_idx, (points, &box_size))| {
                    let mut count = points
                        .iter()
                        .filter(|&&(x, y)| {
                            // Containment always tests the window's fixed
                            // B x B extent, whatever the current box size
                            x >= w.min_x
                                && x <= w.min_x + b
                                && y >= w.max_y - b
                                && y <= w.max_y
                        })
                        .count() as u64;
                    if scale_idx == 0 {
                        count = count.min(1);
                    }
                    BoxSample {
                        window_id: w.id,
                        center,
                        box_size,
                        count,
                    }
                })
                .collect::<Vec<_>>()
        })
        .collect();

    Ok(MovingBoxResult {
        window_count: windows.len() as u64,
        samples,
    })
}

fn validate(params: &MovingBoxParams) -> Result<()> {
    if params.iterations < 1 {
        return Err(Error::invalid_parameter(
            "iterations",
            params.iterations,
            "at least one iteration is required",
        ));
    }
    if !(params.max_box > 0.0) || !params.max_box.is_finite() {
        return Err(Error::invalid_parameter(
            "max_box",
            params.max_box,
            "must be a positive finite number",
        ));
    }

    let b = params.max_box;
    let s = params.dislocation;
    let tol = b * STRIDE_TOLERANCE;
    if (s - b).abs() > tol && (s - b / 2.0).abs() > tol {
        return Err(Error::invalid_parameter(
            "dislocation",
            s,
            format!("must equal max_box ({b}) or max_box / 2 ({})", b / 2.0),
        ));
    }
    Ok(())
}

/// Enumerate sampling windows in row-major scan order (west to east, then
/// north to south). Rounding in the fit tests guards against float drift
/// accumulating over repeated stride additions.
fn enumerate_windows(study_area: &StudyArea, b: f64, stride: f64) -> Vec<Window> {
    let mut windows = Vec::new();
    let mut id = 0u64;

    let mut max_y = study_area.max_y();
    while (max_y - b).round() >= study_area.min_y().round() {
        let mut min_x = study_area.min_x();
        while (min_x + b).round() <= study_area.max_x().round() {
            id += 1;
            windows.push(Window { id, min_x, max_y });
            min_x += stride;
        }
        max_y -= stride;
    }

    windows
}

//! Radial-density fractal dimension estimator
//!
//! Grows circular buffers around every point of a pattern, doubling the
//! radius until the dissolved buffers cover the whole study area, and records
//! point density per radius. The slope of log density against log radius
//! estimates the fractal dimension of the point pattern.

use crate::engine::{BufferEngine, BufferRegion};
use fractus_core::{Error, FeaturePattern, RadialDensityRecord, Result, StudyArea};

/// Parameters for radial density estimation
#[derive(Debug, Clone)]
pub struct RadialDensityParams {
    /// Initial buffer radius r0; doubled at each iteration
    pub initial_radius: f64,
    /// Iteration cap. Doubling covers any bounded extent quickly, but a
    /// malformed input must fail instead of growing forever.
    pub max_iterations: usize,
}

impl Default for RadialDensityParams {
    fn default() -> Self {
        Self {
            initial_radius: 1000.0,
            max_iterations: 64,
        }
    }
}

/// Output of a radial-density run
#[derive(Debug, Clone)]
pub struct RadialDensityResult {
    /// One record per radius, smallest first; the last radius achieved
    /// coverage
    pub series: Vec<RadialDensityRecord>,
    /// The dissolved buffer region for each radius, aligned with the series
    pub rings: Vec<BufferRegion>,
}

/// Run radial density estimation over a point pattern.
///
/// The radius sequence is strictly `r0, 2·r0, 4·r0, …`. At each step every
/// point is buffered and the overlaps dissolved; the loop stops at the first
/// radius whose region completely contains the study area.
///
/// # Errors
/// - [`Error::UnsupportedGeometry`] for polyline patterns (points only);
/// - [`Error::EmptyPattern`] for zero features, since no radius can ever
///   achieve coverage;
/// - [`Error::InvalidParameter`] for a non-positive radius or a zero
///   iteration cap;
/// - [`Error::CoverageNotAchieved`] when the cap passes without coverage.
pub fn radial_density<B: BufferEngine>(
    engine: &B,
    pattern: &FeaturePattern,
    study_area: &StudyArea,
    params: &RadialDensityParams,
) -> Result<RadialDensityResult> {
    let points = pattern.points()?;
    if points.is_empty() {
        return Err(Error::EmptyPattern);
    }
    if !(params.initial_radius > 0.0) || !params.initial_radius.is_finite() {
        return Err(Error::invalid_parameter(
            "initial_radius",
            params.initial_radius,
            "must be a positive finite number",
        ));
    }
    if params.max_iterations < 1 {
        return Err(Error::invalid_parameter(
            "max_iterations",
            params.max_iterations,
            "at least one iteration is required",
        ));
    }

    let mut series = Vec::new();
    let mut rings = Vec::new();
    let mut radius = params.initial_radius;

    for iteration in 0..params.max_iterations {
        let region = engine.buffer_union(&points, radius)?;
        let covered = region.covers(study_area);
        tracing::debug!(
            iteration,
            radius,
            area = region.area,
            covered,
            "radial density step"
        );

        series.push(RadialDensityRecord::new(radius, region.area, points.len()));
        rings.push(region);

        if covered {
            return Ok(RadialDensityResult { series, rings });
        }
        radius *= 2.0;
    }

    Err(Error::CoverageNotAchieved {
        radius: radius / 2.0,
        iterations: params.max_iterations,
    })
}

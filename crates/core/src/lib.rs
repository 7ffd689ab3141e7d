//! # Fractus Core
//!
//! Core types and I/O for the Fractus fractal-dimension analysis library.
//!
//! This crate provides:
//! - `StudyArea`: axis-aligned analysis extent
//! - `FeaturePattern`: point or polyline input patterns with attribute values
//! - `OccupancyGrid` / `GridTransform`: rasterized pattern representation
//! - Result records: `ScaleSeries`, `BoxSample`, `RadialDensityRecord`
//! - Delimited text-table output for analysis results

pub mod error;
pub mod extent;
pub mod io;
pub mod pattern;
pub mod raster;
pub mod records;

pub use error::{Error, Result};
pub use extent::StudyArea;
pub use pattern::{FeaturePattern, GeometryKind, PatternFeature, PatternGeometry};
pub use raster::{GridTransform, OccupancyGrid};
pub use records::{BoxSample, RadialDensityRecord, ScaleEntry, ScaleSeries};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::extent::StudyArea;
    pub use crate::pattern::{FeaturePattern, GeometryKind, PatternFeature, PatternGeometry};
    pub use crate::raster::{GridTransform, OccupancyGrid};
    pub use crate::records::{BoxSample, RadialDensityRecord, ScaleEntry, ScaleSeries};
}

//! # Fractus Algorithms
//!
//! Fractal-dimension analysis pipelines for spatial point and line patterns.
//!
//! ## Available pipelines
//!
//! - **box_counting**: occupied boxes per halving box size
//! - **moving_box**: box counting per sampling window over a dislocation grid
//! - **radial_density**: point density per doubling buffer radius
//!
//! All three are thin drivers over the [`engine`] seam: a [`engine::Rasterizer`]
//! and a [`engine::BufferEngine`] provide the two geoprocessing primitives,
//! with [`engine::NativeEngine`] as the built-in implementation.

pub mod box_counting;
pub mod engine;
pub mod moving_box;
pub mod radial_density;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::box_counting::{box_count, BoxCountParams, BoxCountResult};
    pub use crate::engine::{BufferEngine, BufferRegion, NativeEngine, Rasterizer};
    pub use crate::moving_box::{moving_box_count, MovingBoxParams, MovingBoxResult};
    pub use crate::radial_density::{radial_density, RadialDensityParams, RadialDensityResult};
    pub use fractus_core::prelude::*;
}

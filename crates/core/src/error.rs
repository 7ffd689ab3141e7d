//! Error types for Fractus

use thiserror::Error;

/// Main error type for Fractus operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid study area extent: ({min_x}, {min_y}) - ({max_x}, {max_y})")]
    InvalidExtent {
        min_x: f64,
        min_y: f64,
        max_x: f64,
        max_y: f64,
    },

    #[error("Index out of bounds: ({row}, {col}) in grid of size ({rows}, {cols})")]
    IndexOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("Invalid parameter: {name} = {value} ({reason})")]
    InvalidParameter {
        name: &'static str,
        value: String,
        reason: String,
    },

    #[error("Unsupported geometry type: {0} (only Point and Polyline patterns are supported)")]
    UnsupportedGeometry(String),

    #[error("Pattern contains no features")]
    EmptyPattern,

    #[error("Study area not covered after {iterations} radius doublings (last radius: {radius})")]
    CoverageNotAchieved { radius: f64, iterations: usize },

    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Shorthand for parameter validation failures
    pub fn invalid_parameter(
        name: &'static str,
        value: impl ToString,
        reason: impl Into<String>,
    ) -> Self {
        Error::InvalidParameter {
            name,
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}

/// Result type alias for Fractus operations
pub type Result<T> = std::result::Result<T, Error>;

//! Error type used by the crate.

use thiserror::Error;

/// Error enum.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    /// Unit name is not one of the supported [`Unit`](crate::Unit) values.
    #[error("invalid unit: {0}")]
    InvalidUnit(String),
    /// Geometry has fewer points than the operation requires.
    #[error("geometry needs at least {required} points, but has {actual}")]
    DegenerateGeometry {
        /// Minimum number of points the operation works with.
        required: usize,
        /// Number of points in the input.
        actual: usize,
    },
    /// Argument value cannot be used, e.g. a non-finite coordinate.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl GeometryError {
    /// Returns `Err(DegenerateGeometry)` if `actual` is less than `required`.
    pub fn check_point_count(required: usize, actual: usize) -> Result<(), Self> {
        if actual < required {
            Err(Self::DegenerateGeometry { required, actual })
        } else {
            Ok(())
        }
    }
}

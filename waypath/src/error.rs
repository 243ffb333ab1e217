//! Error types used by the crate.

use thiserror::Error;
use waypath_polyline::PolylineError;
use waypath_types::GeometryError;

/// Waypath error type.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WaypathError {
    /// Input geometry or argument is not valid for the operation.
    #[error(transparent)]
    Geometry(#[from] GeometryError),
    /// Encoded polyline could not be read or written.
    #[error(transparent)]
    Polyline(#[from] PolylineError),
}

//! Error type used by the crate.

use thiserror::Error;

/// Polyline codec error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PolylineError {
    /// The encoded string is malformed or truncated.
    #[error("invalid polyline encoding at byte {position}: {reason}")]
    InvalidEncoding {
        /// Byte offset in the encoded string where the problem was detected.
        position: usize,
        /// What is wrong with the input.
        reason: &'static str,
    },
    /// Argument value cannot be used, e.g. a non-finite coordinate or too large precision.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

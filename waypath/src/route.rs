//! Operations on route geometries in the encoded polyline format.

use waypath_polyline::{decode, encode};
use waypath_types::Unit;

use crate::error::WaypathError;
use crate::measurement::length;
use crate::simplify::{simplify_with, SimplifyOptions};

/// Decodes the polyline, simplifies it and encodes the result with the same precision.
pub fn simplify_encoded(
    text: &str,
    precision: u32,
    options: &SimplifyOptions,
) -> Result<String, WaypathError> {
    let line = decode(text, precision)?;
    let simplified = simplify_with(&line, options);
    Ok(encode(&simplified, precision)?)
}

/// Length of the path given as an encoded polyline.
pub fn encoded_length(text: &str, precision: u32, unit: Unit) -> Result<f64, WaypathError> {
    let line = decode(text, precision)?;
    Ok(length(&line, unit))
}

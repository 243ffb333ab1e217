//! Reader and writer of the encoded polyline format.
//!
//! A polyline is a compact ASCII representation of a sequence of lon/lat points, used by routing services to
//! return route geometries. Every coordinate is multiplied by `10^precision` and rounded to an integer. The
//! integers are delta-encoded against the previous point (one chain for latitudes and one for longitudes,
//! latitude first), zig-zag encoded and written as 5-bit groups with a continuation bit, each group offset by 63
//! so that the output consists of the characters `?` (63) to `~` (126).
//!
//! The precision is not stored in the string and must be agreed upon out of band: Google polylines and OSRM v5
//! use [`GOOGLE_PRECISION`], OSRM v4 uses [`OSRM_V4_PRECISION`].
//!
//! ```
//! use waypath_polyline::{decode, encode, GOOGLE_PRECISION};
//!
//! let line = decode("_p~iF~ps|U_ulLnnqC_mqNvxq`@", GOOGLE_PRECISION).unwrap();
//! assert_eq!(line.len(), 3);
//! assert_eq!(encode(&line, GOOGLE_PRECISION).unwrap(), "_p~iF~ps|U_ulLnnqC_mqNvxq`@");
//! ```

use num_traits::ToPrimitive;
use waypath_types::geo::GeoPoint;
use waypath_types::impls::{LineString, Point};

pub mod error;

pub use error::PolylineError;

/// Precision of Google encoded polylines and of OSRM v5 geometries.
pub const GOOGLE_PRECISION: u32 = 5;
/// Precision of OSRM v4 geometries.
pub const OSRM_V4_PRECISION: u32 = 6;
/// Largest supported precision.
pub const MAX_PRECISION: u32 = 15;

const CHAR_OFFSET: u8 = 63;
const MAX_CHAR: u8 = 126;
const CONTINUATION_BIT: u64 = 0x20;
const CHUNK_MASK: u64 = 0x1f;
const CHUNK_BITS: u32 = 5;
// Keeps the zig-zag shift of any delta inside of i64.
const MAX_SCALED_VALUE: i64 = 1 << 60;

fn precision_factor(precision: u32) -> Result<f64, PolylineError> {
    if precision > MAX_PRECISION {
        return Err(PolylineError::InvalidArgument(format!(
            "precision must not exceed {MAX_PRECISION}, but is {precision}"
        )));
    }

    Ok(10f64.powi(precision as i32))
}

/// Encodes the points with the given decimal `precision`.
///
/// Fails if any of the coordinates is not finite or is too large to be represented with the precision.
pub fn encode<P: GeoPoint>(points: &[P], precision: u32) -> Result<String, PolylineError> {
    let factor = precision_factor(precision)?;

    // Short deltas usually take 2 to 4 chars per coordinate.
    let mut result = String::with_capacity(points.len() * 8);
    let mut last_lat = 0;
    let mut last_lon = 0;

    for (index, point) in points.iter().enumerate() {
        let lat = scale(point.lat(), factor, index)?;
        let lon = scale(point.lon(), factor, index)?;

        encode_value(lat - last_lat, &mut result);
        encode_value(lon - last_lon, &mut result);

        last_lat = lat;
        last_lon = lon;
    }

    log::trace!(
        "Encoded {} points into {} bytes with precision {precision}",
        points.len(),
        result.len()
    );

    Ok(result)
}

fn scale(value: f64, factor: f64, index: usize) -> Result<i64, PolylineError> {
    (value * factor)
        .round()
        .to_i64()
        .filter(|scaled| scaled.abs() <= MAX_SCALED_VALUE)
        .ok_or_else(|| {
            PolylineError::InvalidArgument(format!(
                "coordinate {value} of point {index} cannot be encoded"
            ))
        })
}

fn encode_value(value: i64, out: &mut String) {
    let shifted = value << 1;
    let mut rest = if value < 0 { !shifted } else { shifted } as u64;

    while rest >= CONTINUATION_BIT {
        out.push(to_char(CONTINUATION_BIT | (rest & CHUNK_MASK)));
        rest >>= CHUNK_BITS;
    }
    out.push(to_char(rest));
}

fn to_char(chunk: u64) -> char {
    // `chunk` is at most 6 bits wide, so the sum is always inside of the polyline alphabet.
    char::from(chunk as u8 + CHAR_OFFSET)
}

/// Decodes a polyline encoded with the given decimal `precision`.
///
/// The whole string must be consumed: a truncated value at the end of the input, a latitude without a
/// longitude, or a character outside of the polyline alphabet is an error.
pub fn decode(text: &str, precision: u32) -> Result<LineString, PolylineError> {
    let points = PolylineDecoder::new(text, precision)?.collect::<Result<Vec<_>, _>>()?;

    log::trace!(
        "Decoded {} points from {} bytes with precision {precision}",
        points.len(),
        text.len()
    );

    Ok(LineString::new(points))
}

/// Streaming polyline decoder. Yields points one by one and stops after the first error.
#[derive(Debug, Clone)]
pub struct PolylineDecoder<'a> {
    bytes: &'a [u8],
    position: usize,
    factor: f64,
    lat: i64,
    lon: i64,
    can_continue: bool,
}

impl<'a> PolylineDecoder<'a> {
    /// Creates a decoder of the `text` encoded with the given decimal `precision`.
    pub fn new(text: &'a str, precision: u32) -> Result<Self, PolylineError> {
        Ok(Self {
            bytes: text.as_bytes(),
            position: 0,
            factor: precision_factor(precision)?,
            lat: 0,
            lon: 0,
            can_continue: true,
        })
    }

    /// Byte offset of the next value to be read.
    pub fn position(&self) -> usize {
        self.position
    }

    fn read_point(&mut self) -> Result<Point, PolylineError> {
        let d_lat = self.read_value()?;
        if self.position >= self.bytes.len() {
            return Err(self.error("latitude is not followed by longitude"));
        }
        let d_lon = self.read_value()?;

        self.lat = self
            .lat
            .checked_add(d_lat)
            .ok_or_else(|| self.error("latitude overflow"))?;
        self.lon = self
            .lon
            .checked_add(d_lon)
            .ok_or_else(|| self.error("longitude overflow"))?;

        Ok(Point::new(
            self.lon as f64 / self.factor,
            self.lat as f64 / self.factor,
        ))
    }

    fn read_value(&mut self) -> Result<i64, PolylineError> {
        let mut result = 0u64;
        let mut shift = 0;

        loop {
            let Some(&byte) = self.bytes.get(self.position) else {
                return Err(self.error("value is not terminated at the end of input"));
            };
            if !(CHAR_OFFSET..=MAX_CHAR).contains(&byte) {
                return Err(self.error("character is outside of the polyline alphabet"));
            }

            let chunk = u64::from(byte - CHAR_OFFSET);
            let bits = chunk & CHUNK_MASK;
            if shift >= u64::BITS || (shift > u64::BITS - CHUNK_BITS && bits >> (u64::BITS - shift) != 0) {
                return Err(self.error("value does not fit into 64 bits"));
            }

            result |= bits << shift;
            shift += CHUNK_BITS;
            self.position += 1;

            if chunk < CONTINUATION_BIT {
                break;
            }
        }

        let value = (result >> 1) as i64;
        Ok(if result & 1 == 1 { !value } else { value })
    }

    fn error(&self, reason: &'static str) -> PolylineError {
        PolylineError::InvalidEncoding {
            position: self.position,
            reason,
        }
    }
}

impl Iterator for PolylineDecoder<'_> {
    type Item = Result<Point, PolylineError>;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.can_continue || self.position >= self.bytes.len() {
            return None;
        }

        let result = self.read_point();
        if result.is_err() {
            self.can_continue = false;
        }

        Some(result)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if !self.can_continue {
            return (0, Some(0));
        }

        // Every point takes at least two bytes.
        let remaining = self.bytes.len() - self.position;
        (0, Some(remaining.div_ceil(2)))
    }
}

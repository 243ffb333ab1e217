use approx::AbsDiffEq;
use serde::{Deserialize, Serialize};

use crate::error::GeometryError;
use crate::geo::{GeoPoint, NewGeoPoint};

/// 2d point on the surface of the Earth with an optional altitude.
///
/// Equality is structural: two points are equal if longitude, latitude and altitude are all equal.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Deserialize, Serialize)]
pub struct Point {
    lon: f64,
    lat: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    alt: Option<f64>,
}

impl Point {
    /// Creates a new point without altitude.
    pub const fn new(lon: f64, lat: f64) -> Self {
        Self {
            lon,
            lat,
            alt: None,
        }
    }

    /// Creates a new point with altitude.
    pub const fn with_altitude(lon: f64, lat: f64, alt: f64) -> Self {
        Self {
            lon,
            lat,
            alt: Some(alt),
        }
    }

    /// Copies longitude and latitude of any other point type.
    pub fn from_point(other: &impl GeoPoint) -> Self {
        Self::new(other.lon(), other.lat())
    }

    /// Altitude in meters, if known.
    pub fn alt(&self) -> Option<f64> {
        self.alt
    }

    /// Checks that all coordinates are finite numbers.
    pub fn validate(&self) -> Result<(), GeometryError> {
        if !self.is_finite() || self.alt.is_some_and(|alt| !alt.is_finite()) {
            return Err(GeometryError::InvalidArgument(format!(
                "point coordinates must be finite, got {self:?}"
            )));
        }

        Ok(())
    }
}

impl GeoPoint for Point {
    fn lon(&self) -> f64 {
        self.lon
    }

    fn lat(&self) -> f64 {
        self.lat
    }
}

impl NewGeoPoint for Point {
    fn lonlat(lon: f64, lat: f64) -> Self {
        Self::new(lon, lat)
    }
}

impl AbsDiffEq for Point {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.lon.abs_diff_eq(&other.lon, epsilon)
            && self.lat.abs_diff_eq(&other.lat, epsilon)
            && match (self.alt, other.alt) {
                (Some(a), Some(b)) => a.abs_diff_eq(&b, epsilon),
                (None, None) => true,
                _ => false,
            }
    }
}

/// Creates a new [`Point`] from longitude and latitude values (in degrees).
///
/// ```
/// use waypath_types::geo::GeoPoint;
/// use waypath_types::lonlat;
///
/// let point = lonlat!(-120.2, 38.5);
/// assert_eq!(point.lat(), 38.5);
/// ```
#[macro_export]
macro_rules! lonlat {
    ($lon:expr, $lat:expr) => {
        $crate::impls::Point::new($lon, $lat)
    };
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn validate_rejects_nan() {
        assert!(Point::new(10.0, 20.0).validate().is_ok());
        assert_matches!(
            Point::new(f64::NAN, 20.0).validate(),
            Err(GeometryError::InvalidArgument(_))
        );
        assert_matches!(
            Point::with_altitude(10.0, 20.0, f64::INFINITY).validate(),
            Err(GeometryError::InvalidArgument(_))
        );
    }

    #[test]
    fn equality_includes_altitude() {
        assert_eq!(Point::new(1.0, 2.0), lonlat!(1.0, 2.0));
        assert_ne!(Point::new(1.0, 2.0), Point::with_altitude(1.0, 2.0, 0.0));
        assert!(Point::new(1.0, 2.0).same_position(&Point::with_altitude(1.0, 2.0, 0.0)));
    }

    #[test]
    fn serialization_skips_missing_altitude() {
        let json = serde_json::to_string(&Point::new(1.5, -2.5)).unwrap();
        assert_eq!(json, r#"{"lon":1.5,"lat":-2.5}"#);

        let point: Point = serde_json::from_str(r#"{"lon":1.5,"lat":-2.5,"alt":100.0}"#).unwrap();
        assert_eq!(point, Point::with_altitude(1.5, -2.5, 100.0));
    }
}

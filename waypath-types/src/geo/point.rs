use nalgebra::Vector2;

/// A point on the surface of the Earth given by WGS84 longitude and latitude in degrees.
///
/// Besides the accessors, the trait provides a few planar helpers that treat the point as a vector
/// `(lon, lat)`. They are used by the algorithms that work "in the metric of the coordinates", like line
/// simplification or projection of a point onto a segment.
pub trait GeoPoint {
    /// Longitude in degrees.
    fn lon(&self) -> f64;
    /// Latitude in degrees.
    fn lat(&self) -> f64;

    /// Latitude in radians.
    fn lat_rad(&self) -> f64 {
        self.lat().to_radians()
    }

    /// Longitude in radians.
    fn lon_rad(&self) -> f64 {
        self.lon().to_radians()
    }

    /// The point as a planar `(lon, lat)` vector.
    fn to_vector(&self) -> Vector2<f64> {
        Vector2::new(self.lon(), self.lat())
    }

    /// Returns true if both points have exactly the same longitude and latitude.
    fn same_position(&self, other: &impl GeoPoint) -> bool {
        self.lon() == other.lon() && self.lat() == other.lat()
    }

    /// Squared planar distance between the points in degrees².
    fn distance_sq(&self, other: &impl GeoPoint) -> f64 {
        let dx = self.lon() - other.lon();
        let dy = self.lat() - other.lat();
        dx * dx + dy * dy
    }

    /// Returns false if any of the coordinates is NaN or infinite.
    fn is_finite(&self) -> bool {
        self.lon().is_finite() && self.lat().is_finite()
    }
}

/// A [`GeoPoint`] that can be constructed from coordinates.
pub trait NewGeoPoint: GeoPoint + Sized {
    /// Creates a point from longitude and latitude in degrees.
    fn lonlat(lon: f64, lat: f64) -> Self;

    /// Creates a point at the given planar `(lon, lat)` vector.
    fn from_vector(v: Vector2<f64>) -> Self {
        Self::lonlat(v.x, v.y)
    }
}

impl<T: GeoPoint> GeoPoint for &T {
    fn lon(&self) -> f64 {
        (*self).lon()
    }

    fn lat(&self) -> f64 {
        (*self).lat()
    }
}

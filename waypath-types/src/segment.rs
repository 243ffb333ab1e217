use crate::geo::{GeoPoint, NewGeoPoint};

/// A straight line segment between two points.
///
/// All methods of the segment are planar: longitude and latitude are treated as `x` and `y` of a cartesian
/// plane.
#[derive(Debug, PartialEq)]
pub struct Segment<'a, Point>(pub &'a Point, pub &'a Point);

impl<P> Clone for Segment<'_, P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P> Copy for Segment<'_, P> {}

impl<'a, P: GeoPoint> Segment<'a, P> {
    /// Squared length of the segment in degrees².
    pub fn length_sq(&self) -> f64 {
        self.0.distance_sq(self.1)
    }

    /// Position of the normal from the `point` to the line through the segment, as a fraction of the segment
    /// length: `0` at the start, `1` at the end, outside of `[0, 1]` if the normal falls outside the segment.
    ///
    /// Returns `0` for a zero-length segment.
    pub fn projection_factor(&self, point: &impl GeoPoint) -> f64 {
        let ds = self.1.to_vector() - self.0.to_vector();
        let ds_len = ds.norm_squared();
        if ds_len == 0.0 {
            return 0.0;
        }

        let dp = point.to_vector() - self.0.to_vector();
        dp.dot(&ds) / ds_len
    }

    /// Point of the segment closest to the given `point`.
    ///
    /// If the normal from the point to the segment falls outside of the segment, the nearer endpoint is returned
    /// with its exact coordinates.
    pub fn closest_point<R: NewGeoPoint>(&self, point: &impl GeoPoint) -> R {
        let r = self.projection_factor(point);
        if r <= 0.0 {
            R::lonlat(self.0.lon(), self.0.lat())
        } else if r >= 1.0 {
            R::lonlat(self.1.lon(), self.1.lat())
        } else {
            self.interpolate(r)
        }
    }

    /// Point at the fraction `t` of the segment length from the start.
    pub fn interpolate<R: NewGeoPoint>(&self, t: f64) -> R {
        let start = self.0.to_vector();
        R::from_vector(start + (self.1.to_vector() - start) * t)
    }

    /// Shortest euclidean distance (squared) between a point and the segment:
    ///
    /// * if the normal from the point to the segment ends inside the segment, the returned value is the squared
    ///   length of the normal
    /// * if the normal from the point to the segment ends outside of the segment, the returned value is the
    ///   smaller one of the distances between the point and the segment's endpoints
    pub fn distance_to_point_sq(&self, point: &impl GeoPoint) -> f64 {
        if self.0.same_position(self.1) {
            return self.0.distance_sq(point);
        }

        let ds = self.1.to_vector() - self.0.to_vector();
        let dp = point.to_vector() - self.0.to_vector();
        let ds_len = ds.norm_squared();

        let r = dp.dot(&ds) / ds_len;
        if r <= 0.0 {
            self.0.distance_sq(point)
        } else if r >= 1.0 {
            self.1.distance_sq(point)
        } else {
            let s = (dp.y * ds.x - dp.x * ds.y) / ds_len;
            (s * s) * ds_len
        }
    }
}

use geo_types::point;

use crate::geo::{GeoPoint, NewGeoPoint};
use crate::impls::Point;

impl GeoPoint for geo_types::Point<f64> {
    fn lon(&self) -> f64 {
        self.x()
    }

    fn lat(&self) -> f64 {
        self.y()
    }
}

impl NewGeoPoint for geo_types::Point<f64> {
    fn lonlat(lon: f64, lat: f64) -> Self {
        point!(x: lon, y: lat)
    }
}

impl From<geo_types::Point<f64>> for Point {
    fn from(value: geo_types::Point<f64>) -> Self {
        Point::new(value.x(), value.y())
    }
}

impl From<Point> for geo_types::Point<f64> {
    fn from(value: Point) -> Self {
        point!(x: value.lon(), y: value.lat())
    }
}

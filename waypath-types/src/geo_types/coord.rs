use geo_types::{coord, Coord};

use crate::geo::{GeoPoint, NewGeoPoint};
use crate::impls::Point;

impl GeoPoint for Coord<f64> {
    fn lon(&self) -> f64 {
        self.x
    }

    fn lat(&self) -> f64 {
        self.y
    }
}

impl NewGeoPoint for Coord<f64> {
    fn lonlat(lon: f64, lat: f64) -> Self {
        coord!(x: lon, y: lat)
    }
}

impl From<Coord<f64>> for Point {
    fn from(value: Coord<f64>) -> Self {
        Point::new(value.x, value.y)
    }
}

impl From<Point> for Coord<f64> {
    fn from(value: Point) -> Self {
        coord!(x: value.lon(), y: value.lat())
    }
}

use geo_types::{Coord, LineString};

use crate::contour::Contour;
use crate::impls::{LineString as SimpleLineString, LinearRing};

impl Contour for LineString<f64> {
    type Point = Coord<f64>;

    fn is_closed(&self) -> bool {
        LineString::is_closed(self)
    }

    fn iter_points(&self) -> impl Iterator<Item = &'_ Self::Point> {
        self.0.iter()
    }
}

impl From<LineString<f64>> for SimpleLineString {
    fn from(value: LineString<f64>) -> Self {
        value.0.into_iter().map(Into::into).collect()
    }
}

impl From<SimpleLineString> for LineString<f64> {
    fn from(value: SimpleLineString) -> Self {
        value.into_points().into_iter().map(Coord::from).collect()
    }
}

impl From<LineString<f64>> for LinearRing {
    fn from(value: LineString<f64>) -> Self {
        LinearRing::new(value.0.into_iter().map(Into::into).collect())
    }
}

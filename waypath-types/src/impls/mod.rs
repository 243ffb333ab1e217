//! Simple implementations of the geometry traits.

mod contour;
mod multi_polygon;
mod point;
mod polygon;

pub use contour::{LineString, LinearRing};
pub use multi_polygon::MultiPolygon;
pub use point::Point;
pub use polygon::Polygon;

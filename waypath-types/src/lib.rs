//! Geometry primitives for lon/lat paths and areas.
//!
//! Algorithms in this crate are written against the traits in [`geo`], [`contour`], [`polygon`] and
//! [`multi_polygon`], so they work both with the simple structs from [`impls`] and with foreign geometry types
//! (see the `geo-types` feature).
//!
//! All coordinates are WGS84 longitude and latitude in degrees. Planar operations (segment projection, ring
//! containment) treat them as plain `(x, y) = (lon, lat)` pairs.

pub mod bounding_box;
pub mod contour;
pub mod error;
pub mod geo;
pub mod impls;
pub mod multi_polygon;
pub mod polygon;
pub mod segment;
pub mod unit;

#[cfg(feature = "geo-types")]
mod geo_types;

pub use bounding_box::BoundingBox;
pub use contour::Contour;
pub use error::GeometryError;
pub use geo::{GeoPoint, NewGeoPoint};
pub use multi_polygon::MultiPolygon;
pub use polygon::Polygon;
pub use segment::Segment;
pub use unit::Unit;

//! Points in geographic coordinates (longitude and latitude in degrees), see [`GeoPoint`].

mod point;

pub use point::{GeoPoint, NewGeoPoint};

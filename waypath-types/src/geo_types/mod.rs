//! Implementations of the geometry traits for the [`geo_types`] crate, and conversions between its types and
//! the simple types of [`impls`](crate::impls).

mod coord;
mod linestring;
mod multi_polygon;
mod point;
mod polygon;

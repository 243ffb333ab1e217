//! Waypath is a toolkit for working with route geometries: paths made of WGS84 longitude/latitude points, like
//! the ones returned by directions services.
//!
//! It provides:
//! * reading and writing of the encoded polyline format (see [`waypath_polyline`], re-exported as [`polyline`]),
//! * path simplification ([`simplify`]),
//! * point-in-polygon tests for polygons with holes and multipolygons ([`Polygon::contains_point`],
//!   [`MultiPolygon::contains_point`], [`points_within`]),
//! * great circle distances, bearings and lengths ([`measurement`]),
//! * snapping points to a path and cutting parts of a path ([`slice`]).
//!
//! All functions are pure: they take geometries by reference and return newly allocated results, so they can be
//! called concurrently from any number of threads.
//!
//! Geometry types and traits live in the [`waypath_types`] crate and are re-exported here. Algorithms accept any
//! type implementing the [`GeoPoint`], [`Contour`] or [`Polygon`] traits. With the `geo-types` feature
//! (enabled by default) this includes the types of the `geo-types` crate.
//!
//! ```
//! use waypath::measurement::distance;
//! use waypath::slice::line_slice;
//! use waypath::{lonlat, polyline, Unit};
//!
//! let route = polyline::decode("_p~iF~ps|U_ulLnnqC_mqNvxq`@", polyline::GOOGLE_PRECISION).unwrap();
//! let part = line_slice(&lonlat!(-120.5, 39.0), &lonlat!(-125.0, 42.0), &route).unwrap();
//!
//! assert_eq!(part.len(), 3);
//! assert!(distance(&part[0], &part[2], Unit::Kilometers) > 300.0);
//! ```

pub mod error;
pub mod measurement;
pub mod route;
pub mod simplify;
pub mod slice;
pub mod transform;

mod containment;

pub use containment::points_within;
pub use error::WaypathError;
pub use waypath_polyline as polyline;
pub use waypath_types::geo::{GeoPoint, NewGeoPoint};
pub use waypath_types::impls::{LineString, LinearRing, Point};
pub use waypath_types::{
    lonlat, BoundingBox, Contour, GeometryError, MultiPolygon, Polygon, Segment, Unit,
};

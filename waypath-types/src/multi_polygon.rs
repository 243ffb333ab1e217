//! Geometry consisting of several polygons.

use crate::bounding_box::BoundingBox;
use crate::geo::GeoPoint;
use crate::polygon::Polygon;

/// Geometry consisting of several polygons.
pub trait MultiPolygon {
    /// Polygon type.
    type Polygon: Polygon;

    /// Iterates over polygons.
    fn polygons(&self) -> impl Iterator<Item = &Self::Polygon>;

    /// Returns true if any of the polygons contains the `point`. Holes are applied only within the polygon they
    /// belong to.
    fn contains_point(&self, point: &impl GeoPoint) -> bool {
        self.polygons().any(|polygon| polygon.contains_point(point))
    }

    /// Bounding box of all the polygons.
    fn bounding_box(&self) -> Option<BoundingBox> {
        self.polygons().filter_map(|p| p.bounding_box()).collect()
    }
}

//! Polygon geometry and point-in-polygon test.
//!
//! Membership is decided with the even-odd crossing number test: a ray is cast from the point along the
//! longitude axis and the crossings with ring edges are counted. Ring orientation does not matter. Comparisons
//! are exact, so a point lying exactly on an edge may be classified either way.

use crate::bounding_box::BoundingBox;
use crate::contour::Contour;
use crate::geo::GeoPoint;
use crate::segment::Segment;

/// Polygon geometry. Polygon consists of one outer ring and zero or more inner rings.
///
/// Inner rings represent *holes* in a polygon.
pub trait Polygon {
    /// Ring type.
    type Ring: Contour;

    /// Outer ring of the polygon.
    fn outer_ring(&self) -> &Self::Ring;
    /// Iterates over inner rings.
    fn inner_rings(&self) -> impl Iterator<Item = &'_ Self::Ring>;

    /// Iterates over all rings of the polygon starting with the outer one.
    fn iter_rings(&self) -> impl Iterator<Item = &'_ Self::Ring> {
        std::iter::once(self.outer_ring()).chain(self.inner_rings())
    }

    /// Returns true if the `point` is inside the outer ring and outside of all the holes.
    fn contains_point(&self, point: &impl GeoPoint) -> bool {
        rings_contain(self.iter_rings(), point)
    }

    /// Bounding box of the outer ring.
    fn bounding_box(&self) -> Option<BoundingBox> {
        self.outer_ring().bounding_box()
    }
}

/// Ring-set containment: the first ring is the outer boundary, all the following rings are holes.
///
/// Returns false for an empty ring set.
pub fn rings_contain<'a, R>(rings: impl IntoIterator<Item = &'a R>, point: &impl GeoPoint) -> bool
where
    R: Contour + 'a,
{
    let mut rings = rings.into_iter();
    let Some(outer) = rings.next() else {
        return false;
    };

    ring_contains(outer, point) && !rings.any(|hole| ring_contains(hole, point))
}

/// Even-odd crossing number test of a single ring.
pub fn ring_contains<R: Contour>(ring: &R, point: &impl GeoPoint) -> bool {
    let x = point.lon();
    let y = point.lat();

    ring.iter_segments()
        .fold(false, |inside, Segment(prev, curr)| {
            let crosses = (curr.lat() > y) != (prev.lat() > y)
                && x < (prev.lon() - curr.lon()) * (y - curr.lat()) / (prev.lat() - curr.lat())
                    + curr.lon();
            inside != crosses
        })
}

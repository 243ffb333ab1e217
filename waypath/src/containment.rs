//! Point-in-polygon queries over sets of points.

use waypath_types::geo::GeoPoint;
use waypath_types::{Contour, Polygon};

/// Returns the points contained by at least one of the polygons, in their original order.
///
/// Every point is returned at most once, even if several polygons contain it. Points lying exactly on a polygon
/// boundary may or may not be included.
pub fn points_within<P, G>(points: &[P], polygons: &[G]) -> Vec<P>
where
    P: GeoPoint + Clone,
    G: Polygon,
{
    for (index, polygon) in polygons.iter().enumerate() {
        let vertex_count = polygon.outer_ring().iter_points().count();
        if vertex_count < 3 {
            log::warn!(
                "Polygon {index} has only {vertex_count} points in its outer ring and cannot contain any point"
            );
        }
    }

    let within: Vec<P> = points
        .iter()
        .filter(|point| polygons.iter().any(|polygon| polygon.contains_point(*point)))
        .cloned()
        .collect();

    log::debug!(
        "{} of {} points are within {} polygons",
        within.len(),
        points.len(),
        polygons.len()
    );

    within
}

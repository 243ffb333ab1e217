//! Geometries constructed around points.

use waypath_types::geo::GeoPoint;
use waypath_types::impls::{LinearRing, Point, Polygon};
use waypath_types::{GeometryError, Unit};

use crate::measurement::destination;

/// Number of vertices used by [`circle`] when the caller has no preference.
pub const DEFAULT_CIRCLE_STEPS: usize = 64;

/// Polygon approximating a circle with the given `radius` around the `center`.
///
/// The outer ring consists of `steps` points at equal bearings from the center, starting at north and going
/// clockwise, and repeats the first point at the end.
pub fn circle(
    center: &impl GeoPoint,
    radius: f64,
    steps: usize,
    unit: Unit,
) -> Result<Polygon, GeometryError> {
    if steps == 0 {
        return Err(GeometryError::InvalidArgument(
            "circle needs at least one step".into(),
        ));
    }
    if !radius.is_finite() || radius < 0.0 {
        return Err(GeometryError::InvalidArgument(format!(
            "circle radius must be a non-negative number, but is {radius}"
        )));
    }

    let mut points: Vec<Point> = (0..steps)
        .map(|step| destination(center, radius, step as f64 * 360.0 / steps as f64, unit))
        .collect();
    points.push(points[0]);

    Ok(Polygon::from(LinearRing::new(points)))
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use assert_matches::assert_matches;
    use waypath_types::lonlat;
    use waypath_types::Polygon as _;

    use super::*;
    use crate::measurement::distance;

    #[test]
    fn closed_ring_at_radius() {
        let center = lonlat!(-75.343, 39.984);
        let polygon = circle(&center, 5.0, DEFAULT_CIRCLE_STEPS, Unit::Kilometers).unwrap();
        let ring = polygon.outer_ring.points();

        assert_eq!(ring.len(), DEFAULT_CIRCLE_STEPS + 1);
        assert_eq!(ring.first(), ring.last());
        assert!(polygon.inner_rings.is_empty());

        for point in ring {
            assert_relative_eq!(
                distance(&center, point, Unit::Kilometers),
                5.0,
                max_relative = 1e-9
            );
        }

        assert!(polygon.contains_point(&center));
        assert!(!polygon.contains_point(&lonlat!(-75.2, 39.984)));
    }

    #[test]
    fn first_point_is_north() {
        let center = lonlat!(10.0, 50.0);
        let polygon = circle(&center, 1.0, 4, Unit::Miles).unwrap();
        let ring = polygon.outer_ring.points();

        assert_eq!(ring.len(), 5);
        assert!(ring[0].lat() > center.lat());
        assert!(ring[1].lon() > center.lon());
        assert!(ring[2].lat() < center.lat());
        assert!(ring[3].lon() < center.lon());
    }

    #[test]
    fn invalid_arguments() {
        let center = lonlat!(0.0, 0.0);
        assert_matches!(
            circle(&center, 1.0, 0, Unit::Kilometers),
            Err(GeometryError::InvalidArgument(_))
        );
        assert_matches!(
            circle(&center, f64::NAN, 8, Unit::Kilometers),
            Err(GeometryError::InvalidArgument(_))
        );
        assert_matches!(
            circle(&center, -1.0, 8, Unit::Kilometers),
            Err(GeometryError::InvalidArgument(_))
        );
    }
}

//! Measurements on a spherical Earth.
//!
//! Distances are great circle distances computed with the haversine formula on a sphere with the radius of
//! [`EARTH_RADIUS_KM`](waypath_types::unit::EARTH_RADIUS_KM). The result is expressed in the requested
//! [`Unit`]. Ellipsoidal corrections are not applied, so the results may differ from the WGS84 geodesic
//! distance by up to about 0.5%.

use waypath_types::geo::{GeoPoint, NewGeoPoint};
use waypath_types::impls::Point;
use waypath_types::unit::{degrees_to_radians, radians_to_degrees};
use waypath_types::{Contour, GeometryError, MultiPolygon, Polygon, Segment, Unit};

/// Great circle distance between two points.
pub fn distance(from: &impl GeoPoint, to: &impl GeoPoint, unit: Unit) -> f64 {
    unit.radians_to_length(central_angle(from, to))
}

fn central_angle(from: &impl GeoPoint, to: &impl GeoPoint) -> f64 {
    let d_lat = degrees_to_radians(to.lat() - from.lat());
    let d_lon = degrees_to_radians(to.lon() - from.lon());

    let a = (d_lat / 2.0).sin().powi(2)
        + (d_lon / 2.0).sin().powi(2) * (from.lat_rad().cos() * to.lat_rad().cos());

    2.0 * a.sqrt().atan2((1.0 - a).sqrt())
}

/// Initial bearing of the great circle path from `from` to `to` in degrees clockwise from north, in the range
/// `[-180, 180]`.
pub fn bearing(from: &impl GeoPoint, to: &impl GeoPoint) -> f64 {
    let lat1 = from.lat_rad();
    let lat2 = to.lat_rad();
    let d_lon = to.lon_rad() - from.lon_rad();

    let y = d_lon.sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * d_lon.cos();

    radians_to_degrees(y.atan2(x))
}

/// Point at the given `distance` from the `origin` moving along the great circle with the initial `bearing`
/// (degrees clockwise from north).
pub fn destination<P: NewGeoPoint>(
    origin: &impl GeoPoint,
    distance: f64,
    bearing: f64,
    unit: Unit,
) -> P {
    let lat1 = origin.lat_rad();
    let lon1 = origin.lon_rad();
    let bearing = degrees_to_radians(bearing);
    let angle = unit.length_to_radians(distance);

    let lat2 = (lat1.sin() * angle.cos() + lat1.cos() * angle.sin() * bearing.cos()).asin();
    let lon2 = lon1
        + (bearing.sin() * angle.sin() * lat1.cos()).atan2(angle.cos() - lat1.sin() * lat2.sin());

    P::lonlat(radians_to_degrees(lon2), radians_to_degrees(lat2))
}

/// Point halfway between the two points on the great circle path connecting them.
pub fn midpoint<P: NewGeoPoint>(from: &impl GeoPoint, to: &impl GeoPoint) -> P {
    let half = distance(from, to, Unit::Miles) / 2.0;
    destination(from, half, bearing(from, to), Unit::Miles)
}

/// Point at the given `distance` along the line.
///
/// The segment containing the requested position is found by summing great circle lengths of the segments, and
/// the point is then interpolated linearly in lon/lat coordinates inside that segment.
///
/// * `distance <= 0` returns the first point of the line,
/// * `distance` larger than the length of the line returns the last point.
///
/// Returns [`GeometryError::DegenerateGeometry`] for an empty line and [`GeometryError::InvalidArgument`] if
/// the `distance` is NaN.
pub fn along<P: GeoPoint>(line: &[P], distance: f64, unit: Unit) -> Result<Point, GeometryError> {
    let (Some(first), Some(last)) = (line.first(), line.last()) else {
        return Err(GeometryError::DegenerateGeometry {
            required: 1,
            actual: 0,
        });
    };

    if distance.is_nan() {
        return Err(GeometryError::InvalidArgument(
            "distance along the line is NaN".into(),
        ));
    }

    if distance <= 0.0 {
        return Ok(Point::from_point(first));
    }

    let mut travelled = 0.0;
    for pair in line.windows(2) {
        let segment = Segment(&pair[0], &pair[1]);
        let segment_length = self::distance(segment.0, segment.1, unit);

        if travelled + segment_length >= distance {
            if segment_length == 0.0 {
                return Ok(Point::from_point(segment.1));
            }

            return Ok(segment.interpolate((distance - travelled) / segment_length));
        }

        travelled += segment_length;
    }

    Ok(Point::from_point(last))
}

/// Length of a contour, the sum of great circle lengths of all its segments.
///
/// For closed contours this includes the closing segment. Contours with fewer than 2 points have zero length.
pub fn length(contour: &impl Contour, unit: Unit) -> f64 {
    contour
        .iter_segments()
        .map(|Segment(from, to)| distance(from, to, unit))
        .sum()
}

/// Total length of all rings of a polygon.
pub fn polygon_length(polygon: &impl Polygon, unit: Unit) -> f64 {
    polygon.iter_rings().map(|ring| length(ring, unit)).sum()
}

/// Total length of all rings of all polygons of a multipolygon.
pub fn multi_polygon_length(multi_polygon: &impl MultiPolygon, unit: Unit) -> f64 {
    multi_polygon
        .polygons()
        .map(|polygon| polygon_length(polygon, unit))
        .sum()
}

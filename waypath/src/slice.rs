//! Snapping points to a line and cutting parts of a line.
//!
//! Projection of a point onto a line is planar: the point is projected onto every segment of the line in lon/lat
//! coordinates, and the projection with the smallest squared distance to the point wins. Distances *along* the
//! line are great circle distances, see [`measurement`](crate::measurement).

use serde::{Deserialize, Serialize};
use waypath_types::geo::GeoPoint;
use waypath_types::impls::{LineString, Point};
use waypath_types::{GeometryError, Segment, Unit};

use crate::measurement::distance;

/// Result of projecting a point onto a line, see [`nearest_point_on_line`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NearestPoint {
    /// The point of the line closest to the query point.
    pub point: Point,
    /// Index of the segment containing the point. Segment `i` connects vertices `i` and `i + 1`.
    pub index: usize,
    /// Squared planar distance between the query point and `point`, in degrees².
    pub distance_sq: f64,
}

impl NearestPoint {
    /// Distance from the start of the `line` to the point, measured along the line.
    ///
    /// `line` must be the line this point was found on.
    pub fn location<P: GeoPoint>(&self, line: &[P], unit: Unit) -> f64 {
        let to_segment_start: f64 = line
            .windows(2)
            .take(self.index)
            .map(|pair| distance(&pair[0], &pair[1], unit))
            .sum();
        let in_segment = line
            .get(self.index)
            .map_or(0.0, |vertex| distance(vertex, &self.point, unit));

        to_segment_start + in_segment
    }

    fn precedes<P: GeoPoint>(&self, other: &NearestPoint, line: &[P]) -> bool {
        if self.index != other.index {
            return self.index < other.index;
        }

        let segment_start = &line[self.index];
        segment_start.distance_sq(&self.point) <= segment_start.distance_sq(&other.point)
    }
}

/// Finds the point of the `line` closest to the given `point`.
///
/// If the normal from the point falls outside of a segment, the nearer endpoint of the segment is used, so
/// points beyond the ends of the line snap to its first or last vertex. When several segments are equally close,
/// the first of them wins.
pub fn nearest_point_on_line<P: GeoPoint>(
    point: &impl GeoPoint,
    line: &[P],
) -> Result<NearestPoint, GeometryError> {
    GeometryError::check_point_count(2, line.len())?;
    if !point.is_finite() {
        return Err(GeometryError::InvalidArgument(format!(
            "cannot project point ({}, {}) onto a line",
            point.lon(),
            point.lat()
        )));
    }

    let mut nearest: Option<NearestPoint> = None;
    for (index, pair) in line.windows(2).enumerate() {
        let candidate: Point = Segment(&pair[0], &pair[1]).closest_point(point);
        let distance_sq = candidate.distance_sq(point);

        if nearest.is_some_and(|nearest| nearest.distance_sq <= distance_sq) {
            continue;
        }

        nearest = Some(NearestPoint {
            point: candidate,
            index,
            distance_sq,
        });
    }

    nearest.ok_or(GeometryError::DegenerateGeometry {
        required: 2,
        actual: line.len(),
    })
}

/// Part of the `line` between the projections of the `start` and `stop` points onto it.
///
/// The result always follows the direction of the source line: if `stop` projects before `start`, the two are
/// swapped. Projections are ordered by segment index, and projections onto the same segment by their position
/// along it, so the caller's order of `start` and `stop` never matters.
///
/// The result starts and ends with the projected points, and contains every vertex of the line between them
/// unchanged, repeated vertices included. A projected end point is not emitted again if it coincides with the
/// adjacent vertex. The result has at least 2 points even if both projections coincide.
///
/// # Errors
///
/// * [`GeometryError::DegenerateGeometry`] if the line has fewer than 2 points,
/// * [`GeometryError::InvalidArgument`] if `start` and `stop` are the same point or any of them is not finite.
pub fn line_slice<P: GeoPoint>(
    start: &impl GeoPoint,
    stop: &impl GeoPoint,
    line: &[P],
) -> Result<LineString, GeometryError> {
    GeometryError::check_point_count(2, line.len())?;
    if start.same_position(stop) {
        return Err(GeometryError::InvalidArgument(
            "start and stop points of a slice are the same".into(),
        ));
    }

    let first = nearest_point_on_line(start, line)?;
    let second = nearest_point_on_line(stop, line)?;
    let (from, to) = if second.precedes(&first, line) {
        (second, first)
    } else {
        (first, second)
    };

    log::debug!(
        "Slicing line of {} points from segment {} to segment {}",
        line.len(),
        from.index,
        to.index
    );

    let vertices = &line[from.index + 1..=to.index];
    let skip_first = vertices
        .first()
        .is_some_and(|vertex| vertex.same_position(&from.point));

    let mut points = Vec::with_capacity(vertices.len() + 2);
    points.push(from.point);
    points.extend(
        vertices
            .iter()
            .skip(usize::from(skip_first))
            .map(Point::from_point),
    );

    if points.len() < 2 || !to.point.same_position(&points[points.len() - 1]) {
        points.push(to.point);
    }

    Ok(LineString::new(points))
}

/// Part of the `line` between two distances along it.
///
/// Distances are measured from the start of the line in the given `unit`, and the end points are placed the
/// same way as by [`along`](crate::measurement::along). If `stop_distance` exceeds the length of the line, the
/// slice ends at the last vertex. If `stop_distance` is less than `start_distance`, the two are swapped.
///
/// # Errors
///
/// * [`GeometryError::DegenerateGeometry`] if the line has fewer than 2 points,
/// * [`GeometryError::InvalidArgument`] if the distances are equal, negative or not finite, or if the start
///   position is at or beyond the end of the line.
pub fn line_slice_along<P: GeoPoint>(
    line: &[P],
    start_distance: f64,
    stop_distance: f64,
    unit: Unit,
) -> Result<LineString, GeometryError> {
    GeometryError::check_point_count(2, line.len())?;

    for value in [start_distance, stop_distance] {
        if !value.is_finite() || value < 0.0 {
            return Err(GeometryError::InvalidArgument(format!(
                "distance along the line must be a non-negative number, but is {value}"
            )));
        }
    }
    if start_distance == stop_distance {
        return Err(GeometryError::InvalidArgument(
            "start and stop distances of a slice are the same".into(),
        ));
    }

    let start = start_distance.min(stop_distance);
    let stop = start_distance.max(stop_distance);

    let mut points: Vec<Point> = vec![];
    let mut travelled = 0.0;
    for pair in line.windows(2) {
        let segment = Segment(&pair[0], &pair[1]);
        let segment_length = distance(segment.0, segment.1, unit);
        let segment_end = travelled + segment_length;

        if points.is_empty() && start <= segment_end {
            points.push(point_in_segment(segment, start - travelled, segment_length));
        }

        if !points.is_empty() {
            if stop <= segment_end {
                push_distinct(
                    &mut points,
                    point_in_segment(segment, stop - travelled, segment_length),
                );
                break;
            }

            push_distinct(&mut points, Point::from_point(segment.1));
        }

        travelled = segment_end;
    }

    if points.len() < 2 {
        return Err(GeometryError::InvalidArgument(format!(
            "start position {start} is beyond the end of the line"
        )));
    }

    Ok(LineString::new(points))
}

fn point_in_segment<P: GeoPoint>(segment: Segment<'_, P>, offset: f64, segment_length: f64) -> Point {
    if segment_length == 0.0 {
        return Point::from_point(segment.1);
    }

    segment.interpolate((offset / segment_length).clamp(0.0, 1.0))
}

fn push_distinct(points: &mut Vec<Point>, point: Point) {
    if !points.last().is_some_and(|last| last.same_position(&point)) {
        points.push(point);
    }
}

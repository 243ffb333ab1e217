//! Polyline simplification.
//!
//! Reduces the number of points of a path while keeping its shape within the given tolerance. Simplification
//! is done in two stages:
//!
//! 1. radial distance filter: consecutive points closer than the tolerance to the last kept point are dropped.
//!    This stage is cheap but lossy, and is skipped when the highest quality is requested;
//! 2. Ramer-Douglas-Peucker: a point is kept only if it deviates from the chord of its range by more than the
//!    tolerance.
//!
//! All distances are planar and measured in the units of the coordinates, so the tolerance is given in degrees,
//! not in meters.

use serde::{Deserialize, Serialize};
use waypath_types::geo::GeoPoint;
use waypath_types::Segment;

/// Parameters of the [`simplify_with`] function.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimplifyOptions {
    /// Maximum allowed deviation of the simplified path from the original one, in the units of the coordinates.
    pub tolerance: f64,
    /// Skip the radial distance filter. Slower, but gives better results.
    pub highest_quality: bool,
}

impl Default for SimplifyOptions {
    fn default() -> Self {
        Self {
            tolerance: 1.0,
            highest_quality: false,
        }
    }
}

/// Simplifies the path. See [module documentation](self) for details.
///
/// The first and the last points are always kept, and the kept points are returned in their original order.
/// Paths with 2 points or less, and any path simplified with zero tolerance in highest quality mode, are
/// returned unchanged.
pub fn simplify<P: GeoPoint + Clone>(points: &[P], tolerance: f64, highest_quality: bool) -> Vec<P> {
    simplify_with(
        points,
        &SimplifyOptions {
            tolerance,
            highest_quality,
        },
    )
}

/// Same as [`simplify`], with the parameters given as [`SimplifyOptions`].
pub fn simplify_with<P: GeoPoint + Clone>(points: &[P], options: &SimplifyOptions) -> Vec<P> {
    if points.len() <= 2 || (options.tolerance == 0.0 && options.highest_quality) {
        return points.to_vec();
    }

    let sq_tolerance = options.tolerance * options.tolerance;
    let candidates = if options.highest_quality {
        points.iter().collect()
    } else {
        radial_distance(points, sq_tolerance)
    };

    let keep = douglas_peucker(&candidates, sq_tolerance);
    let simplified: Vec<P> = candidates
        .into_iter()
        .zip(keep)
        .filter_map(|(point, keep)| keep.then(|| point.clone()))
        .collect();

    log::debug!(
        "Simplified path of {} points to {} points with tolerance {}",
        points.len(),
        simplified.len(),
        options.tolerance
    );

    simplified
}

fn radial_distance<P: GeoPoint>(points: &[P], sq_tolerance: f64) -> Vec<&P> {
    let mut kept = Vec::with_capacity(points.len());
    let Some((first, rest)) = points.split_first() else {
        return kept;
    };

    kept.push(first);
    let mut prev = first;
    for point in rest {
        if point.distance_sq(prev) > sq_tolerance {
            kept.push(point);
            prev = point;
        }
    }

    if let Some(last) = rest.last() {
        if !std::ptr::eq(prev, last) {
            kept.push(last);
        }
    }

    kept
}

/// Returns a mask of the points to keep.
fn douglas_peucker<P: GeoPoint>(points: &[P], sq_tolerance: f64) -> Vec<bool> {
    let mut keep = vec![false; points.len()];
    let Some(last) = points.len().checked_sub(1) else {
        return keep;
    };

    keep[0] = true;
    keep[last] = true;

    let mut ranges = vec![(0, last)];
    while let Some((first, last)) = ranges.pop() {
        let chord = Segment(&points[first], &points[last]);

        let mut max_sq_dist = sq_tolerance;
        let mut farthest = None;
        for (index, point) in points.iter().enumerate().take(last).skip(first + 1) {
            let sq_dist = chord.distance_to_point_sq(point);
            if sq_dist > max_sq_dist {
                farthest = Some(index);
                max_sq_dist = sq_dist;
            }
        }

        if let Some(index) = farthest {
            keep[index] = true;
            if index - first > 1 {
                ranges.push((first, index));
            }
            if last - index > 1 {
                ranges.push((index, last));
            }
        }
    }

    keep
}

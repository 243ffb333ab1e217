use serde::{Deserialize, Serialize};

use crate::contour::Contour;
use crate::impls::Point;

/// Open sequence of points. The order of the points defines direction of the path.
#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
pub struct LineString {
    points: Vec<Point>,
}

impl std::ops::Deref for LineString {
    type Target = [Point];

    fn deref(&self) -> &Self::Target {
        &self.points
    }
}

impl LineString {
    /// Creates a new line string.
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Points of the line string.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Consumes the line string and returns its points.
    pub fn into_points(self) -> Vec<Point> {
        self.points
    }
}

impl From<Vec<Point>> for LineString {
    fn from(points: Vec<Point>) -> Self {
        Self::new(points)
    }
}

impl FromIterator<Point> for LineString {
    fn from_iter<T: IntoIterator<Item = Point>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl Contour for LineString {
    type Point = Point;

    fn is_closed(&self) -> bool {
        false
    }

    fn iter_points(&self) -> impl Iterator<Item = &'_ Point> {
        self.points.iter()
    }
}

/// Closed sequence of points used as a boundary of a polygon.
///
/// By convention the last point repeats the first one. This is not enforced: a ring without the repeated point
/// describes the same boundary.
#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
pub struct LinearRing {
    points: Vec<Point>,
}

impl LinearRing {
    /// Creates a new ring.
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Points of the ring.
    pub fn points(&self) -> &[Point] {
        &self.points
    }
}

impl From<Vec<Point>> for LinearRing {
    fn from(points: Vec<Point>) -> Self {
        Self::new(points)
    }
}

impl Contour for LinearRing {
    type Point = Point;

    fn is_closed(&self) -> bool {
        true
    }

    fn iter_points(&self) -> impl Iterator<Item = &'_ Point> {
        self.points.iter()
    }
}

//! Axis aligned lon/lat bounding box, see [`BoundingBox`].

use serde::{Deserialize, Serialize};

use crate::geo::GeoPoint;

/// Axis aligned rectangle in lon/lat coordinates.
///
/// Boxes crossing the antimeridian are not supported: `west` is always less than or equal to `east`.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Minimum longitude.
    pub west: f64,
    /// Minimum latitude.
    pub south: f64,
    /// Maximum longitude.
    pub east: f64,
    /// Maximum latitude.
    pub north: f64,
}

impl BoundingBox {
    /// Creates a new box.
    pub fn new(west: f64, south: f64, east: f64, north: f64) -> Self {
        Self {
            west,
            south,
            east,
            north,
        }
    }

    /// Zero-size box at the position of the point.
    pub fn from_point(p: &impl GeoPoint) -> Self {
        Self::new(p.lon(), p.lat(), p.lon(), p.lat())
    }

    /// Smallest box containing all the points, or `None` if the iterator is empty.
    pub fn from_points<'a, P: GeoPoint + 'a>(mut points: impl Iterator<Item = &'a P>) -> Option<Self> {
        let first = points.next()?;
        Some(points.fold(Self::from_point(first), |bbox, p| {
            bbox.merge(Self::from_point(p))
        }))
    }

    /// Smallest box containing both boxes.
    pub fn merge(&self, other: Self) -> Self {
        Self {
            west: self.west.min(other.west),
            south: self.south.min(other.south),
            east: self.east.max(other.east),
            north: self.north.max(other.north),
        }
    }

    /// Returns true if the point is inside the box or on its border.
    pub fn contains(&self, point: &impl GeoPoint) -> bool {
        point.lon() >= self.west
            && point.lon() <= self.east
            && point.lat() >= self.south
            && point.lat() <= self.north
    }

    /// The box as a `[west, south, east, north]` array, the order used by GeoJSON `bbox` members.
    pub fn to_array(&self) -> [f64; 4] {
        [self.west, self.south, self.east, self.north]
    }
}

impl FromIterator<BoundingBox> for Option<BoundingBox> {
    fn from_iter<T: IntoIterator<Item = BoundingBox>>(iter: T) -> Self {
        iter.into_iter().reduce(|acc, bbox| acc.merge(bbox))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::impls::Point;

    #[test]
    fn from_points() {
        let points = [
            Point::new(-75.343, 39.984),
            Point::new(-75.534, 39.123),
            Point::new(-75.1, 39.5),
        ];
        let bbox = BoundingBox::from_points(points.iter()).unwrap();
        assert_eq!(bbox.to_array(), [-75.534, 39.123, -75.1, 39.984]);
        assert!(bbox.contains(&Point::new(-75.3, 39.5)));
        assert!(bbox.contains(&Point::new(-75.1, 39.984)));
        assert!(!bbox.contains(&Point::new(-75.0, 39.5)));
    }

    #[test]
    fn collect_merges_boxes() {
        let merged: Option<BoundingBox> = vec![
            BoundingBox::new(0.0, 0.0, 1.0, 1.0),
            BoundingBox::new(-1.0, 0.5, 0.5, 3.0),
        ]
        .into_iter()
        .collect();
        assert_eq!(merged, Some(BoundingBox::new(-1.0, 0.0, 1.0, 3.0)));

        let empty: Option<BoundingBox> = Vec::<BoundingBox>::new().into_iter().collect();
        assert_eq!(empty, None);
    }
}

//! Contour is a sequence of points.
//!
//! Contours can be:
//! * **open** - the first and the last points of the contour are not connected. A route returned by a
//!   directions service is an open contour.
//! * **closed** - the first and the last points of the contour are connected. Rings of a polygon are closed
//!   contours.
//!
//! Unlike some other geometry models, a closed contour may or may not repeat its first point at the end. The
//! GeoJSON convention (`first == last`) is the usual one for [`LinearRing`](crate::impls::LinearRing), but
//! [`Contour::iter_segments`] yields the closing segment only when it is not already there, so both forms
//! describe the same set of edges.

use crate::bounding_box::BoundingBox;
use crate::geo::GeoPoint;
use crate::segment::Segment;

/// Sequence of points. See module level documentation for details.
pub trait Contour {
    /// Type of the points the contour is consisted of.
    type Point: GeoPoint;

    /// Whether the contour is closed.
    fn is_closed(&self) -> bool;

    /// Iterate over the points of the contour in their order.
    fn iter_points(&self) -> impl Iterator<Item = &'_ Self::Point>;

    /// Iterates over segments of the contour. For closed contours this includes the segment between the last and
    /// the first points of the contour, unless the last point repeats the first one.
    fn iter_segments(&self) -> impl Iterator<Item = Segment<'_, Self::Point>> {
        ContourSegmentIterator::new(self.iter_points(), self.is_closed())
    }

    /// Smallest lon/lat box containing all points of the contour, or `None` for an empty contour.
    fn bounding_box(&self) -> Option<BoundingBox> {
        BoundingBox::from_points(self.iter_points())
    }
}

/// Iterator of contour segments.
#[derive(Debug, Clone)]
pub struct ContourSegmentIterator<'a, P, Iter>
where
    Iter: Iterator<Item = &'a P>,
{
    points_iter: Iter,
    is_closed: bool,
    first_point: Option<&'a P>,
    prev_point: Option<&'a P>,
    finished: bool,
}

impl<'a, P, Iter> ContourSegmentIterator<'a, P, Iter>
where
    Iter: Iterator<Item = &'a P>,
{
    fn new(points_iter: Iter, is_closed: bool) -> Self {
        Self {
            points_iter,
            is_closed,
            first_point: None,
            prev_point: None,
            finished: false,
        }
    }
}

impl<'a, P, Iter> Iterator for ContourSegmentIterator<'a, P, Iter>
where
    P: GeoPoint,
    Iter: Iterator<Item = &'a P>,
{
    type Item = Segment<'a, P>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        match self.points_iter.next() {
            Some(next_point) => match self.prev_point.replace(next_point) {
                Some(prev) => Some(Segment(prev, next_point)),
                None => {
                    self.first_point = Some(next_point);
                    self.next()
                }
            },
            None => {
                self.finished = true;
                if !self.is_closed {
                    return None;
                }

                let (first, last) = (self.first_point?, self.prev_point?);
                if std::ptr::eq(first, last) || last.same_position(first) {
                    None
                } else {
                    Some(Segment(last, first))
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::impls::{LineString, LinearRing, Point};

    #[test]
    fn iter_segments_open() {
        let contour = LineString::new(vec![Point::new(0.0, 0.0)]);
        assert_eq!(contour.iter_segments().count(), 0);

        let contour = LineString::new(vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0)]);
        assert_eq!(contour.iter_segments().count(), 1);
        assert_eq!(
            contour.iter_segments().last(),
            Some(Segment(&Point::new(0.0, 0.0), &Point::new(1.0, 1.0)))
        );
    }

    #[test]
    fn iter_segments_closed_adds_closing_segment() {
        let ring = LinearRing::new(vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(1.0, 0.0),
        ]);
        assert_eq!(ring.iter_segments().count(), 3);
        assert_eq!(
            ring.iter_segments().last(),
            Some(Segment(&Point::new(1.0, 0.0), &Point::new(0.0, 0.0)))
        );
    }

    #[test]
    fn iter_segments_closed_with_repeated_first_point() {
        let ring = LinearRing::new(vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(1.0, 0.0),
            Point::new(0.0, 0.0),
        ]);
        assert_eq!(ring.iter_segments().count(), 3);

        let single = LinearRing::new(vec![Point::new(0.0, 0.0)]);
        assert_eq!(single.iter_segments().count(), 0);
    }

    #[test]
    fn bounding_box() {
        let contour = LineString::new(vec![
            Point::new(-1.0, 3.0),
            Point::new(2.0, -4.0),
            Point::new(0.5, 0.5),
        ]);
        assert_eq!(
            contour.bounding_box(),
            Some(BoundingBox::new(-1.0, -4.0, 2.0, 3.0))
        );
        assert_eq!(LineString::new(vec![]).bounding_box(), None);
    }
}

use geo_types::LineString;

use crate::impls::LinearRing;
use crate::polygon::Polygon;

impl Polygon for geo_types::Polygon<f64> {
    type Ring = LineString<f64>;

    fn outer_ring(&self) -> &Self::Ring {
        self.exterior()
    }

    fn inner_rings(&self) -> impl Iterator<Item = &'_ Self::Ring> {
        self.interiors().iter()
    }
}

impl From<geo_types::Polygon<f64>> for crate::impls::Polygon {
    fn from(value: geo_types::Polygon<f64>) -> Self {
        let (exterior, interiors) = value.into_inner();
        crate::impls::Polygon::new(
            LinearRing::from(exterior),
            interiors.into_iter().map(LinearRing::from).collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use geo_types::polygon;

    use super::*;
    use crate::impls::Point;

    #[test]
    fn contains_point_with_interior() {
        let polygon = polygon!(
            exterior: [
                (x: 0.0, y: 0.0),
                (x: 10.0, y: 0.0),
                (x: 10.0, y: 10.0),
                (x: 0.0, y: 10.0),
            ],
            interiors: [
                [
                    (x: 4.0, y: 4.0),
                    (x: 6.0, y: 4.0),
                    (x: 6.0, y: 6.0),
                    (x: 4.0, y: 6.0),
                ],
            ],
        );

        assert!(polygon.contains_point(&Point::new(1.0, 1.0)));
        assert!(!polygon.contains_point(&Point::new(5.0, 5.0)));

        let converted = crate::impls::Polygon::from(polygon);
        assert_eq!(converted.inner_rings.len(), 1);
        assert!(converted.contains_point(&Point::new(1.0, 1.0)));
        assert!(!converted.contains_point(&Point::new(5.0, 5.0)));
    }
}

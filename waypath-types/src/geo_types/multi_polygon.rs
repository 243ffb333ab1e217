use geo_types::{MultiPolygon, Polygon};

impl crate::multi_polygon::MultiPolygon for MultiPolygon<f64> {
    type Polygon = Polygon<f64>;

    fn polygons(&self) -> impl Iterator<Item = &Self::Polygon> {
        self.0.iter()
    }
}

impl From<MultiPolygon<f64>> for crate::impls::MultiPolygon {
    fn from(value: MultiPolygon<f64>) -> Self {
        value.0.into_iter().map(Into::into).collect()
    }
}

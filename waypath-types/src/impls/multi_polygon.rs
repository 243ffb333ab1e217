use serde::{Deserialize, Serialize};

use crate::impls::Polygon;

/// Simple implementation of the [`MultiPolygon`](crate::MultiPolygon) trait.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct MultiPolygon {
    parts: Vec<Polygon>,
}

impl MultiPolygon {
    /// Creates a new multipolygon.
    pub fn new(parts: Vec<Polygon>) -> Self {
        Self { parts }
    }

    /// Member polygons.
    pub fn parts(&self) -> &[Polygon] {
        &self.parts
    }
}

impl crate::multi_polygon::MultiPolygon for MultiPolygon {
    type Polygon = Polygon;

    fn polygons(&self) -> impl Iterator<Item = &Self::Polygon> {
        self.parts.iter()
    }
}

impl From<Vec<Polygon>> for MultiPolygon {
    fn from(value: Vec<Polygon>) -> Self {
        Self::new(value)
    }
}

impl FromIterator<Polygon> for MultiPolygon {
    fn from_iter<T: IntoIterator<Item = Polygon>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

use serde::{Deserialize, Serialize};

use crate::error::GeometryError;
use crate::impls::LinearRing;

/// Simple implementation of the [`Polygon`](crate::Polygon) trait.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Polygon {
    /// Outer ring.
    pub outer_ring: LinearRing,
    /// Inner rings (holes).
    pub inner_rings: Vec<LinearRing>,
}

impl Polygon {
    /// Creates a new polygon.
    pub fn new(outer_ring: LinearRing, inner_rings: Vec<LinearRing>) -> Self {
        Self {
            outer_ring,
            inner_rings,
        }
    }
}

impl crate::polygon::Polygon for Polygon {
    type Ring = LinearRing;

    fn outer_ring(&self) -> &Self::Ring {
        &self.outer_ring
    }

    fn inner_rings(&self) -> impl Iterator<Item = &'_ Self::Ring> {
        self.inner_rings.iter()
    }
}

impl From<LinearRing> for Polygon {
    fn from(value: LinearRing) -> Self {
        Self {
            outer_ring: value,
            inner_rings: vec![],
        }
    }
}

impl TryFrom<Vec<LinearRing>> for Polygon {
    type Error = GeometryError;

    /// Takes the rings in GeoJSON order: the outer ring first, then the holes.
    fn try_from(mut rings: Vec<LinearRing>) -> Result<Self, Self::Error> {
        if rings.is_empty() {
            return Err(GeometryError::DegenerateGeometry {
                required: 1,
                actual: 0,
            });
        }

        let outer_ring = rings.remove(0);
        Ok(Self::new(outer_ring, rings))
    }
}

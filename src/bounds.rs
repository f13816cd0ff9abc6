use crate::vector::Vector3d;

/// Axis-aligned bounding box in 3D space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
    pub min: [f64; 3],
    pub max: [f64; 3],
}

impl BoundingBox {
    pub fn new(min: [f64; 3], max: [f64; 3]) -> Self {
        Self { min, max }
    }

    /// Smallest box holding all `points`. Returns `None` for an empty iterator.
    pub fn from_points(points: impl IntoIterator<Item = Vector3d>) -> Option<Self> {
        let mut points = points.into_iter();
        let first = points.next()?.to_array();
        let mut bounds = Self::new(first, first);
        for p in points {
            let p = p.to_array();
            for i in 0..3 {
                bounds.min[i] = bounds.min[i].min(p[i]);
                bounds.max[i] = bounds.max[i].max(p[i]);
            }
        }
        Some(bounds)
    }

    pub fn contains(&self, point: Vector3d) -> bool {
        let p = point.to_array();
        (0..3).all(|i| self.min[i] <= p[i] && p[i] <= self.max[i])
    }

    pub fn contains_box(&self, other: &BoundingBox) -> bool {
        (0..3).all(|i| self.min[i] <= other.min[i] && other.max[i] <= self.max[i])
    }

    /// True if the boxes share at least one point (touching counts).
    pub fn overlaps(&self, other: &BoundingBox) -> bool {
        (0..3).all(|i| self.min[i] <= other.max[i] && other.min[i] <= self.max[i])
    }
}

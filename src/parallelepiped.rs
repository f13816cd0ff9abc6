use crate::bounds::BoundingBox;
use crate::error::GeometryError;
use crate::parallelogram::Parallelogram;
use crate::vector::{cross, dot, Vector3d};

/// A skewed box: the `top` parallelogram and its translate `bottom`.
///
/// Built from four points: `a1, b1, c1` span the top face and `a2 - a1` is the
/// extrusion vector applied to every top corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parallelepiped {
    pub top: Parallelogram,
    pub bottom: Parallelogram,
}

impl Parallelepiped {
    /// Creates a parallelepiped without validating the input points.
    ///
    /// Collinear or coincident points produce undefined face normals; every predicate
    /// still returns a boolean, but it carries no meaning. Use [`Parallelepiped::try_new`]
    /// to reject such input.
    pub fn new(a1: Vector3d, b1: Vector3d, c1: Vector3d, a2: Vector3d) -> Self {
        let top = Parallelogram::new(a1, b1, c1);
        Self {
            top,
            bottom: top.translated(a2 - a1),
        }
    }

    /// Creates a parallelepiped, rejecting zero-length base edges, collinear base points
    /// and an extrusion that stays in the base plane.
    pub fn try_new(
        a1: Vector3d,
        b1: Vector3d,
        c1: Vector3d,
        a2: Vector3d,
    ) -> Result<Self, GeometryError> {
        if a1 == b1 || b1 == c1 {
            return Err(GeometryError::DegenerateEdge);
        }
        let normal = cross(b1 - a1, c1 - a1);
        if normal == Vector3d::ZERO {
            return Err(GeometryError::CollinearBase);
        }
        if dot(normal, a2 - a1) == 0.0 {
            return Err(GeometryError::FlatSolid);
        }
        Ok(Self::new(a1, b1, c1, a2))
    }

    /// Builds from the 12 coordinates `a1, b1, c1, a2` laid out as flat xyz triples.
    pub fn from_coords(coords: &[f64; 12]) -> Self {
        let p = |i: usize| Vector3d::new(coords[i * 3], coords[i * 3 + 1], coords[i * 3 + 2]);
        Self::new(p(0), p(1), p(2), p(3))
    }

    /// The six faces: top, bottom, then the four lateral faces walking around the top.
    pub fn sides(&self) -> [Parallelogram; 6] {
        let (top, bottom) = (&self.top, &self.bottom);
        [
            *top,
            *bottom,
            Parallelogram::new(top.a, top.b, bottom.b),
            Parallelogram::new(top.b, top.c, bottom.c),
            Parallelogram::new(top.c, top.d, bottom.d),
            Parallelogram::new(top.d, top.a, bottom.a),
        ]
    }

    /// Top corners `a, b, c, d` followed by bottom corners `a, b, c, d`.
    pub fn vertices(&self) -> [Vector3d; 8] {
        let [ta, tb, tc, td] = self.top.corners();
        let [ba, bb, bc, bd] = self.bottom.corners();
        [ta, tb, tc, td, ba, bb, bc, bd]
    }

    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::from_points(self.vertices()).expect("a parallelepiped has 8 vertices")
    }

    /// Same solid shifted by `offset`.
    pub fn translated(&self, offset: Vector3d) -> Self {
        Self {
            top: self.top.translated(offset),
            bottom: self.bottom.translated(offset),
        }
    }
}

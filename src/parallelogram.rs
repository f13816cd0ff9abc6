use crate::primitives::{Plane, Segment};
use crate::vector::{cross, Vector3d};

/// A planar quadrilateral `a, b, c, d` with `a-b` parallel to `d-c` and `b-c` parallel to `a-d`.
///
/// Only three corners are given; `d = c + (a - b)` is derived, which keeps all four
/// corners coplanar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parallelogram {
    pub a: Vector3d,
    pub b: Vector3d,
    pub c: Vector3d,
    pub d: Vector3d,
}

impl Parallelogram {
    pub fn new(a: Vector3d, b: Vector3d, c: Vector3d) -> Self {
        Self {
            a,
            b,
            c,
            d: c + (a - b),
        }
    }

    /// Supporting plane, anchored at `a` with normal `(b - a) x (c - a)`.
    pub fn plane(&self) -> Plane {
        Plane {
            normal: cross(self.b - self.a, self.c - self.a),
            point: self.a,
        }
    }

    /// Boundary segments in cyclic order: a->b, b->c, c->d, d->a.
    pub fn sides(&self) -> [Segment; 4] {
        [
            Segment::new(self.a, self.b),
            Segment::new(self.b, self.c),
            Segment::new(self.c, self.d),
            Segment::new(self.d, self.a),
        ]
    }

    pub fn corners(&self) -> [Vector3d; 4] {
        [self.a, self.b, self.c, self.d]
    }

    pub(crate) fn translated(&self, offset: Vector3d) -> Self {
        Self::new(self.a + offset, self.b + offset, self.c + offset)
    }
}

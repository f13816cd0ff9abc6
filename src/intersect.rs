//! Intersection predicates, each built on the one before it:
//! plane/line, point/parallelogram, point/segment, segment/parallelogram,
//! parallelogram/parallelogram and finally parallelepiped/parallelepiped.

use crate::parallelepiped::Parallelepiped;
use crate::parallelogram::Parallelogram;
use crate::primitives::{Line, Plane, Segment};
use crate::vector::{almost_equal, cos, distance, dot, Vector3d};

/// Binary intersection test between two kinds of geometry.
///
/// The relation is not symmetric for every pair of types: a parallelogram only tests
/// the edges of `other` against itself.
pub trait Intersects<Other> {
    fn intersects(&self, other: &Other) -> bool;
}

impl Intersects<Segment> for Parallelogram {
    fn intersects(&self, other: &Segment) -> bool {
        segment_intersects_parallelogram(self, other)
    }
}

impl Intersects<Parallelogram> for Parallelogram {
    fn intersects(&self, other: &Parallelogram) -> bool {
        parallelogram_intersects_parallelogram(self, other)
    }
}

impl Intersects<Parallelepiped> for Parallelepiped {
    fn intersects(&self, other: &Parallelepiped) -> bool {
        parallelepiped_intersects_parallelepiped(self, other)
    }
}

/// Single crossing point of an infinite line and an infinite plane.
///
/// Returns `None` only when the line direction is exactly perpendicular to the normal.
pub fn plane_line_intersection(plane: &Plane, line: &Line) -> Option<Vector3d> {
    let denominator = dot(line.direction, plane.normal);
    if denominator == 0.0 {
        return None;
    }
    // plane: dot(normal, p) + d = 0
    let d = -dot(plane.normal, plane.point);
    Some(line.point - line.direction * ((dot(line.point, plane.normal) + d) / denominator))
}

/// True if the whole line lies in the plane.
pub fn line_belongs_to_plane(plane: &Plane, line: &Line) -> bool {
    let mut probe = line.point;
    // anchor and probe must differ, otherwise the second cosine is taken against a zero vector
    if probe == plane.point {
        probe += line.direction;
    }
    almost_equal(0.0, cos(plane.normal, line.direction))
        && almost_equal(0.0, cos(plane.normal, plane.point - probe))
}

/// Containment test using the projections of `point - a` onto the edges `d - a` and `b - a`,
/// each divided by the edge length and accepted in `[0, 1]`.
///
/// This is exact for unit, orthogonal edges only. Longer or skewed edges shrink or distort
/// the accepted region.
pub fn point_belongs_to_parallelogram(par: &Parallelogram, point: Vector3d) -> bool {
    let relative = point - par.a;
    let e1 = par.d - par.a;
    let e2 = par.b - par.a;
    let n = dot(e1, relative) / e1.length();
    let m = dot(e2, relative) / e2.length();
    (0.0..=1.0).contains(&n) && (0.0..=1.0).contains(&m)
}

pub fn point_belongs_to_segment(segment: &Segment, point: Vector3d) -> bool {
    almost_equal(
        segment.length(),
        distance(segment.begin, point) + distance(segment.end, point),
    )
}

/// A segment lying in the parallelogram's plane only counts when one of its endpoints is
/// inside; a coplanar segment crossing the interior with both ends outside is missed.
pub fn segment_intersects_parallelogram(par: &Parallelogram, segment: &Segment) -> bool {
    let plane = par.plane();
    let line = segment.line();
    if line_belongs_to_plane(&plane, &line) {
        return point_belongs_to_parallelogram(par, segment.begin)
            || point_belongs_to_parallelogram(par, segment.end);
    }
    match plane_line_intersection(&plane, &line) {
        Some(point) => {
            point_belongs_to_segment(segment, point) && point_belongs_to_parallelogram(par, point)
        }
        None => false,
    }
}

/// True if any edge of `p2` touches `p1`.
pub fn parallelogram_intersects_parallelogram(p1: &Parallelogram, p2: &Parallelogram) -> bool {
    p2.sides()
        .iter()
        .any(|side| segment_intersects_parallelogram(p1, side))
}

/// Surface test over all 6 x 6 face pairs, stopping at the first hit.
///
/// Solids count as intersecting when their boundaries touch. A solid nested strictly
/// inside the other without boundary contact is not reported.
pub fn parallelepiped_intersects_parallelepiped(s1: &Parallelepiped, s2: &Parallelepiped) -> bool {
    let sides2 = s2.sides();
    for side1 in &s1.sides() {
        for side2 in &sides2 {
            if parallelogram_intersects_parallelogram(side1, side2) {
                return true;
            }
        }
    }
    false
}

/// Decides whether two parallelepipeds intersect.
pub fn intersects(s1: &Parallelepiped, s2: &Parallelepiped) -> bool {
    parallelepiped_intersects_parallelepiped(s1, s2)
}

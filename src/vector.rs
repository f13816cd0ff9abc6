use std::cmp::Ordering;
use std::fmt;
use std::ops::{Div, DivAssign, Mul, MulAssign};
use std::str::FromStr;

use crate::error::GeometryError;

/// Absolute tolerance used wherever two derived quantities are compared for coincidence.
pub const TOLERANCE: f64 = 1e-11;

/// A point or a free vector in 3D space.
///
/// Equality is exact and component-wise. Geometric predicates compare derived scalars
/// with [`almost_equal`] instead.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    PartialOrd,
    derive_more::Add,
    derive_more::AddAssign,
    derive_more::Sub,
    derive_more::SubAssign,
    derive_more::Neg,
)]
pub struct Vector3d {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3d {
    pub const ZERO: Vector3d = Vector3d { x: 0.0, y: 0.0, z: 0.0 };

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn length(&self) -> f64 {
        dot(*self, *self).sqrt()
    }

    pub fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Lexicographic total order over `(x, y, z)`, using `f64::total_cmp` per component.
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        self.x
            .total_cmp(&other.x)
            .then_with(|| self.y.total_cmp(&other.y))
            .then_with(|| self.z.total_cmp(&other.z))
    }
}

impl From<[f64; 3]> for Vector3d {
    fn from(p: [f64; 3]) -> Self {
        Self::new(p[0], p[1], p[2])
    }
}

impl From<Vector3d> for [f64; 3] {
    fn from(v: Vector3d) -> Self {
        v.to_array()
    }
}

impl Mul<f64> for Vector3d {
    type Output = Self;

    fn mul(mut self, rhs: f64) -> Self::Output {
        self *= rhs;
        self
    }
}

impl MulAssign<f64> for Vector3d {
    fn mul_assign(&mut self, rhs: f64) {
        self.x *= rhs;
        self.y *= rhs;
        self.z *= rhs;
    }
}

impl Div<f64> for Vector3d {
    type Output = Self;

    fn div(mut self, rhs: f64) -> Self::Output {
        self /= rhs;
        self
    }
}

impl DivAssign<f64> for Vector3d {
    fn div_assign(&mut self, rhs: f64) {
        self.x /= rhs;
        self.y /= rhs;
        self.z /= rhs;
    }
}

impl fmt::Display for Vector3d {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{},{})", self.x, self.y, self.z)
    }
}

/// Parses the terminal form `x y z`: three reals separated by whitespace.
impl FromStr for Vector3d {
    type Err = GeometryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split_whitespace().collect();
        if parts.len() != 3 {
            return Err(GeometryError::Parse {
                line: 0,
                reason: format!("expected 3 components, found {}", parts.len()),
            });
        }
        let mut coords = [0.0; 3];
        for (coord, part) in coords.iter_mut().zip(&parts) {
            *coord = part.parse::<f64>().map_err(|e| GeometryError::Parse {
                line: 0,
                reason: format!("invalid number '{}': {}", part, e),
            })?;
        }
        Ok(coords.into())
    }
}

pub fn dot(left: Vector3d, right: Vector3d) -> f64 {
    left.x * right.x + left.y * right.y + left.z * right.z
}

/// Right-handed cross product. Zero for parallel (or zero-length) inputs.
pub fn cross(left: Vector3d, right: Vector3d) -> Vector3d {
    Vector3d {
        x: left.y * right.z - left.z * right.y,
        y: left.z * right.x - left.x * right.z,
        z: left.x * right.y - left.y * right.x,
    }
}

pub fn almost_equal(left: f64, right: f64) -> bool {
    (right - left).abs() < TOLERANCE
}

/// Cosine of the angle between two vectors. NaN if either has zero length.
pub fn cos(left: Vector3d, right: Vector3d) -> f64 {
    dot(left, right) / (left.length() * right.length())
}

pub fn sin(left: Vector3d, right: Vector3d) -> Vector3d {
    cross(left, right) / (left.length() * right.length())
}

pub fn distance(p1: Vector3d, p2: Vector3d) -> f64 {
    (p1 - p2).length()
}

use crate::vector::Vector3d;

/// An infinite line through `point` along `direction`. The direction is not normalized.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    pub direction: Vector3d,
    pub point: Vector3d,
}

/// An infinite plane through `point`, perpendicular to `normal`. The normal is not normalized.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    pub normal: Vector3d,
    pub point: Vector3d,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub begin: Vector3d,
    pub end: Vector3d,
}

impl Segment {
    pub fn new(begin: Vector3d, end: Vector3d) -> Self {
        Self { begin, end }
    }

    /// Supporting line, directed from `begin` to `end` and anchored at `end`.
    pub fn line(&self) -> Line {
        Line {
            direction: self.end - self.begin,
            point: self.end,
        }
    }

    pub fn length(&self) -> f64 {
        (self.end - self.begin).length()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_line() {
        let s = Segment::new(Vector3d::new(12.0, 9.0, 43.0), Vector3d::new(2.0, 14.0, 44.0));
        let line = s.line();
        assert_eq!(line.direction, Vector3d::new(-10.0, 5.0, 1.0));
        assert_eq!(line.point, Vector3d::new(2.0, 14.0, 44.0));
    }

    #[test]
    fn test_segment_length() {
        let s = Segment::new(Vector3d::new(1.0, 1.0, 1.0), Vector3d::new(3.0, 4.0, 7.0));
        assert_eq!(s.length(), 7.0);
    }
}

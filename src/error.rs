use thiserror::Error;

/// Errors raised outside the geometric predicates: text input and validated construction.
#[derive(Debug, Error)]
pub enum GeometryError {
    /// `line` is 1-based; 0 when the text did not come from a multi-line source.
    #[error("parse error at line {line}: {reason}")]
    Parse { line: usize, reason: String },
    #[error("input ended at line {line} in the middle of a parallelepiped (4 points required)")]
    IncompleteSolid { line: usize },
    #[error("base edge has zero length")]
    DegenerateEdge,
    #[error("base points are collinear")]
    CollinearBase,
    #[error("extrusion point lies in the base plane")]
    FlatSolid,
    #[error("input ended before point {point} was read")]
    UnexpectedEof { point: String },
    #[error("sampling bounds are empty or not finite on axis {axis}")]
    InvalidBounds { axis: usize },
    #[error("maximum edge component must be finite and non-negative, got {0}")]
    InvalidEdgeLength(f64),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl GeometryError {
    /// Attaches a source line number to a parse error.
    pub(crate) fn at_line(self, line: usize) -> Self {
        match self {
            GeometryError::Parse { reason, .. } => GeometryError::Parse { line, reason },
            other => other,
        }
    }
}

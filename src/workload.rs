use crate::point::Point;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Boolean set operation applied between the subject and clip regions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClipOperation {
    Intersection,
    Union,
    Difference,
    Xor,
}

impl ClipOperation {
    pub const ALL: [ClipOperation; 4] = [
        ClipOperation::Intersection,
        ClipOperation::Union,
        ClipOperation::Difference,
        ClipOperation::Xor,
    ];

    /// Quartile step function over a probability in [0, 1).
    pub fn from_probability(p: f64) -> Self {
        if p >= 0.75 {
            ClipOperation::Xor
        } else if p >= 0.5 {
            ClipOperation::Union
        } else if p >= 0.25 {
            ClipOperation::Intersection
        } else {
            ClipOperation::Difference
        }
    }
}

impl fmt::Display for ClipOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ClipOperation::Intersection => "Intersection",
            ClipOperation::Union => "Union",
            ClipOperation::Difference => "Difference",
            ClipOperation::Xor => "Xor",
        };
        f.write_str(name)
    }
}

/// One unit of work: an operation plus the subject and clip ring sets it applies to.
///
/// Rings are open (the closing point is implied) and should hold at least three points.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClipExecutionData {
    pub operation: ClipOperation,
    pub subject: Vec<Vec<Point>>,
    pub clip: Vec<Vec<Point>>,
}

impl ClipExecutionData {
    pub fn new(operation: ClipOperation, subject: Vec<Vec<Point>>, clip: Vec<Vec<Point>>) -> Self {
        Self { operation, subject, clip }
    }

    pub fn vertex_count(&self) -> usize {
        self.subject.iter().chain(&self.clip).map(Vec::len).sum()
    }
}

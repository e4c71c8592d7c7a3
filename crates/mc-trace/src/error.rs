use core::fmt;

use mc_core::Point2i;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraceError {
    /// `prev - target` was not one of the 8 unit neighbor offsets.
    AlgorithmInvariant { target: Point2i, prev: Point2i },
}

impl fmt::Display for TraceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlgorithmInvariant { target, prev } => write!(
                f,
                "tracer invariant violated: ({}, {}) is not a neighbor of ({}, {})",
                prev.x, prev.y, target.x, target.y
            ),
        }
    }
}

impl std::error::Error for TraceError {}

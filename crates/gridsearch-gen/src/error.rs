//! Errors raised while generating or validating scenarios.

use std::fmt;

/// Errors that can occur when building a [`Scenario`](crate::Scenario).
#[derive(Debug, Clone, PartialEq)]
pub enum GenError {
    /// The requested side length is not positive.
    InvalidSize(i32),
    /// The wall probability is outside `[0, 1]`.
    InvalidProbability(f64),
    /// Random endpoints need at least two open cells.
    NotEnoughOpenCells { open: usize },
    /// The grid and endpoints break a scenario invariant.
    InvalidScenario(String),
}

impl fmt::Display for GenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize(n) => write!(f, "maze size must be positive, got {n}"),
            Self::InvalidProbability(p) => {
                write!(f, "block probability must be within [0, 1], got {p}")
            }
            Self::NotEnoughOpenCells { open } => write!(
                f,
                "need at least two open cells for random endpoints, found {open}"
            ),
            Self::InvalidScenario(s) => write!(f, "invalid scenario: {s}"),
        }
    }
}

impl std::error::Error for GenError {}

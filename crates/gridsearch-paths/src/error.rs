//! Precondition violations reported by the searches.

use std::fmt;

use gridsearch_core::Cell;

/// Which endpoint of a search a [`SearchError`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    Exit,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => f.write_str("start"),
            Self::Exit => f.write_str("exit"),
        }
    }
}

/// Malformed search input. An unreachable exit is not an error; it yields
/// an empty path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The endpoint lies outside the grid.
    OutOfBounds { role: Endpoint, cell: Cell },
    /// The endpoint sits on a blocked cell.
    Blocked { role: Endpoint, cell: Cell },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { role, cell } => write!(f, "{role} cell {cell} is out of bounds"),
            Self::Blocked { role, cell } => write!(f, "{role} cell {cell} is blocked"),
        }
    }
}

impl std::error::Error for SearchError {}

/// Error returned when parsing an unknown algorithm name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseAlgorithmError(pub String);

impl fmt::Display for ParseAlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown algorithm \u{201c}{}\u{201d} (expected bfs, dfs or astar)",
            self.0
        )
    }
}

impl std::error::Error for ParseAlgorithmError {}

use gridsearch_core::Cell;

use crate::stats::Instrumentation;

/// Outcome of one search: the path plus the counters gathered on the way.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult {
    /// Cells from start to exit inclusive; empty if the exit is unreachable.
    pub path: Vec<Cell>,
    /// Cells removed from the frontier and expanded (stale pops excluded).
    pub nodes_expanded: usize,
    /// Largest frontier size observed at an expansion.
    pub peak_frontier: usize,
}

impl SearchResult {
    pub(crate) fn new(path: Vec<Cell>, stats: Instrumentation) -> Self {
        Self {
            path,
            nodes_expanded: stats.nodes_expanded(),
            peak_frontier: stats.peak_frontier(),
        }
    }

    /// Whether a path was found.
    #[inline]
    pub fn found(&self) -> bool {
        !self.path.is_empty()
    }

    /// Number of steps (edges) on the path, or `None` if none was found.
    #[inline]
    pub fn cost(&self) -> Option<usize> {
        self.path.len().checked_sub(1)
    }

    /// Whether each consecutive pair of path cells is 4-adjacent.
    pub fn is_valid_walk(&self) -> bool {
        self.path.windows(2).all(|w| w[0].is_adjacent(w[1]))
    }
}

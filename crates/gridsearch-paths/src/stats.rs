/// Per-call search counters.
///
/// Each search owns one of these and folds it into its
/// [`SearchResult`](crate::SearchResult), so the three algorithms are
/// measured the same way and never share state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instrumentation {
    nodes_expanded: usize,
    peak_frontier: usize,
}

impl Default for Instrumentation {
    fn default() -> Self {
        Self::new()
    }
}

impl Instrumentation {
    /// Fresh counters. The frontier starts out holding the start cell, so
    /// the peak starts at one.
    pub const fn new() -> Self {
        Self {
            nodes_expanded: 0,
            peak_frontier: 1,
        }
    }

    /// Count one expansion. `pending` is the frontier size just before the
    /// expanded cell was removed.
    #[inline]
    pub fn record_expansion(&mut self, pending: usize) {
        self.nodes_expanded += 1;
        self.peak_frontier = self.peak_frontier.max(pending);
    }

    #[inline]
    pub fn nodes_expanded(&self) -> usize {
        self.nodes_expanded
    }

    #[inline]
    pub fn peak_frontier(&self) -> usize {
        self.peak_frontier
    }
}

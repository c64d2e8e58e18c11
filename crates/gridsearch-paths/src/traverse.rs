//! Scaffolding shared by the searches.

use gridsearch_core::Cell;

use crate::error::{Endpoint, SearchError};
use crate::frontier::Frontier;
use crate::neighbors::Neighbors;
use crate::parents::ParentMap;
use crate::result::SearchResult;
use crate::stats::Instrumentation;
use crate::traits::Pather;

/// Reject endpoints that are out of bounds or blocked.
pub(crate) fn validate<P: Pather>(pather: &P, start: Cell, exit: Cell) -> Result<(), SearchError> {
    for (role, cell) in [(Endpoint::Start, start), (Endpoint::Exit, exit)] {
        if !pather.bounds().contains(cell) {
            return Err(SearchError::OutOfBounds { role, cell });
        }
        if !pather.is_traversable(cell) {
            return Err(SearchError::Blocked { role, cell });
        }
    }
    Ok(())
}

/// Uninformed traversal: cells are marked as discovered when they are
/// pushed, so each cell enters `frontier` at most once and every pop is an
/// expansion. The frontier's policy alone decides BFS versus DFS.
///
/// `on_expand` sees every expanded cell, in order.
pub(crate) fn traverse<P, F>(
    name: &str,
    pather: &P,
    start: Cell,
    exit: Cell,
    mut frontier: F,
    mut on_expand: impl FnMut(Cell),
) -> Result<SearchResult, SearchError>
where
    P: Pather,
    F: Frontier<Item = Cell>,
{
    validate(pather, start, exit)?;

    let mut parents = ParentMap::new(pather.bounds());
    let mut stats = Instrumentation::new();
    let mut nb = Neighbors::new();

    parents.set_root(start);
    frontier.push(start);

    let found = loop {
        let pending = frontier.len();
        let Some(current) = frontier.pop() else {
            break false;
        };
        stats.record_expansion(pending);
        on_expand(current);

        if current == exit {
            break true;
        }

        for &n in pather.neighbors(current, &mut nb) {
            if parents.discover(n, current) {
                frontier.push(n);
            }
        }
    };

    let path = if found {
        parents.backtrace(exit)
    } else {
        Vec::new()
    };
    log::debug!(
        "{name}: {start} -> {exit}: {} ({} expanded, peak frontier {})",
        if found { "reached" } else { "exhausted" },
        stats.nodes_expanded(),
        stats.peak_frontier()
    );
    Ok(SearchResult::new(path, stats))
}

use gridsearch_core::Cell;

use crate::UNREACHABLE;
use crate::error::SearchError;
use crate::frontier::{Frontier, PriorityQueue, Scored, TieBreak};
use crate::neighbors::Neighbors;
use crate::parents::ParentMap;
use crate::result::SearchResult;
use crate::stats::Instrumentation;
use crate::traits::AstarPather;
use crate::traverse::validate;

/// A* search from `start` to `exit` with the default tie-break
/// ([`TieBreak::CellOrder`]).
///
/// Returns a shortest path as long as `pather`'s estimate is admissible.
pub fn astar<P: AstarPather>(
    pather: &P,
    start: Cell,
    exit: Cell,
) -> Result<SearchResult, SearchError> {
    astar_with(pather, start, exit, TieBreak::default())
}

/// A* search with an explicit tie-break for entries of equal `f` and `g`.
///
/// The open list may hold several entries for one cell; only the first one
/// popped is expanded; later ones are skipped without being counted.
pub fn astar_with<P: AstarPather>(
    pather: &P,
    start: Cell,
    exit: Cell,
    tie: TieBreak,
) -> Result<SearchResult, SearchError> {
    astar_observed(pather, start, exit, tie, |_| {})
}

/// [`astar_with`] calling `on_expand` for every cell it closes, in order.
pub(crate) fn astar_observed<P: AstarPather>(
    pather: &P,
    start: Cell,
    exit: Cell,
    tie: TieBreak,
    mut on_expand: impl FnMut(Cell),
) -> Result<SearchResult, SearchError> {
    validate(pather, start, exit)?;

    let bounds = pather.bounds();
    let mut g_score = vec![UNREACHABLE; bounds.len()];
    let mut closed = vec![false; bounds.len()];
    let mut parents = ParentMap::new(bounds);
    let mut stats = Instrumentation::new();
    let mut open = PriorityQueue::new(tie);
    let mut nb = Neighbors::new();

    if let Some(si) = bounds.index(start) {
        g_score[si] = 0;
    }
    parents.set_root(start);
    open.push(Scored {
        f: pather.estimate(start, exit),
        g: 0,
        cell: start,
    });

    let found = 'search: loop {
        let pending = open.len();
        let Some(Scored { cell: current, .. }) = open.pop() else {
            break 'search false;
        };
        let Some(ci) = bounds.index(current) else {
            continue;
        };

        // Skip stale entries.
        if closed[ci] {
            log::trace!("astar: skipping stale entry for {current}");
            continue;
        }
        closed[ci] = true;
        stats.record_expansion(pending);
        on_expand(current);

        if current == exit {
            break 'search true;
        }

        let current_g = g_score[ci];
        for &np in pather.neighbors(current, &mut nb) {
            let Some(ni) = bounds.index(np) else {
                continue;
            };
            let tentative_g = current_g + 1;
            if tentative_g >= g_score[ni] {
                continue;
            }
            g_score[ni] = tentative_g;
            parents.set(np, current);
            open.push(Scored {
                f: tentative_g + pather.estimate(np, exit),
                g: tentative_g,
                cell: np,
            });
        }
    };

    let path = if found {
        parents.backtrace(exit)
    } else {
        Vec::new()
    };
    log::debug!(
        "astar: {start} -> {exit}: {} ({} expanded, peak frontier {})",
        if found { "reached" } else { "exhausted" },
        stats.nodes_expanded(),
        stats.peak_frontier()
    );
    Ok(SearchResult::new(path, stats))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bfs::bfs;
    use gridsearch_core::Grid;

    #[test]
    fn open_3x3_is_optimal() {
        let grid = Grid::new(3);
        let r = astar(&grid, Cell::new(0, 0), Cell::new(2, 2)).unwrap();
        assert_eq!(r.path.len(), 5);
        assert!(r.is_valid_walk());
        assert!(r.nodes_expanded <= 9);
    }

    #[test]
    fn open_grid_expands_the_whole_box() {
        // Every cell between the corners has f = 8, and equal f is settled
        // toward the smaller g, so all 24 cells with g < 8 go before the exit.
        let grid = Grid::new(5);
        let r = astar(&grid, Cell::new(0, 0), Cell::new(4, 4)).unwrap();
        assert_eq!(r.cost(), Some(8));
        assert_eq!(r.nodes_expanded, 25);
    }

    #[test]
    fn straight_line_goes_straight() {
        let grid = Grid::new(3);
        let r = astar(&grid, Cell::new(0, 0), Cell::new(0, 2)).unwrap();
        assert_eq!(
            r.path,
            vec![Cell::new(0, 0), Cell::new(0, 1), Cell::new(0, 2)]
        );
        assert_eq!(r.nodes_expanded, 3);
    }

    #[test]
    fn single_gap_is_forced() {
        let grid: Grid = "...\n#.#\n...".parse().unwrap();
        let r = astar(&grid, Cell::new(0, 0), Cell::new(2, 2)).unwrap();
        assert!(r.path.contains(&Cell::new(1, 1)));
        assert_eq!(r.cost(), Some(4));
    }

    #[test]
    fn detour_matches_bfs_length() {
        let grid: Grid = "\
.....
####.
.....
.####
....."
            .parse()
            .unwrap();
        let start = Cell::new(0, 0);
        let exit = Cell::new(4, 4);
        let a = astar(&grid, start, exit).unwrap();
        let b = bfs(&grid, start, exit).unwrap();
        assert_eq!(a.cost(), b.cost());
        assert_eq!(a.cost(), Some(16));
        assert!(a.is_valid_walk());
    }

    #[test]
    fn tie_break_changes_only_the_route() {
        let grid = Grid::new(4);
        let start = Cell::new(0, 0);
        let exit = Cell::new(3, 3);
        let a = astar_with(&grid, start, exit, TieBreak::CellOrder).unwrap();
        let b = astar_with(&grid, start, exit, TieBreak::Insertion).unwrap();
        assert_eq!(a.cost(), b.cost());
        assert!(a.is_valid_walk() && b.is_valid_walk());
    }

    #[test]
    fn unreachable_exit_counts_reachable_cells() {
        let grid: Grid = "...#\n...#\n####\n...E".parse().unwrap();
        let r = astar(&grid, Cell::new(0, 0), Cell::new(3, 3)).unwrap();
        assert!(r.path.is_empty());
        assert_eq!(r.nodes_expanded, 6);
    }

    #[test]
    fn start_equals_exit() {
        let grid = Grid::new(2);
        let c = Cell::new(0, 1);
        let r = astar(&grid, c, c).unwrap();
        assert_eq!(r.path, vec![c]);
        assert_eq!(r.nodes_expanded, 1);
    }

    #[test]
    fn out_of_bounds_exit_is_an_error() {
        let grid = Grid::new(2);
        assert!(matches!(
            astar(&grid, Cell::new(0, 0), Cell::new(2, 0)),
            Err(SearchError::OutOfBounds { .. })
        ));
    }
}

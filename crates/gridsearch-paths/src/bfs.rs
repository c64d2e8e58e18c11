use gridsearch_core::Cell;

use crate::error::SearchError;
use crate::frontier::FifoQueue;
use crate::result::SearchResult;
use crate::traits::Pather;
use crate::traverse::traverse;

/// Breadth-first search from `start` to `exit`.
///
/// Expands cells level by level from a FIFO queue, so the returned path
/// has the fewest steps possible. An unreachable exit yields an empty path
/// with the counters still filled in.
pub fn bfs<P: Pather>(pather: &P, start: Cell, exit: Cell) -> Result<SearchResult, SearchError> {
    traverse("bfs", pather, start, exit, FifoQueue::new(), |_| {})
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridsearch_core::Grid;

    #[test]
    fn open_3x3_corner_to_corner() {
        let grid = Grid::new(3);
        let r = bfs(&grid, Cell::new(0, 0), Cell::new(2, 2)).unwrap();
        assert_eq!(r.path.len(), 5);
        assert_eq!(r.cost(), Some(4));
        assert!(r.is_valid_walk());
        assert!(r.nodes_expanded <= 9);
        // Up/down before left/right: the path goes down the first column.
        assert_eq!(
            r.path,
            vec![
                Cell::new(0, 0),
                Cell::new(1, 0),
                Cell::new(2, 0),
                Cell::new(2, 1),
                Cell::new(2, 2)
            ]
        );
    }

    #[test]
    fn single_gap_is_forced() {
        let grid: Grid = "...\n#.#\n...".parse().unwrap();
        let r = bfs(&grid, Cell::new(0, 0), Cell::new(2, 2)).unwrap();
        assert!(r.path.contains(&Cell::new(1, 1)));
        assert_eq!(r.cost(), Some(4));
    }

    #[test]
    fn enclosed_exit_exhausts_reachable_region() {
        let grid: Grid = "..#.\n..#.\n####\n...E".parse().unwrap();
        let r = bfs(&grid, Cell::new(0, 0), Cell::new(3, 3)).unwrap();
        assert!(!r.found());
        assert_eq!(r.nodes_expanded, 4);
    }

    #[test]
    fn start_equals_exit() {
        let grid = Grid::new(3);
        let c = Cell::new(1, 1);
        let r = bfs(&grid, c, c).unwrap();
        assert_eq!(r.path, vec![c]);
        assert_eq!(r.nodes_expanded, 1);
        assert_eq!(r.peak_frontier, 1);
    }

    #[test]
    fn peak_frontier_on_open_grid() {
        // Expanding (0,0) queues two cells; expanding (1,0) then adds two
        // more while (0,1) is still waiting.
        let grid = Grid::new(3);
        let r = bfs(&grid, Cell::new(0, 0), Cell::new(2, 2)).unwrap();
        assert!(r.peak_frontier >= 3);
    }

    #[test]
    fn blocked_start_is_an_error() {
        let grid: Grid = "#.\n..".parse().unwrap();
        assert!(matches!(
            bfs(&grid, Cell::new(0, 0), Cell::new(1, 1)),
            Err(SearchError::Blocked { .. })
        ));
    }
}

use gridsearch_core::Cell;

use crate::error::SearchError;
use crate::frontier::LifoStack;
use crate::result::SearchResult;
use crate::traits::Pather;
use crate::traverse::traverse;

/// Depth-first search from `start` to `exit`.
///
/// Follows the most recently discovered cell first. The path returned is
/// the first one found, not necessarily the shortest; for a fixed grid it
/// is fully determined by the neighbor order of `pather`.
pub fn dfs<P: Pather>(pather: &P, start: Cell, exit: Cell) -> Result<SearchResult, SearchError> {
    traverse("dfs", pather, start, exit, LifoStack::new(), |_| {})
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bfs::bfs;
    use gridsearch_core::Grid;

    #[test]
    fn open_3x3_follows_last_pushed_neighbor() {
        // Neighbors are pushed up, down, left, right, so "right" is
        // explored first.
        let grid = Grid::new(3);
        let r = dfs(&grid, Cell::new(0, 0), Cell::new(2, 2)).unwrap();
        assert_eq!(
            r.path,
            vec![
                Cell::new(0, 0),
                Cell::new(0, 1),
                Cell::new(0, 2),
                Cell::new(1, 2),
                Cell::new(2, 2)
            ]
        );
        assert_eq!(r.nodes_expanded, 5);
    }

    #[test]
    fn path_is_never_shorter_than_bfs() {
        let grid: Grid = "\
.....
.###.
...#.
.#...
.#.#."
            .parse()
            .unwrap();
        let start = Cell::new(2, 2);
        let exit = Cell::new(4, 4);
        let d = dfs(&grid, start, exit).unwrap();
        let b = bfs(&grid, start, exit).unwrap();
        assert!(d.is_valid_walk());
        assert_eq!(d.path.first(), Some(&start));
        assert_eq!(d.path.last(), Some(&exit));
        assert!(d.cost() >= b.cost());
    }

    #[test]
    fn deterministic_for_fixed_grid() {
        let grid: Grid = "....\n.#..\n..#.\n....".parse().unwrap();
        let a = dfs(&grid, Cell::new(0, 0), Cell::new(3, 3)).unwrap();
        let b = dfs(&grid, Cell::new(0, 0), Cell::new(3, 3)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn unreachable_exit() {
        let grid: Grid = ".#.\n##.\n...".parse().unwrap();
        let r = dfs(&grid, Cell::new(0, 0), Cell::new(2, 2)).unwrap();
        assert!(r.path.is_empty());
        assert_eq!(r.nodes_expanded, 1);
        assert_eq!(r.peak_frontier, 1);
    }
}

use gridsearch_core::{Cell, Grid, Range};

use crate::distance::manhattan;
use crate::neighbors::Neighbors;

/// Minimal search interface: bounds, traversability and neighbor
/// enumeration.
pub trait Pather {
    /// Rectangle every reachable cell lies in.
    fn bounds(&self) -> Range;

    /// Whether `c` is in bounds and can be stepped on.
    fn is_traversable(&self, c: Cell) -> bool;

    /// Traversable neighbors of `c`, in a fixed order, written into the
    /// caller's scratch buffer.
    fn neighbors<'a>(&self, c: Cell, nb: &'a mut Neighbors) -> &'a [Cell];
}

/// Pather with an admissible heuristic for A*.
pub trait AstarPather: Pather {
    /// Heuristic estimate of the distance from `from` to `to`.
    /// Must never overestimate the true cost (admissible).
    fn estimate(&self, from: Cell, to: Cell) -> i32;
}

impl Pather for Grid {
    #[inline]
    fn bounds(&self) -> Range {
        Grid::bounds(self)
    }

    #[inline]
    fn is_traversable(&self, c: Cell) -> bool {
        Grid::is_traversable(self, c)
    }

    /// Up, down, left, right.
    fn neighbors<'a>(&self, c: Cell, nb: &'a mut Neighbors) -> &'a [Cell] {
        nb.cardinal(c, |n| Grid::is_traversable(self, n))
    }
}

impl AstarPather for Grid {
    #[inline]
    fn estimate(&self, from: Cell, to: Cell) -> i32 {
        manhattan(from, to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_neighbors_skip_walls_and_edges() {
        let grid: Grid = ".#.\n...\n...".parse().unwrap();
        let mut nb = Neighbors::new();
        assert_eq!(grid.neighbors(Cell::new(0, 0), &mut nb), [Cell::new(1, 0)]);
        assert_eq!(
            grid.neighbors(Cell::new(1, 1), &mut nb),
            [Cell::new(2, 1), Cell::new(1, 0), Cell::new(1, 2)]
        );
    }
}

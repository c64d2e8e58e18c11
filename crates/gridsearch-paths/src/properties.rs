//! Property tests comparing the three searches on random grids.

use std::collections::HashSet;

use gridsearch_core::{Cell, Grid, Tile};
use proptest::prelude::*;

use crate::astar::astar_observed;
use crate::frontier::{FifoQueue, LifoStack};
use crate::traverse::traverse;
use crate::{Algorithm, SearchResult, TieBreak, astar_with};

/// A random grid with both endpoints forced open.
fn scenario() -> impl Strategy<Value = (Grid, Cell, Cell)> {
    (2i32..9).prop_flat_map(|n| {
        let len = (n * n) as usize;
        (
            Just(n),
            prop::collection::vec(prop::bool::weighted(0.3), len),
            0..len,
            0..len,
        )
            .prop_map(|(n, walls, s, e)| {
                let mut grid = Grid::new(n);
                let bounds = grid.bounds();
                grid.fill_fn(|c| {
                    if walls[bounds.index(c).unwrap_or(0)] {
                        Tile::Blocked
                    } else {
                        Tile::Open
                    }
                });
                let start = bounds.cell(s);
                let exit = bounds.cell(e);
                grid.set(start, Tile::Open);
                grid.set(exit, Tile::Open);
                (grid, start, exit)
            })
    })
}

/// Exact step distances from `start`, by repeated relaxation.
fn distances(grid: &Grid, start: Cell) -> Vec<Option<usize>> {
    let bounds = grid.bounds();
    let mut dist = vec![None; bounds.len()];
    if let Some(i) = bounds.index(start) {
        dist[i] = Some(0);
    }
    let mut changed = true;
    while changed {
        changed = false;
        for c in bounds.iter() {
            if !grid.is_traversable(c) {
                continue;
            }
            let Some(ci) = bounds.index(c) else { continue };
            for n in c.neighbors_4() {
                let Some(ni) = bounds.index(n) else { continue };
                if let Some(d) = dist[ni] {
                    if dist[ci].is_none_or(|cur| d + 1 < cur) {
                        dist[ci] = Some(d + 1);
                        changed = true;
                    }
                }
            }
        }
    }
    dist
}

fn run(a: Algorithm, grid: &Grid, start: Cell, exit: Cell) -> SearchResult {
    a.search(grid, start, exit).unwrap()
}

/// Run `a` and also collect the cells it marked visited, in order.
fn run_recording(
    a: Algorithm,
    grid: &Grid,
    start: Cell,
    exit: Cell,
) -> (SearchResult, Vec<Cell>) {
    let mut visited: Vec<Cell> = Vec::new();
    let record = |c: Cell| visited.push(c);
    let r = match a {
        Algorithm::Bfs => traverse("bfs", grid, start, exit, FifoQueue::new(), record),
        Algorithm::Dfs => traverse("dfs", grid, start, exit, LifoStack::new(), record),
        Algorithm::AStar => astar_observed(grid, start, exit, TieBreak::default(), record),
    };
    (r.unwrap(), visited)
}

proptest! {
    #[test]
    fn bfs_is_shortest((grid, start, exit) in scenario()) {
        let dist = distances(&grid, start);
        let truth = grid.bounds().index(exit).and_then(|i| dist[i]);
        let r = run(Algorithm::Bfs, &grid, start, exit);
        prop_assert_eq!(r.cost(), truth);
    }

    #[test]
    fn astar_matches_bfs_and_dfs_is_no_shorter((grid, start, exit) in scenario()) {
        let b = run(Algorithm::Bfs, &grid, start, exit);
        let a = run(Algorithm::AStar, &grid, start, exit);
        let d = run(Algorithm::Dfs, &grid, start, exit);
        prop_assert_eq!(a.cost(), b.cost());
        prop_assert_eq!(d.found(), b.found());
        prop_assert!(d.cost() >= b.cost());

        let insertion = astar_with(&grid, start, exit, TieBreak::Insertion).unwrap();
        prop_assert_eq!(insertion.cost(), b.cost());
    }

    #[test]
    fn paths_are_walks_between_endpoints((grid, start, exit) in scenario()) {
        for a in Algorithm::ALL {
            let r = run(a, &grid, start, exit);
            prop_assert!(r.is_valid_walk());
            prop_assert!(r.path.iter().all(|&c| grid.is_traversable(c)));
            if r.found() {
                prop_assert_eq!(r.path.first(), Some(&start));
                prop_assert_eq!(r.path.last(), Some(&exit));
            }
        }
    }

    #[test]
    fn expansions_bounded_by_traversable_cells((grid, start, exit) in scenario()) {
        let reachable = distances(&grid, start).iter().filter(|d| d.is_some()).count();
        for a in Algorithm::ALL {
            let r = run(a, &grid, start, exit);
            prop_assert!(r.nodes_expanded >= 1);
            prop_assert!(r.nodes_expanded <= grid.traversable_count());
            prop_assert!(r.nodes_expanded <= reachable);
            prop_assert!(r.peak_frontier >= 1);
            if !r.found() {
                prop_assert_eq!(r.nodes_expanded, reachable);
            }
        }
    }

    #[test]
    fn nodes_expanded_counts_visited_cells((grid, start, exit) in scenario()) {
        for a in Algorithm::ALL {
            let (r, visited) = run_recording(a, &grid, start, exit);
            prop_assert_eq!(&r, &run(a, &grid, start, exit));
            prop_assert_eq!(r.nodes_expanded, visited.len());

            let distinct: HashSet<Cell> = visited.iter().copied().collect();
            prop_assert_eq!(distinct.len(), visited.len());
            prop_assert_eq!(visited.first(), Some(&start));
            if r.found() {
                prop_assert_eq!(visited.last(), Some(&exit));
            } else {
                prop_assert!(!distinct.contains(&exit));
            }
        }
    }
}

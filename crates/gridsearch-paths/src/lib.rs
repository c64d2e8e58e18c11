//! Instrumented search strategies for 4-connected obstacle grids.
//!
//! Three traversals share one grid contract and one result shape so their
//! cost can be compared fairly:
//!
//! - **BFS** over a FIFO frontier ([`bfs`]), shortest path in edge count
//! - **DFS** over a LIFO frontier ([`dfs`]), first path found
//! - **A\*** over a priority frontier keyed by `(f, g, cell)` with the
//!   Manhattan heuristic ([`astar`], [`astar_with`]), shortest path
//!
//! Every call allocates its own frontier, parent map and counters and
//! returns them folded into a [`SearchResult`]. Nothing is shared between
//! calls, so independent searches may run on separate threads.
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Pather`] | BFS, DFS |
//! | [`AstarPather`] : [`Pather`] | A* |
//!
//! [`Grid`](gridsearch_core::Grid) implements both.

mod algorithm;
mod astar;
mod bfs;
mod dfs;
mod distance;
mod error;
mod frontier;
mod neighbors;
mod parents;
mod result;
mod stats;
mod traits;
mod traverse;

#[cfg(test)]
mod properties;

pub use algorithm::{Algorithm, SearchFn};
pub use astar::{astar, astar_with};
pub use bfs::bfs;
pub use dfs::dfs;
pub use distance::manhattan;
pub use error::{Endpoint, ParseAlgorithmError, SearchError};
pub use frontier::{FifoQueue, Frontier, LifoStack, PriorityQueue, Scored, TieBreak};
pub use neighbors::Neighbors;
pub use parents::{Link, ParentMap};
pub use result::SearchResult;
pub use stats::Instrumentation;
pub use traits::{AstarPather, Pather};

/// Sentinel g-score for cells with no recorded cost.
pub const UNREACHABLE: i32 = i32::MAX;

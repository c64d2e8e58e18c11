//! **gridsearch-core**: the grid model shared by every search strategy.
//!
//! This crate provides the coordinate type ([`Cell`]), half-open bounds
//! ([`Range`]), the cell-state alphabet ([`Tile`]) and the square obstacle
//! [`Grid`] the search algorithms run on. A grid answers a single question
//! for the searches: "is this cell in bounds and traversable".

pub mod error;
pub mod geom;
pub mod grid;
pub mod tile;

pub use error::GridError;
pub use geom::{Cell, Range, RangeIter};
pub use grid::Grid;
pub use tile::Tile;

//! Errors raised while building a [`Grid`](crate::Grid) from text.

use std::fmt;

use crate::geom::Cell;
use crate::tile::Tile;

/// Errors that can occur when parsing a grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// The input had no rows.
    Empty,
    /// A row's width differs from the number of rows.
    NotSquare { row: usize, width: usize, size: usize },
    /// A character outside the tile alphabet was found.
    InvalidChar { ch: char, cell: Cell },
    /// A start or exit marker appeared more than once.
    DuplicateMarker { tile: Tile, first: Cell, second: Cell },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "grid: no rows"),
            Self::NotSquare { row, width, size } => write!(
                f,
                "grid: row {row} has width {width}, expected {size} for a square grid"
            ),
            Self::InvalidChar { ch, cell } => {
                write!(f, "grid contains invalid character \u{201c}{ch}\u{201d} at {cell}")
            }
            Self::DuplicateMarker {
                tile,
                first,
                second,
            } => write!(f, "grid has more than one {tile} marker: {first} and {second}"),
        }
    }
}

impl std::error::Error for GridError {}

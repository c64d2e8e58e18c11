//! The [`Grid`] type: a square obstacle grid of [`Tile`]s.
//!
//! A `Grid` owns its storage. Searches only ever borrow it immutably, so a
//! clone can be handed to each worker thread without any locking.

use std::fmt;
use std::str::FromStr;

use crate::error::GridError;
use crate::geom::{Cell, Range};
use crate::tile::Tile;

/// A square 2D grid of [`Tile`]s.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    tiles: Vec<Tile>,
    bounds: Range,
}

impl Grid {
    /// Create a new `size × size` grid with every cell open.
    pub fn new(size: i32) -> Self {
        let bounds = Range::square(size);
        Self {
            tiles: vec![Tile::Open; bounds.len()],
            bounds,
        }
    }

    /// Side length of the grid.
    #[inline]
    pub fn size(&self) -> i32 {
        self.bounds.height()
    }

    /// The bounding range of the grid.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Whether `c` is inside the grid.
    #[inline]
    pub fn in_bounds(&self, c: Cell) -> bool {
        self.bounds.contains(c)
    }

    /// Whether `c` is inside the grid and not blocked.
    #[inline]
    pub fn is_traversable(&self, c: Cell) -> bool {
        self.at(c).is_some_and(Tile::is_traversable)
    }

    /// Tile at `c`, or `None` if `c` is outside the grid.
    #[inline]
    pub fn at(&self, c: Cell) -> Option<Tile> {
        self.bounds.index(c).map(|i| self.tiles[i])
    }

    /// Set the tile at `c`. Does nothing if out of bounds.
    pub fn set(&mut self, c: Cell, tile: Tile) {
        if let Some(i) = self.bounds.index(c) {
            self.tiles[i] = tile;
        }
    }

    /// Fill the grid using a function of each cell.
    pub fn fill_fn(&mut self, mut f: impl FnMut(Cell) -> Tile) {
        for (i, c) in self.bounds.iter().enumerate() {
            self.tiles[i] = f(c);
        }
    }

    /// Count the cells holding `tile`.
    pub fn count(&self, tile: Tile) -> usize {
        self.tiles.iter().filter(|&&t| t == tile).count()
    }

    /// Count the cells a search may step on.
    pub fn traversable_count(&self) -> usize {
        self.tiles.iter().filter(|t| t.is_traversable()).count()
    }

    /// First cell (row-major) holding `tile`.
    pub fn find(&self, tile: Tile) -> Option<Cell> {
        self.tiles
            .iter()
            .position(|&t| t == tile)
            .map(|i| self.bounds.cell(i))
    }

    /// Iterate over `(Cell, Tile)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Cell, Tile)> + '_ {
        self.bounds.iter().zip(self.tiles.iter().copied())
    }

    /// The grid as one string per row.
    pub fn rows(&self) -> Vec<String> {
        self.tiles
            .chunks(self.size().max(1) as usize)
            .map(|row| row.iter().map(|t| t.to_char()).collect())
            .collect()
    }
}

impl FromStr for Grid {
    type Err = GridError;

    /// Parse a grid from rows of `' '`/`'.'` (open), `'#'` (blocked),
    /// `'S'` (start) and `'E'` (exit).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines: Vec<&str> = s.lines().map(|l| l.trim_end_matches('\r')).collect();
        if lines.is_empty() {
            return Err(GridError::Empty);
        }
        let size = lines.len();
        let mut grid = Grid::new(size as i32);
        let mut start: Option<Cell> = None;
        let mut exit: Option<Cell> = None;

        for (row, line) in lines.iter().enumerate() {
            let width = line.chars().count();
            if width != size {
                return Err(GridError::NotSquare { row, width, size });
            }
            for (col, ch) in line.chars().enumerate() {
                let cell = Cell::new(row as i32, col as i32);
                let tile = Tile::from_char(ch).ok_or(GridError::InvalidChar { ch, cell })?;
                let marker = match tile {
                    Tile::Start => Some(&mut start),
                    Tile::Exit => Some(&mut exit),
                    _ => None,
                };
                if let Some(slot) = marker {
                    if let Some(first) = *slot {
                        return Err(GridError::DuplicateMarker {
                            tile,
                            first,
                            second: cell,
                        });
                    }
                    *slot = Some(cell);
                }
                grid.set(cell, tile);
            }
        }

        Ok(grid)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            writeln!(f, "{row}")?;
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Grid {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.rows().serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Grid {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let rows = Vec::<String>::deserialize(deserializer)?;
        rows.join("\n").parse().map_err(serde::de::Error::custom)
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn grid_serializes_as_rows() {
        let g: Grid = "S#\n.E".parse().unwrap();
        let json = serde_json::to_string(&g).unwrap();
        assert_eq!(json, r#"["S#"," E"]"#);
        let back: Grid = serde_json::from_str(&json).unwrap();
        assert_eq!(back, g);
    }
}

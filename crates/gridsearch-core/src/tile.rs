//! The [`Tile`] type: the state of a single grid cell.

use std::fmt;

/// State of a grid cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tile {
    #[default]
    Open,
    Blocked,
    Start,
    Exit,
}

impl Tile {
    /// Everything but [`Tile::Blocked`] can be walked on.
    #[inline]
    pub const fn is_traversable(self) -> bool {
        !matches!(self, Tile::Blocked)
    }

    /// Character used in the text form of a grid.
    #[inline]
    pub const fn to_char(self) -> char {
        match self {
            Tile::Open => ' ',
            Tile::Blocked => '#',
            Tile::Start => 'S',
            Tile::Exit => 'E',
        }
    }

    /// Parse a tile character. Both `' '` and `'.'` denote an open cell.
    #[inline]
    pub const fn from_char(ch: char) -> Option<Tile> {
        match ch {
            ' ' | '.' => Some(Tile::Open),
            '#' => Some(Tile::Blocked),
            'S' => Some(Tile::Start),
            'E' => Some(Tile::Exit),
            _ => None,
        }
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Tile::Open => "open",
            Tile::Blocked => "blocked",
            Tile::Start => "start",
            Tile::Exit => "exit",
        };
        f.write_str(name)
    }
}

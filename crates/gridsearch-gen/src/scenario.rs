//! A grid together with the start and exit of a search.

use gridsearch_core::{Cell, Grid, Tile};

use crate::error::GenError;

/// Search input: a grid plus two distinct, open endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Scenario {
    pub grid: Grid,
    pub start: Cell,
    pub exit: Cell,
}

impl Scenario {
    /// Validate the endpoints against `grid` and mark them with
    /// [`Tile::Start`] and [`Tile::Exit`].
    pub fn new(mut grid: Grid, start: Cell, exit: Cell) -> Result<Self, GenError> {
        for (role, c) in [("start", start), ("exit", exit)] {
            match grid.at(c) {
                None => {
                    return Err(GenError::InvalidScenario(format!(
                        "{role} {c} is outside the {n}x{n} grid",
                        n = grid.size()
                    )));
                }
                Some(Tile::Blocked) => {
                    return Err(GenError::InvalidScenario(format!("{role} {c} is blocked")));
                }
                Some(_) => {}
            }
        }
        if start == exit {
            return Err(GenError::InvalidScenario(format!(
                "start and exit are both {start}"
            )));
        }

        // Stale markers from an earlier placement become open floor.
        for tile in [Tile::Start, Tile::Exit] {
            while let Some(c) = grid.find(tile) {
                grid.set(c, Tile::Open);
            }
        }
        grid.set(start, Tile::Start);
        grid.set(exit, Tile::Exit);
        Ok(Self { grid, start, exit })
    }

    /// Build a scenario from a grid carrying its own `S` and `E` markers.
    pub fn from_markers(grid: Grid) -> Result<Self, GenError> {
        let start = grid
            .find(Tile::Start)
            .ok_or_else(|| GenError::InvalidScenario("grid has no start marker".into()))?;
        let exit = grid
            .find(Tile::Exit)
            .ok_or_else(|| GenError::InvalidScenario("grid has no exit marker".into()))?;
        Self::new(grid, start, exit)
    }
}

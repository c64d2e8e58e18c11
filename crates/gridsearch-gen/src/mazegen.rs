//! Random obstacle-grid generation.
//!
//! Every cell of an open square grid independently becomes a wall with a
//! fixed probability, then a start and an exit are placed either in
//! opposite corners or at random open cells.

use gridsearch_core::{Cell, Grid, Tile};
use rand::{Rng, RngExt};

use crate::error::GenError;
use crate::scenario::Scenario;

/// Where the start and exit of a generated scenario go.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EndpointMode {
    /// Start at `(0, 0)`, exit at `(n-1, n-1)`; both are cleared of walls.
    Fixed,
    /// Start and exit drawn uniformly among open cells, never equal.
    #[default]
    Random,
}

/// Obstacle-grid generator.
pub struct MazeGen<R: Rng> {
    pub rng: R,
    /// Side length of generated grids.
    pub size: i32,
    /// Chance of each cell becoming a wall.
    pub block_prob: f64,
}

impl<R: Rng> MazeGen<R> {
    pub const DEFAULT_SIZE: i32 = 25;
    pub const DEFAULT_BLOCK_PROB: f64 = 0.25;

    /// Create a generator with the default size and wall probability.
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            size: Self::DEFAULT_SIZE,
            block_prob: Self::DEFAULT_BLOCK_PROB,
        }
    }

    /// Set the side length (builder).
    pub fn with_size(mut self, size: i32) -> Self {
        self.size = size;
        self
    }

    /// Set the wall probability (builder).
    pub fn with_block_prob(mut self, block_prob: f64) -> Self {
        self.block_prob = block_prob;
        self
    }

    /// Generate a scenario.
    pub fn generate(&mut self, mode: EndpointMode) -> Result<Scenario, GenError> {
        if self.size <= 0 {
            return Err(GenError::InvalidSize(self.size));
        }
        if !(0.0..=1.0).contains(&self.block_prob) {
            return Err(GenError::InvalidProbability(self.block_prob));
        }

        let grid = self.scatter_walls();
        let n = self.size;
        let (start, exit) = match mode {
            EndpointMode::Fixed => (Cell::new(0, 0), Cell::new(n - 1, n - 1)),
            EndpointMode::Random => self.random_endpoints(&grid)?,
        };

        let mut grid = grid;
        grid.set(start, Tile::Open);
        grid.set(exit, Tile::Open);
        let scenario = Scenario::new(grid, start, exit)?;
        log::debug!(
            "generated {n}x{n} maze ({} walls, {mode:?} endpoints): {start} -> {exit}",
            scenario.grid.count(Tile::Blocked)
        );
        Ok(scenario)
    }

    /// Open grid with each cell walled off with probability `block_prob`.
    fn scatter_walls(&mut self) -> Grid {
        let mut grid = Grid::new(self.size);
        let p = self.block_prob;
        let rng = &mut self.rng;
        grid.fill_fn(|_| {
            let r: f64 = rng.random();
            if r < p { Tile::Blocked } else { Tile::Open }
        });
        grid
    }

    /// Redraw both endpoints until they are distinct and open.
    fn random_endpoints(&mut self, grid: &Grid) -> Result<(Cell, Cell), GenError> {
        let open = grid.traversable_count();
        if open < 2 {
            return Err(GenError::NotEnoughOpenCells { open });
        }
        let n = self.size;
        let mut attempts = 0u32;
        loop {
            attempts += 1;
            let start = Cell::new(self.rng.random_range(0..n), self.rng.random_range(0..n));
            let exit = Cell::new(self.rng.random_range(0..n), self.rng.random_range(0..n));
            if start != exit && grid.is_traversable(start) && grid.is_traversable(exit) {
                log::trace!("random endpoints found after {attempts} draws");
                return Ok((start, exit));
            }
        }
    }
}

use std::fmt;
use std::str::FromStr;

use gridsearch_core::{Cell, Grid};

use crate::astar::astar;
use crate::bfs::bfs;
use crate::dfs::dfs;
use crate::error::{ParseAlgorithmError, SearchError};
use crate::result::SearchResult;

/// Signature shared by every search over a [`Grid`].
pub type SearchFn = fn(&Grid, Cell, Cell) -> Result<SearchResult, SearchError>;

/// The search strategies that can be compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Algorithm {
    Bfs,
    Dfs,
    AStar,
}

impl Algorithm {
    /// All strategies, in reporting order.
    pub const ALL: [Algorithm; 3] = [Algorithm::Bfs, Algorithm::Dfs, Algorithm::AStar];

    /// Lower-case identifier, as accepted by [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bfs => "bfs",
            Self::Dfs => "dfs",
            Self::AStar => "astar",
        }
    }

    /// Human-readable label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Bfs => "BFS",
            Self::Dfs => "DFS",
            Self::AStar => "A*",
        }
    }

    /// The search function for this strategy.
    pub fn search_fn(self) -> SearchFn {
        match self {
            Self::Bfs => bfs::<Grid>,
            Self::Dfs => dfs::<Grid>,
            Self::AStar => astar::<Grid>,
        }
    }

    /// Run this strategy on `grid`.
    pub fn search(self, grid: &Grid, start: Cell, exit: Cell) -> Result<SearchResult, SearchError> {
        (self.search_fn())(grid, start, exit)
    }

    /// Whether the strategy always returns a shortest path.
    pub const fn is_optimal(self) -> bool {
        !matches!(self, Self::Dfs)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bfs" => Ok(Self::Bfs),
            "dfs" => Ok(Self::Dfs),
            "astar" | "a*" | "a-star" => Ok(Self::AStar),
            _ => Err(ParseAlgorithmError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_names() {
        assert_eq!("bfs".parse(), Ok(Algorithm::Bfs));
        assert_eq!("DFS".parse(), Ok(Algorithm::Dfs));
        assert_eq!("A*".parse(), Ok(Algorithm::AStar));
        assert_eq!(" astar ".parse(), Ok(Algorithm::AStar));
        assert!("dijkstra".parse::<Algorithm>().is_err());
        for a in Algorithm::ALL {
            assert_eq!(a.name().parse(), Ok(a));
        }
    }

    #[test]
    fn table_dispatch_matches_direct_calls() {
        let grid: Grid = "....\n.##.\n....\n#..#".parse().unwrap();
        let start = Cell::new(0, 0);
        let exit = Cell::new(3, 2);
        assert_eq!(Algorithm::Bfs.search(&grid, start, exit), bfs(&grid, start, exit));
        assert_eq!(Algorithm::Dfs.search(&grid, start, exit), dfs(&grid, start, exit));
        assert_eq!(
            Algorithm::AStar.search(&grid, start, exit),
            astar(&grid, start, exit)
        );
    }

    #[test]
    fn optimal_strategies_agree_on_length() {
        let grid: Grid = "....\n.##.\n....\n#..#".parse().unwrap();
        let start = Cell::new(0, 0);
        let exit = Cell::new(3, 2);
        let costs: Vec<_> = Algorithm::ALL
            .into_iter()
            .filter(|a| a.is_optimal())
            .map(|a| a.search(&grid, start, exit).unwrap().cost())
            .collect();
        assert_eq!(costs, vec![Some(5), Some(5)]);
    }

    #[test]
    fn display_uses_label() {
        assert_eq!(Algorithm::AStar.to_string(), "A*");
        assert_eq!(Algorithm::Bfs.to_string(), "BFS");
    }
}

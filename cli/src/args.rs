use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use gridsearch_paths::Algorithm;

/// Output format for the comparison.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Rendered grid followed by one metrics line per algorithm
    #[default]
    Human,
    /// Machine-readable JSON report
    Json,
}

/// Compare BFS, DFS and A* on a random obstacle grid.
#[derive(Parser, Debug)]
#[command(name = "gridsearch")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Use fixed start (0,0) and exit (n-1,n-1)
    #[arg(long, conflicts_with = "random")]
    pub fixed: bool,

    /// Use random start and exit (the default)
    #[arg(long)]
    pub random: bool,

    /// Number of repetitions for timing
    #[arg(long, default_value_t = 1000, value_parser = clap::value_parser!(u32).range(1..))]
    pub repeat: u32,

    /// Side length of the generated grid
    #[arg(long, default_value_t = 25, value_parser = clap::value_parser!(i32).range(2..))]
    pub size: i32,

    /// Probability of each cell being a wall
    #[arg(long, default_value_t = 0.25)]
    pub block_prob: f64,

    /// Seed for reproducible grids
    #[arg(long, env = "GRIDSEARCH_SEED")]
    pub seed: Option<u64>,

    /// Load the grid from a file with S and E markers instead of generating one
    #[arg(long, conflicts_with_all = ["fixed", "random"])]
    pub map: Option<PathBuf>,

    /// Algorithm to run; repeat to select several (default: all)
    #[arg(long = "algorithm", short = 'a')]
    pub algorithms: Vec<Algorithm>,

    /// Run the algorithms one after another instead of on worker threads
    #[arg(long)]
    pub sequential: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Log search progress
    #[arg(long, short)]
    pub verbose: bool,

    /// Log level or filter directive (overrides --verbose)
    #[arg(long)]
    pub log_level: Option<String>,
}

impl Cli {
    /// Selected algorithms in reporting order, without duplicates.
    pub fn selected_algorithms(&self) -> Vec<Algorithm> {
        if self.algorithms.is_empty() {
            return Algorithm::ALL.to_vec();
        }
        Algorithm::ALL
            .into_iter()
            .filter(|a| self.algorithms.contains(a))
            .collect()
    }
}

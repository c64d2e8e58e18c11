//! Command-line comparison of grid search strategies.
//!
//! Builds a [`Scenario`] (generated or loaded from a file), times each
//! selected algorithm on it, and prints either a rendered grid with the
//! metrics or a JSON report.

mod args;
pub mod harness;
mod logging;
pub mod render;
pub mod report;

use std::error::Error;
use std::fs;

use gridsearch_core::Grid;
use gridsearch_gen::{EndpointMode, MazeGen, Scenario};
use rand::SeedableRng;
use rand::rngs::StdRng;

pub use args::{Cli, OutputFormat};
pub use harness::{Metrics, Timed, run_all, time_algorithm};
pub use logging::init_logging;

/// Build the scenario described by the command line.
pub fn build_scenario(cli: &Cli) -> Result<Scenario, Box<dyn Error>> {
    if let Some(path) = &cli.map {
        let text = fs::read_to_string(path)
            .map_err(|e| format!("cannot read map {}: {e}", path.display()))?;
        let grid: Grid = text.parse()?;
        log::info!("loaded {0}x{0} map from {1}", grid.size(), path.display());
        return Ok(Scenario::from_markers(grid)?);
    }

    let seed = cli.seed.unwrap_or_else(rand::random);
    log::info!("maze seed {seed}");
    let mode = if cli.fixed {
        EndpointMode::Fixed
    } else {
        EndpointMode::Random
    };
    let scenario = MazeGen::new(StdRng::seed_from_u64(seed))
        .with_size(cli.size)
        .with_block_prob(cli.block_prob)
        .generate(mode)?;
    Ok(scenario)
}

/// Run a full comparison and print it to stdout.
pub fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let colored = !cli.no_color && cli.format == OutputFormat::Human;
    init_logging(cli.verbose, cli.log_level.as_deref(), !cli.no_color)?;

    let scenario = build_scenario(&cli)?;
    let algorithms = cli.selected_algorithms();
    log::info!(
        "running {} algorithm(s), {} repetition(s) each, {}",
        algorithms.len(),
        cli.repeat,
        if cli.sequential { "sequentially" } else { "in parallel" }
    );
    let rows = run_all(&scenario, &algorithms, cli.repeat, !cli.sequential);

    match cli.format {
        OutputFormat::Json => {
            println!("{}", report::Report::new(&scenario, cli.repeat, &rows).to_json()?);
        }
        OutputFormat::Human => {
            print!("{}", render::render_grid(&scenario.grid, &rows, colored));
            println!("{}", render::render_legend(colored));
            println!();
            print!("{}", render::render_metrics(&rows, colored));
        }
    }
    Ok(())
}

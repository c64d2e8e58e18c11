//! Compare grid search strategies from the terminal.
//!
//! Run: cargo run --bin gridsearch -- --fixed --repeat 100

use clap::Parser;
use gridsearch_cli::{Cli, run};

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

use gridsearch_core::{Cell, Grid};
use gridsearch_gen::Scenario;
use serde::Serialize;

use crate::harness::Metrics;

/// JSON form of a comparison run.
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub size: i32,
    pub start: Cell,
    pub exit: Cell,
    pub repeat: u32,
    pub grid: &'a Grid,
    pub results: &'a [Metrics],
}

impl<'a> Report<'a> {
    pub fn new(scenario: &'a Scenario, repeat: u32, results: &'a [Metrics]) -> Self {
        Self {
            size: scenario.grid.size(),
            start: scenario.start,
            exit: scenario.exit,
            repeat,
            grid: &scenario.grid,
            results,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

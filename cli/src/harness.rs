//! Timing harness: repeated runs, averaging and per-algorithm isolation.

use std::any::Any;
use std::thread;
use std::time::{Duration, Instant};

use gridsearch_core::Cell;
use gridsearch_gen::Scenario;
use gridsearch_paths::{Algorithm, SearchError, SearchResult};
use serde::Serialize;

/// Last result of a timed algorithm plus its mean wall-clock time.
#[derive(Debug, Clone)]
pub struct Timed {
    pub result: SearchResult,
    pub avg_time_ms: f64,
}

/// Run `algorithm` `repeat` times on fresh copies of the scenario grid and
/// average the elapsed time.
pub fn time_algorithm(
    algorithm: Algorithm,
    scenario: &Scenario,
    repeat: u32,
) -> Result<Timed, SearchError> {
    let repeat = repeat.max(1);
    let search = algorithm.search_fn();
    let mut total = Duration::ZERO;
    let mut last = SearchResult::default();

    for _ in 0..repeat {
        let grid = scenario.grid.clone();
        let t0 = Instant::now();
        let result = search(&grid, scenario.start, scenario.exit)?;
        total += t0.elapsed();
        last = result;
    }

    Ok(Timed {
        result: last,
        avg_time_ms: total.as_secs_f64() * 1000.0 / f64::from(repeat),
    })
}

/// Per-algorithm row of the comparison.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Metrics {
    pub algorithm: Algorithm,
    /// Cells on the path, or -1 if there is none.
    pub cost: i64,
    pub nodes: usize,
    pub time_ms: f64,
    /// Peak frontier size.
    pub mem: usize,
    pub path: Vec<Cell>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Metrics {
    pub fn from_timed(algorithm: Algorithm, timed: Timed) -> Self {
        let Timed {
            result,
            avg_time_ms,
        } = timed;
        Self {
            algorithm,
            cost: if result.found() {
                result.path.len() as i64
            } else {
                -1
            },
            nodes: result.nodes_expanded,
            time_ms: avg_time_ms,
            mem: result.peak_frontier,
            path: result.path,
            error: None,
        }
    }

    /// Sentinel row for an algorithm that failed to produce a result.
    pub fn failed(algorithm: Algorithm, error: impl Into<String>) -> Self {
        Self {
            algorithm,
            cost: -1,
            nodes: 0,
            time_ms: 0.0,
            mem: 0,
            path: Vec::new(),
            error: Some(error.into()),
        }
    }

    /// Whether the algorithm ran to completion.
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "worker panicked".to_string()
    }
}

fn settle(
    algorithm: Algorithm,
    outcome: thread::Result<Result<Timed, SearchError>>,
) -> Metrics {
    match outcome {
        Ok(Ok(timed)) => {
            log::debug!(
                "{algorithm}: {} expanded, {:.4} ms average",
                timed.result.nodes_expanded,
                timed.avg_time_ms
            );
            Metrics::from_timed(algorithm, timed)
        }
        Ok(Err(e)) => {
            log::error!("{algorithm} failed: {e}");
            Metrics::failed(algorithm, e.to_string())
        }
        Err(payload) => {
            let msg = panic_message(payload.as_ref());
            log::error!("{algorithm} worker panicked: {msg}");
            Metrics::failed(algorithm, msg)
        }
    }
}

/// Time every algorithm in `algorithms` on `scenario`.
///
/// With `parallel` each algorithm runs on its own scoped thread with a
/// private copy of the scenario. A failure in one algorithm is logged and
/// replaced by a [`Metrics::failed`] row; the others are unaffected.
/// Rows come back in the order of `algorithms`.
pub fn run_all(
    scenario: &Scenario,
    algorithms: &[Algorithm],
    repeat: u32,
    parallel: bool,
) -> Vec<Metrics> {
    run_all_with(scenario, algorithms, repeat, parallel, time_algorithm)
}

/// [`run_all`] with a custom timing function.
pub fn run_all_with<T>(
    scenario: &Scenario,
    algorithms: &[Algorithm],
    repeat: u32,
    parallel: bool,
    timer: T,
) -> Vec<Metrics>
where
    T: Fn(Algorithm, &Scenario, u32) -> Result<Timed, SearchError> + Sync,
{
    if !parallel {
        return algorithms
            .iter()
            .map(|&a| {
                let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                    timer(a, scenario, repeat)
                }));
                settle(a, outcome)
            })
            .collect();
    }

    let timer = &timer;
    thread::scope(|s| {
        let handles: Vec<_> = algorithms
            .iter()
            .map(|&a| {
                let own = scenario.clone();
                let spawned = thread::Builder::new()
                    .name(format!("search-{}", a.name()))
                    .spawn_scoped(s, move || timer(a, &own, repeat));
                (a, spawned)
            })
            .collect();

        handles
            .into_iter()
            .map(|(a, spawned)| match spawned {
                Ok(handle) => settle(a, handle.join()),
                Err(e) => {
                    log::error!("{a}: could not start worker: {e}");
                    Metrics::failed(a, e.to_string())
                }
            })
            .collect()
    })
}

//! Runs the selected engine(s) on a dedicated thread pool

use crate::config::{Config, Mode};
use crate::error::CliError;
use boxstack_solver::{Problem, Solution, Strategy, solve};
use itertools::Itertools;
use log::debug;
use std::time::{Duration, Instant};

/// Result of one run
#[derive(Debug)]
pub struct RunResult {
    pub mode: Mode,
    pub solution: Solution,
    pub elapsed: Duration,
}

/// Executes solves on a rayon pool with one thread per engine
pub struct Executor {
    mode: Mode,
    thread_pool: rayon::ThreadPool,
}

impl Executor {
    /// Create an executor for `config`
    pub fn new(config: &Config) -> Result<Self, CliError> {
        let num_threads = match config.mode {
            Mode::Single(_) => 1,
            Mode::Both => 2,
        };
        debug!("solver pool: {} thread(s)", num_threads);

        let thread_pool = rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .thread_name(|i| format!("boxstack-solver-{}", i))
            .build()
            .map_err(|e| CliError::ThreadPool(e.to_string()))?;

        Ok(Self {
            mode: config.mode,
            thread_pool,
        })
    }

    /// Solve `problem` and time it
    pub fn execute(&self, problem: &Problem) -> Result<RunResult, CliError> {
        let start = Instant::now();
        let solution = self.thread_pool.install(|| match self.mode {
            Mode::Single(strategy) => solve(problem, strategy).map_err(CliError::from),
            Mode::Both => cross_check(problem),
        })?;

        Ok(RunResult {
            mode: self.mode,
            solution,
            elapsed: start.elapsed(),
        })
    }
}

/// Runs both engines in parallel and returns the bottom-up solution if the
/// optimal values agree
fn cross_check(problem: &Problem) -> Result<Solution, CliError> {
    let (bottom_up, top_down) = rayon::join(
        || solve(problem, Strategy::BottomUp),
        || solve(problem, Strategy::TopDown),
    );
    let (bottom_up, top_down) = (bottom_up?, top_down?);

    if bottom_up.value() != top_down.value() {
        return Err(CliError::EngineMismatch {
            bottom_up: bottom_up.value(),
            top_down: top_down.value(),
        });
    }
    if bottom_up.stack() != top_down.stack() {
        debug!(
            "engines agree on {} but chose different stacks: [{}] / [{}]",
            bottom_up.value(),
            bottom_up.stack().iter().join(", "),
            top_down.stack().iter().join(", ")
        );
    }

    Ok(bottom_up)
}

//! Error types for the CLI

use boxstack_solver::{ParseError, SolveError, StackViolation, Value};
use std::path::PathBuf;
use thiserror::Error;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Reading the input or writing the output failed
    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input file is not a valid instance
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    /// Solver error
    #[error("Solver error: {0}")]
    Solve(#[from] SolveError),

    /// The two engines disagree on the optimum
    #[error("Engine mismatch: bottom-up found {bottom_up}, top-down found {top_down}")]
    EngineMismatch { bottom_up: Value, top_down: Value },

    /// The reported stack breaks the problem's rules
    #[error("Verification failed: {0}")]
    Verification(#[from] StackViolation),

    /// Thread pool creation failed
    #[error("Thread pool creation failed: {0}")]
    ThreadPool(String),
}

impl CliError {
    /// Wraps an I/O error with the path it happened on.
    pub fn io(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |source| CliError::Io { path, source }
    }
}

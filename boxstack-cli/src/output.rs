//! Output file writing and run summary formatting

use crate::error::CliError;
use crate::executor::RunResult;
use boxstack_solver::{Solution, render_solution};
use std::path::Path;
use std::time::Duration;

/// Write `solution` to `path` in the solution text format
pub fn write_solution(path: &Path, solution: &Solution) -> Result<(), CliError> {
    std::fs::write(path, render_solution(solution)).map_err(CliError::io(path))
}

/// Output formatter for run summaries
pub struct OutputFormatter {
    quiet: bool,
}

impl OutputFormatter {
    /// Create a new output formatter
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    /// Print the one-line summary of a finished run
    pub fn print_summary(&self, result: &RunResult, output: &Path) {
        if self.quiet {
            return;
        }
        println!("{}", format_summary(result, output));
    }
}

fn format_summary(result: &RunResult, output: &Path) -> String {
    let boxes = match result.solution.len() {
        1 => "1 box".to_string(),
        n => format!("{} boxes", n),
    };
    format!(
        "Value {} with {} ({}, {}) -> {}",
        result.solution.value(),
        boxes,
        result.mode,
        format_elapsed(result.elapsed),
        output.display()
    )
}

/// Format elapsed time at microsecond precision
fn format_elapsed(d: Duration) -> String {
    let micros = u64::try_from(d.as_micros()).unwrap_or(u64::MAX);
    humantime::format_duration(Duration::from_micros(micros)).to_string()
}

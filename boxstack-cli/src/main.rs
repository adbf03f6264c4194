//! boxstack - find the most valuable stack of boxes under a height limit

mod cli;
mod config;
mod error;
mod executor;
mod output;

use boxstack_solver::{Problem, parse_problem};
use clap::Parser;
use cli::Args;
use config::Config;
use error::CliError;
use executor::Executor;
use log::info;
use output::OutputFormatter;
use std::path::Path;

fn main() {
    let args = Args::parse();
    init_logging(args.quiet, args.verbose);

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Logs go to stderr; `-q`/`-v` override `RUST_LOG`
fn init_logging(quiet: bool, verbose: u8) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if let Some(level) = config::log_level(quiet, verbose) {
        builder.filter_level(level);
    }
    builder.target(env_logger::Target::Stderr).init();
}

fn run(args: Args) -> Result<(), CliError> {
    let config = Config::from_args(args)?;
    let result = solve_file(&config)?;
    OutputFormatter::new(config.quiet).print_summary(&result, &config.output);
    Ok(())
}

/// Read, solve, optionally verify, and write one instance
fn solve_file(config: &Config) -> Result<executor::RunResult, CliError> {
    let problem = load_problem(&config.input)?;
    info!(
        "{}: {} catalog entries, height limit {}",
        config.input.display(),
        problem.capacity(),
        problem.max_height()
    );

    let executor = Executor::new(config)?;
    let result = executor.execute(&problem)?;

    if config.verify {
        result.solution.verify(&problem)?;
        info!("stack of {} boxes verified", result.solution.len());
    }

    output::write_solution(&config.output, &result.solution)?;
    Ok(result)
}

fn load_problem(path: &Path) -> Result<Problem, CliError> {
    let input = std::fs::read_to_string(path).map_err(CliError::io(path))?;
    Ok(parse_problem(&input)?)
}

//! Configuration resolution from CLI args and environment

use crate::cli::{Args, StrategyArg};
use crate::error::CliError;
use boxstack_solver::Strategy;
use log::{LevelFilter, warn};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Environment variable consulted when no engine is chosen on the command line
pub const STRATEGY_ENV: &str = "BOXSTACK_STRATEGY";

/// Which engine(s) a run uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Single(Strategy),
    /// Both engines, cross-checked
    Both,
}

impl Default for Mode {
    fn default() -> Self {
        Mode::Single(Strategy::default())
    }
}

impl From<StrategyArg> for Mode {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::BottomUp => Mode::Single(Strategy::BottomUp),
            StrategyArg::TopDown => Mode::Single(Strategy::TopDown),
            StrategyArg::Both => Mode::Both,
        }
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("both") {
            Ok(Mode::Both)
        } else {
            s.parse().map(Mode::Single)
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Single(strategy) => write!(f, "{}", strategy),
            Mode::Both => f.write_str("both"),
        }
    }
}

/// Resolved runtime configuration
#[derive(Debug)]
pub struct Config {
    /// Problem instance path
    pub input: PathBuf,
    /// Solution path
    pub output: PathBuf,
    /// Engine selection
    pub mode: Mode,
    /// Whether to verify the stack before writing it
    pub verify: bool,
    /// Quiet mode
    pub quiet: bool,
}

impl Config {
    /// Build config from CLI args, falling back to `BOXSTACK_STRATEGY`
    pub fn from_args(args: Args) -> Result<Self, CliError> {
        let env_strategy = std::env::var(STRATEGY_ENV).ok();
        Self::resolve(args, env_strategy.as_deref())
    }

    fn resolve(args: Args, env_strategy: Option<&str>) -> Result<Self, CliError> {
        if same_file(&args.input, &args.output) {
            return Err(CliError::Config(format!(
                "input and output are the same file: {}",
                args.input.display()
            )));
        }

        let mode = match (args.recursive, args.strategy) {
            (true, _) => Mode::Single(Strategy::TopDown),
            (false, Some(arg)) => arg.into(),
            (false, None) => env_strategy
                .and_then(|value| {
                    value
                        .parse()
                        .inspect_err(|e| warn!("ignoring {}: {}", STRATEGY_ENV, e))
                        .ok()
                })
                .unwrap_or_default(),
        };

        Ok(Config {
            input: args.input,
            output: args.output,
            mode,
            verify: args.verify,
            quiet: args.quiet,
        })
    }
}

/// True if both paths name the same file, comparing canonical paths when
/// they resolve
fn same_file(input: &Path, output: &Path) -> bool {
    if input == output {
        return true;
    }
    match (input.canonicalize(), output.canonicalize()) {
        (Ok(input), Ok(output)) => input == output,
        _ => false,
    }
}

/// Log level implied by `-q` / `-v`; None leaves `RUST_LOG` in charge
pub fn log_level(quiet: bool, verbose: u8) -> Option<LevelFilter> {
    match (quiet, verbose) {
        (true, _) => Some(LevelFilter::Error),
        (false, 0) => None,
        (false, 1) => Some(LevelFilter::Debug),
        (false, _) => Some(LevelFilter::Trace),
    }
}

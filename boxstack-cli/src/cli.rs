//! CLI argument parsing using clap

use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;

/// Which engine(s) to run
#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
pub enum StrategyArg {
    /// Iterative tabulation over all heights (default)
    #[default]
    BottomUp,
    /// Memoized recursion from the height limit down
    TopDown,
    /// Run both engines concurrently and check they agree
    Both,
}

/// Box stacking solver
#[derive(Parser, Debug)]
#[command(
    name = "boxstack",
    about = "Find the most valuable stack of boxes under a height limit",
    version
)]
pub struct Args {
    /// Use the recursive (top-down) engine
    #[arg(short = 'r', long, visible_short_alias = 'R', conflicts_with = "strategy")]
    pub recursive: bool,

    /// Engine to run: bottom-up, top-down or both
    #[arg(long, value_enum)]
    pub strategy: Option<StrategyArg>,

    /// Check the stack against the problem before writing it
    #[arg(long)]
    pub verify: bool,

    /// Quiet mode - no summary, errors only
    #[arg(short, long)]
    pub quiet: bool,

    /// Raise log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Problem instance to read
    pub input: PathBuf,

    /// File the solution is written to
    pub output: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn test_positional_paths() {
        let args = Args::try_parse_from(["boxstack", "in.txt", "out.txt"]).unwrap();
        assert_eq!(args.input, PathBuf::from("in.txt"));
        assert_eq!(args.output, PathBuf::from("out.txt"));
        assert!(!args.recursive);
        assert_eq!(args.strategy, None);
        assert_eq!(args.verbose, 0);
    }

    #[test]
    fn test_recursive_flag_spellings() {
        for flag in ["-r", "-R", "--recursive"] {
            let args = Args::try_parse_from(["boxstack", flag, "in", "out"]).unwrap();
            assert!(args.recursive, "{} should select the recursive engine", flag);
        }
    }

    #[test]
    fn test_strategy_values() {
        let args = Args::try_parse_from(["boxstack", "--strategy", "both", "in", "out"]).unwrap();
        assert_eq!(args.strategy, Some(StrategyArg::Both));

        let err = Args::try_parse_from(["boxstack", "--strategy", "sideways", "in", "out"])
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidValue);
    }

    #[test]
    fn test_recursive_conflicts_with_strategy() {
        let err = Args::try_parse_from(["boxstack", "-r", "--strategy", "bottom-up", "in", "out"])
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
    }

    #[test]
    fn test_missing_output_path() {
        let err = Args::try_parse_from(["boxstack", "in"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_verbosity_counts() {
        let args = Args::try_parse_from(["boxstack", "-vv", "--verify", "in", "out"]).unwrap();
        assert_eq!(args.verbose, 2);
        assert!(args.verify);
    }
}

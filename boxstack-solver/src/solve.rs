//! Solve entry point tying the index, engines, selector and reconstructor together.

use std::fmt;
use std::str::FromStr;

use log::debug;

use crate::catalog::Problem;
use crate::engine::{BottomUp, StackEngine, TopDown};
use crate::error::SolveError;
use crate::reconstruct::reconstruct;
use crate::select::select_optimum;
use crate::solution::Solution;
use crate::stackability::StackabilityIndex;
use crate::table::Tables;

/// Which engine fills the DP tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Strategy {
    /// Iterative tabulation
    #[default]
    BottomUp,
    /// Memoized recursion
    TopDown,
}

impl Strategy {
    pub const ALL: [Strategy; 2] = [Strategy::BottomUp, Strategy::TopDown];

    pub fn name(self) -> &'static str {
        match self {
            Strategy::BottomUp => BottomUp::NAME,
            Strategy::TopDown => TopDown::NAME,
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Strategy::ALL
            .into_iter()
            .find(|strategy| strategy.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown strategy '{}'", s))
    }
}

/// Fills the value and link tables of a complete problem.
///
/// The stackability index lives only for the duration of this call.
pub fn tabulate(problem: &Problem, strategy: Strategy) -> Result<Tables, SolveError> {
    problem.ensure_complete()?;

    let index = StackabilityIndex::build(problem.boxes())?;
    debug!(
        "{}: {} boxes, height {}, {} stackable pairs",
        strategy,
        index.len(),
        problem.max_height(),
        index.pair_count()
    );

    match strategy {
        Strategy::BottomUp => BottomUp::tabulate(problem, &index),
        Strategy::TopDown => TopDown::tabulate(problem, &index),
    }
}

/// Computes the maximum stack value and one stack achieving it.
///
/// Every structure built here is owned by this call and dropped before it
/// returns, on success and on error alike.
///
/// # Errors
///
/// - [`SolveError::Incomplete`] if boxes or values don't fill the catalog
/// - [`SolveError::Allocation`] / [`SolveError::TableTooLarge`] if the index,
///   the tables or the stack cannot be allocated
/// - [`SolveError::ThreadPool`] if a deep top-down solve cannot start its
///   recursion thread
///
/// # Stack usage
///
/// [`Strategy::BottomUp`] uses constant stack. [`Strategy::TopDown`] recurses
/// once per unit of the height limit; limits above [`TopDown::INLINE_LEVELS`]
/// are evaluated on a thread with a [`TopDown::stack_bytes`] stack, so any
/// caller thread is safe.
pub fn solve(problem: &Problem, strategy: Strategy) -> Result<Solution, SolveError> {
    let tables = tabulate(problem, strategy)?;
    let optimum = select_optimum(tables.values.row(problem.max_height()));

    let stack = match optimum.index {
        Some(base) if optimum.value > 0 => {
            reconstruct(&tables, problem.boxes(), problem.max_height(), base)?
        }
        _ => Vec::new(),
    };

    debug!(
        "{}: optimum {} with {} boxes",
        strategy,
        optimum.value,
        stack.len()
    );
    Ok(Solution::new(optimum.value, stack))
}

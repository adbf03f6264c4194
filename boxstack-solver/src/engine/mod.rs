//! The two DP engines.
//!
//! Both fill the same [`Tables`] from the same recurrence: cell `(k, i)` is the
//! best value of a stack of height at most `k` whose base is box `i`,
//!
//! ```text
//! best(k, i) = value(i) + max over j on top of i of best(k - height(i), j)
//! ```
//!
//! with `best(k, i) = 0` when box `i` is taller than `k`. Candidates are scanned
//! in stackability-index order and only a strictly better one replaces the
//! current cell, so the first `j` reaching the maximum is kept.

mod bottom_up;
mod top_down;

pub use bottom_up::BottomUp;
pub use top_down::TopDown;

use crate::catalog::Problem;
use crate::error::SolveError;
use crate::stackability::StackabilityIndex;
use crate::table::Tables;

/// A strategy for filling the value and link tables of a problem.
pub trait StackEngine {
    /// Human-readable name used in logs.
    const NAME: &'static str;

    /// Fills tables of `(max_height + 1) x catalog_len` cells.
    ///
    /// The problem must be complete and `index` built from its boxes.
    fn tabulate(problem: &Problem, index: &StackabilityIndex) -> Result<Tables, SolveError>;
}

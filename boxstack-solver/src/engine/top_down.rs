//! Memoized recursion from every root `(H, i)`.

use log::{debug, trace};

use super::StackEngine;
use crate::catalog::{Problem, Value};
use crate::error::SolveError;
use crate::memo::{DpProblem, GridBackend, MemoCache};
use crate::stackability::StackabilityIndex;
use crate::table::Tables;

/// One solved memo slot: the cell's value and the box stacked on its base.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct StackCell {
    value: Value,
    next: Option<usize>,
}

impl StackCell {
    const EMPTY: StackCell = StackCell {
        value: 0,
        next: None,
    };
}

/// The stacking recurrence over `(height, base box)` indices.
///
/// Dependencies of `(h, i)` are `(h - height(i), j)` for every `j` on top of `i`,
/// so every edge strictly lowers the height and the graph is a DAG.
struct StackRecurrence<'a> {
    problem: &'a Problem,
    index: &'a StackabilityIndex,
}

impl DpProblem<(usize, usize), StackCell> for StackRecurrence<'_> {
    fn deps(&self, &(height, base): &(usize, usize)) -> Vec<(usize, usize)> {
        match height.checked_sub(self.problem.height_of(base)) {
            Some(rest) => self
                .index
                .on_top_of(base)
                .iter()
                .map(|&upper| (rest, upper))
                .collect(),
            None => Vec::new(),
        }
    }

    fn compute(&self, &(_, base): &(usize, usize), deps: Vec<StackCell>) -> StackCell {
        let own = self.problem.value_of(base);
        let mut cell = StackCell::EMPTY;

        // deps is empty when the base doesn't fit
        for (&upper, above) in self.index.on_top_of(base).iter().zip(&deps) {
            let candidate = own.saturating_add(above.value);
            if candidate > cell.value {
                cell.value = candidate;
                // Only link when the stack is worth more than the base alone
                if candidate > own {
                    cell.next = Some(upper);
                }
            }
        }
        cell
    }
}

/// Evaluates only the cells reachable from row H, each at most once.
///
/// # Stack usage
///
/// The recursion nests one memo lookup per unit of height, so a solve needs
/// about [`TopDown::STACK_BYTES_PER_LEVEL`] bytes of stack per level of the
/// height limit. Up to [`TopDown::INLINE_LEVELS`] levels (1 MiB at that rate)
/// run on the caller's thread, within the 2 MiB default of spawned threads. Deeper limits
/// run on a dedicated thread whose stack is sized by [`TopDown::stack_bytes`],
/// so callers on ordinary threads never overflow.
#[derive(Debug, Clone, Copy, Default)]
pub struct TopDown;

impl TopDown {
    /// Height limits evaluated on the calling thread
    pub const INLINE_LEVELS: usize = 1 << 8;

    /// Stack reserved per level of recursion
    pub const STACK_BYTES_PER_LEVEL: usize = 4 << 10;

    /// Stack reserved for a recursion thread regardless of depth
    const BASE_STACK_BYTES: usize = 1 << 20;

    /// Stack size of the thread that evaluates a height limit of `max_height`.
    pub fn stack_bytes(max_height: usize) -> usize {
        max_height
            .saturating_add(1)
            .saturating_mul(Self::STACK_BYTES_PER_LEVEL)
            .saturating_add(Self::BASE_STACK_BYTES)
    }
}

impl StackEngine for TopDown {
    const NAME: &'static str = "top-down";

    fn tabulate(problem: &Problem, index: &StackabilityIndex) -> Result<Tables, SolveError> {
        let max_height = problem.max_height();
        if max_height <= Self::INLINE_LEVELS {
            return evaluate(problem, index);
        }

        let stack_size = Self::stack_bytes(max_height);
        debug!("top-down: height {} on a {} byte stack", max_height, stack_size);
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(1)
            .stack_size(stack_size)
            .thread_name(|_| "boxstack-top-down".to_string())
            .build()
            .map_err(|source| SolveError::ThreadPool { stack_size, source })?;
        pool.install(|| evaluate(problem, index))
    }
}

/// Runs the memoized recursion from every root `(H, i)` on the current thread.
fn evaluate(problem: &Problem, index: &StackabilityIndex) -> Result<Tables, SolveError> {
    let n = problem.boxes().len();
    let max_height = problem.max_height();
    let rows = max_height
        .checked_add(1)
        .ok_or(SolveError::TableTooLarge {
            rows: max_height,
            cols: n,
        })?;

    let mut backend = GridBackend::try_new(rows, n)?;
    backend.seed_row(0, StackCell::EMPTY);
    let cache = MemoCache::with_problem(backend, StackRecurrence { problem, index });

    for base in 0..n {
        cache.get(&(max_height, base))?;
    }

    let memo = cache.into_backend().into_grid();
    let solved: usize = (0..rows).map(|k| memo.row(k).iter().flatten().count()).sum();
    trace!("top-down solved {} of {} cells", solved, rows * n);

    Ok(Tables {
        values: memo.try_map("value table", |slot| slot.map_or(0, |cell| cell.value))?,
        links: memo.try_map("link table", |slot| slot.and_then(|cell| cell.next))?,
    })
}

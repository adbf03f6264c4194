//! Rebuilds the winning stack from the link table.

use log::trace;

use crate::catalog::Dimensions;
use crate::error::SolveError;
use crate::table::Tables;

/// Walks the links from cell (`height`, `base`) and returns the catalog
/// indices of the stack, base first and top last.
///
/// Each step consumes the current box's height from the budget, so the walk
/// takes at most `height` steps.
pub fn reconstruct(
    tables: &Tables,
    boxes: &[Dimensions],
    height: usize,
    base: usize,
) -> Result<Vec<usize>, SolveError> {
    let mut stack = Vec::new();
    push(&mut stack, base)?;

    let (mut budget, mut current) = (height, base);
    while let Some(next) = tables.link(budget, current) {
        // A link is only recorded when the current box fits the budget
        let Some(rest) = budget.checked_sub(boxes[current].height() as usize) else {
            break;
        };
        budget = rest;
        current = next;
        push(&mut stack, current)?;
    }

    trace!("reconstructed stack of {} boxes from ({}, {})", stack.len(), height, base);
    Ok(stack)
}

fn push(stack: &mut Vec<usize>, index: usize) -> Result<(), SolveError> {
    stack
        .try_reserve(1)
        .map_err(|source| SolveError::Allocation {
            structure: "stack sequence",
            source,
        })?;
    stack.push(index);
    Ok(())
}

//! Iterative tabulation over heights 1..=H.

use super::StackEngine;
use crate::catalog::Problem;
use crate::error::SolveError;
use crate::stackability::StackabilityIndex;
use crate::table::Tables;

/// Fills the tables row by row, every row reading only lower rows.
///
/// O(n²·H) time, O(n·H) space.
#[derive(Debug, Clone, Copy, Default)]
pub struct BottomUp;

impl StackEngine for BottomUp {
    const NAME: &'static str = "bottom-up";

    fn tabulate(problem: &Problem, index: &StackabilityIndex) -> Result<Tables, SolveError> {
        let n = problem.boxes().len();
        let mut tables = Tables::try_new(problem.max_height(), n)?;

        for k in 1..=problem.max_height() {
            let (lower_rows, values) = tables.values.split_at_row_mut(k);
            let links = tables.links.row_mut(k);

            for i in 0..n {
                let Some(rest) = k.checked_sub(problem.height_of(i)) else {
                    continue;
                };
                let own = problem.value_of(i);
                let below = &lower_rows[rest * n..][..n];

                for &j in index.on_top_of(i) {
                    let candidate = own.saturating_add(below[j]);
                    if candidate > values[i] {
                        values[i] = candidate;
                        // Only link when something is actually stacked on i
                        if below[j] != 0 {
                            links[i] = Some(j);
                        }
                    }
                }
            }
        }

        Ok(tables)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Dimensions;

    fn problem(max_height: usize, boxes: &[((u32, u32, u32), u64)]) -> Problem {
        Problem::with_rotations(
            max_height,
            boxes
                .iter()
                .map(|&((w, h, d), v)| (Dimensions::new(w, h, d).unwrap(), v))
                .collect::<Vec<_>>(),
        )
        .unwrap()
    }

    fn tabulate(problem: &Problem) -> Tables {
        let index = StackabilityIndex::build(problem.boxes()).unwrap();
        BottomUp::tabulate(problem, &index).unwrap()
    }

    #[test]
    fn test_row_zero_is_empty() {
        let p = problem(3, &[((1, 1, 1), 4)]);
        let tables = tabulate(&p);
        assert_eq!(tables.values.row(0), &[0, 0]);
        assert_eq!(tables.links.row(0), &[None, None]);
    }

    #[test]
    fn test_repeats_fill_the_budget() {
        // Catalog: 0 = (1, 1, 1), 1 = its rotation, identical
        let p = problem(3, &[((1, 1, 1), 4)]);
        let tables = tabulate(&p);

        assert_eq!(tables.values.row(1), &[4, 4]);
        assert_eq!(tables.values.row(2), &[8, 8]);
        assert_eq!(tables.values.row(3), &[12, 12]);
        // Single box: nothing stacked on it
        assert_eq!(tables.link(1, 0), None);
        // First stackable index wins the tie
        assert_eq!(tables.link(3, 1), Some(0));
    }

    #[test]
    fn test_box_taller_than_budget_stays_empty() {
        // 0 = (2, 5, 2) height 5, 1 = (5, 2, 2) height 2
        let p = problem(4, &[((2, 5, 2), 9)]);
        let tables = tabulate(&p);

        assert_eq!(tables.values.row(4)[0], 0);
        assert_eq!(tables.link(4, 0), None);
        // Rotation of height 2 fits twice
        assert_eq!(tables.values.row(4)[1], 18);
        assert_eq!(tables.link(4, 1), Some(1));
    }

    #[test]
    fn test_budget_is_an_upper_bound() {
        // 0 = (3, 2, 3), 1 = (2, 3, 3); only 1 fits on 1
        let p = problem(5, &[((3, 2, 3), 1)]);
        let tables = tabulate(&p);
        // Two boxes of height 2 leave one unit of the budget unused
        assert_eq!(tables.values.row(5)[0], 2);
        assert_eq!(tables.values.row(4)[0], 2);
        // A second copy of box 1 would need height 6
        assert_eq!(tables.values.row(5)[1], 1);
        assert_eq!(tables.link(5, 1), None);
    }
}

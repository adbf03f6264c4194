//! Owned 2-D tables for the DP engines.
//!
//! A [`Grid`] stores `rows * cols` cells in one contiguous row-major
//! allocation. Allocation is fallible so that a table too large for the
//! machine surfaces as a [`SolveError`] instead of aborting.

use crate::catalog::Value;
use crate::error::SolveError;

/// Runtime-sized row-major grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    rows: usize,
    cols: usize,
    cells: Vec<T>,
}

impl<T: Clone> Grid<T> {
    /// Allocates a grid with every cell set to `fill`.
    ///
    /// `structure` names the table in allocation errors.
    pub fn try_filled(
        rows: usize,
        cols: usize,
        fill: T,
        structure: &'static str,
    ) -> Result<Self, SolveError> {
        let len = rows
            .checked_mul(cols)
            .ok_or(SolveError::TableTooLarge { rows, cols })?;

        let mut cells = Vec::new();
        cells
            .try_reserve_exact(len)
            .map_err(|source| SolveError::Allocation { structure, source })?;
        cells.resize(len, fill);

        Ok(Self { rows, cols, cells })
    }
}

impl<T> Grid<T> {
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.rows && col < self.cols).then(|| row * self.cols + col)
    }

    /// Returns the cell at (`row`, `col`), or None outside the grid.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        self.offset(row, col).map(|at| &self.cells[at])
    }

    #[inline]
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        self.offset(row, col).map(|at| &mut self.cells[at])
    }

    /// Returns one full row.
    ///
    /// # Panics
    ///
    /// Panics if `row` is out of range.
    #[inline]
    pub fn row(&self, row: usize) -> &[T] {
        let start = row * self.cols;
        &self.cells[start..start + self.cols]
    }

    #[inline]
    pub fn row_mut(&mut self, row: usize) -> &mut [T] {
        let start = row * self.cols;
        &mut self.cells[start..start + self.cols]
    }

    /// Splits the grid so that `row` can be written while every earlier
    /// row is read.
    #[inline]
    pub fn split_at_row_mut(&mut self, row: usize) -> (&[T], &mut [T]) {
        let (done, rest) = self.cells.split_at_mut(row * self.cols);
        (done, &mut rest[..self.cols])
    }

    /// Builds a same-shaped grid by mapping every cell.
    pub fn try_map<U, F>(&self, structure: &'static str, mut f: F) -> Result<Grid<U>, SolveError>
    where
        F: FnMut(&T) -> U,
    {
        let mut cells = Vec::new();
        cells
            .try_reserve_exact(self.cells.len())
            .map_err(|source| SolveError::Allocation { structure, source })?;
        cells.extend(self.cells.iter().map(&mut f));

        Ok(Grid {
            rows: self.rows,
            cols: self.cols,
            cells,
        })
    }
}

/// Value and link tables produced by either engine.
///
/// Both are `(max_height + 1) x catalog_len`. Cell `(k, i)` of `values` is the
/// best value of a stack based on box `i` whose height is at most `k`;
/// cell `(k, i)` of `links` is the box resting directly on `i` in that stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tables {
    pub values: Grid<Value>,
    pub links: Grid<Option<usize>>,
}

impl Tables {
    /// Allocates zeroed tables for heights `0..=max_height` and `boxes` columns.
    pub fn try_new(max_height: usize, boxes: usize) -> Result<Self, SolveError> {
        let rows = max_height
            .checked_add(1)
            .ok_or(SolveError::TableTooLarge {
                rows: max_height,
                cols: boxes,
            })?;

        Ok(Self {
            values: Grid::try_filled(rows, boxes, 0, "value table")?,
            links: Grid::try_filled(rows, boxes, None, "link table")?,
        })
    }

    /// The box stacked directly on `box_index` in the optimum of cell (`height`, `box_index`).
    #[inline]
    pub fn link(&self, height: usize, box_index: usize) -> Option<usize> {
        self.links.get(height, box_index).copied().flatten()
    }

    pub fn max_height(&self) -> usize {
        self.values.rows() - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filled_grid_shape_and_addressing() {
        let mut grid = Grid::try_filled(3, 4, 0u32, "test grid").unwrap();
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.cols(), 4);

        *grid.get_mut(2, 1).unwrap() = 7;
        grid.row_mut(1)[3] = 5;

        assert_eq!(grid.get(2, 1), Some(&7));
        assert_eq!(grid.row(1), &[0, 0, 0, 5]);
        assert_eq!(grid.row(2), &[0, 7, 0, 0]);
        assert_eq!(grid.get(3, 0), None);
        assert_eq!(grid.get(0, 4), None);
    }

    #[test]
    fn test_split_at_row_exposes_previous_rows() {
        let mut grid = Grid::try_filled(3, 2, 1u8, "test grid").unwrap();
        grid.row_mut(0)[1] = 9;

        let (done, current) = grid.split_at_row_mut(2);
        assert_eq!(done.len(), 4);
        assert_eq!(done[1], 9);
        current[0] = 3;

        assert_eq!(grid.row(2), &[3, 1]);
    }

    #[test]
    fn test_oversized_grid_is_an_error() {
        let err = Grid::try_filled(usize::MAX, 2, 0u8, "huge").unwrap_err();
        assert!(matches!(err, SolveError::TableTooLarge { .. }));

        let err = Grid::try_filled(usize::MAX / 2, 1, 0u64, "huge").unwrap_err();
        assert!(matches!(
            err,
            SolveError::Allocation {
                structure: "huge",
                ..
            }
        ));
    }

    #[test]
    fn test_try_map_keeps_shape() {
        let grid = Grid::try_filled(2, 3, Some(4u64), "test grid").unwrap();
        let mapped = grid.try_map("mapped", |cell| cell.unwrap_or(0) * 2).unwrap();
        assert_eq!(mapped.rows(), 2);
        assert_eq!(mapped.cols(), 3);
        assert_eq!(mapped.row(1), &[8, 8, 8]);
    }

    #[test]
    fn test_tables_start_empty() {
        let tables = Tables::try_new(4, 3).unwrap();
        assert_eq!(tables.max_height(), 4);
        assert_eq!(tables.values.rows(), 5);
        assert!(tables.values.row(4).iter().all(|&v| v == 0));
        assert_eq!(tables.link(4, 2), None);
        assert_eq!(tables.link(9, 9), None);
    }
}

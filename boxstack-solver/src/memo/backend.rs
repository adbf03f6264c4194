//! Storage backends for the memo cache.

use crate::error::{MemoError, SolveError};
use crate::table::Grid;

/// A storage backend for the memo cache.
///
/// # Contract
///
/// - `get` returns `None` for a slot that has not been solved yet
/// - `get_or_insert` only calls `f` when the slot is empty, and never
///   overwrites a solved slot
pub trait Backend<I, K> {
    /// Returns the cached value for the given index, if any.
    fn get(&self, index: &I) -> Option<&K>;

    /// Returns the cached value, computing and storing it with `f` if absent.
    fn get_or_insert<F>(&mut self, index: I, f: F) -> Result<&K, MemoError>
    where
        F: FnOnce() -> K;
}

/// A fixed-shape 2D backend for `(row, col)` indices.
///
/// All slots are allocated up front in one block; an empty slot marks a
/// sub-problem that has not been solved yet.
#[derive(Debug)]
pub struct GridBackend<K> {
    slots: Grid<Option<K>>,
}

impl<K: Clone> GridBackend<K> {
    /// Allocates `rows * cols` empty slots.
    pub fn try_new(rows: usize, cols: usize) -> Result<Self, SolveError> {
        Ok(Self {
            slots: Grid::try_filled(rows, cols, None, "memo table")?,
        })
    }

    /// Marks every slot of `row` as solved with `value`.
    ///
    /// # Panics
    ///
    /// Panics if `row` is out of range.
    pub fn seed_row(&mut self, row: usize, value: K) {
        self.slots
            .row_mut(row)
            .iter_mut()
            .for_each(|slot| *slot = Some(value.clone()));
    }
}

impl<K> GridBackend<K> {
    /// Consumes the backend, returning its slots.
    pub fn into_grid(self) -> Grid<Option<K>> {
        self.slots
    }
}

impl<K> Backend<(usize, usize), K> for GridBackend<K> {
    fn get(&self, index: &(usize, usize)) -> Option<&K> {
        let (row, col) = *index;
        self.slots.get(row, col).and_then(Option::as_ref)
    }

    fn get_or_insert<F>(&mut self, index: (usize, usize), f: F) -> Result<&K, MemoError>
    where
        F: FnOnce() -> K,
    {
        let (row, col) = index;
        let (rows, cols) = (self.slots.rows(), self.slots.cols());
        let slot = self
            .slots
            .get_mut(row, col)
            .ok_or(MemoError::OutOfBounds {
                row,
                col,
                rows,
                cols,
            })?;
        Ok(slot.get_or_insert_with(f))
    }
}

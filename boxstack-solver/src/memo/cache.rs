//! Single-threaded memo cache implementation.

use std::cell::RefCell;
use std::marker::PhantomData;

use super::backend::Backend;
use super::problem::DpProblem;
use crate::error::MemoError;

/// A memoization cache with lazy evaluation and dependency resolution.
///
/// `MemoCache` memoizes recursive computations where values depend on other
/// values. Dependencies are resolved automatically and each value is computed
/// exactly once.
///
/// # Type Parameters
///
/// - `I`: Index type (must implement `Clone`)
/// - `K`: Value type (must implement `Clone`)
/// - `B`: Backend storage type (must implement `Backend<I, K>`)
/// - `P`: Problem type (must implement `DpProblem<I, K>`)
///
/// # Warning: No Cycle Detection
///
/// Recursion depth equals the longest dependency chain. **Users MUST ensure
/// dependencies form a DAG.**
pub struct MemoCache<I, K, B, P>
where
    B: Backend<I, K>,
    P: DpProblem<I, K>,
{
    backend: RefCell<B>,
    problem: P,
    _phantom: PhantomData<(I, K)>,
}

impl<I, K, B, P> MemoCache<I, K, B, P>
where
    I: Clone,
    K: Clone,
    B: Backend<I, K>,
    P: DpProblem<I, K>,
{
    /// Creates a new cache with the given backend and problem definition.
    pub fn with_problem(backend: B, problem: P) -> Self {
        Self {
            backend: RefCell::new(backend),
            problem,
            _phantom: PhantomData,
        }
    }

    /// Retrieves the value for the given index, computing it if necessary.
    ///
    /// If the value is already cached, returns a clone of the cached value.
    /// Otherwise, resolves all dependencies recursively, computes the value,
    /// caches it, and returns a clone.
    ///
    /// # Errors
    ///
    /// Returns the backend's error if the index (or one of its dependencies)
    /// has no storage slot.
    pub fn get(&self, index: &I) -> Result<K, MemoError> {
        // Fast path: already computed
        if let Some(value) = self.backend.borrow().get(index) {
            return Ok(value.clone());
        }

        // Resolve dependencies recursively (no borrow held)
        let dep_values = self
            .problem
            .deps(index)
            .iter()
            .map(|dep| self.get(dep))
            .collect::<Result<Vec<K>, _>>()?;

        let mut backend = self.backend.borrow_mut();
        let value = backend.get_or_insert(index.clone(), || {
            self.problem.compute(index, dep_values)
        })?;
        Ok(value.clone())
    }

    /// Consumes the cache, returning the backend with every solved slot.
    pub fn into_backend(self) -> B {
        self.backend.into_inner()
    }
}

//! Trait-based DP problem definition.

/// A trait for defining dynamic programming problems.
///
/// Implement this trait to define the dependency structure and computation
/// logic for a DP problem evaluated by [`MemoCache`](super::MemoCache).
///
/// # Type Parameters
///
/// - `I`: Index type for the cache
/// - `K`: Value type stored in the cache
pub trait DpProblem<I, K> {
    /// Returns the indices that this index depends on.
    ///
    /// For base cases, return an empty vector.
    fn deps(&self, index: &I) -> Vec<I>;

    /// Computes the value for the given index using resolved dependency values.
    ///
    /// The `deps` vector contains the computed values for each dependency
    /// returned by `deps()`, in the same order.
    fn compute(&self, index: &I, deps: Vec<K>) -> K;
}

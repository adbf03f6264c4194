//! Memoization cache with lazy evaluation
//!
//! This module provides a memoization cache for dynamic programming problems where
//! values depend on other values in a directed acyclic graph (DAG). The top-down
//! stacking engine is expressed as a [`DpProblem`] and evaluated through [`MemoCache`].
//!
//! # Backend Types
//!
//! - [`GridBackend`]: Runtime-sized 2D storage for `(row, col)` indices. Empty slots are
//!   the "unsolved" state; whole rows can be seeded with known base cases.
//!
//! # Warning: Cycle Behavior
//!
//! **This cache does NOT support cycle detection.** If the dependency graph contains
//! cycles the recursion never terminates (stack overflow).
//!
//! **Users MUST ensure that dependencies form a DAG.**
//!
//! # Example
//!
//! ```rust
//! use boxstack_solver::memo::{DpProblem, GridBackend, MemoCache};
//!
//! struct GridPaths;
//!
//! impl DpProblem<(usize, usize), u64> for GridPaths {
//!     fn deps(&self, pos: &(usize, usize)) -> Vec<(usize, usize)> {
//!         let (r, c) = *pos;
//!         if r == 0 && c == 0 { vec![] }
//!         else if r == 0 { vec![(0, c - 1)] }
//!         else if c == 0 { vec![(r - 1, 0)] }
//!         else { vec![(r - 1, c), (r, c - 1)] }
//!     }
//!     fn compute(&self, _pos: &(usize, usize), deps: Vec<u64>) -> u64 {
//!         if deps.is_empty() { 1 } else { deps.iter().sum() }
//!     }
//! }
//!
//! let cache = MemoCache::with_problem(GridBackend::try_new(5, 5).unwrap(), GridPaths);
//! assert_eq!(cache.get(&(4, 4)).unwrap(), 70); // C(8,4) = 70 paths
//! ```

mod backend;
mod cache;
mod problem;

pub use backend::{Backend, GridBackend};
pub use cache::MemoCache;
pub use problem::DpProblem;

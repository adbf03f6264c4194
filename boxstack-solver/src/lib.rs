//! Box Stacking Solver Library
//!
//! Computes the most valuable stack that can be built from a catalog of boxes
//! under a height limit, where every box may be used any number of times and
//! must rest on a box at least as wide and as deep as itself.
//!
//! # Overview
//!
//! This library provides:
//! - A bounded [`Problem`] catalog holding both rotations of every box
//! - A [`StackabilityIndex`] relating each box to the boxes that fit on it
//! - Two interchangeable DP engines: iterative [`BottomUp`] tabulation and
//!   memoized [`TopDown`] recursion built on the generic [`memo`] cache
//! - Optimum selection and stack reconstruction into a [`Solution`]
//! - The text input/output formats in [`text`]
//!
//! # Quick Example
//!
//! ```
//! use boxstack_solver::{solve, Dimensions, Problem, Strategy};
//!
//! // One 4x2x4 box worth 10 and one 2x2x2 box worth 7, stack height 4
//! let problem = Problem::with_rotations(
//!     4,
//!     [
//!         (Dimensions::new(4, 2, 4).unwrap(), 10),
//!         (Dimensions::new(2, 2, 2).unwrap(), 7),
//!     ],
//! )
//! .unwrap();
//!
//! let solution = solve(&problem, Strategy::BottomUp).unwrap();
//! // Boxes repeat: the big box twice beats big box + small box
//! assert_eq!(solution.value(), 20);
//! assert_eq!(solution.stack(), &[0, 0]);
//!
//! let same = solve(&problem, Strategy::TopDown).unwrap();
//! assert_eq!(same, solution);
//! ```
//!
//! # Key Concepts
//!
//! ## Catalog layout
//!
//! Box `i` of the input is stored as catalog entries `2i` (as given) and
//! `2i + 1` (width and height swapped). Both carry the box's value.
//!
//! ## Tables
//!
//! Both engines fill `(H + 1) x n` [`Tables`]: cell `(k, i)` holds the best value of
//! a stack whose base is box `i` and whose height is at most `k`, plus a link to
//! the box resting on `i`. The answer is the best cell of row `H`; following the
//! links from it yields the stack.
//!
//! ## Resource ownership
//!
//! The index and tables of a solve are owned by that call and dropped on every
//! exit path. Allocation failures are reported as [`SolveError::Allocation`]
//! rather than aborting.

mod catalog;
mod engine;
mod error;
pub mod memo;
mod reconstruct;
mod select;
mod solution;
mod solve;
mod stackability;
mod table;
pub mod text;

// Re-export public API
pub use catalog::{Dimensions, Problem, Value};
pub use engine::{BottomUp, StackEngine, TopDown};
pub use error::{MemoError, ParseError, ProblemError, SolveError, StackViolation};
pub use reconstruct::reconstruct;
pub use select::{Optimum, select_optimum};
pub use solution::{Placement, Rotation, Solution};
pub use solve::{Strategy, solve, tabulate};
pub use stackability::StackabilityIndex;
pub use table::{Grid, Tables};
pub use text::{parse_problem, render_solution};

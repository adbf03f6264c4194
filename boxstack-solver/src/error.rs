//! Error types for the solver library

use std::collections::TryReserveError;

use thiserror::Error;

/// Error type for building a problem instance
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProblemError {
    /// The catalog must have room for at least one box
    #[error("Invalid catalog capacity: {0}")]
    InvalidCapacity(usize),
    /// Every box dimension must be strictly positive
    #[error("Box {axis} must be greater than zero")]
    ZeroDimension { axis: &'static str },
    /// All box slots are already filled
    #[error("Catalog is full ({capacity} boxes)")]
    CatalogFull { capacity: usize },
    /// All value slots are already filled
    #[error("Value list is full ({capacity} values)")]
    ValuesFull { capacity: usize },
    /// Storage for the catalog could not be reserved
    #[error("Failed to allocate catalog: {0}")]
    Allocation(#[from] TryReserveError),
}

/// Error type for a solve invocation
#[derive(Debug, Error)]
pub enum SolveError {
    /// Boxes and values must both fill the catalog before solving
    #[error("Problem is incomplete: {boxes} boxes and {values} values for capacity {capacity}")]
    Incomplete {
        capacity: usize,
        boxes: usize,
        values: usize,
    },
    /// A per-call structure could not be allocated
    #[error("Failed to allocate {structure}: {source}")]
    Allocation {
        structure: &'static str,
        #[source]
        source: TryReserveError,
    },
    /// Table dimensions overflow the address space
    #[error("Table of {rows}x{cols} cells is too large")]
    TableTooLarge { rows: usize, cols: usize },
    /// The thread for deep top-down recursion could not be started
    #[error("Failed to start a recursion thread with a {stack_size} byte stack: {source}")]
    ThreadPool {
        stack_size: usize,
        #[source]
        source: rayon::ThreadPoolBuildError,
    },
    /// The memo cache was asked for a cell outside its grid
    #[error("Memo error: {0}")]
    Memo(#[from] MemoError),
}

/// Error type for memo cache storage
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MemoError {
    /// The requested slot lies outside the backend's storage
    #[error("Index ({row}, {col}) is outside a {rows}x{cols} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
}

/// Error type for parsing input text
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A token doesn't match the expected structure
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
    /// The input ended before all required data was read
    #[error("Missing data: {0}")]
    MissingData(String),
    /// The parsed data describes an invalid problem
    #[error("Invalid problem: {0}")]
    Problem(#[from] ProblemError),
}

/// A way in which a stack breaks the rules of its problem
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StackViolation {
    /// A stack entry names no catalog box
    #[error("Stack position {position} refers to unknown box {index}")]
    UnknownBox { position: usize, index: usize },
    /// A box overhangs the box it rests on
    #[error("Box {upper} at position {position} does not fit on box {lower}")]
    Unsupported {
        position: usize,
        lower: usize,
        upper: usize,
    },
    /// The stack exceeds the height budget
    #[error("Stack height {height} exceeds the limit {limit}")]
    TooTall { height: usize, limit: usize },
    /// The box values don't add up to the reported value
    #[error("Reported value {reported} but the stacked boxes are worth {actual}")]
    ValueMismatch { reported: u64, actual: u64 },
    /// A zero-valued optimum must come with an empty stack
    #[error("Zero-valued solution lists {len} boxes")]
    ZeroValueStack { len: usize },
}

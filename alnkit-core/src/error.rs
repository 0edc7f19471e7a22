//! Structured error types for the alnkit workspace.

use thiserror::Error;

/// Unified error type for all alnkit operations.
#[derive(Debug, Error)]
pub enum AlnError {
    /// A bounds-checked matrix access fell outside the valid extents.
    #[error("index ({row}, {col}) out of bounds for {rows}x{cols} matrix")]
    IndexOutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
        /// Actual row count.
        rows: usize,
        /// Actual column count.
        cols: usize,
    },

    /// A square-only or triangular-only storage layout was asked to hold
    /// non-square dimensions.
    #[error("dimensions differ: {rows} rows vs {cols} columns")]
    DimensionMismatch {
        /// Requested row count.
        rows: usize,
        /// Requested column count.
        cols: usize,
    },

    /// Invalid input (bad arguments, out-of-range values)
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Catch-all for other errors
    #[error("{0}")]
    Other(String),
}

/// Convenience alias used throughout the alnkit workspace.
pub type Result<T> = std::result::Result<T, AlnError>;

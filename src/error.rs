//! Error type shared by the table builder and the path reconstructor.

use thiserror::Error;

/// Result type for LCS operations.
pub type Result<T> = std::result::Result<T, LcsError>;

/// Errors surfaced by the public LCS operations.
///
/// Empty input sequences are never an error: they produce a degenerate
/// all-zero table and a path with no matches.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LcsError {
    /// The table handed to the reconstructor does not have shape
    /// `(|a| + 1) x (|b| + 1)` for the sequences supplied with it.
    #[error("invalid table dimensions: expected {expected:?}, found {found:?}")]
    InvalidTableDimensions {
        expected: (usize, usize),
        found: (usize, usize),
    },

    /// A row of a caller-supplied table has a different width than row 0.
    #[error("ragged table: row {row} has {found} columns, expected {expected}")]
    RaggedTable {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A caller-supplied table has no rows or no columns.
    #[error("table must have at least one row and one column")]
    EmptyTable,

    /// A caller-supplied table forces a diagonal move off the grid, which
    /// cannot happen for a table satisfying the LCS recurrence.
    #[error("table is inconsistent with the LCS recurrence at ({row}, {col})")]
    InconsistentTable { row: usize, col: usize },

    /// A caller-supplied path breaks the shape of a backtracking walk.
    #[error("invalid path at step {index}: {reason}")]
    InvalidPath { index: usize, reason: &'static str },
}

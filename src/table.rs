//! DP score table for the Longest Common Subsequence.
//!
//! Rows index prefixes of the first sequence `a` (0..=|a|) and columns index
//! prefixes of the second sequence `b` (0..=|b|). Row 0 and column 0 stand for
//! the empty prefix and stay zero; every other cell follows the recurrence
//!
//! ```text
//! grid[i][j] = grid[i-1][j-1] + 1              if a[i-1] == b[j-1]
//!            = max(grid[i-1][j], grid[i][j-1])  otherwise
//! ```
//!
//! so `grid[|a|][|b|]` is the LCS length.

use std::ops::Index;

use crate::error::{LcsError, Result};

/// Completed LCS score table of shape `(|a| + 1) x (|b| + 1)`.
///
/// Stored row-major. Once built the table is read-only.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<Vec<u32>>", into = "Vec<Vec<u32>>")
)]
pub struct ScoreTable {
    rows: usize,
    cols: usize,
    cells: Vec<u32>,
}

/// Build the LCS score table for `a` against `b`.
///
/// Either sequence may be empty; the table then degenerates to a single
/// all-zero row or column.
pub fn build_table<T: PartialEq>(a: &[T], b: &[T]) -> ScoreTable {
    let rows = a.len() + 1;
    let cols = b.len() + 1;

    #[cfg(feature = "tracing")]
    let span = tracing::trace_span!("build_table", rows, cols);
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    // Boundary row and column start (and stay) at zero.
    let mut cells = vec![0u32; rows * cols];

    for i in 1..rows {
        let ch = &a[i - 1];
        for j in 1..cols {
            let here = i * cols + j;
            cells[here] = if *ch == b[j - 1] {
                cells[here - cols - 1] + 1
            } else {
                let up = cells[here - cols];
                let left = cells[here - 1];
                up.max(left)
            };
        }
    }

    ScoreTable { rows, cols, cells }
}

impl ScoreTable {
    /// Accept a table produced elsewhere, e.g. deserialized from a front end.
    ///
    /// Only the shape is validated; a table that breaks the recurrence is
    /// reported by the reconstructor if it ever forces an impossible move.
    pub fn from_rows(rows: Vec<Vec<u32>>) -> Result<Self> {
        let cols = rows.first().map_or(0, Vec::len);
        if cols == 0 {
            return Err(LcsError::EmptyTable);
        }
        let mut cells = Vec::with_capacity(rows.len() * cols);
        for (row, values) in rows.iter().enumerate() {
            if values.len() != cols {
                return Err(LcsError::RaggedTable {
                    row,
                    expected: cols,
                    found: values.len(),
                });
            }
            cells.extend_from_slice(values);
        }
        Ok(Self {
            rows: rows.len(),
            cols,
            cells,
        })
    }

    /// Number of rows, `|a| + 1`.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns, `|b| + 1`.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`.
    #[inline]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Score at `(row, col)`, or `None` when out of range.
    pub fn get(&self, row: usize, col: usize) -> Option<u32> {
        if row < self.rows && col < self.cols {
            Some(self.cells[row * self.cols + col])
        } else {
            None
        }
    }

    /// One full row of scores.
    ///
    /// # Panics
    /// Panics if `row >= self.rows()`.
    pub fn row(&self, row: usize) -> &[u32] {
        let start = row * self.cols;
        &self.cells[start..start + self.cols]
    }

    /// Iterate rows top to bottom.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[u32]> + '_ {
        self.cells.chunks_exact(self.cols)
    }

    /// Length of the LCS, the bottom-right score.
    pub fn lcs_len(&self) -> u32 {
        self.cells.last().copied().unwrap_or(0)
    }

    /// Copy out as nested rows.
    pub fn to_rows(&self) -> Vec<Vec<u32>> {
        self.iter_rows().map(<[u32]>::to_vec).collect()
    }
}

impl Index<(usize, usize)> for ScoreTable {
    type Output = u32;

    fn index(&self, (row, col): (usize, usize)) -> &u32 {
        assert!(
            row < self.rows && col < self.cols,
            "cell ({row}, {col}) outside {}x{} table",
            self.rows,
            self.cols
        );
        &self.cells[row * self.cols + col]
    }
}

impl TryFrom<Vec<Vec<u32>>> for ScoreTable {
    type Error = LcsError;

    fn try_from(rows: Vec<Vec<u32>>) -> Result<Self> {
        Self::from_rows(rows)
    }
}

impl From<ScoreTable> for Vec<Vec<u32>> {
    fn from(table: ScoreTable) -> Self {
        table.to_rows()
    }
}

//! Trait seam for resolving backtracking ties.
//!
//! While walking the score table back from the bottom-right cell, a cell whose
//! score equals both its left and its upper neighbour can be left either way
//! without losing optimality. Which way the walk goes decides which of the
//! equally long alignments is reported.
//!
//! [`reconstruct_path`](crate::path::reconstruct_path) always uses
//! [`PreferUp`](crate::tie_break::PreferUp). Other policies plug in through
//! [`reconstruct_path_with`](crate::path::reconstruct_path_with).

/// Direction chosen when leaving a tied cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TieMove {
    /// Drop one character of the first sequence (`row -= 1`).
    Up,
    /// Drop one character of the second sequence (`col -= 1`).
    Left,
}

/// Policy consulted only at tied cells.
///
/// Implementations see the coordinates of the tied cell (both `row >= 1` and
/// `col >= 1` are guaranteed) and return the direction to take. Both
/// directions keep the walk on an optimal path, so any policy yields a valid
/// LCS of the same length.
pub trait TieBreak {
    fn choose(&mut self, row: usize, col: usize) -> TieMove;
}

impl<P: TieBreak + ?Sized> TieBreak for &mut P {
    fn choose(&mut self, row: usize, col: usize) -> TieMove {
        (**self).choose(row, col)
    }
}

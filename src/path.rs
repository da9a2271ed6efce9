//! Backtracking path reconstruction over a completed [`ScoreTable`].
//!
//! The walk starts at the bottom-right cell `(|a|, |b|)` and ends at the
//! origin. At each cell it checks whether the score survives a move left
//! (`grid[row][col-1]`) or up (`grid[row-1][col]`):
//!
//! - only left keeps the score: move left,
//! - only up keeps the score: move up,
//! - both keep it (a tie): ask the [`TieBreak`] policy, up by default,
//! - neither keeps it: the characters at `a[row-1]` and `b[col-1]` matched,
//!   so move diagonally and record the character.
//!
//! Every step lowers `row + col`, so the walk always terminates. On a table
//! produced by [`build_table`](crate::table::build_table) for the same inputs
//! it always reaches `(0, 0)` and records exactly `grid[|a|][|b|]` matches.

use crate::error::{LcsError, Result};
use crate::table::ScoreTable;
use crate::tie_break::PreferUp;
use crate::traits::{TieBreak, TieMove};

/// How a step was reached.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StepKind {
    /// The bottom-right cell the walk starts from.
    Start,
    /// `col -= 1`.
    Left,
    /// `row -= 1`.
    Up,
    /// `row -= 1; col -= 1`, consuming one matched character from both sides.
    Diagonal,
}

/// One visited cell of the backtracking path.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathStep<T> {
    pub row: usize,
    pub col: usize,
    pub kind: StepKind,
    /// True only for diagonal moves.
    pub is_match: bool,
    /// The matched character, present only when `is_match` is true.
    pub character: Option<T>,
}

impl<T> PathStep<T> {
    fn start(row: usize, col: usize) -> Self {
        Self {
            row,
            col,
            kind: StepKind::Start,
            is_match: false,
            character: None,
        }
    }

    fn gap(row: usize, col: usize, kind: StepKind) -> Self {
        Self {
            row,
            col,
            kind,
            is_match: false,
            character: None,
        }
    }

    fn matched(row: usize, col: usize, character: T) -> Self {
        Self {
            row,
            col,
            kind: StepKind::Diagonal,
            is_match: true,
            character: Some(character),
        }
    }

    #[inline]
    pub fn coordinates(&self) -> (usize, usize) {
        (self.row, self.col)
    }
}

/// Ordered backtracking path from `(|a|, |b|)` to `(0, 0)`.
///
/// With the `serde` feature a path serializes as its list of steps and is
/// deserialized through [`Path::from_steps`], so invalid walks are rejected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Path<T> {
    steps: Vec<PathStep<T>>,
}

impl<T> Path<T> {
    /// Accept a path produced elsewhere, checking that it is a walk this
    /// crate could have produced on some table:
    ///
    /// - it is non-empty, starts with the only `Start` step and ends at `(0, 0)`,
    /// - every later step moves by exactly the offset its `kind` names,
    /// - `is_match` holds exactly for `Diagonal` steps and `character` is
    ///   present exactly when `is_match` is.
    pub fn from_steps(steps: Vec<PathStep<T>>) -> Result<Self> {
        let invalid = |index: usize, reason: &'static str| -> Result<Self> {
            Err(LcsError::InvalidPath { index, reason })
        };

        let Some(first) = steps.first() else {
            return invalid(0, "path is empty");
        };
        if first.kind != StepKind::Start {
            return invalid(0, "first step must be the start cell");
        }
        for (index, step) in steps.iter().enumerate() {
            if step.is_match != (step.kind == StepKind::Diagonal) {
                return invalid(index, "only diagonal steps are matches");
            }
            if step.character.is_some() != step.is_match {
                return invalid(index, "character must be present exactly on matches");
            }
        }
        for (index, pair) in steps.windows(2).enumerate() {
            let (prev, next) = (&pair[0], &pair[1]);
            let (dr, dc) = match next.kind {
                StepKind::Left => (0, 1),
                StepKind::Up => (1, 0),
                StepKind::Diagonal => (1, 1),
                StepKind::Start => return invalid(index + 1, "start may only appear first"),
            };
            if prev.row.checked_sub(dr) != Some(next.row)
                || prev.col.checked_sub(dc) != Some(next.col)
            {
                return invalid(index + 1, "step does not follow its move kind");
            }
        }
        if steps.last().map(PathStep::coordinates) != Some((0, 0)) {
            return invalid(steps.len() - 1, "path must end at (0, 0)");
        }

        Ok(Self { steps })
    }

    pub fn steps(&self) -> &[PathStep<T>] {
        &self.steps
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PathStep<T>> {
        self.steps.iter()
    }

    /// Number of visited cells, including the starting cell.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Never true for a reconstructed path; it always holds the start cell.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn first(&self) -> Option<&PathStep<T>> {
        self.steps.first()
    }

    pub fn last(&self) -> Option<&PathStep<T>> {
        self.steps.last()
    }

    /// Number of diagonal (match) steps; equals the LCS length.
    pub fn diagonal_count(&self) -> usize {
        self.steps.iter().filter(|s| s.is_match).count()
    }

    /// `(row, col)` of every visited cell, in walk order.
    pub fn coordinates(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.steps.iter().map(PathStep::coordinates)
    }

    pub fn into_steps(self) -> Vec<PathStep<T>> {
        self.steps
    }
}

impl<'a, T> IntoIterator for &'a Path<T> {
    type Item = &'a PathStep<T>;
    type IntoIter = std::slice::Iter<'a, PathStep<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Path<T> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serde::Serialize::serialize(&self.steps, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for Path<T> {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let steps = <Vec<PathStep<T>> as serde::Deserialize<'de>>::deserialize(deserializer)?;
        Path::from_steps(steps).map_err(serde::de::Error::custom)
    }
}

/// Reconstruct the backtracking path with the fixed prefer-up tie-break.
///
/// # Errors
/// - [`LcsError::InvalidTableDimensions`] if `table` is not
///   `(|a| + 1) x (|b| + 1)`.
/// - [`LcsError::InconsistentTable`] if a caller-supplied table forces a
///   diagonal move off the grid.
pub fn reconstruct_path<T: Clone>(table: &ScoreTable, a: &[T], b: &[T]) -> Result<Path<T>> {
    reconstruct_path_with(table, a, b, PreferUp)
}

/// Reconstruct the backtracking path, resolving ties with `tie_break`.
///
/// Non-tied cells are handled identically for every policy.
pub fn reconstruct_path_with<T, P>(
    table: &ScoreTable,
    a: &[T],
    b: &[T],
    mut tie_break: P,
) -> Result<Path<T>>
where
    T: Clone,
    P: TieBreak,
{
    let expected = (a.len() + 1, b.len() + 1);
    if table.dimensions() != expected {
        return Err(LcsError::InvalidTableDimensions {
            expected,
            found: table.dimensions(),
        });
    }

    #[cfg(feature = "tracing")]
    let span = tracing::trace_span!("reconstruct_path", rows = expected.0, cols = expected.1);
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    let mut row = a.len();
    let mut col = b.len();
    let mut steps = Vec::with_capacity(row + col + 1);
    steps.push(PathStep::start(row, col));

    while row >= 1 || col >= 1 {
        let here = table[(row, col)];
        let can_left = col >= 1 && here == table[(row, col - 1)];
        let can_up = row >= 1 && here == table[(row - 1, col)];

        match (can_left, can_up) {
            (true, false) => {
                col -= 1;
                steps.push(PathStep::gap(row, col, StepKind::Left));
            }
            (false, true) => {
                row -= 1;
                steps.push(PathStep::gap(row, col, StepKind::Up));
            }
            (true, true) => {
                let choice = tie_break.choose(row, col);
                #[cfg(feature = "tracing")]
                tracing::trace!(row, col, ?choice, "tie");
                match choice {
                    TieMove::Up => {
                        row -= 1;
                        steps.push(PathStep::gap(row, col, StepKind::Up));
                    }
                    TieMove::Left => {
                        col -= 1;
                        steps.push(PathStep::gap(row, col, StepKind::Left));
                    }
                }
            }
            (false, false) => {
                if row == 0 || col == 0 {
                    return Err(LcsError::InconsistentTable { row, col });
                }
                row -= 1;
                col -= 1;
                steps.push(PathStep::matched(row, col, a[row].clone()));
            }
        }
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(
        lcs_len = table.lcs_len(),
        path_len = steps.len(),
        "path reconstructed"
    );

    Ok(Path { steps })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::build_table;

    fn walk(a: &str, b: &str) -> Path<char> {
        let a: Vec<char> = a.chars().collect();
        let b: Vec<char> = b.chars().collect();
        let table = build_table(&a, &b);
        reconstruct_path(&table, &a, &b).unwrap()
    }

    fn kinds(path: &Path<char>) -> Vec<StepKind> {
        path.iter().map(|s| s.kind).collect()
    }

    #[test]
    fn single_match_is_one_diagonal() {
        let path = walk("a", "a");
        assert_eq!(
            path.steps(),
            &[
                PathStep::start(1, 1),
                PathStep::matched(0, 0, 'a'),
            ]
        );
    }

    #[test]
    fn empty_first_sequence_walks_left() {
        let path = walk("", "xyz");
        assert_eq!(
            kinds(&path),
            vec![StepKind::Start, StepKind::Left, StepKind::Left, StepKind::Left]
        );
        assert_eq!(path.diagonal_count(), 0);
        assert_eq!(path.last().map(PathStep::coordinates), Some((0, 0)));
    }

    #[test]
    fn empty_second_sequence_walks_up() {
        let path = walk("abc", "");
        assert_eq!(
            kinds(&path),
            vec![StepKind::Start, StepKind::Up, StepKind::Up, StepKind::Up]
        );
    }

    #[test]
    fn both_empty_is_just_the_start() {
        let path = walk("", "");
        assert_eq!(path.steps(), &[PathStep::<char>::start(0, 0)]);
    }

    #[test]
    fn tie_goes_up() {
        // grid[2][2] == grid[2][1] == grid[1][2] == 1
        let path = walk("ab", "ba");
        assert_eq!(
            path.coordinates().collect::<Vec<_>>(),
            vec![(2, 2), (1, 2), (0, 1), (0, 0)]
        );
        assert_eq!(path.steps()[1].kind, StepKind::Up);
        assert_eq!(path.steps()[2].character, Some('a'));
    }

    #[test]
    fn left_policy_changes_the_reported_alignment() {
        struct PreferLeft;
        impl TieBreak for PreferLeft {
            fn choose(&mut self, _row: usize, _col: usize) -> TieMove {
                TieMove::Left
            }
        }
        let a: Vec<char> = "ab".chars().collect();
        let b: Vec<char> = "ba".chars().collect();
        let table = build_table(&a, &b);
        let path = reconstruct_path_with(&table, &a, &b, PreferLeft).unwrap();
        assert_eq!(
            path.coordinates().collect::<Vec<_>>(),
            vec![(2, 2), (2, 1), (1, 0), (0, 0)]
        );
        assert_eq!(path.steps()[2].character, Some('b'));
    }

    #[test]
    fn wrong_dimensions_are_rejected() {
        let table = build_table(b"abc", b"ab");
        let err = reconstruct_path(&table, b"ab", b"ab").unwrap_err();
        assert_eq!(
            err,
            LcsError::InvalidTableDimensions {
                expected: (3, 3),
                found: (4, 3)
            }
        );
    }

    #[test]
    fn reconstructed_paths_pass_validation() {
        for (a, b) in [("abcdefgh", "defabhcda"), ("", "xyz"), ("ab", "ba"), ("", "")] {
            let path = walk(a, b);
            assert_eq!(Path::from_steps(path.steps().to_vec()), Ok(path));
        }
    }

    #[test]
    fn from_steps_rejects_broken_walks() {
        let reason = |steps: Vec<PathStep<char>>| match Path::from_steps(steps) {
            Err(LcsError::InvalidPath { index, reason }) => (index, reason),
            other => panic!("expected invalid path, got {other:?}"),
        };

        assert_eq!(reason(vec![]), (0, "path is empty"));
        assert_eq!(
            reason(vec![PathStep::gap(0, 0, StepKind::Up)]),
            (0, "first step must be the start cell")
        );

        let mut flagged_left = PathStep::gap(0, 0, StepKind::Left);
        flagged_left.is_match = true;
        flagged_left.character = Some('x');
        assert_eq!(
            reason(vec![PathStep::start(0, 1), flagged_left]),
            (1, "only diagonal steps are matches")
        );

        let mut no_char = PathStep::matched(0, 0, 'a');
        no_char.character = None;
        assert_eq!(
            reason(vec![PathStep::start(1, 1), no_char]),
            (1, "character must be present exactly on matches")
        );

        assert_eq!(
            reason(vec![PathStep::start(2, 2), PathStep::gap(0, 2, StepKind::Up)]),
            (1, "step does not follow its move kind")
        );
        assert_eq!(
            reason(vec![PathStep::start(1, 1), PathStep::start(1, 1)]),
            (1, "start may only appear first")
        );
        assert_eq!(
            reason(vec![PathStep::start(2, 0), PathStep::gap(1, 0, StepKind::Up)]),
            (1, "path must end at (0, 0)")
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialized_paths_are_validated() {
        let path = walk("abc", "abc");
        let json = serde_json::to_string(&path).unwrap();
        let back: Path<char> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, path);

        let forged = r#"[
            {"row": 0, "col": 1, "kind": "Start", "is_match": false, "character": null},
            {"row": 0, "col": 0, "kind": "Left", "is_match": true, "character": null}
        ]"#;
        let err = serde_json::from_str::<Path<char>>(forged).unwrap_err();
        assert!(err.to_string().contains("only diagonal steps are matches"), "{err}");
    }

    #[test]
    fn corrupt_boundary_is_reported() {
        // Row 0 should be all zero; the bump at (0, 1) forces a diagonal
        // move from row 0.
        let table = ScoreTable::from_rows(vec![vec![0, 1], vec![0, 1]]).unwrap();
        let err = reconstruct_path(&table, b"x", b"y").unwrap_err();
        assert_eq!(err, LcsError::InconsistentTable { row: 0, col: 1 });
    }
}

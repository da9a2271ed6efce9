//! Convenience façade over the table builder and the path reconstructor.
//!
//! [`LcsEngine`] owns configuration only (the tie-break mode and the seed
//! used for sampled paths). Every call builds a fresh table, walks it once,
//! and hands back an immutable [`Alignment`]; nothing is cached between calls,
//! so one engine can serve any number of threads.

use rand::{rngs::StdRng, SeedableRng};
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::path::{reconstruct_path_with, Path};
use crate::table::{build_table, ScoreTable};
use crate::tie_break::{PreferUp, RandomTieBreak, TieBreakMode};
use crate::traits::TieBreak;

/// Upper bound on the number of paths [`LcsEngine::sample_paths`] returns.
pub const MAX_SAMPLED_PATHS: usize = 10;

/// Score table and backtracking path for one input pair.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Alignment<T> {
    pub table: ScoreTable,
    pub path: Path<T>,
}

impl<T: Clone> Alignment<T> {
    pub fn lcs_len(&self) -> u32 {
        self.table.lcs_len()
    }

    /// Matched characters in walk order (reverse reading order).
    pub fn chain(&self) -> Vec<T> {
        self.path.chain()
    }

    pub fn lcs(&self) -> Vec<T> {
        self.path.lcs()
    }
}

impl Alignment<char> {
    pub fn lcs_string(&self) -> String {
        self.path.lcs_string()
    }
}

/// One table with several optimal paths through it.
///
/// `paths[0]` always uses the prefer-up tie-break; the rest resolve ties at
/// random.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathSample<T> {
    pub table: ScoreTable,
    pub paths: Vec<Path<T>>,
}

/// LCS engine.
///
/// ```
/// use lcs_path::LcsEngine;
///
/// let alignment = LcsEngine::new().align_str("abcdefgh", "defabhcda");
/// assert_eq!(alignment.lcs_len(), 4);
/// assert_eq!(alignment.lcs_string(), "abcd");
/// assert_eq!(alignment.path.first().map(|s| (s.row, s.col)), Some((8, 9)));
/// ```
#[derive(Clone, Debug, Default)]
pub struct LcsEngine {
    tie_break: TieBreakMode,
    sample_seed: u64,
}

impl LcsEngine {
    /// Engine with the prefer-up tie-break and sample seed 0.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_config(tie_break: TieBreakMode, sample_seed: u64) -> Self {
        Self {
            tie_break,
            sample_seed,
        }
    }

    pub fn tie_break(&self) -> TieBreakMode {
        self.tie_break
    }

    pub fn sample_seed(&self) -> u64 {
        self.sample_seed
    }

    /// Build the table for `a` against `b` and walk it once.
    pub fn align<T: PartialEq + Clone>(&self, a: &[T], b: &[T]) -> Alignment<T> {
        #[cfg(feature = "tracing")]
        let span = tracing::info_span!("lcs_align", a_len = a.len(), b_len = b.len());
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        self.align_nth(a, b, 0)
    }

    /// [`align`](Self::align) over the Unicode scalar values of two strings.
    pub fn align_str(&self, a: &str, b: &str) -> Alignment<char> {
        let a: Vec<char> = a.chars().collect();
        let b: Vec<char> = b.chars().collect();
        self.align(&a, &b)
    }

    /// One table, the prefer-up path, then up to `count - 1` paths with
    /// random tie resolution drawn from a single `StdRng` seeded with the
    /// engine's sample seed.
    ///
    /// `count` is clamped to `1..=MAX_SAMPLED_PATHS`. Every returned path is
    /// optimal, so all of them carry an LCS of the same length; they differ
    /// only where the table has ties.
    pub fn sample_paths<T: PartialEq + Clone>(
        &self,
        a: &[T],
        b: &[T],
        count: usize,
    ) -> PathSample<T> {
        let count = count.clamp(1, MAX_SAMPLED_PATHS);

        #[cfg(feature = "tracing")]
        let span = tracing::info_span!("lcs_sample_paths", a_len = a.len(), b_len = b.len(), count);
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let table = build_table(a, b);
        let mut paths = Vec::with_capacity(count);
        paths.push(walk(&table, a, b, PreferUp));

        let mut random = RandomTieBreak::new(StdRng::seed_from_u64(self.sample_seed));
        for _ in 1..count {
            paths.push(walk(&table, a, b, &mut random));
        }

        PathSample { table, paths }
    }

    /// Align the `nth` pair of a batch. Randomized mode offsets the seed by
    /// `nth` so that batch results do not depend on scheduling.
    fn align_nth<T: PartialEq + Clone>(&self, a: &[T], b: &[T], nth: usize) -> Alignment<T> {
        let table = build_table(a, b);
        let path = match self.tie_break {
            TieBreakMode::PreferUp => walk(&table, a, b, PreferUp),
            TieBreakMode::Randomized { seed } => {
                let rng = StdRng::seed_from_u64(seed.wrapping_add(nth as u64));
                walk(&table, a, b, RandomTieBreak::new(rng))
            }
        };
        Alignment { table, path }
    }
}

#[cfg(feature = "parallel")]
impl LcsEngine {
    /// Align every pair independently, in parallel. Output order matches
    /// input order and equals the sequential result.
    pub fn align_batch<T>(&self, pairs: &[(Vec<T>, Vec<T>)]) -> Vec<Alignment<T>>
    where
        T: PartialEq + Clone + Send + Sync,
    {
        #[cfg(feature = "tracing")]
        let span = tracing::info_span!("lcs_align_batch", pairs = pairs.len());
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        pairs
            .par_iter()
            .enumerate()
            .map(|(nth, (a, b))| self.align_nth(a, b, nth))
            .collect()
    }
}

#[cfg(not(feature = "parallel"))]
impl LcsEngine {
    /// Align every pair independently. Output order matches input order.
    pub fn align_batch<T>(&self, pairs: &[(Vec<T>, Vec<T>)]) -> Vec<Alignment<T>>
    where
        T: PartialEq + Clone,
    {
        #[cfg(feature = "tracing")]
        let span = tracing::info_span!("lcs_align_batch", pairs = pairs.len());
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        pairs
            .iter()
            .enumerate()
            .map(|(nth, (a, b))| self.align_nth(a, b, nth))
            .collect()
    }
}

fn walk<T: Clone>(table: &ScoreTable, a: &[T], b: &[T], tie_break: impl TieBreak) -> Path<T> {
    reconstruct_path_with(table, a, b, tie_break)
        .expect("table built from the same inputs must be walkable")
}

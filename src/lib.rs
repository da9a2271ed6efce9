//! Longest Common Subsequence with a deterministic backtracking path
//!
//! This crate computes the LCS of two sequences with the classic
//! table-filling dynamic program and then walks the finished table from the
//! bottom-right cell back to the origin, recording every visited cell. The
//! result is meant for step-by-step presentation: a front end can render the
//! [`ScoreTable`] as a grid and replay the [`Path`] as an overlay.
//!
//! ## Core idea
//! 1. [`build_table`] fills the `(|a|+1) x (|b|+1)` score table; row 0 and
//!    column 0 stand for the empty prefix and stay zero.
//! 2. [`reconstruct_path`] walks it once, moving left or up while the score
//!    is unchanged and diagonally where a character matched. Ties go **up**.
//!    That rule fixes which of several equally long alignments is reported.
//! 3. [`extract_chain`] reads the matched characters off the path. They come
//!    out in reverse; [`lcs`] flips them into reading order.
//!
//! ## Quick start
//! ```
//! use lcs_path::{build_table, reconstruct_path, StepKind};
//!
//! let a: Vec<char> = "ab".chars().collect();
//! let b: Vec<char> = "ba".chars().collect();
//! let table = build_table(&a, &b);
//! let path = reconstruct_path(&table, &a, &b).unwrap();
//!
//! assert_eq!(table.lcs_len(), 1);
//! assert_eq!(path.steps()[1].kind, StepKind::Up);
//! assert_eq!(path.lcs_string(), "a");
//! ```
//!
//! [`LcsEngine`] wraps the three steps, adds batch alignment (parallel with
//! the `parallel` feature) and can sample alternative optimal paths by
//! resolving ties at random.
//!
//! ## Features
//! - `parallel`: [`LcsEngine::align_batch`] runs on rayon.
//! - `tracing`: spans around table construction and path reconstruction.
//! - `serde`: `Serialize`/`Deserialize` for tables, paths and alignments.
//! - `cli`: builds the `lcs_probe` binary.

pub mod builder;
pub mod chain;
pub mod engine;
pub mod error;
pub mod path;
pub mod table;
pub mod tie_break;
pub mod traits;

pub use crate::builder::LcsEngineBuilder;
pub use crate::chain::{extract_chain, lcs};
pub use crate::engine::{Alignment, LcsEngine, PathSample, MAX_SAMPLED_PATHS};
pub use crate::error::{LcsError, Result};
pub use crate::path::{reconstruct_path, reconstruct_path_with, Path, PathStep, StepKind};
pub use crate::table::{build_table, ScoreTable};
pub use crate::tie_break::{PreferUp, RandomTieBreak, TieBreakMode};
pub use crate::traits::{TieBreak, TieMove};

//! Example: LCS table and backtracking path for two words.
//!
//! Run with:
//! `cargo run --example lcs`

use lcs_path::{LcsEngine, StepKind};

fn main() {
    let a = "abcdefgh";
    let b = "defabhcda";

    let alignment = LcsEngine::new().align_str(a, b);

    println!("LCS length: {}", alignment.lcs_len());
    println!("Path length: {}", alignment.path.len());

    for step in &alignment.path {
        let arrow = match step.kind {
            StepKind::Start => "*",
            StepKind::Left => "<",
            StepKind::Up => "^",
            StepKind::Diagonal => "\\",
        };
        match step.character {
            Some(ch) => println!("  {arrow} ({}, {}) matched '{ch}'", step.row, step.col),
            None => println!("  {arrow} ({}, {})", step.row, step.col),
        }
    }

    println!("LCS: {}", alignment.lcs_string());
}

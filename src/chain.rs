//! LCS chain as a derived view of a reconstructed [`Path`].
//!
//! No second traversal happens here: the chain is read off the match-flagged
//! steps of the single annotated path.

use crate::path::Path;

/// Matched characters in path order.
///
/// The path runs from the end of both sequences back to the start, so this is
/// the LCS in reverse reading order.
pub fn extract_chain<T: Clone>(path: &Path<T>) -> Vec<T> {
    path.iter()
        .filter(|step| step.is_match)
        .filter_map(|step| step.character.clone())
        .collect()
}

/// The LCS in natural left-to-right order.
pub fn lcs<T: Clone>(path: &Path<T>) -> Vec<T> {
    let mut chain = extract_chain(path);
    chain.reverse();
    chain
}

impl<T: Clone> Path<T> {
    /// See [`extract_chain`].
    pub fn chain(&self) -> Vec<T> {
        extract_chain(self)
    }

    /// See [`lcs`].
    pub fn lcs(&self) -> Vec<T> {
        lcs(self)
    }
}

impl Path<char> {
    pub fn lcs_string(&self) -> String {
        self.lcs().into_iter().collect()
    }
}

impl Path<u8> {
    /// LCS of byte inputs, lossily decoded as UTF-8.
    pub fn lcs_lossy(&self) -> String {
        String::from_utf8_lossy(&self.lcs()).into_owned()
    }
}

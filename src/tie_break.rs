//! Built-in tie-break policies.

use rand::Rng;

use crate::traits::{TieBreak, TieMove};

/// Always leave a tied cell upwards.
///
/// This is the reference policy: it pins down exactly which alignment is
/// displayed, and changing it (to prefer left, say) silently changes the
/// reported LCS for many inputs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PreferUp;

impl TieBreak for PreferUp {
    #[inline]
    fn choose(&mut self, _row: usize, _col: usize) -> TieMove {
        TieMove::Up
    }
}

/// Pick up or left with equal probability at every tie.
///
/// Used to sample alternative optimal alignments. Seed the generator for
/// reproducible output.
#[derive(Debug)]
pub struct RandomTieBreak<R> {
    rng: R,
}

impl<R: Rng> RandomTieBreak<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl<R: Rng> TieBreak for RandomTieBreak<R> {
    fn choose(&mut self, _row: usize, _col: usize) -> TieMove {
        if self.rng.gen_bool(0.5) {
            TieMove::Up
        } else {
            TieMove::Left
        }
    }
}

/// Tie-break selection as a plain value, for configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TieBreakMode {
    /// [`PreferUp`].
    #[default]
    PreferUp,
    /// [`RandomTieBreak`] over a `StdRng` seeded with `seed`.
    Randomized { seed: u64 },
}

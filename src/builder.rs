use crate::engine::LcsEngine;
use crate::tie_break::TieBreakMode;

#[derive(Clone, Debug, Default)]
pub struct LcsEngineBuilder {
    tie_break: Option<TieBreakMode>,
    sample_seed: Option<u64>,
}

impl LcsEngineBuilder {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn with_tie_break(mut self, tie_break: TieBreakMode) -> Self {
        self.tie_break = Some(tie_break);
        self
    }
    /// Seed for the random tie-breaks of [`LcsEngine::sample_paths`].
    pub fn with_sample_seed(mut self, seed: u64) -> Self {
        self.sample_seed = Some(seed);
        self
    }
    pub fn build(self) -> LcsEngine {
        LcsEngine::with_config(
            self.tie_break.unwrap_or_default(),
            self.sample_seed.unwrap_or(0),
        )
    }
}

//! Engine configuration.

use crate::constants::{
    BEAM_WIDTH, DEFENSE_WEIGHT, MAX_DEFENSE_WEIGHT, SEARCH_DEPTH, Score, TT_CAPACITY,
};
use crate::error::EngineError;

/// Tunable engine parameters. `Default` gives the standard engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Remaining depth searched below each root move.
    pub search_depth: u32,
    /// Candidates kept per node after ordering.
    pub beam_width: usize,
    /// Transposition table slots.
    pub tt_capacity: usize,
    /// Integer multiplier deriving the defender's pattern scores.
    pub defense_weight: Score,
    /// Seed for the hash keys; `None` draws one from the OS-seeded generator.
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            search_depth: SEARCH_DEPTH,
            beam_width: BEAM_WIDTH,
            tt_capacity: TT_CAPACITY,
            defense_weight: DEFENSE_WEIGHT,
            seed: None,
        }
    }
}

impl EngineConfig {
    /// Check that every parameter is usable.
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.search_depth == 0 {
            return Err(EngineError::InvalidConfig("search depth must be at least 1".into()));
        }
        if self.beam_width == 0 {
            return Err(EngineError::InvalidConfig("beam width must be at least 1".into()));
        }
        if self.tt_capacity == 0 {
            return Err(EngineError::InvalidConfig(
                "transposition table needs at least one entry".into(),
            ));
        }
        // Anything below 0.883 breaks the double-threat clamp; with integer
        // weights that means at least 1.
        if !(1..=MAX_DEFENSE_WEIGHT).contains(&self.defense_weight) {
            return Err(EngineError::InvalidConfig(format!(
                "defense weight must be between 1 and {MAX_DEFENSE_WEIGHT} (got {})",
                self.defense_weight
            )));
        }
        Ok(())
    }

    /// The configured seed, or a fresh one.
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| fastrand::u64(..))
    }
}

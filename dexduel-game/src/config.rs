use serde::{Deserialize, Serialize};

use crate::constants::{
    MAX_GENERATION, MIN_GENERATION, REVEAL_CORRECT_MS, REVEAL_INCORRECT_MS, SETTLE_MS,
};
use crate::mode::GuessMode;

/// Caller-supplied round configuration. The controller treats this as
/// read-only; the menu swaps in a fresh value between runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub mode: GuessMode,
    pub min_gen: u8,
    pub max_gen: u8,
    pub fully_evolved_only: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            mode: GuessMode::Weight,
            min_gen: MIN_GENERATION,
            max_gen: MAX_GENERATION,
            fully_evolved_only: false,
        }
    }
}

/// Delays around the reveal animation. Configurable, but the two-stage
/// structure (reveal hold, swap, short settle before input re-enables)
/// is fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealTiming {
    pub reveal_correct_ms: u64,
    pub reveal_incorrect_ms: u64,
    pub settle_ms: u64,
}

impl Default for RevealTiming {
    fn default() -> Self {
        Self {
            reveal_correct_ms: REVEAL_CORRECT_MS,
            reveal_incorrect_ms: REVEAL_INCORRECT_MS,
            settle_ms: SETTLE_MS,
        }
    }
}

impl RevealTiming {
    /// Collapse every delay to zero; integration tests drive the state
    /// machine through `advance` without waiting out animations.
    #[must_use]
    pub const fn immediate() -> Self {
        Self {
            reveal_correct_ms: 0,
            reveal_incorrect_ms: 0,
            settle_ms: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_spans_all_generations() {
        let config = GameConfig::default();
        assert_eq!(config.mode, GuessMode::Weight);
        assert_eq!(config.min_gen, 1);
        assert_eq!(config.max_gen, 9);
        assert!(!config.fully_evolved_only);
    }

    #[test]
    fn default_timing_matches_reveal_contract() {
        let timing = RevealTiming::default();
        assert_eq!(timing.reveal_correct_ms, 1_500);
        assert_eq!(timing.reveal_incorrect_ms, 2_000);
        assert_eq!(timing.settle_ms, 300);
    }
}

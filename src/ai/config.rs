//! AI opponent configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::policy::Strategy;

/// AI opponent configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiConfig {
    /// Move-selection strategy (default: minimax, depth 3).
    pub strategy: Strategy,

    /// Random seed for tie-breaking.
    /// `None` draws a fresh seed from entropy; a fixed seed replays
    /// identical games.
    pub seed: Option<u64>,

    /// Pause before the AI plays, in milliseconds.
    /// Reported to the caller, never slept by the library.
    pub move_delay_ms: u64,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::default(),
            seed: None,
            move_delay_ms: 500,
        }
    }
}

impl AiConfig {
    /// Create a new config with a custom strategy.
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Create a new config with a fixed seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Create a new config with a custom move delay.
    pub fn with_delay_ms(mut self, delay_ms: u64) -> Self {
        self.move_delay_ms = delay_ms;
        self
    }

    #[must_use]
    pub fn move_delay(&self) -> Duration {
        Duration::from_millis(self.move_delay_ms)
    }
}

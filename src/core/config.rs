//! Turn and simulation configuration.
//!
//! - `TurnConfig`: the stopping policy for one turn (the cutoff)
//! - `SimulationConfig`: a batch of independent turns
//!
//! Both are serializable so a run can be recorded next to its results.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Invalid configuration.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("simulation needs at least one turn")]
    NoTurns,
}

/// Stopping policy for a single turn.
///
/// With a cutoff, the turn stops as soon as the accumulated score strictly
/// exceeds it, and a bust before that forfeits the whole turn. Without one,
/// the turn only ends on a bust and keeps the score banked before it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnConfig {
    /// Target score. `None` means roll until bust.
    pub cutoff: Option<u32>,
}

impl TurnConfig {
    /// Roll until bust.
    #[must_use]
    pub const fn new() -> Self {
        Self { cutoff: None }
    }

    /// Set the cutoff. A cutoff of 0 means no cutoff.
    #[must_use]
    pub fn with_cutoff(mut self, cutoff: u32) -> Self {
        self.cutoff = (cutoff > 0).then_some(cutoff);
        self
    }

    /// The effective cutoff, if any.
    #[must_use]
    pub fn cutoff(&self) -> Option<u32> {
        self.cutoff.filter(|&c| c > 0)
    }
}

impl From<Option<u32>> for TurnConfig {
    fn from(cutoff: Option<u32>) -> Self {
        Self::new().with_cutoff(cutoff.unwrap_or(0))
    }
}

/// Configuration for a batch of simulated turns.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Number of independent turns to play.
    pub turns: usize,

    /// Batch seed. Turn `i` rolls from `DiceRng::new(seed).for_turn(i)`.
    pub seed: u64,

    /// Stopping policy shared by every turn.
    pub turn: TurnConfig,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            turns: 10_000,
            seed: 42,
            turn: TurnConfig::new(),
        }
    }
}

impl SimulationConfig {
    /// Set the number of turns.
    #[must_use]
    pub fn with_turns(mut self, turns: usize) -> Self {
        self.turns = turns;
        self
    }

    /// Set the batch seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the per-turn cutoff (0 = none).
    #[must_use]
    pub fn with_cutoff(mut self, cutoff: u32) -> Self {
        self.turn = self.turn.with_cutoff(cutoff);
        self
    }

    /// Check the configuration before running it.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.turns == 0 {
            return Err(ConfigError::NoTurns);
        }
        Ok(())
    }
}

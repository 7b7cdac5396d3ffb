//! Core types: hands, die sources, configuration.
//!
//! Everything here is independent of the scoring table; the pattern matcher
//! and turn engine build on it.

pub mod hand;
pub mod rng;
pub mod config;

pub use hand::{DieFace, Face, FaceCounts, Hand, HandError, FACES, MAX_DICE};
pub use rng::{DiceRng, DiceRngState, DieSource, ScriptedDice};
pub use config::{ConfigError, SimulationConfig, TurnConfig};

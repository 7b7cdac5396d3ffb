//! # farkle-sim
//!
//! Scoring engine and single-turn simulator for the dice game Farkle.
//!
//! ## Design Principles
//!
//! 1. **Injected Randomness**: The engine rolls through a `DieSource`, never a
//!    global RNG. A seeded `DiceRng` or a `ScriptedDice` makes any turn
//!    reproducible.
//!
//! 2. **Patterns as Data**: Every scoring combination is a `Pattern` variant
//!    carrying its own point value and consumption rule.
//!
//! 3. **Validated Hands**: A `Hand` cannot hold more than six dice or a face
//!    outside 1..=6, so the matcher never sees malformed input.
//!
//! ## Modules
//!
//! - `core`: Hands, die sources, configuration
//! - `patterns`: The scoring table, roll evaluation, bust detection
//! - `turn`: The turn state machine and engine
//! - `simulation`: Parallel batches and summary statistics
//!
//! ## Example
//!
//! ```
//! use farkle_sim::{evaluate, is_bust, Hand, Pattern};
//!
//! let scored = evaluate(&Hand::new(&[1, 1, 1, 2, 2, 2]));
//! assert_eq!(scored.len(), 1);
//! assert_eq!(scored[0].pattern, Pattern::TwoTriplets);
//! assert_eq!(scored[0].points, 2500);
//!
//! assert!(is_bust(&Hand::new(&[2, 3, 3, 4, 6, 6])));
//! ```

pub mod core;
pub mod patterns;
pub mod turn;
pub mod simulation;

// Re-export commonly used types
pub use crate::core::{
    DieFace, Face, Hand, HandError,
    DieSource, DiceRng, DiceRngState, ScriptedDice,
    TurnConfig, SimulationConfig, ConfigError,
};

pub use crate::patterns::{evaluate, is_bust, score_hand, Pattern, ScoredPattern, Scoring};

pub use crate::turn::{
    simulate_turn, TurnEngine, TurnObserver, RollLog,
    TurnState, TurnPhase, TurnEnd, TurnOutcome, RollRecord, StepOutcome,
};

pub use crate::simulation::{simulate_batch, sweep_cutoffs, SimulationReport, SweepPoint, TurnStats};

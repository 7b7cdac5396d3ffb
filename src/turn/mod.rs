//! Turn engine: one player's turn from first roll to bust or cutoff.
//!
//! - `state`: the turn state machine and its records
//! - `engine`: driving a turn to completion, observers

pub mod state;
pub mod engine;

pub use state::{RollRecord, StepOutcome, TurnEnd, TurnOutcome, TurnPhase, TurnState};
pub use engine::{simulate_turn, RollLog, TurnEngine, TurnObserver};

//! Pattern matcher: the scoring table and roll evaluation.
//!
//! - `pattern`: the `Pattern` enum, its point values, and the priority order
//! - `evaluate`: applying the table to a roll, bust detection

pub mod pattern;
pub mod evaluate;

pub use pattern::{Consumed, Pattern, CATALOGUE, LOOSE_DICE};
pub use evaluate::{evaluate, is_bust, score_hand, ScoredPattern, Scoring};

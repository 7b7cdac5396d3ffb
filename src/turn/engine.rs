//! Turn engine: plays a turn from start to bust or cutoff.

use crate::core::{DieSource, TurnConfig};

use super::state::{RollRecord, StepOutcome, TurnOutcome, TurnState};

/// Receives a turn's events as it is played.
///
/// The engine itself prints nothing; commentary, tracing and replay capture
/// are observers. All methods default to no-ops.
pub trait TurnObserver {
    /// Called after every roll has been scored.
    fn on_roll(&mut self, _record: &RollRecord) {}

    /// Called once when the turn ends.
    fn on_end(&mut self, _outcome: &TurnOutcome) {}
}

impl TurnObserver for () {}

/// Observer that keeps every roll.
#[derive(Clone, Debug, Default)]
pub struct RollLog {
    /// Rolls in order.
    pub rolls: Vec<RollRecord>,
    /// Final result, once the turn has ended.
    pub outcome: Option<TurnOutcome>,
}

impl RollLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }
}

impl TurnObserver for RollLog {
    fn on_roll(&mut self, record: &RollRecord) {
        self.rolls.push(record.clone());
    }

    fn on_end(&mut self, outcome: &TurnOutcome) {
        self.outcome = Some(*outcome);
    }
}

/// Plays single turns under a fixed stopping policy.
#[derive(Clone, Copy, Debug, Default)]
pub struct TurnEngine {
    config: TurnConfig,
}

impl TurnEngine {
    /// Create an engine with the given policy.
    #[must_use]
    pub fn new(config: TurnConfig) -> Self {
        Self { config }
    }

    /// The engine's policy.
    #[must_use]
    pub fn config(&self) -> &TurnConfig {
        &self.config
    }

    /// Play one turn to completion, reporting each roll to `observer`.
    pub fn play<D, O>(&self, dice: &mut D, observer: &mut O) -> TurnOutcome
    where
        D: DieSource + ?Sized,
        O: TurnObserver + ?Sized,
    {
        let mut state = TurnState::new(self.config);
        loop {
            match state.step(dice) {
                StepOutcome::Continue(record) => observer.on_roll(&record),
                StepOutcome::Finished(record, outcome) => {
                    observer.on_roll(&record);
                    observer.on_end(&outcome);
                    return outcome;
                }
            }
        }
    }

    /// Play one turn with no observer.
    pub fn play_quiet<D: DieSource + ?Sized>(&self, dice: &mut D) -> TurnOutcome {
        self.play(dice, &mut ())
    }
}

/// Simulate one turn and return its score.
///
/// With a cutoff, the turn ends once the score strictly exceeds it and a
/// bust scores 0. Without one (or with a cutoff of 0), the turn runs until a
/// bust and keeps the points from the rolls before it.
///
/// ```
/// use farkle_sim::core::ScriptedDice;
/// use farkle_sim::simulate_turn;
///
/// // Straight (1500), then a full re-roll that busts.
/// let mut dice = ScriptedDice::new([1, 2, 3, 4, 5, 6, 2, 2, 3, 3, 4, 6]);
/// assert_eq!(simulate_turn(&mut dice, None), 1500);
/// ```
pub fn simulate_turn<D: DieSource + ?Sized>(dice: &mut D, cutoff: Option<u32>) -> u32 {
    TurnEngine::new(TurnConfig::from(cutoff)).play_quiet(dice).score
}

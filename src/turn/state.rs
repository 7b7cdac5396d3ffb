//! Turn state machine.
//!
//! ```text
//! Start ──roll──> Scoring ──score──> Rolling ──roll──> Scoring ...
//!                    │
//!                    ├─ nothing scored ──────────> Bust
//!                    └─ score > cutoff ──────────> Stopped
//! ```
//!
//! `Rolling` re-rolls the dice left over from the last roll, or a fresh six
//! when every die was set aside (hot dice).

use serde::{Deserialize, Serialize};

use crate::core::{DieSource, Hand, TurnConfig, MAX_DICE};
use crate::patterns::{score_hand, ScoredPattern};

/// Where a turn is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnPhase {
    /// Nothing rolled yet.
    Start,
    /// Waiting to roll the dice left in hand.
    Rolling,
    /// Dice rolled, not yet scored.
    Scoring,
    /// A roll scored nothing. Terminal.
    Bust,
    /// The cutoff was passed. Terminal.
    Stopped,
}

impl TurnPhase {
    /// Has the turn ended?
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, TurnPhase::Bust | TurnPhase::Stopped)
    }
}

/// Why a turn ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnEnd {
    /// A roll scored nothing.
    Bust,
    /// The accumulated score passed the cutoff.
    CutoffReached,
}

/// What happened on one roll.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollRecord {
    /// Roll number within the turn, starting at 1.
    pub roll: u32,
    /// The dice as rolled.
    pub dice: Hand,
    /// Patterns set aside from this roll.
    pub scored: Vec<ScoredPattern>,
    /// Points from this roll.
    pub points: u32,
    /// Accumulated turn score after this roll.
    pub score: u32,
    /// Every die was set aside; the next roll uses six fresh dice.
    pub hot_dice: bool,
}

/// Final result of a turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnOutcome {
    /// Score the turn is worth.
    pub score: u32,
    /// Points accumulated before the turn ended, including any forfeited by
    /// a bust under a cutoff.
    pub accumulated: u32,
    /// Why the turn ended.
    pub end: TurnEnd,
    /// Number of rolls, including the last one.
    pub rolls: u32,
    /// Number of hot-dice rolls.
    pub hot_dice: u32,
}

impl TurnOutcome {
    /// Did the turn end in a bust?
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.end == TurnEnd::Bust
    }
}

/// Result of advancing a turn by one roll.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// The turn goes on.
    Continue(RollRecord),
    /// This roll ended the turn.
    Finished(RollRecord, TurnOutcome),
}

impl StepOutcome {
    /// The roll that was just played.
    #[must_use]
    pub fn record(&self) -> &RollRecord {
        match self {
            StepOutcome::Continue(record) | StepOutcome::Finished(record, _) => record,
        }
    }
}

/// One player's turn in progress.
#[derive(Clone, Debug)]
pub struct TurnState {
    hand: Hand,
    score: u32,
    rolls: u32,
    hot_dice: u32,
    phase: TurnPhase,
    cutoff: Option<u32>,
}

impl TurnState {
    /// Start a turn with score 0.
    #[must_use]
    pub fn new(config: TurnConfig) -> Self {
        Self {
            hand: Hand::empty(),
            score: 0,
            rolls: 0,
            hot_dice: 0,
            phase: TurnPhase::Start,
            cutoff: config.cutoff(),
        }
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    /// In `Rolling`, the dice to re-roll. In `Scoring`, the dice just rolled.
    #[must_use]
    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Points accumulated so far.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Rolls made so far.
    #[must_use]
    pub fn rolls(&self) -> u32 {
        self.rolls
    }

    /// The configured cutoff.
    #[must_use]
    pub fn cutoff(&self) -> Option<u32> {
        self.cutoff
    }

    /// Has the turn ended?
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.phase.is_terminal()
    }

    /// Number of dice the next roll will use.
    #[must_use]
    pub fn dice_to_roll(&self) -> usize {
        match self.phase {
            TurnPhase::Rolling if !self.hand.is_empty() => self.hand.len(),
            _ => MAX_DICE,
        }
    }

    /// Roll the dice: `Start`/`Rolling` → `Scoring`.
    ///
    /// # Panics
    ///
    /// If the turn is not waiting for a roll.
    pub fn roll<D: DieSource + ?Sized>(&mut self, dice: &mut D) -> &Hand {
        assert!(
            matches!(self.phase, TurnPhase::Start | TurnPhase::Rolling),
            "cannot roll in phase {:?}",
            self.phase
        );
        let count = self.dice_to_roll();
        self.hand = dice.roll_hand(count);
        self.rolls += 1;
        self.phase = TurnPhase::Scoring;
        &self.hand
    }

    /// Score the rolled dice: `Scoring` → `Rolling`, `Bust` or `Stopped`.
    ///
    /// # Panics
    ///
    /// If no roll is waiting to be scored.
    pub fn score_roll(&mut self) -> StepOutcome {
        assert_eq!(self.phase, TurnPhase::Scoring, "no roll to score");

        let rolled = self.hand.clone();
        let scoring = score_hand(&rolled);
        let points = scoring.points();
        let hot_dice = points > 0 && scoring.remaining.is_empty();

        self.score += points;
        self.hand = scoring.remaining;
        if hot_dice {
            self.hot_dice += 1;
        }

        self.phase = if points == 0 {
            TurnPhase::Bust
        } else if self.cutoff.is_some_and(|cutoff| self.score > cutoff) {
            TurnPhase::Stopped
        } else {
            TurnPhase::Rolling
        };

        let record = RollRecord {
            roll: self.rolls,
            dice: rolled,
            scored: scoring.scored,
            points,
            score: self.score,
            hot_dice,
        };

        match self.outcome() {
            Some(outcome) => StepOutcome::Finished(record, outcome),
            None => StepOutcome::Continue(record),
        }
    }

    /// Roll and score once.
    pub fn step<D: DieSource + ?Sized>(&mut self, dice: &mut D) -> StepOutcome {
        self.roll(dice);
        self.score_roll()
    }

    /// The result, once the turn has ended.
    ///
    /// A bust under a cutoff forfeits everything; a bust without one keeps
    /// the points banked by earlier rolls.
    #[must_use]
    pub fn outcome(&self) -> Option<TurnOutcome> {
        let (end, score) = match self.phase {
            TurnPhase::Bust if self.cutoff.is_some() => (TurnEnd::Bust, 0),
            TurnPhase::Bust => (TurnEnd::Bust, self.score),
            TurnPhase::Stopped => (TurnEnd::CutoffReached, self.score),
            _ => return None,
        };
        Some(TurnOutcome {
            score,
            accumulated: self.score,
            end,
            rolls: self.rolls,
            hot_dice: self.hot_dice,
        })
    }
}

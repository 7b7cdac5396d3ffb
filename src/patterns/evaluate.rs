//! Scoring a roll.
//!
//! A roll is scored in two passes:
//! 1. every pattern in [`CATALOGUE`] is tried once, in order, against the
//!    dice the earlier patterns left
//! 2. single ones and fives are swept up until neither remains
//!
//! A hand scores nothing exactly when it is a bust.

use serde::{Deserialize, Serialize};

use crate::core::{Face, Hand, MAX_DICE};

use super::pattern::{Consumed, Pattern, CATALOGUE, LOOSE_DICE};

/// One pattern set aside from a roll.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredPattern {
    /// Which pattern matched.
    pub pattern: Pattern,
    /// The dice it consumed.
    pub dice: Consumed,
    /// Points it was worth.
    pub points: u32,
}

impl ScoredPattern {
    fn new(pattern: Pattern, dice: Consumed) -> Self {
        Self {
            pattern,
            dice,
            points: pattern.points(),
        }
    }

    /// Name of the matched pattern.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.pattern.name()
    }
}

/// Result of scoring one roll.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoring {
    /// Patterns set aside, in the order they were applied.
    pub scored: Vec<ScoredPattern>,
    /// Dice left to re-roll.
    pub remaining: Hand,
}

impl Scoring {
    /// Total points from this roll.
    #[must_use]
    pub fn points(&self) -> u32 {
        self.scored.iter().map(|s| s.points).sum()
    }

    /// True when nothing scored.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.scored.is_empty()
    }

    /// All dice set aside, in application order.
    pub fn consumed(&self) -> impl Iterator<Item = Face> + '_ {
        self.scored.iter().flat_map(|s| s.dice.iter().copied())
    }
}

/// Score a roll, returning the patterns applied and the dice left over.
#[must_use]
pub fn score_hand(hand: &Hand) -> Scoring {
    let mut scoring = Scoring {
        scored: Vec::new(),
        remaining: hand.clone(),
    };

    for pattern in CATALOGUE {
        apply(&mut scoring, pattern);
    }

    // Each pass removes at least one die, so this runs at most hand.len() times.
    while !scoring.remaining.is_empty() {
        let before = scoring.scored.len();
        for pattern in LOOSE_DICE {
            apply(&mut scoring, pattern);
        }
        if scoring.scored.len() == before {
            break;
        }
    }

    scoring
}

fn apply(scoring: &mut Scoring, pattern: Pattern) {
    if let Some(dice) = pattern.matches(&scoring.remaining) {
        let removed = scoring.remaining.remove_all(&dice);
        debug_assert!(removed, "{pattern} consumed dice not in {}", scoring.remaining);
        scoring.scored.push(ScoredPattern::new(pattern, dice));
    }
}

/// The patterns a roll would set aside, in application order.
///
/// Empty if and only if [`is_bust`] holds for the hand.
#[must_use]
pub fn evaluate(hand: &Hand) -> Vec<ScoredPattern> {
    score_hand(hand).scored
}

/// Is this roll a bust (nothing scores)?
///
/// Derived from the pattern predicates alone: no loose one or five, no
/// six-dice combination, and no face showing exactly 3, 4, 5 or 6 times.
#[must_use]
pub fn is_bust(hand: &Hand) -> bool {
    let combination = [
        Pattern::SingleOne,
        Pattern::SingleFive,
        Pattern::Straight,
        Pattern::TwoTriplets,
        Pattern::ThreePairs,
        Pattern::PairAndFourOfAKind,
    ]
    .into_iter()
    .any(|p| p.matches(hand).is_some());

    let counts = hand.counts();
    let of_a_kind = (3..=MAX_DICE).any(|n| counts.any_with(n));

    !(combination || of_a_kind)
}

//! The house scoring table.
//!
//! Each [`Pattern`] variant carries its own point value and consumption rule,
//! so the engine never needs to ask "which detector fired" to price a match.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{DieFace, Face, Hand, MAX_DICE};

/// Dice set aside by a matched pattern.
pub type Consumed = SmallVec<[Face; MAX_DICE]>;

/// A scoring combination.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Pattern {
    /// One die showing 1.
    SingleOne,
    /// One die showing 5.
    SingleFive,
    /// Exactly three dice showing the given face.
    ThreeOfAKind(DieFace),
    /// Exactly four dice of any one face.
    FourOfAKind,
    /// Exactly five dice of any one face.
    FiveOfAKind,
    /// All six dice the same face.
    SixOfAKind,
    /// The six faces 1 through 6.
    Straight,
    /// Three distinct faces, each exactly twice.
    ThreePairs,
    /// Two distinct faces, each exactly three times.
    TwoTriplets,
    /// One face exactly twice and another exactly four times.
    PairAndFourOfAKind,
}

/// Combination patterns in priority order.
///
/// Each is tried once per roll against the dice the earlier ones left.
/// Six-dice and higher-valued shapes come first so, for example, two
/// triplets is claimed before a lone three-of-a-kind can split it.
pub const CATALOGUE: [Pattern; 13] = [
    Pattern::SixOfAKind,
    Pattern::FiveOfAKind,
    Pattern::TwoTriplets,
    Pattern::PairAndFourOfAKind,
    Pattern::Straight,
    Pattern::ThreePairs,
    Pattern::FourOfAKind,
    Pattern::ThreeOfAKind(DieFace::Six),
    Pattern::ThreeOfAKind(DieFace::Five),
    Pattern::ThreeOfAKind(DieFace::Four),
    Pattern::ThreeOfAKind(DieFace::Three),
    Pattern::ThreeOfAKind(DieFace::One),
    Pattern::ThreeOfAKind(DieFace::Two),
];

/// Loose scoring dice, swept up after the combinations.
pub const LOOSE_DICE: [Pattern; 2] = [Pattern::SingleOne, Pattern::SingleFive];

impl Pattern {
    /// Points awarded when this pattern is set aside.
    #[must_use]
    pub const fn points(self) -> u32 {
        match self {
            Pattern::SingleOne => 100,
            Pattern::SingleFive => 50,
            Pattern::ThreeOfAKind(DieFace::One) => 100,
            Pattern::ThreeOfAKind(DieFace::Two) => 200,
            Pattern::ThreeOfAKind(DieFace::Three) => 300,
            Pattern::ThreeOfAKind(DieFace::Four) => 400,
            Pattern::ThreeOfAKind(DieFace::Five) => 500,
            Pattern::ThreeOfAKind(DieFace::Six) => 600,
            Pattern::FourOfAKind => 1000,
            Pattern::FiveOfAKind => 2000,
            Pattern::SixOfAKind => 3000,
            Pattern::Straight => 1500,
            Pattern::ThreePairs => 1500,
            Pattern::TwoTriplets => 2500,
            Pattern::PairAndFourOfAKind => 1500,
        }
    }

    /// Human-readable name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Pattern::SingleOne => "single one",
            Pattern::SingleFive => "single five",
            Pattern::ThreeOfAKind(DieFace::One) => "three ones",
            Pattern::ThreeOfAKind(DieFace::Two) => "three twos",
            Pattern::ThreeOfAKind(DieFace::Three) => "three threes",
            Pattern::ThreeOfAKind(DieFace::Four) => "three fours",
            Pattern::ThreeOfAKind(DieFace::Five) => "three fives",
            Pattern::ThreeOfAKind(DieFace::Six) => "three sixes",
            Pattern::FourOfAKind => "four of a kind",
            Pattern::FiveOfAKind => "five of a kind",
            Pattern::SixOfAKind => "six of a kind",
            Pattern::Straight => "straight",
            Pattern::ThreePairs => "three pairs",
            Pattern::TwoTriplets => "two triplets",
            Pattern::PairAndFourOfAKind => "pair and four of a kind",
        }
    }

    /// Check the hand for this pattern.
    ///
    /// Returns the dice the pattern would set aside, or `None` if it does
    /// not match. Never mutates the hand.
    #[must_use]
    pub fn matches(self, hand: &Hand) -> Option<Consumed> {
        match self {
            Pattern::SingleOne => single(hand, 1),
            Pattern::SingleFive => single(hand, 5),
            Pattern::ThreeOfAKind(face) => of_a_kind(hand, 3, Some(face.value())),
            Pattern::FourOfAKind => of_a_kind(hand, 4, None),
            Pattern::FiveOfAKind => of_a_kind(hand, 5, None),
            Pattern::SixOfAKind => of_a_kind(hand, 6, None),
            Pattern::Straight => straight(hand),
            Pattern::ThreePairs => groups(hand, &[(2, 3)]),
            Pattern::TwoTriplets => groups(hand, &[(3, 2)]),
            Pattern::PairAndFourOfAKind => groups(hand, &[(2, 1), (4, 1)]),
        }
    }
}

impl std::fmt::Display for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

fn single(hand: &Hand, face: Face) -> Option<Consumed> {
    hand.contains(face).then(|| SmallVec::from_elem(face, 1))
}

/// Exactly `n` dice of one face, optionally a specific face.
///
/// Several candidate faces resolve to the first found in the hand.
fn of_a_kind(hand: &Hand, n: usize, face: Option<Face>) -> Option<Consumed> {
    let found = match face {
        Some(face) => (hand.count(face) == n).then_some(face),
        None => hand.faces_with_count(n).first().copied(),
    }?;
    Some(SmallVec::from_elem(found, n))
}

fn straight(hand: &Hand) -> Option<Consumed> {
    let is_straight = hand.sorted().as_slice() == [1, 2, 3, 4, 5, 6];
    is_straight.then(|| SmallVec::from_slice(&[1, 2, 3, 4, 5, 6]))
}

/// Matches when, for every `(size, groups)` pair, exactly `groups` distinct
/// faces occur exactly `size` times. Consumes those groups in the order
/// given, each group's faces in first-found order.
fn groups(hand: &Hand, shape: &[(usize, usize)]) -> Option<Consumed> {
    let mut consumed = Consumed::new();
    for &(size, groups) in shape {
        let faces = hand.faces_with_count(size);
        if faces.len() != groups {
            return None;
        }
        for face in faces {
            consumed.extend(std::iter::repeat(face).take(size));
        }
    }
    Some(consumed)
}

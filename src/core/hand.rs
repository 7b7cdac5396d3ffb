//! Dice hands.
//!
//! A `Hand` is the multiset of dice currently available to score or re-roll.
//! Order is kept (it decides "first found" among equal candidates) but never
//! affects which patterns match.
//!
//! Construction validates the two hand invariants:
//! - at most [`MAX_DICE`] dice
//! - every face in `1..=6`
//!
//! Everything downstream (`Pattern::matches`, `evaluate`, the turn engine)
//! takes `&Hand`, so an invalid hand never reaches the matcher.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use thiserror::Error;

/// A die face, `1..=6`.
pub type Face = u8;

/// Number of dice in a full roll.
pub const MAX_DICE: usize = 6;

/// Number of faces on a die.
pub const FACES: u8 = 6;

/// Precondition violations when building a hand.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum HandError {
    #[error("hand holds {len} dice, at most 6 allowed")]
    TooManyDice { len: usize },

    #[error("die {index} shows {face}, faces must be 1..=6")]
    InvalidFace { face: u8, index: usize },

    #[error("{face} is not a die face, faces must be 1..=6")]
    FaceOutOfRange { face: u8 },
}

/// Check that a value is a legal die face.
#[inline]
#[must_use]
pub const fn is_valid_face(face: u8) -> bool {
    face >= 1 && face <= FACES
}

/// A die face that is known to be in range.
///
/// Used where a face is part of a value's identity (which three-of-a-kind
/// a pattern is), so an out-of-range face cannot be built or deserialized.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum DieFace {
    One = 1,
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
}

impl DieFace {
    /// Every face, lowest first.
    pub const ALL: [DieFace; 6] = [
        DieFace::One,
        DieFace::Two,
        DieFace::Three,
        DieFace::Four,
        DieFace::Five,
        DieFace::Six,
    ];

    /// The number of pips.
    #[inline]
    #[must_use]
    pub const fn value(self) -> Face {
        self as Face
    }
}

impl TryFrom<u8> for DieFace {
    type Error = HandError;

    fn try_from(face: u8) -> Result<Self, Self::Error> {
        match face {
            1 => Ok(DieFace::One),
            2 => Ok(DieFace::Two),
            3 => Ok(DieFace::Three),
            4 => Ok(DieFace::Four),
            5 => Ok(DieFace::Five),
            6 => Ok(DieFace::Six),
            _ => Err(HandError::FaceOutOfRange { face }),
        }
    }
}

impl From<DieFace> for u8 {
    fn from(face: DieFace) -> Self {
        face.value()
    }
}

impl std::fmt::Display for DieFace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// A validated hand of at most six dice.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<u8>", into = "Vec<u8>")]
pub struct Hand {
    dice: SmallVec<[Face; MAX_DICE]>,
}

impl Hand {
    /// Build a hand, panicking on an invalid one.
    ///
    /// Use this where a malformed hand is a programming error. For input
    /// that may be malformed, use [`Hand::try_from_faces`].
    #[must_use]
    pub fn new(faces: &[Face]) -> Self {
        match Self::try_from_faces(faces) {
            Ok(hand) => hand,
            Err(err) => panic!("invalid hand {faces:?}: {err}"),
        }
    }

    /// Build a hand, reporting the first violated invariant.
    pub fn try_from_faces(faces: &[Face]) -> Result<Self, HandError> {
        if faces.len() > MAX_DICE {
            return Err(HandError::TooManyDice { len: faces.len() });
        }
        if let Some((index, &face)) = faces.iter().enumerate().find(|&(_, &f)| !is_valid_face(f)) {
            return Err(HandError::InvalidFace { face, index });
        }
        Ok(Self {
            dice: SmallVec::from_slice(faces),
        })
    }

    /// An empty hand (all dice set aside).
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// The dice in roll order.
    #[must_use]
    pub fn faces(&self) -> &[Face] {
        &self.dice
    }

    /// Number of dice in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.dice.len()
    }

    /// True when every die has been set aside.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dice.is_empty()
    }

    /// Does the hand contain at least one die showing `face`?
    #[must_use]
    pub fn contains(&self, face: Face) -> bool {
        self.dice.contains(&face)
    }

    /// How many dice show `face`.
    #[must_use]
    pub fn count(&self, face: Face) -> usize {
        self.dice.iter().filter(|&&d| d == face).count()
    }

    /// Per-face counts for this hand.
    #[must_use]
    pub fn counts(&self) -> FaceCounts {
        FaceCounts::of(self)
    }

    /// Faces occurring exactly `n` times, in first-found order.
    ///
    /// "First found" is the order of each face's first occurrence in the
    /// hand. Every face appears at most once in the result.
    #[must_use]
    pub fn faces_with_count(&self, n: usize) -> SmallVec<[Face; MAX_DICE]> {
        let counts = self.counts();
        let mut out: SmallVec<[Face; MAX_DICE]> = SmallVec::new();
        for &face in &self.dice {
            if counts.get(face) == n && !out.contains(&face) {
                out.push(face);
            }
        }
        out
    }

    /// Remove one die per entry of `consumed`.
    ///
    /// Returns `false` and leaves the hand untouched if `consumed` is not a
    /// sub-multiset of the hand.
    pub fn remove_all(&mut self, consumed: &[Face]) -> bool {
        let mut remaining = self.dice.clone();
        for face in consumed {
            match remaining.iter().position(|d| d == face) {
                Some(pos) => {
                    remaining.remove(pos);
                }
                None => return false,
            }
        }
        self.dice = remaining;
        true
    }

    /// Sorted copy of the faces, for display and comparisons.
    #[must_use]
    pub fn sorted(&self) -> SmallVec<[Face; MAX_DICE]> {
        let mut faces = self.dice.clone();
        faces.sort_unstable();
        faces
    }
}

impl From<&[Face]> for Hand {
    fn from(faces: &[Face]) -> Self {
        Self::new(faces)
    }
}

impl<const N: usize> From<[Face; N]> for Hand {
    fn from(faces: [Face; N]) -> Self {
        Self::new(&faces)
    }
}

impl TryFrom<Vec<Face>> for Hand {
    type Error = HandError;

    fn try_from(faces: Vec<Face>) -> Result<Self, Self::Error> {
        Self::try_from_faces(&faces)
    }
}

impl From<Hand> for Vec<Face> {
    fn from(hand: Hand) -> Self {
        hand.dice.into_vec()
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.faces())
    }
}

/// Face-count distribution of a hand.
///
/// Index 0 is unused so that `counts[face]` reads naturally.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FaceCounts([u8; FACES as usize + 1]);

impl FaceCounts {
    /// Count the faces of a hand.
    #[must_use]
    pub fn of(hand: &Hand) -> Self {
        let mut counts = [0u8; FACES as usize + 1];
        for &face in hand.faces() {
            counts[face as usize] += 1;
        }
        Self(counts)
    }

    /// Occurrences of `face`.
    #[inline]
    #[must_use]
    pub fn get(&self, face: Face) -> usize {
        self.0[face as usize] as usize
    }

    /// Number of distinct faces occurring exactly `n` times.
    #[must_use]
    pub fn faces_with(&self, n: usize) -> usize {
        (1..=FACES).filter(|&f| self.get(f) == n).count()
    }

    /// Does any face occur exactly `n` times?
    #[must_use]
    pub fn any_with(&self, n: usize) -> bool {
        self.faces_with(n) > 0
    }
}

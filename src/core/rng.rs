//! Die sources: where rolled faces come from.
//!
//! The turn engine never touches a global RNG. It pulls faces from a
//! [`DieSource`], so a turn is fully determined by the source it is given.
//!
//! - [`DiceRng`]: seeded ChaCha8 source with per-turn streams. Its
//!   position can be captured as a [`DiceRngState`] and resumed later, which
//!   is how a batch turn is replayed.
//! - [`ScriptedDice`]: replays a fixed list of faces (tests, replays).
//!
//! ```
//! use farkle_sim::core::{DiceRng, DieSource};
//!
//! let mut rng = DiceRng::new(42);
//! let face = rng.roll_die();
//! assert!((1..=6).contains(&face));
//!
//! // Streams for different turns are independent but reproducible.
//! let mut a = DiceRng::new(42).for_turn(7);
//! let mut b = DiceRng::new(42).for_turn(7);
//! assert_eq!(a.roll_die(), b.roll_die());
//! ```

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use super::hand::{Face, Hand, FACES, MAX_DICE};

/// A source of independent, uniformly distributed die faces.
///
/// Implementations must return faces in `1..=6`.
pub trait DieSource {
    /// Roll a single die.
    fn roll_die(&mut self) -> Face;

    /// Roll `count` dice into a new hand.
    fn roll_hand(&mut self, count: usize) -> Hand {
        let mut faces = [0u8; MAX_DICE];
        let count = count.min(MAX_DICE);
        for slot in faces.iter_mut().take(count) {
            *slot = self.roll_die();
        }
        Hand::new(&faces[..count])
    }
}

impl<D: DieSource + ?Sized> DieSource for &mut D {
    fn roll_die(&mut self) -> Face {
        (**self).roll_die()
    }
}

/// Odd constant used to spread turn seeds.
const SEED_SPREAD: u64 = 0x9E37_79B9_7F4A_7C15;

/// Seeded die source.
#[derive(Clone, Debug)]
pub struct DiceRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl DiceRng {
    /// Create a new source with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// The seed this source was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Independent stream for the turn with the given index.
    ///
    /// Depends only on this source's seed and `turn`, never on how many
    /// faces have been drawn, so batch results do not depend on the order
    /// in which turns are scheduled.
    #[must_use]
    pub fn for_turn(&self, turn: u64) -> Self {
        // splitmix64 finalizer over (seed, turn)
        let mut z = self
            .seed
            .wrapping_add(turn.wrapping_add(1).wrapping_mul(SEED_SPREAD));
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        Self::new(z ^ (z >> 31))
    }

    /// Where this source is in its stream.
    #[must_use]
    pub fn state(&self) -> DiceRngState {
        DiceRngState {
            seed: self.seed,
            position: self.inner.get_word_pos(),
        }
    }

    /// A source that rolls exactly what `state`'s source rolled next.
    #[must_use]
    pub fn from_state(state: &DiceRngState) -> Self {
        let mut rng = Self::new(state.seed);
        rng.inner.set_word_pos(state.position);
        rng
    }
}

impl DieSource for DiceRng {
    #[inline]
    fn roll_die(&mut self) -> Face {
        self.inner.gen_range(1..=FACES)
    }
}

/// A [`DiceRng`] position: its seed plus how far into the ChaCha8 stream
/// it has read.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DiceRngState {
    pub seed: u64,
    /// Word offset into the stream, not a count of dice.
    pub position: u128,
}

/// Replays a fixed sequence of faces.
///
/// Panics when asked for more faces than it was given; a scripted turn that
/// runs past its script is a broken test, not a game state.
#[derive(Clone, Debug, Default)]
pub struct ScriptedDice {
    faces: VecDeque<Face>,
}

impl ScriptedDice {
    /// Script the given faces, in roll order.
    #[must_use]
    pub fn new(faces: impl IntoIterator<Item = Face>) -> Self {
        Self {
            faces: faces.into_iter().collect(),
        }
    }

    /// Faces not yet rolled.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.faces.len()
    }
}

impl DieSource for ScriptedDice {
    fn roll_die(&mut self) -> Face {
        match self.faces.pop_front() {
            Some(face) => face,
            None => panic!("scripted dice exhausted"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_faces_in_range() {
        let mut rng = DiceRng::new(7);
        for _ in 0..1000 {
            let face = rng.roll_die();
            assert!((1..=6).contains(&face));
        }
    }

    #[test]
    fn test_all_faces_appear() {
        let mut rng = DiceRng::new(7);
        let mut seen = [false; 7];
        for _ in 0..600 {
            seen[rng.roll_die() as usize] = true;
        }
        assert!(seen[1..].iter().all(|&s| s));
    }

    #[test]
    fn test_seed_fixes_hands() {
        let hands = |seed| {
            let mut rng = DiceRng::new(seed);
            (0..20).map(|_| rng.roll_hand(6)).collect::<Vec<_>>()
        };

        assert_eq!(hands(42), hands(42));
        assert_ne!(hands(1), hands(2));
    }

    #[test]
    fn test_for_turn_independent_of_draws() {
        let base = DiceRng::new(42);
        let mut advanced = DiceRng::new(42);
        for _ in 0..50 {
            advanced.roll_die();
        }

        assert_eq!(base.for_turn(3).seed(), advanced.for_turn(3).seed());
        assert_ne!(base.for_turn(3).seed(), base.for_turn(4).seed());
    }

    #[test]
    fn test_roll_hand() {
        let mut rng = DiceRng::new(42);
        assert_eq!(rng.roll_hand(6).len(), 6);
        assert_eq!(rng.roll_hand(2).len(), 2);
        assert!(rng.roll_hand(0).is_empty());
    }

    #[test]
    fn test_resume_mid_turn() {
        let mut rng = DiceRng::new(42).for_turn(5);
        rng.roll_hand(6);
        rng.roll_hand(3);

        let saved = rng.state();
        let next = [rng.roll_hand(6), rng.roll_hand(2)];

        let mut resumed = DiceRng::from_state(&saved);
        assert_eq!(resumed.seed(), rng.seed());
        assert_eq!([resumed.roll_hand(6), resumed.roll_hand(2)], next);
    }

    #[test]
    fn test_fresh_stream_starts_at_zero() {
        let rng = DiceRng::new(9).for_turn(0);
        let state = rng.state();

        assert_eq!(state.position, 0);
        assert_eq!(DiceRng::from_state(&state).state(), state);
    }

    #[test]
    fn test_scripted_dice() {
        let mut dice = ScriptedDice::new([1, 2, 3]);
        let hand = dice.roll_hand(2);
        assert_eq!(hand.faces(), &[1, 2]);
        assert_eq!(dice.remaining(), 1);
        assert_eq!(dice.roll_die(), 3);
    }

    #[test]
    #[should_panic(expected = "scripted dice exhausted")]
    fn test_scripted_dice_exhausted() {
        let mut dice = ScriptedDice::new([4]);
        dice.roll_hand(2);
    }

    #[test]
    fn test_mut_ref_is_source() {
        fn roll_twice<D: DieSource>(mut dice: D) -> (Face, Face) {
            (dice.roll_die(), dice.roll_die())
        }

        let mut dice = ScriptedDice::new([5, 6, 1]);
        assert_eq!(roll_twice(&mut dice), (5, 6));
        assert_eq!(dice.remaining(), 1);
    }
}

//! Scoring integration tests.
//!
//! These tests run the public `evaluate` / `score_hand` / `is_bust` API
//! against the house scoring table.

use farkle_sim::patterns::{CATALOGUE, LOOSE_DICE};
use farkle_sim::{evaluate, is_bust, score_hand, DieFace, Hand, HandError, Pattern};

fn points(faces: &[u8]) -> u32 {
    score_hand(&Hand::new(faces)).points()
}

fn names(faces: &[u8]) -> Vec<&'static str> {
    evaluate(&Hand::new(faces)).iter().map(|s| s.name()).collect()
}

// =============================================================================
// Reference Rolls
// =============================================================================

/// Test that two triplets consume the whole hand for 2500.
#[test]
fn test_two_triplets() {
    let scoring = score_hand(&Hand::new(&[1, 1, 1, 2, 2, 2]));

    assert_eq!(names(&[1, 1, 1, 2, 2, 2]), vec!["two triplets"]);
    assert_eq!(scoring.points(), 2500);
    assert!(scoring.remaining.is_empty());
}

/// Test that a straight consumes the whole hand for 1500.
#[test]
fn test_straight() {
    let scoring = score_hand(&Hand::new(&[1, 2, 3, 4, 5, 6]));

    assert_eq!(names(&[1, 2, 3, 4, 5, 6]), vec!["straight"]);
    assert_eq!(scoring.points(), 1500);
    assert!(scoring.remaining.is_empty());
}

/// Test that three pairs score 1500.
#[test]
fn test_three_pairs() {
    assert_eq!(names(&[2, 2, 3, 3, 4, 4]), vec!["three pairs"]);
    assert_eq!(points(&[2, 2, 3, 3, 4, 4]), 1500);
}

/// Test that a roll with nothing to set aside is a bust.
#[test]
fn test_bust() {
    let hand = Hand::new(&[2, 3, 3, 4, 6, 6]);

    assert!(is_bust(&hand));
    assert!(evaluate(&hand).is_empty());
    assert_eq!(points(&[2, 3, 3, 4, 6, 6]), 0);
}

/// Test that four ones are four of a kind, not three ones and a single.
#[test]
fn test_four_ones() {
    let scored = evaluate(&Hand::new(&[1, 1, 1, 1]));

    assert_eq!(scored.len(), 1);
    assert_eq!(scored[0].pattern, Pattern::FourOfAKind);
    assert_eq!(scored[0].dice.as_slice(), &[1, 1, 1, 1]);
    assert_eq!(scored[0].points, 1000);
}

// =============================================================================
// Scoring Table
// =============================================================================

/// Test every row of the scoring table through `evaluate`.
#[test]
fn test_scoring_table() {
    let cases: &[(&[u8], u32)] = &[
        (&[1], 100),
        (&[5], 50),
        (&[1, 1, 1], 100),
        (&[2, 2, 2], 200),
        (&[3, 3, 3], 300),
        (&[4, 4, 4], 400),
        (&[5, 5, 5], 500),
        (&[6, 6, 6], 600),
        (&[4, 4, 4, 4], 1000),
        (&[3, 3, 3, 3, 3], 2000),
        (&[2, 2, 2, 2, 2, 2], 3000),
        (&[6, 5, 4, 3, 2, 1], 1500),
        (&[6, 6, 2, 2, 3, 3], 1500),
        (&[6, 6, 6, 3, 3, 3], 2500),
        (&[6, 6, 3, 3, 3, 3], 1500),
    ];

    for &(faces, expected) in cases {
        assert_eq!(points(faces), expected, "hand {faces:?}");
    }
}

/// Test that combinations and loose dice add up within one roll.
#[test]
fn test_mixed_rolls() {
    // Three sixes, then a loose five.
    assert_eq!(names(&[6, 6, 6, 5, 2, 3]), vec!["three sixes", "single five"]);
    assert_eq!(points(&[6, 6, 6, 5, 2, 3]), 650);

    // Four of a kind plus two loose ones is a pair and four of a kind.
    assert_eq!(points(&[4, 4, 4, 4, 1, 1]), 1500);

    // Four of a kind plus a one and a five.
    assert_eq!(points(&[4, 4, 4, 4, 1, 5]), 1150);

    // Three ones and three fives are two triplets, not 100 + 500.
    assert_eq!(points(&[1, 1, 1, 5, 5, 5]), 2500);

    // Only loose dice.
    assert_eq!(points(&[1, 1, 5, 5, 2, 3]), 300);
}

/// Test that the catalogue lists the big combinations before three-of-a-kinds.
#[test]
fn test_catalogue_priority() {
    let position = |p: Pattern| CATALOGUE.iter().position(|&c| c == p).unwrap();

    assert!(position(Pattern::SixOfAKind) < position(Pattern::FiveOfAKind));
    assert!(position(Pattern::TwoTriplets) < position(Pattern::ThreeOfAKind(DieFace::One)));
    assert!(position(Pattern::PairAndFourOfAKind) < position(Pattern::FourOfAKind));
    assert!(position(Pattern::FourOfAKind) < position(Pattern::ThreeOfAKind(DieFace::Six)));
    assert!(position(Pattern::ThreeOfAKind(DieFace::One)) < position(Pattern::ThreeOfAKind(DieFace::Two)));
    assert_eq!(LOOSE_DICE, [Pattern::SingleOne, Pattern::SingleFive]);
}

/// Test that a three-of-a-kind can only name a real face.
#[test]
fn test_three_of_a_kind_face_validated() {
    assert_eq!(
        DieFace::try_from(9u8).map(Pattern::ThreeOfAKind),
        Err(HandError::FaceOutOfRange { face: 9 })
    );
    assert!(serde_json::from_str::<Pattern>(r#"{"ThreeOfAKind":9}"#).is_err());

    let six: Pattern = serde_json::from_str(r#"{"ThreeOfAKind":6}"#).unwrap();
    assert_eq!(six.name(), "three sixes");
    assert_eq!(six.points(), 600);
}

// =============================================================================
// Invalid Hands
// =============================================================================

/// Test that malformed hands are rejected before they reach the matcher.
#[test]
fn test_invalid_hands_rejected() {
    assert_eq!(
        Hand::try_from_faces(&[1, 2, 3, 4, 5, 6, 1]),
        Err(HandError::TooManyDice { len: 7 })
    );
    assert_eq!(
        Hand::try_from_faces(&[1, 2, 7]),
        Err(HandError::InvalidFace { face: 7, index: 2 })
    );
}

/// Test that building a malformed hand fails fast.
#[test]
#[should_panic(expected = "invalid hand")]
fn test_invalid_hand_panics() {
    let _ = evaluate(&Hand::new(&[0, 1, 5]));
}

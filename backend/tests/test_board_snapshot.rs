//! Snapshot of a known game code
//!
//! The seed "A1B2" over the fixed 30-word list must always produce this
//! exact board. If this test fails, every game code already shared by
//! players now shows a different board.

mod common;

use codenames_board_core_rs::{generate_board, Team};
use common::{fixed_words, FIXED_WORDS};

const A1B2_LAYOUT: [(&str, Team); 25] = [
    ("GHOST", Team::Neutral),
    ("FAIR", Team::Red),
    ("OCEAN", Team::Neutral),
    ("QUEEN", Team::Red),
    ("CROWN", Team::Red),
    ("MOON", Team::Neutral),
    ("ROBOT", Team::Neutral),
    ("KNIGHT", Team::Neutral),
    ("CASTLE", Team::Red),
    ("APPLE", Team::Assassin),
    ("ICE", Team::Blue),
    ("SHADOW", Team::Blue),
    ("PIANO", Team::Blue),
    ("BRIDGE", Team::Blue),
    ("BEAR", Team::Blue),
    ("GLASS", Team::Red),
    ("ENGINE", Team::Blue),
    ("HONEY", Team::Blue),
    ("TOWER", Team::Red),
    ("BERLIN", Team::Blue),
    ("JUPITER", Team::Neutral),
    ("BOLT", Team::Red),
    ("DIAMOND", Team::Red),
    ("DRAGON", Team::Neutral),
    ("CLOUD", Team::Blue),
];

#[test]
fn test_a1b2_matches_snapshot() {
    let board = generate_board("A1B2", &fixed_words()).unwrap();

    assert_eq!(board.seed(), "A1B2");
    assert_eq!(board.starting_team(), Team::Blue);

    for (position, (tile, (word, team))) in board.tiles().iter().zip(A1B2_LAYOUT).enumerate() {
        assert_eq!(tile.position(), position);
        assert_eq!(tile.word(), word, "word at position {}", position);
        assert_eq!(tile.team(), team, "team at position {}", position);
        assert!(!tile.is_guessed());
    }
}

#[test]
fn test_a1b2_repeated_calls_identical() {
    let words = fixed_words();
    let first = generate_board("A1B2", &words).unwrap();

    for _ in 0..10 {
        assert_eq!(generate_board("A1B2", &words).unwrap(), first);
    }
}

#[test]
fn test_a1b2_json_shape() {
    let board = generate_board("A1B2", &FIXED_WORDS).unwrap();
    let json = serde_json::to_value(&board).unwrap();

    assert_eq!(json["seed"], "A1B2");
    assert_eq!(json["starting_team"], "blue");
    assert_eq!(json["tiles"][9]["word"], "APPLE");
    assert_eq!(json["tiles"][9]["team"], "assassin");
    assert_eq!(json["tiles"][9]["position"], 9);
    assert_eq!(json["tiles"][9]["guessed"], false);
}

#[test]
fn test_exact_size_vocabulary_snapshot() {
    // With exactly 25 words every word is used; only order and teams vary
    let words = &FIXED_WORDS[..25];
    let board = generate_board("A1B2", words).unwrap();

    let order: Vec<&str> = board.tiles().iter().map(|t| t.word()).collect();
    assert_eq!(
        order,
        vec![
            "GHOST", "BOLT", "MOON", "CASTLE", "KNIGHT", "APPLE", "ICE", "DIAMOND", "GLASS",
            "FAIR", "DRAGON", "LEMON", "NEEDLE", "OCEAN", "BEAR", "FOREST", "BERLIN", "CLOUD",
            "CROWN", "CANADA", "BRIDGE", "HONEY", "JUPITER", "ENGINE", "BANK",
        ]
    );
    assert_eq!(board.starting_team(), Team::Red);
}

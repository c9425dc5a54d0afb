//! Tests for game code generation

use std::collections::HashSet;

use codenames_board_core_rs::seed::{SEED_ALPHABET, SEED_LENGTH};
use codenames_board_core_rs::{generate_random_seed, generate_random_seed_with, normalize_join_code};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn is_game_code(code: &str) -> bool {
    code.len() == SEED_LENGTH
        && code
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
}

#[test]
fn test_thousand_codes_match_format() {
    let codes: Vec<String> = (0..1000).map(|_| generate_random_seed()).collect();

    for code in &codes {
        assert!(is_game_code(code), "bad code {:?}", code);
    }

    // 36^4 codes: a handful of birthday collisions in 1000 draws is expected
    let distinct: HashSet<&String> = codes.iter().collect();
    assert!(
        distinct.len() >= 990,
        "only {} distinct codes out of 1000",
        distinct.len()
    );
}

#[test]
fn test_injected_rng_is_reproducible() {
    let mut a = StdRng::seed_from_u64(7);
    let mut b = StdRng::seed_from_u64(7);
    assert_eq!(generate_random_seed_with(&mut a), generate_random_seed_with(&mut b));
}

#[test]
fn test_codes_use_whole_alphabet() {
    let mut rng = StdRng::seed_from_u64(12345);
    let seen: HashSet<char> = (0..2000)
        .flat_map(|_| generate_random_seed_with(&mut rng).chars().collect::<Vec<_>>())
        .collect();
    assert_eq!(seen.len(), SEED_ALPHABET.len());
}

#[test]
fn test_join_code_normalization() {
    assert_eq!(normalize_join_code("a1b2"), Some("A1B2".to_string()));
    assert_eq!(normalize_join_code("\t x9z0 \n"), Some("X9Z0".to_string()));
    assert_eq!(normalize_join_code(""), None);
    assert_eq!(normalize_join_code("  \t"), None);
}

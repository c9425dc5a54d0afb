//! Tests for deterministic RNG
//!
//! CRITICAL: Determinism is sacred. Same seed MUST produce same sequence,
//! and the sequence MUST match the generator game codes were shared with.

use codenames_board_core_rs::RngManager;

#[test]
fn test_rng_reference_sequence_hello() {
    let mut rng = RngManager::new("hello.");
    let expected = [
        0.9282578795792454,
        0.3752569768646784,
        0.7316977468919549,
        0.23707962084956113,
        0.06057665448709666,
    ];
    for (i, want) in expected.iter().enumerate() {
        assert_eq!(rng.next_f64(), *want, "draw {} diverged", i);
    }
}

#[test]
fn test_rng_reference_sequence_game_code() {
    let mut rng = RngManager::new("A1B2");
    let expected = [
        0.05218226937233817,
        0.5147294058253419,
        0.8459587016604695,
        0.7840380855600535,
        0.2509175730016177,
    ];
    for (i, want) in expected.iter().enumerate() {
        assert_eq!(rng.next_f64(), *want, "draw {} diverged", i);
    }
}

#[test]
fn test_rng_reference_sequence_non_ascii() {
    // Mixes UTF-16 code units, including a surrogate pair
    let mut rng = RngManager::new("żółw🐢");
    assert_eq!(rng.next_f64(), 0.13171694478391724);
    assert_eq!(rng.next_f64(), 0.8893988804701684);
    assert_eq!(rng.next_f64(), 0.25340567517166734);
}

#[test]
fn test_rng_reference_long_seed() {
    // Longer than the 256-byte key ring
    let mut rng = RngManager::new(&"a".repeat(300));
    assert_eq!(rng.next_f64(), 0.7896636759683583);
}

#[test]
fn test_rng_range_reference() {
    let mut rng = RngManager::new("A1B2");
    let values: Vec<i64> = (0..10).map(|_| rng.range(0, 100)).collect();
    assert_eq!(values, vec![5, 51, 84, 78, 25, 33, 49, 46, 21, 92]);
}

#[test]
fn test_rng_shuffle_reference() {
    let mut rng = RngManager::new("A1B2");
    let shuffled = rng.shuffle(&[0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
    assert_eq!(shuffled, vec![2, 9, 3, 8, 7, 1, 5, 6, 4, 0]);

    let mut rng = RngManager::new("hello.");
    let mut items: Vec<u32> = (0..10).collect();
    rng.shuffle_in_place(&mut items);
    assert_eq!(items, vec![7, 6, 2, 4, 8, 0, 1, 5, 3, 9]);
}

#[test]
fn test_rng_next_deterministic() {
    let mut rng1 = RngManager::new("A1B2");
    let mut rng2 = RngManager::new("A1B2");

    for _ in 0..100 {
        let val1 = rng1.next_f64();
        let val2 = rng2.next_f64();
        assert_eq!(val1, val2, "RNG not deterministic!");
    }
}

#[test]
fn test_rng_different_seeds_different_sequences() {
    let mut rng1 = RngManager::new("A1B2");
    let mut rng2 = RngManager::new("A1B3");

    assert_ne!(
        rng1.next_f64(),
        rng2.next_f64(),
        "Different seeds should produce different values"
    );
}

#[test]
fn test_rng_seed_is_case_sensitive() {
    let mut upper = RngManager::new("ABCD");
    let mut lower = RngManager::new("abcd");
    assert_ne!(upper.next_f64(), lower.next_f64());
}

#[test]
fn test_rng_range() {
    let mut rng = RngManager::new("range");

    for _ in 0..100 {
        let val = rng.range(0, 100);
        assert!((0..100).contains(&val), "Value {} out of range [0, 100)", val);
    }
}

#[test]
fn test_rng_range_single_value() {
    let mut rng = RngManager::new("single");

    // Range [5, 6) should always return 5
    let val = rng.range(5, 6);
    assert_eq!(val, 5);
}

#[test]
fn test_rng_range_negative_bounds() {
    let mut rng = RngManager::new("negative");

    for _ in 0..100 {
        let val = rng.range(-10, -2);
        assert!((-10..-2).contains(&val), "Value {} out of range [-10, -2)", val);
    }
}

#[test]
fn test_rng_clone_replays_from_checkpoint() {
    let mut rng1 = RngManager::new("checkpoint");

    for _ in 0..10 {
        rng1.next_f64();
    }

    let mut rng2 = rng1.clone();

    for _ in 0..10 {
        assert_eq!(rng1.next_f64(), rng2.next_f64());
    }
}

#[test]
fn test_rng_instances_are_independent() {
    let mut shared = RngManager::new("A1B2");
    let mut fresh = RngManager::new("A1B2");

    // Advancing one instance must not move the other
    shared.next_f64();
    shared.next_f64();

    assert_eq!(fresh.next_f64(), 0.05218226937233817);
}

#[test]
fn test_rng_shuffle_is_permutation() {
    let mut rng = RngManager::new("permutation");
    let items: Vec<u32> = (0..50).collect();

    let mut shuffled = rng.shuffle(&items);
    assert_ne!(shuffled, items, "50 items should not come back in order");

    shuffled.sort_unstable();
    assert_eq!(shuffled, items);
}

#[test]
fn test_rng_produces_diverse_values() {
    let mut rng = RngManager::new("diverse");
    let mut values: Vec<u64> = (0..100).map(|_| rng.next_f64().to_bits()).collect();

    values.sort_unstable();
    values.dedup();
    assert!(
        values.len() > 90,
        "RNG not diverse enough: only {} unique values out of 100",
        values.len()
    );
}

//! Shared fixtures for integration tests

/// Thirty fixed words in a fixed order
#[allow(dead_code)]
pub const FIXED_WORDS: [&str; 30] = [
    "apple", "bank", "bear", "berlin", "bolt", "bridge", "canada", "castle", "cloud", "crown",
    "diamond", "dragon", "engine", "fair", "forest", "ghost", "glass", "honey", "ice", "jupiter",
    "knight", "lemon", "moon", "needle", "ocean", "piano", "queen", "robot", "shadow", "tower",
];

#[allow(dead_code)]
pub fn fixed_words() -> Vec<String> {
    FIXED_WORDS.iter().map(|w| w.to_string()).collect()
}

#[allow(dead_code)]
pub fn numbered_words(len: usize) -> Vec<String> {
    (0..len).map(|i| format!("word{:03}", i)).collect()
}

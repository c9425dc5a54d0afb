//! Game codes
//!
//! Fresh codes come from the thread-local entropy source and carry no
//! reproducibility contract; only the board derived from a code does.

use rand::Rng;

/// Characters a generated code is drawn from
pub const SEED_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Length of a generated code
pub const SEED_LENGTH: usize = 4;

/// Generate a fresh 4-character uppercase alphanumeric game code
///
/// # Example
/// ```
/// use codenames_board_core_rs::generate_random_seed;
///
/// let code = generate_random_seed();
/// assert_eq!(code.len(), 4);
/// assert!(code.chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
/// ```
pub fn generate_random_seed() -> String {
    generate_random_seed_with(&mut rand::thread_rng())
}

/// Generate a game code from a caller-supplied RNG
pub fn generate_random_seed_with<R: Rng>(rng: &mut R) -> String {
    (0..SEED_LENGTH)
        .map(|_| SEED_ALPHABET[rng.gen_range(0..SEED_ALPHABET.len())] as char)
        .collect()
}

/// Normalize a code typed in by a joining player
///
/// Surrounding whitespace is dropped and letters are upper-cased.
/// Returns `None` when nothing is left.
///
/// # Example
/// ```
/// use codenames_board_core_rs::normalize_join_code;
///
/// assert_eq!(normalize_join_code("  a1b2 "), Some("A1B2".to_string()));
/// assert_eq!(normalize_join_code("   "), None);
/// ```
pub fn normalize_join_code(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_uppercase())
    }
}

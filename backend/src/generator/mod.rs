//! Deterministic board generation
//!
//! `generate_board` is a pure function of `(seed, words, grid_size)`. The
//! order of PRNG draws below is fixed: word shuffle, starting-team draw,
//! team shuffle. Reordering any step changes the board behind every
//! existing game code.

mod distribution;

pub use distribution::TeamDistribution;

use crate::models::{Board, BoardError, Team, Tile};
use crate::rng::RngManager;

/// Tiles on the classic 5×5 board
pub const GRID_SIZE: usize = 25;

/// Columns of the classic board
pub const GRID_WIDTH: usize = 5;

/// Generate the classic 25-tile board for `seed`
///
/// # Errors
/// Returns `BoardError::InsufficientVocabulary` if `words` holds fewer than
/// 25 entries. No draw is made in that case.
///
/// # Example
/// ```
/// use codenames_board_core_rs::generate_board;
///
/// let words: Vec<String> = (0..30).map(|i| format!("word{i}")).collect();
/// let first = generate_board("A1B2", &words).unwrap();
/// let second = generate_board("A1B2", &words).unwrap();
/// assert_eq!(first, second);
/// ```
pub fn generate_board<S: AsRef<str>>(seed: &str, words: &[S]) -> Result<Board, BoardError> {
    generate_board_with_size(seed, words, GRID_SIZE)
}

/// Generate a board with `grid_size` tiles
///
/// Team counts come from [`TeamDistribution::for_grid_size`].
pub fn generate_board_with_size<S: AsRef<str>>(
    seed: &str,
    words: &[S],
    grid_size: usize,
) -> Result<Board, BoardError> {
    let distribution = TeamDistribution::for_grid_size(grid_size)?;
    if words.len() < grid_size {
        return Err(BoardError::InsufficientVocabulary {
            required: grid_size,
            available: words.len(),
        });
    }

    let mut rng = RngManager::new(seed);

    let mut selected: Vec<&str> = words.iter().map(|word| word.as_ref()).collect();
    rng.shuffle_in_place(&mut selected);
    selected.truncate(grid_size);

    let starting_team = if rng.next_f64() < 0.5 {
        Team::Red
    } else {
        Team::Blue
    };

    let mut teams = distribution.assignments(starting_team);
    rng.shuffle_in_place(&mut teams);

    let tiles = selected
        .into_iter()
        .zip(teams)
        .enumerate()
        .map(|(position, (word, team))| Tile::new(word, team, position))
        .collect();

    tracing::debug!(
        seed,
        grid_size,
        vocabulary = words.len(),
        starting_team = %starting_team,
        "generated board"
    );

    Ok(Board::new(seed.to_string(), tiles, starting_team))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vocabulary(len: usize) -> Vec<String> {
        (0..len).map(|i| format!("word{:02}", i)).collect()
    }

    #[test]
    fn test_rejects_short_vocabulary() {
        let words = vocabulary(24);
        assert_eq!(
            generate_board("A1B2", &words),
            Err(BoardError::InsufficientVocabulary {
                required: 25,
                available: 24
            })
        );
    }

    #[test]
    fn test_invalid_grid_size_checked_before_vocabulary() {
        let words = vocabulary(2);
        assert_eq!(
            generate_board_with_size("A1B2", &words, 3),
            Err(BoardError::InvalidGridSize { grid_size: 3 })
        );
    }

    #[test]
    fn test_accepts_str_slices() {
        let owned = vocabulary(25);
        let borrowed: Vec<&str> = owned.iter().map(String::as_str).collect();
        assert_eq!(
            generate_board("A1B2", &owned),
            generate_board("A1B2", &borrowed)
        );
    }

    #[test]
    fn test_custom_grid_size_uses_scaled_distribution() {
        let words = vocabulary(20);
        let board = generate_board_with_size("grid16", &words, 16).unwrap();
        let dist = TeamDistribution::for_grid_size(16).unwrap();

        assert_eq!(board.grid_size(), 16);
        assert_eq!(board.team_count(board.starting_team()), dist.starting);
        assert_eq!(board.team_count(Team::Neutral), dist.neutral);
        assert_eq!(board.team_count(Team::Assassin), 1);
    }
}

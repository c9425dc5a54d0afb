//! Board model
//!
//! The generated layout: ordered tiles plus the starting team. Once built,
//! only the per-tile guessed flags change, and only through the methods
//! below.

use serde::Serialize;
use thiserror::Error;

use super::team::Team;
use super::tile::Tile;

/// Errors that can occur while generating or updating a board
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("Insufficient vocabulary: required {required} words, available {available}")]
    InsufficientVocabulary { required: usize, available: usize },

    #[error("Grid size {grid_size} cannot hold a starting team, an opponent and an assassin")]
    InvalidGridSize { grid_size: usize },

    #[error("Position {position} is outside the board (grid size {grid_size})")]
    PositionOutOfRange { position: usize, grid_size: usize },
}

/// Unguessed tiles left per team
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RemainingCounts {
    pub red: usize,
    pub blue: usize,
    pub neutral: usize,
    pub assassin: usize,
}

impl RemainingCounts {
    pub fn get(&self, team: Team) -> usize {
        match team {
            Team::Red => self.red,
            Team::Blue => self.blue,
            Team::Neutral => self.neutral,
            Team::Assassin => self.assassin,
        }
    }

    fn bump(&mut self, team: Team) {
        match team {
            Team::Red => self.red += 1,
            Team::Blue => self.blue += 1,
            Team::Neutral => self.neutral += 1,
            Team::Assassin => self.assassin += 1,
        }
    }
}

/// A complete generated board
///
/// # Example
/// ```
/// use codenames_board_core_rs::{generate_board, Team};
///
/// let words: Vec<String> = (0..25).map(|i| format!("word{i}")).collect();
/// let mut board = generate_board("A1B2", &words).unwrap();
///
/// assert_eq!(board.tiles().len(), 25);
/// assert_eq!(board.team_count(board.starting_team()), 9);
///
/// board.toggle_guess(0).unwrap();
/// assert_eq!(board.guessed_positions(), vec![0]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Board {
    seed: String,

    /// Ordered by position
    tiles: Vec<Tile>,

    /// Red or Blue; holds one more tile than the other playing team
    starting_team: Team,
}

impl Board {
    pub(crate) fn new(seed: String, tiles: Vec<Tile>, starting_team: Team) -> Self {
        debug_assert!(starting_team.is_playing_team());
        debug_assert!(tiles.iter().enumerate().all(|(i, t)| t.position() == i));
        Self {
            seed,
            tiles,
            starting_team,
        }
    }

    pub fn seed(&self) -> &str {
        &self.seed
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn tile(&self, position: usize) -> Option<&Tile> {
        self.tiles.get(position)
    }

    pub fn starting_team(&self) -> Team {
        self.starting_team
    }

    pub fn grid_size(&self) -> usize {
        self.tiles.len()
    }

    /// Tiles split into rows of `width`
    ///
    /// # Panics
    /// Panics if width is zero
    pub fn rows(&self, width: usize) -> std::slice::Chunks<'_, Tile> {
        assert!(width > 0, "row width must be positive");
        self.tiles.chunks(width)
    }

    /// Total tiles assigned to `team`
    pub fn team_count(&self, team: Team) -> usize {
        self.tiles.iter().filter(|t| t.team() == team).count()
    }

    /// Unguessed tiles assigned to `team`
    pub fn remaining(&self, team: Team) -> usize {
        self.remaining_counts().get(team)
    }

    pub fn remaining_counts(&self) -> RemainingCounts {
        let mut counts = RemainingCounts::default();
        for tile in self.tiles.iter().filter(|t| !t.is_guessed()) {
            counts.bump(tile.team());
        }
        counts
    }

    /// Flip one tile's guessed flag and return the new value
    pub fn toggle_guess(&mut self, position: usize) -> Result<bool, BoardError> {
        let grid_size = self.grid_size();
        let tile = self
            .tiles
            .get_mut(position)
            .ok_or(BoardError::PositionOutOfRange {
                position,
                grid_size,
            })?;
        let guessed = !tile.is_guessed();
        tile.set_guessed(guessed);
        Ok(guessed)
    }

    /// Positions of guessed tiles, ascending
    pub fn guessed_positions(&self) -> Vec<usize> {
        self.tiles
            .iter()
            .filter(|t| t.is_guessed())
            .map(Tile::position)
            .collect()
    }

    /// Mark the listed positions guessed
    ///
    /// Positions outside the grid are ignored; they can only come from a
    /// stale or corrupted cache.
    pub fn apply_guesses(&mut self, positions: &[usize]) {
        for &position in positions {
            if let Some(tile) = self.tiles.get_mut(position) {
                tile.set_guessed(true);
            }
        }
    }

    /// Reset every tile to unguessed
    pub fn clear_guesses(&mut self) {
        for tile in &mut self.tiles {
            tile.set_guessed(false);
        }
    }
}

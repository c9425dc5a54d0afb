//! Tile model
//!
//! One cell of the grid: a word, its team, its fixed row-major position and
//! the viewer's guessed flag.

use serde::Serialize;

use super::team::Team;

/// A single grid cell
///
/// Everything except `guessed` is fixed at generation time. `guessed` is
/// view state toggled by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tile {
    /// Upper-cased word
    word: String,

    team: Team,

    /// Row-major index in [0, grid_size)
    position: usize,

    guessed: bool,
}

impl Tile {
    /// Create an unguessed tile, upper-casing the word
    ///
    /// # Example
    /// ```
    /// use codenames_board_core_rs::{Team, Tile};
    ///
    /// let tile = Tile::new("moon", Team::Red, 3);
    /// assert_eq!(tile.word(), "MOON");
    /// assert!(!tile.is_guessed());
    /// ```
    pub fn new(word: &str, team: Team, position: usize) -> Self {
        Self {
            word: word.to_uppercase(),
            team,
            position,
            guessed: false,
        }
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn team(&self) -> Team {
        self.team
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn is_guessed(&self) -> bool {
        self.guessed
    }

    pub(crate) fn set_guessed(&mut self, guessed: bool) {
        self.guessed = guessed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_uppercased_word() {
        let tile = Tile::new("moon", Team::Blue, 3);
        let json = serde_json::to_value(&tile).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "word": "MOON",
                "team": "blue",
                "position": 3,
                "guessed": false
            })
        );
    }
}

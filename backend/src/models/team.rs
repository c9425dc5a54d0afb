//! Team model
//!
//! Every tile belongs to exactly one team. Red and Blue are the two playing
//! teams; Neutral tiles end a turn; the single Assassin tile ends the game.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Team a tile is assigned to
///
/// Serialized lowercase (`"red"`, `"blue"`, `"neutral"`, `"assassin"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Team {
    Red,
    Blue,
    Neutral,
    Assassin,
}

impl Team {
    /// The other playing team (`None` for Neutral and Assassin)
    ///
    /// # Example
    /// ```
    /// use codenames_board_core_rs::Team;
    ///
    /// assert_eq!(Team::Red.opponent(), Some(Team::Blue));
    /// assert_eq!(Team::Neutral.opponent(), None);
    /// ```
    pub fn opponent(self) -> Option<Team> {
        match self {
            Team::Red => Some(Team::Blue),
            Team::Blue => Some(Team::Red),
            Team::Neutral | Team::Assassin => None,
        }
    }

    /// True for the two teams that can start and win
    pub fn is_playing_team(self) -> bool {
        matches!(self, Team::Red | Team::Blue)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Team::Red => "red",
            Team::Blue => "blue",
            Team::Neutral => "neutral",
            Team::Assassin => "assassin",
        }
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Team::Assassin).unwrap(), "\"assassin\"");
        let team: Team = serde_json::from_str("\"blue\"").unwrap();
        assert_eq!(team, Team::Blue);
    }

    #[test]
    fn test_opponent_is_symmetric() {
        for team in [Team::Red, Team::Blue] {
            assert_eq!(team.opponent().and_then(Team::opponent), Some(team));
        }
    }
}

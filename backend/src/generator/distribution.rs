//! Team distribution
//!
//! How many tiles each team receives for a given grid size. The classic 5×5
//! board is 9 / 8 / 7 / 1; other sizes scale the neutral share by 7/25 and
//! split the rest so the starting team is always exactly one tile ahead.

use serde::Serialize;

use crate::models::{BoardError, Team};

/// Tile counts per team for one board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TeamDistribution {
    pub starting: usize,
    pub other: usize,
    pub neutral: usize,
    pub assassin: usize,
}

impl TeamDistribution {
    /// The 5×5 layout every shared game code relies on
    pub const CLASSIC: TeamDistribution = TeamDistribution {
        starting: 9,
        other: 8,
        neutral: 7,
        assassin: 1,
    };

    /// Smallest grid with at least one tile for each playing team
    pub const MIN_GRID_SIZE: usize = 5;

    /// Derive the counts for `grid_size`
    ///
    /// # Example
    /// ```
    /// use codenames_board_core_rs::TeamDistribution;
    ///
    /// let classic = TeamDistribution::for_grid_size(25).unwrap();
    /// assert_eq!(classic, TeamDistribution::CLASSIC);
    ///
    /// let small = TeamDistribution::for_grid_size(16).unwrap();
    /// assert_eq!(small.total(), 16);
    /// assert_eq!(small.starting, small.other + 1);
    /// ```
    pub fn for_grid_size(grid_size: usize) -> Result<Self, BoardError> {
        if grid_size < Self::MIN_GRID_SIZE {
            return Err(BoardError::InvalidGridSize { grid_size });
        }

        let assassin = 1;
        let mut neutral = grid_size * 7 / 25;
        let mut remaining = grid_size - assassin - neutral;
        // The starting team must lead by exactly one
        if remaining % 2 == 0 {
            neutral += 1;
            remaining -= 1;
        }

        Ok(Self {
            starting: remaining / 2 + 1,
            other: remaining / 2,
            neutral,
            assassin,
        })
    }

    pub fn total(&self) -> usize {
        self.starting + self.other + self.neutral + self.assassin
    }

    /// Unshuffled assignment sequence: starting block, other block,
    /// neutrals, then the assassin
    ///
    /// The block order feeds the team shuffle and is part of the
    /// compatibility contract.
    pub fn assignments(&self, starting_team: Team) -> Vec<Team> {
        let other_team = starting_team.opponent().unwrap_or(Team::Blue);

        let mut teams = Vec::with_capacity(self.total());
        teams.extend(std::iter::repeat(starting_team).take(self.starting));
        teams.extend(std::iter::repeat(other_team).take(self.other));
        teams.extend(std::iter::repeat(Team::Neutral).take(self.neutral));
        teams.extend(std::iter::repeat(Team::Assassin).take(self.assassin));
        teams
    }
}

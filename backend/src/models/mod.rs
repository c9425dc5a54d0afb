//! Domain models for the board generator

pub mod board;
pub mod team;
pub mod tile;

// Re-exports
pub use board::{Board, BoardError, RemainingCounts};
pub use team::Team;
pub use tile::Tile;

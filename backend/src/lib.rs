//! Codenames Board Core - Rust Engine
//!
//! Deterministic word-guessing board generation from a shared game code.
//!
//! # Architecture
//!
//! - **rng**: String-seeded deterministic random number generation
//! - **generator**: Board assembly (word selection, team layout)
//! - **models**: Domain types (Team, Tile, Board)
//! - **vocabulary**: Word-list files, manifest, providers
//! - **params**: Game parameters carried in share links
//! - **seed**: Fresh game codes
//! - **guesses**: Persisted guessed positions, keyed by game code
//!
//! # Critical Invariants
//!
//! 1. Same seed + same word list ⇒ identical board, on every platform
//! 2. Generation is pure; guess state is layered on afterwards
//! 3. Every board is 9 / 8 / 7 / 1 on the classic 25-tile grid

// Module declarations
pub mod generator;
pub mod guesses;
pub mod models;
pub mod params;
pub mod rng;
pub mod seed;
pub mod vocabulary;

// Re-exports for convenience
pub use generator::{
    generate_board, generate_board_with_size, TeamDistribution, GRID_SIZE, GRID_WIDTH,
};
pub use guesses::{GuessStore, GuessStoreError, InMemoryGuessStore, JsonFileGuessStore};
pub use models::{Board, BoardError, RemainingCounts, Team, Tile};
pub use params::{GameParams, ParamsError, Role};
pub use rng::RngManager;
pub use seed::{generate_random_seed, generate_random_seed_with, normalize_join_code};
pub use vocabulary::{
    DirectoryProvider, InMemoryProvider, VocabularyError, VocabularyManifest, VocabularySet,
    WordListProvider,
};

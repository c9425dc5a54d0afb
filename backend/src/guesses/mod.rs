//! Persisted guess state
//!
//! Viewers remember which tiles they have revealed, keyed by game code.
//! This sits strictly outside generation: a board is always generated
//! fresh, then stored positions are laid over it.

mod json_file;
mod memory;

pub use json_file::JsonFileGuessStore;
pub use memory::InMemoryGuessStore;

use std::path::PathBuf;
use thiserror::Error;

use crate::models::Board;

/// Errors that can occur while reading or writing guess state
#[derive(Debug, Error)]
pub enum GuessStoreError {
    #[error("Failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Corrupt guess state in {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Guess store lock poisoned")]
    Poisoned,
}

/// Key under which a game's guessed positions are stored
///
/// # Example
/// ```
/// use codenames_board_core_rs::guesses::storage_key;
///
/// assert_eq!(storage_key("A1B2"), "game-A1B2");
/// ```
pub fn storage_key(seed: &str) -> String {
    format!("game-{seed}")
}

/// Port for guessed-position persistence
///
/// Implementations store one list of positions per game code.
pub trait GuessStore {
    /// Stored positions for `seed`, or `None` if nothing was saved
    fn get(&self, seed: &str) -> Result<Option<Vec<usize>>, GuessStoreError>;

    /// Replace the stored positions for `seed`
    fn set(&self, seed: &str, positions: &[usize]) -> Result<(), GuessStoreError>;

    /// Forget `seed` entirely
    fn remove(&self, seed: &str) -> Result<(), GuessStoreError>;
}

/// Lay stored guesses over a freshly generated board
///
/// Unreadable state is logged and the board is left unguessed; a broken
/// cache never blocks a game from starting.
pub fn restore_guesses<S: GuessStore + ?Sized>(store: &S, board: &mut Board) {
    match store.get(board.seed()) {
        Ok(Some(positions)) => board.apply_guesses(&positions),
        Ok(None) => {}
        Err(err) => {
            tracing::error!(seed = board.seed(), error = %err, "failed to load game state");
        }
    }
}

/// Save the board's current guessed positions
pub fn persist_guesses<S: GuessStore + ?Sized>(
    store: &S,
    board: &Board,
) -> Result<(), GuessStoreError> {
    store.set(board.seed(), &board.guessed_positions())
}

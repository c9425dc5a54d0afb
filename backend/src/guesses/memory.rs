//! In-memory guess store

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use super::{storage_key, GuessStore, GuessStoreError};

/// Guess store kept in process memory
///
/// Clones share the same underlying map.
#[derive(Debug, Clone, Default)]
pub struct InMemoryGuessStore {
    storage: Arc<Mutex<HashMap<String, Vec<usize>>>>,
}

impl InMemoryGuessStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of games with saved state
    pub fn count(&self) -> Result<usize, GuessStoreError> {
        let storage = self.storage.lock().map_err(|_| GuessStoreError::Poisoned)?;
        Ok(storage.len())
    }
}

impl GuessStore for InMemoryGuessStore {
    fn get(&self, seed: &str) -> Result<Option<Vec<usize>>, GuessStoreError> {
        let storage = self.storage.lock().map_err(|_| GuessStoreError::Poisoned)?;
        Ok(storage.get(&storage_key(seed)).cloned())
    }

    fn set(&self, seed: &str, positions: &[usize]) -> Result<(), GuessStoreError> {
        let mut storage = self.storage.lock().map_err(|_| GuessStoreError::Poisoned)?;
        storage.insert(storage_key(seed), positions.to_vec());
        Ok(())
    }

    fn remove(&self, seed: &str) -> Result<(), GuessStoreError> {
        let mut storage = self.storage.lock().map_err(|_| GuessStoreError::Poisoned)?;
        storage.remove(&storage_key(seed));
        Ok(())
    }
}

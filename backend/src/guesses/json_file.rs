//! JSON file guess store
//!
//! All games share one file: a JSON object mapping storage keys to arrays
//! of positions. A missing file reads as an empty store. Writes go through a
//! sibling temp file renamed into place, so the file is never left
//! half-written.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use super::{storage_key, GuessStore, GuessStoreError};

type GuessMap = BTreeMap<String, Vec<usize>>;

/// Guess store persisted to a single JSON file
#[derive(Debug, Clone)]
pub struct JsonFileGuessStore {
    path: PathBuf,
}

impl JsonFileGuessStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<GuessMap, GuessStoreError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(GuessMap::new()),
            Err(source) => {
                return Err(GuessStoreError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };
        serde_json::from_str(&raw).map_err(|source| GuessStoreError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    /// Current map for a read-modify-write
    ///
    /// A corrupt file is replaced by an empty map so play can continue; the
    /// flag reports that the file must be rewritten.
    fn read_for_update(&self) -> Result<(GuessMap, bool), GuessStoreError> {
        match self.read() {
            Ok(map) => Ok((map, false)),
            Err(GuessStoreError::Parse { path, source }) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %source,
                    "Discarding corrupt guess state"
                );
                Ok((GuessMap::new(), true))
            }
            Err(err) => Err(err),
        }
    }

    fn temp_path(&self) -> PathBuf {
        let name = self
            .path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "guesses".to_string());
        self.path
            .with_file_name(format!(".{}.tmp-{}", name, std::process::id()))
    }

    fn write(&self, map: &GuessMap) -> Result<(), GuessStoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| GuessStoreError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        let json = serde_json::to_string_pretty(map).map_err(|source| GuessStoreError::Parse {
            path: self.path.clone(),
            source,
        })?;
        let temp_path = self.temp_path();
        fs::write(&temp_path, json).map_err(|source| GuessStoreError::Io {
            path: temp_path.clone(),
            source,
        })?;
        fs::rename(&temp_path, &self.path).map_err(|source| {
            let _ = fs::remove_file(&temp_path);
            GuessStoreError::Io {
                path: self.path.clone(),
                source,
            }
        })
    }
}

impl GuessStore for JsonFileGuessStore {
    fn get(&self, seed: &str) -> Result<Option<Vec<usize>>, GuessStoreError> {
        Ok(self.read()?.remove(&storage_key(seed)))
    }

    fn set(&self, seed: &str, positions: &[usize]) -> Result<(), GuessStoreError> {
        let (mut map, _) = self.read_for_update()?;
        map.insert(storage_key(seed), positions.to_vec());
        self.write(&map)
    }

    fn remove(&self, seed: &str) -> Result<(), GuessStoreError> {
        let (mut map, corrupt) = self.read_for_update()?;
        if map.remove(&storage_key(seed)).is_some() || corrupt {
            self.write(&map)?;
        }
        Ok(())
    }
}

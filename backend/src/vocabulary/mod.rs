//! Word lists
//!
//! The generator only ever sees a resolved `&[String]`. This module owns
//! everything before that point: the on-disk vocabulary format, the
//! manifest of available languages and sets, and the provider trait that
//! resolves a `(lang, set)` selection into a word list.

mod directory;
mod memory;

pub use directory::{DirectoryProvider, MANIFEST_FILE};
pub use memory::InMemoryProvider;

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while resolving or validating a word list
#[derive(Debug, Error)]
pub enum VocabularyError {
    #[error("Unknown language '{lang}'")]
    UnknownLanguage { lang: String },

    #[error("Unknown word set '{set}' for language '{lang}'")]
    UnknownSet { lang: String, set: String },

    #[error("Language '{lang}' has no word sets")]
    EmptyLanguage { lang: String },

    #[error("Invalid vocabulary name '{name}'")]
    InvalidName { name: String },

    #[error("Word set '{title}' has {available} words, need at least {required}")]
    TooFewWords {
        title: String,
        required: usize,
        available: usize,
    },

    #[error("Word set '{title}' contains an empty word at index {index}")]
    EmptyWord { title: String, index: usize },

    #[error("Word set '{title}' contains '{word}' more than once")]
    DuplicateWord { title: String, word: String },

    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// One vocabulary file: `{ "title": ..., "language": ..., "words": [...] }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularySet {
    pub title: String,
    pub language: String,
    pub words: Vec<String>,
}

impl VocabularySet {
    pub fn new(title: impl Into<String>, language: impl Into<String>, words: Vec<String>) -> Self {
        Self {
            title: title.into(),
            language: language.into(),
            words,
        }
    }

    /// Check the set can feed a board of `grid_size` tiles
    ///
    /// Exact duplicates and blank entries are errors. Words that differ
    /// only by case are allowed but logged, since they render identically
    /// once upper-cased.
    pub fn validate(&self, grid_size: usize) -> Result<(), VocabularyError> {
        if self.words.len() < grid_size {
            return Err(VocabularyError::TooFewWords {
                title: self.title.clone(),
                required: grid_size,
                available: self.words.len(),
            });
        }

        let mut exact = HashSet::with_capacity(self.words.len());
        let mut folded = HashSet::with_capacity(self.words.len());
        for (index, word) in self.words.iter().enumerate() {
            if word.trim().is_empty() {
                return Err(VocabularyError::EmptyWord {
                    title: self.title.clone(),
                    index,
                });
            }
            if !exact.insert(word.as_str()) {
                return Err(VocabularyError::DuplicateWord {
                    title: self.title.clone(),
                    word: word.clone(),
                });
            }
            if !folded.insert(word.to_lowercase()) {
                tracing::warn!(
                    title = %self.title,
                    word = %word,
                    "word differs from an earlier entry only by case"
                );
            }
        }
        Ok(())
    }
}

/// Manifest entry for one language
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestLanguage {
    /// Display name, e.g. "English"
    pub name: String,

    /// Set id (file stem) → set title
    pub sets: BTreeMap<String, String>,
}

/// Index of every available language and word set (`manifest.json`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyManifest {
    pub languages: BTreeMap<String, ManifestLanguage>,
}

impl VocabularyManifest {
    pub fn language(&self, lang: &str) -> Option<&ManifestLanguage> {
        self.languages.get(lang)
    }

    /// First set of `lang` in manifest order
    pub fn first_set(&self, lang: &str) -> Option<&str> {
        self.languages
            .get(lang)
            .and_then(|language| language.sets.keys().next())
            .map(String::as_str)
    }

    /// Resolve an optional set choice to a concrete set id
    ///
    /// `None` selects the first available set of the language.
    pub fn resolve_set(&self, lang: &str, set: Option<&str>) -> Result<String, VocabularyError> {
        let language = self
            .language(lang)
            .ok_or_else(|| VocabularyError::UnknownLanguage {
                lang: lang.to_string(),
            })?;

        match set {
            Some(set) if language.sets.contains_key(set) => Ok(set.to_string()),
            Some(set) => Err(VocabularyError::UnknownSet {
                lang: lang.to_string(),
                set: set.to_string(),
            }),
            None => self
                .first_set(lang)
                .map(str::to_string)
                .ok_or_else(|| VocabularyError::EmptyLanguage {
                    lang: lang.to_string(),
                }),
        }
    }
}

/// Human-readable name for a language code
///
/// # Example
/// ```
/// use codenames_board_core_rs::vocabulary::language_display_name;
///
/// assert_eq!(language_display_name("pl"), "Polski");
/// assert_eq!(language_display_name("de"), "de");
/// ```
pub fn language_display_name(code: &str) -> String {
    match code {
        "en" => "English".to_string(),
        "es" => "Español".to_string(),
        "pl" => "Polski".to_string(),
        other => other.to_string(),
    }
}

/// Source of word lists for a `(lang, set)` selection
pub trait WordListProvider {
    /// All languages and sets this provider can serve
    fn manifest(&self) -> Result<VocabularyManifest, VocabularyError>;

    /// Load one concrete set
    fn load_set(&self, lang: &str, set: &str) -> Result<VocabularySet, VocabularyError>;

    /// Load a set, falling back to the first set of `lang` when `set` is
    /// `None`
    fn load(&self, lang: &str, set: Option<&str>) -> Result<VocabularySet, VocabularyError> {
        let set = self.manifest()?.resolve_set(lang, set)?;
        tracing::debug!(lang, set = %set, "loading word set");
        self.load_set(lang, &set)
    }
}

//! In-memory word lists
//!
//! Serves sets registered at runtime. Useful for tests and for callers that
//! embed their vocabularies instead of shipping a directory.

use std::collections::BTreeMap;

use super::{
    language_display_name, ManifestLanguage, VocabularyError, VocabularyManifest, VocabularySet,
    WordListProvider,
};

/// Word-list provider holding its sets in memory
///
/// # Example
/// ```
/// use codenames_board_core_rs::vocabulary::{InMemoryProvider, VocabularySet, WordListProvider};
///
/// let words: Vec<String> = (0..25).map(|i| format!("w{i}")).collect();
/// let provider = InMemoryProvider::new()
///     .with_set("default", VocabularySet::new("Default", "en", words));
///
/// let set = provider.load("en", None).unwrap();
/// assert_eq!(set.title, "Default");
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryProvider {
    /// lang → set id → set
    sets: BTreeMap<String, BTreeMap<String, VocabularySet>>,
}

impl InMemoryProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `set` under its own language
    pub fn insert(&mut self, set_id: impl Into<String>, set: VocabularySet) {
        self.sets
            .entry(set.language.clone())
            .or_default()
            .insert(set_id.into(), set);
    }

    pub fn with_set(mut self, set_id: impl Into<String>, set: VocabularySet) -> Self {
        self.insert(set_id, set);
        self
    }
}

impl WordListProvider for InMemoryProvider {
    fn manifest(&self) -> Result<VocabularyManifest, VocabularyError> {
        let languages = self
            .sets
            .iter()
            .map(|(lang, sets)| {
                let language = ManifestLanguage {
                    name: language_display_name(lang),
                    sets: sets
                        .iter()
                        .map(|(id, set)| (id.clone(), set.title.clone()))
                        .collect(),
                };
                (lang.clone(), language)
            })
            .collect();
        Ok(VocabularyManifest { languages })
    }

    fn load_set(&self, lang: &str, set: &str) -> Result<VocabularySet, VocabularyError> {
        let sets = self
            .sets
            .get(lang)
            .ok_or_else(|| VocabularyError::UnknownLanguage {
                lang: lang.to_string(),
            })?;
        sets.get(set)
            .cloned()
            .ok_or_else(|| VocabularyError::UnknownSet {
                lang: lang.to_string(),
                set: set.to_string(),
            })
    }
}

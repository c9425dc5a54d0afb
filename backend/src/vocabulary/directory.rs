//! Filesystem word lists
//!
//! Layout: `<root>/<lang>/<set>.json`, with an optional prebuilt
//! `<root>/manifest.json`. When no manifest file exists the tree is scanned
//! on demand.

use std::fs;
use std::path::{Path, PathBuf};

use super::{
    language_display_name, ManifestLanguage, VocabularyError, VocabularyManifest, VocabularySet,
    WordListProvider,
};

/// Name of the prebuilt manifest inside the vocabulary root
pub const MANIFEST_FILE: &str = "manifest.json";

/// Word-list provider backed by a vocabulary directory
#[derive(Debug, Clone)]
pub struct DirectoryProvider {
    root: PathBuf,
}

impl DirectoryProvider {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Scan the directory tree and build a fresh manifest
    ///
    /// Each language directory contributes every `*.json` file it holds.
    /// The language's display name comes from the `language` field of its
    /// first file (in file-name order). Directories without vocabulary files
    /// are skipped.
    pub fn build_manifest(&self) -> Result<VocabularyManifest, VocabularyError> {
        let mut manifest = VocabularyManifest::default();

        for lang_dir in sorted_entries(&self.root)? {
            if !lang_dir.is_dir() {
                continue;
            }
            let Some(lang_code) = file_name(&lang_dir) else {
                continue;
            };

            let files: Vec<PathBuf> = sorted_entries(&lang_dir)?
                .into_iter()
                .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
                .collect();
            if files.is_empty() {
                continue;
            }

            let mut language = ManifestLanguage::default();
            for (index, path) in files.iter().enumerate() {
                let set = read_set(path)?;
                if index == 0 {
                    language.name = language_display_name(&set.language);
                }
                if let Some(set_id) = path.file_stem().and_then(|stem| stem.to_str()) {
                    language.sets.insert(set_id.to_string(), set.title);
                }
            }

            manifest.languages.insert(lang_code, language);
        }

        Ok(manifest)
    }

    /// Rebuild the manifest and write it to `<root>/manifest.json`
    pub fn write_manifest(&self) -> Result<VocabularyManifest, VocabularyError> {
        let manifest = self.build_manifest()?;
        let path = self.root.join(MANIFEST_FILE);
        let json = serde_json::to_string_pretty(&manifest).map_err(|source| {
            VocabularyError::Parse {
                path: path.clone(),
                source,
            }
        })?;
        fs::write(&path, json).map_err(|source| VocabularyError::Io {
            path: path.clone(),
            source,
        })?;

        tracing::info!(
            path = %path.display(),
            languages = manifest.languages.len(),
            "wrote vocabulary manifest"
        );
        Ok(manifest)
    }
}

impl WordListProvider for DirectoryProvider {
    fn manifest(&self) -> Result<VocabularyManifest, VocabularyError> {
        let path = self.root.join(MANIFEST_FILE);
        if !path.is_file() {
            return self.build_manifest();
        }
        let raw = fs::read_to_string(&path).map_err(|source| VocabularyError::Io {
            path: path.clone(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| VocabularyError::Parse { path, source })
    }

    fn load_set(&self, lang: &str, set: &str) -> Result<VocabularySet, VocabularyError> {
        check_name(lang)?;
        check_name(set)?;

        let lang_dir = self.root.join(lang);
        if !lang_dir.is_dir() {
            return Err(VocabularyError::UnknownLanguage {
                lang: lang.to_string(),
            });
        }
        let path = lang_dir.join(format!("{set}.json"));
        if !path.is_file() {
            return Err(VocabularyError::UnknownSet {
                lang: lang.to_string(),
                set: set.to_string(),
            });
        }
        read_set(&path)
    }
}

/// Selections arrive from URLs; only plain names may reach the filesystem
fn check_name(name: &str) -> Result<(), VocabularyError> {
    let valid = !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if valid {
        Ok(())
    } else {
        Err(VocabularyError::InvalidName {
            name: name.to_string(),
        })
    }
}

fn read_set(path: &Path) -> Result<VocabularySet, VocabularyError> {
    let raw = fs::read_to_string(path).map_err(|source| VocabularyError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| VocabularyError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn sorted_entries(dir: &Path) -> Result<Vec<PathBuf>, VocabularyError> {
    let io_error = |source| VocabularyError::Io {
        path: dir.to_path_buf(),
        source,
    };
    let mut entries = fs::read_dir(dir)
        .map_err(io_error)?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<Result<Vec<_>, _>>()
        .map_err(io_error)?;
    entries.sort();
    Ok(entries)
}

fn file_name(path: &Path) -> Option<String> {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(str::to_string)
}

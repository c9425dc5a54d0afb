//! CLI configuration
//!
//! Read from an optional TOML file; command-line flags override single
//! fields afterwards.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Settings shared by every command
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Root of `<lang>/<set>.json` vocabulary files
    pub vocab_dir: PathBuf,

    /// Language used when a command names none
    pub default_lang: String,

    /// JSON file holding guessed positions per game
    pub guess_store: PathBuf,

    /// Prefix for printed share links
    pub base_url: String,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            vocab_dir: PathBuf::from("data/vocab"),
            default_lang: codenames_board_core_rs::params::DEFAULT_LANG.to_string(),
            guess_store: PathBuf::from(".codenames/guesses.json"),
            base_url: "http://localhost:3000".to_string(),
        }
    }
}

impl CliConfig {
    /// Load from `path`, or fall back to defaults when no path is given
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config: Self = toml::from_str(&raw)
            .with_context(|| format!("failed to parse config {}", path.display()))?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_file_keeps_defaults() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("codenames.toml");
        fs::write(&path, "vocab_dir = \"/srv/vocab\"\nbase_url = \"https://play.example\"\n")
            .unwrap();

        let config = CliConfig::load(Some(&path)).unwrap();
        assert_eq!(config.vocab_dir, PathBuf::from("/srv/vocab"));
        assert_eq!(config.base_url, "https://play.example");
        assert_eq!(config.default_lang, "en");
    }

    #[test]
    fn test_no_path_gives_defaults() {
        assert_eq!(CliConfig::load(None).unwrap(), CliConfig::default());
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let err = CliConfig::load(Some(Path::new("/nonexistent/codenames.toml"))).unwrap_err();
        assert!(err.to_string().contains("failed to read config"));
    }
}

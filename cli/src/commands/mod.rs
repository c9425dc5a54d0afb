//! CLI subcommands

pub mod guess;
pub mod languages;
pub mod manifest;
pub mod new;
pub mod reset;
pub mod show;

use anyhow::{bail, Context, Result};
use clap::Args;

use codenames_board_core_rs::guesses::restore_guesses;
use codenames_board_core_rs::{
    generate_board, Board, DirectoryProvider, GameParams, JsonFileGuessStore, Role,
    WordListProvider, GRID_SIZE,
};

use crate::config::CliConfig;

/// Selects one game, either from a share link or from individual flags
#[derive(Args, Debug, Clone)]
pub struct GameArgs {
    /// Share link or query string (`/game?seed=...&role=...`)
    #[arg(long, conflicts_with_all = ["seed", "role"])]
    pub url: Option<String>,

    /// Game code
    #[arg(long, short)]
    pub seed: Option<String>,

    /// Viewer role: master or guesser
    #[arg(long, short)]
    pub role: Option<Role>,

    /// Vocabulary language (defaults to the configured language)
    #[arg(long, short)]
    pub lang: Option<String>,

    /// Word set within the language (defaults to its first set)
    #[arg(long)]
    pub set: Option<String>,
}

impl GameArgs {
    /// Resolve to game parameters; `default_role` applies when a command does
    /// not care about the role
    pub fn params(&self, config: &CliConfig, default_role: Option<Role>) -> Result<GameParams> {
        if let Some(url) = &self.url {
            let query = url.split_once('?').map_or(url.as_str(), |(_, q)| q);
            let mut params = GameParams::from_query(query).context("invalid game link")?;
            if let Some(lang) = &self.lang {
                params.lang = lang.clone();
            }
            if self.set.is_some() {
                params.set = self.set.clone();
            }
            return Ok(params);
        }

        let Some(seed) = self.seed.as_deref().filter(|s| !s.is_empty()) else {
            bail!("missing game code (use --seed or --url)");
        };
        let Some(role) = self.role.or(default_role) else {
            bail!("missing role (use --role master|guesser)");
        };
        let lang = self.lang.clone().unwrap_or_else(|| config.default_lang.clone());

        let mut params = GameParams::new(seed, role, lang);
        params.set = self.set.clone();
        Ok(params)
    }
}

/// Word list for `params`, validated for a full board
pub fn load_words(params: &GameParams, config: &CliConfig) -> Result<Vec<String>> {
    let provider = DirectoryProvider::new(&config.vocab_dir);
    let set = provider
        .load(&params.lang, params.set.as_deref())
        .with_context(|| format!("failed to load vocabulary for '{}'", params.lang))?;
    set.validate(GRID_SIZE)?;
    Ok(set.words)
}

/// Generate the board for `params` and lay saved guesses over it
pub fn open_board(params: &GameParams, config: &CliConfig) -> Result<Board> {
    let words = load_words(params, config)?;
    let mut board = generate_board(&params.seed, &words)?;
    restore_guesses(&guess_store(config), &mut board);
    Ok(board)
}

pub fn guess_store(config: &CliConfig) -> JsonFileGuessStore {
    JsonFileGuessStore::new(&config.guess_store)
}

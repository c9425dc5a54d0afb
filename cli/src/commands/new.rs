//! Start a new game

use anyhow::{Context, Result};
use clap::Args;

use codenames_board_core_rs::{generate_random_seed, GameParams, GuessStore, Role};

use super::{guess_store, load_words};
use crate::config::CliConfig;

#[derive(Args, Debug)]
pub struct NewArgs {
    /// Vocabulary language (defaults to the configured language)
    #[arg(long, short)]
    pub lang: Option<String>,

    /// Word set within the language (defaults to its first set)
    #[arg(long)]
    pub set: Option<String>,
}

pub fn execute(args: NewArgs, config: &CliConfig) -> Result<()> {
    let seed = generate_random_seed();
    let lang = args.lang.unwrap_or_else(|| config.default_lang.clone());
    let mut params = GameParams::new(seed, Role::Master, lang);
    params.set = args.set;

    // Fail now rather than when the link is opened
    load_words(&params, config).context("cannot start game")?;
    guess_store(config).remove(&params.seed)?;

    tracing::info!(seed = %params.seed, lang = %params.lang, "created game");
    println!("Game code: {}", params.seed);
    println!("Spymaster: {}", params.share_url(&config.base_url));
    println!(
        "Guessers:  {}",
        params.with_role(Role::Guesser).share_url(&config.base_url)
    );
    Ok(())
}

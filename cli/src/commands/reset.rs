//! Forget the guesses saved for a game

use anyhow::{bail, Result};
use clap::Args;

use codenames_board_core_rs::{normalize_join_code, GuessStore};

use super::guess_store;
use crate::config::CliConfig;

#[derive(Args, Debug)]
pub struct ResetArgs {
    /// Game code
    pub seed: String,

    /// Use the code exactly as typed instead of trimming and upper-casing it
    #[arg(long)]
    pub raw: bool,
}

pub fn execute(args: ResetArgs, config: &CliConfig) -> Result<()> {
    let seed = if args.raw {
        Some(args.seed)
    } else {
        normalize_join_code(&args.seed)
    };
    let Some(seed) = seed.filter(|s| !s.is_empty()) else {
        bail!("missing game code");
    };

    guess_store(config).remove(&seed)?;
    println!("Cleared saved guesses for {}", seed);
    Ok(())
}

//! List available languages and word sets

use anyhow::Result;
use clap::Args;

use codenames_board_core_rs::{DirectoryProvider, WordListProvider};

use crate::config::CliConfig;

#[derive(Args, Debug)]
pub struct LanguagesArgs {}

pub fn execute(_args: LanguagesArgs, config: &CliConfig) -> Result<()> {
    let manifest = DirectoryProvider::new(&config.vocab_dir).manifest()?;
    for (code, language) in &manifest.languages {
        println!("{} ({})", language.name, code);
        for (set_id, title) in &language.sets {
            println!("  {:<16} {}", set_id, title);
        }
    }
    Ok(())
}

//! Rebuild `manifest.json` from the vocabulary directory

use anyhow::{Context, Result};
use clap::Args;

use codenames_board_core_rs::DirectoryProvider;

use crate::config::CliConfig;

#[derive(Args, Debug)]
pub struct ManifestArgs {
    /// Print the manifest without writing it
    #[arg(long)]
    pub dry_run: bool,
}

pub fn execute(args: ManifestArgs, config: &CliConfig) -> Result<()> {
    let provider = DirectoryProvider::new(&config.vocab_dir);
    let built = if args.dry_run {
        provider.build_manifest()
    } else {
        provider.write_manifest()
    };
    let manifest = built
        .with_context(|| format!("failed to build manifest in {}", config.vocab_dir.display()))?;

    println!("{}", serde_json::to_string_pretty(&manifest)?);
    Ok(())
}

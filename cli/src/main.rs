//! Codenames board CLI
//!
//! Terminal front end for the deterministic board generator:
//! - Start a game and print spymaster / guesser links
//! - Show a board for a role, with saved guesses
//! - Toggle guesses and persist them per game code
//! - Maintain the vocabulary manifest

mod commands;
mod config;
mod render;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use commands::{guess, languages, manifest, new, reset, show};
use config::CliConfig;

#[derive(Parser)]
#[command(name = "codenames-board")]
#[command(version, about = "Shared-code word board generator", long_about = None)]
struct Cli {
    /// TOML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Vocabulary directory (overrides config)
    #[arg(long, global = true)]
    vocab_dir: Option<PathBuf>,

    /// Guess state file (overrides config)
    #[arg(long, global = true)]
    guess_store: Option<PathBuf>,

    /// Base URL for share links (overrides config)
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Debug logging on stderr
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new game code and print share links
    New(new::NewArgs),

    /// Show a board for a role
    Show(show::ShowArgs),

    /// Toggle a tile's guessed state
    Guess(guess::GuessArgs),

    /// Clear saved guesses for a game
    Reset(reset::ResetArgs),

    /// List available languages and word sets
    Languages(languages::LanguagesArgs),

    /// Rebuild the vocabulary manifest
    Manifest(manifest::ManifestArgs),
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut config = CliConfig::load(cli.config.as_deref())?;
    if let Some(vocab_dir) = cli.vocab_dir {
        config.vocab_dir = vocab_dir;
    }
    if let Some(guess_store) = cli.guess_store {
        config.guess_store = guess_store;
    }
    if let Some(base_url) = cli.base_url {
        config.base_url = base_url;
    }

    match cli.command {
        Commands::New(args) => new::execute(args, &config),
        Commands::Show(args) => show::execute(args, &config),
        Commands::Guess(args) => guess::execute(args, &config),
        Commands::Reset(args) => reset::execute(args, &config),
        Commands::Languages(args) => languages::execute(args, &config),
        Commands::Manifest(args) => manifest::execute(args, &config),
    }
}

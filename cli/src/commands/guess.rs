//! Toggle a tile's guessed flag and save it

use anyhow::{anyhow, Context, Result};
use clap::Args;

use codenames_board_core_rs::guesses::persist_guesses;
use codenames_board_core_rs::{Board, Role};

use super::{guess_store, open_board, GameArgs};
use crate::config::CliConfig;
use crate::render::{render_board, tile_label};

#[derive(Args, Debug)]
pub struct GuessArgs {
    #[command(flatten)]
    pub game: GameArgs,

    /// Tile position (0-24) or the word on the tile
    pub tile: String,
}

pub fn execute(args: GuessArgs, config: &CliConfig) -> Result<()> {
    let params = args
        .game
        .params(config, Some(Role::Guesser))
        .context("cannot start game")?;
    let mut board = open_board(&params, config).context("cannot start game")?;

    let position = find_tile(&board, &args.tile)?;
    board.toggle_guess(position)?;
    persist_guesses(&guess_store(config), &board)?;

    if let Some(tile) = board.tile(position) {
        tracing::info!(seed = board.seed(), position, guessed = tile.is_guessed(), "toggled tile");
        println!("{}", tile_label(tile, params.role));
    }
    println!();
    println!("{}", render_board(&board, params.role));
    Ok(())
}

/// Resolve a position or a (case-insensitive) word to a position
fn find_tile(board: &Board, target: &str) -> Result<usize> {
    if let Ok(position) = target.parse::<usize>() {
        return Ok(position);
    }
    let wanted = target.trim().to_uppercase();
    board
        .tiles()
        .iter()
        .find(|tile| tile.word() == wanted)
        .map(|tile| tile.position())
        .ok_or_else(|| anyhow!("no tile with word '{}' on this board", target))
}

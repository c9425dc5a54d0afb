//! Show a board for one role

use anyhow::{Context, Result};
use clap::Args;

use super::{open_board, GameArgs};
use crate::config::CliConfig;
use crate::render::render_board;

#[derive(Args, Debug)]
pub struct ShowArgs {
    #[command(flatten)]
    pub game: GameArgs,

    /// Print the board as JSON (includes every team, whatever the role)
    #[arg(long)]
    pub json: bool,
}

pub fn execute(args: ShowArgs, config: &CliConfig) -> Result<()> {
    let params = args.game.params(config, None).context("cannot start game")?;
    let board = open_board(&params, config).context("cannot start game")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&board)?);
    } else {
        println!("{}", render_board(&board, params.role));
    }
    Ok(())
}

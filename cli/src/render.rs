//! Terminal rendering of a board for one role
//!
//! Spymasters see every team; guessers see teams only on tiles already
//! revealed.

use codenames_board_core_rs::{Board, Role, Team, Tile, GRID_WIDTH};

fn team_code(team: Team) -> char {
    match team {
        Team::Red => 'R',
        Team::Blue => 'B',
        Team::Neutral => 'N',
        Team::Assassin => 'X',
    }
}

/// `[R ] WORD`, `[R*] WORD` once guessed, `[  ] WORD` when hidden
pub fn tile_label(tile: &Tile, role: Role) -> String {
    let code = if role.reveals_key() || tile.is_guessed() {
        team_code(tile.team())
    } else {
        ' '
    };
    let mark = if tile.is_guessed() { '*' } else { ' ' };
    format!("[{}{}] {}", code, mark, tile.word())
}

/// Grid of tile labels, `GRID_WIDTH` per row, padded to equal width
pub fn render_grid(board: &Board, role: Role) -> String {
    let width = board
        .tiles()
        .iter()
        .map(|t| tile_label(t, role).chars().count())
        .max()
        .unwrap_or(0);

    board
        .rows(GRID_WIDTH)
        .map(|row| {
            row.iter()
                .map(|tile| format!("{:<width$}", tile_label(tile, role), width = width))
                .collect::<Vec<_>>()
                .join("  ")
                .trim_end()
                .to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Remaining-tile counters
///
/// Guessers get the two team counters; the spymaster also sees neutral and
/// assassin tiles left.
pub fn render_counts(board: &Board, role: Role) -> String {
    let counts = board.remaining_counts();
    let mut line = match role {
        Role::Guesser => format!("BLUE {} left  RED {} left", counts.blue, counts.red),
        Role::Master => format!(
            "Blue: {}  Red: {}  Neutral: {}  Assassin: {}",
            counts.blue, counts.red, counts.neutral, counts.assassin
        ),
    };
    line.push_str(&format!("  ({} starts)", board.starting_team()));
    line
}

/// Full view: header, grid, counters
pub fn render_board(board: &Board, role: Role) -> String {
    format!(
        "Game {}  ·  {}\n\n{}\n\n{}",
        board.seed(),
        role,
        render_grid(board, role),
        render_counts(board, role)
    )
}

//! Console front end: rendering, input, players and the game loop.

mod input;
mod orchestrator;
mod players;
mod render;

pub use input::{locate, ConsoleInput, InputError, Rejection};
pub use orchestrator::Orchestrator;
pub use players::{ComputerPlayer, HumanPlayer, Player};
pub use render::{coords_label, render_analysis, render_board};

use crate::config::GameConfig;
use anyhow::Result;
use std::io::{BufRead, Write};
use tallytoe_core::{analyze, Board, Outcome, Player as Mark};
use tracing::{info, instrument};

/// Plays one game, reading moves from `input` and drawing to `out`.
#[instrument(skip_all, fields(first_player = ?config.first_player()))]
pub fn play<R, W>(config: &GameConfig, input: R, out: W) -> Result<Outcome>
where
    R: BufRead + 'static,
    W: Write,
{
    info!("Starting console game");
    let human = HumanPlayer::new("Player", input);
    let computer = ComputerPlayer::new("Machine", *config.scoring());

    let mut orchestrator = Orchestrator::new(
        Box::new(human),
        Box::new(computer),
        *config.first_player(),
        out,
    );
    orchestrator.run()
}

/// Scores every empty square of `board` for `to_move` and prints the grids,
/// or the full analysis as JSON.
#[instrument(skip(config, out), fields(board = %board))]
pub fn run_analysis(
    config: &GameConfig,
    board: &Board,
    to_move: Mark,
    json: bool,
    out: &mut dyn Write,
) -> Result<()> {
    let policy = config.scoring();
    let analysis = analyze(board, to_move, policy);

    if json {
        serde_json::to_writer_pretty(&mut *out, &analysis)?;
        writeln!(out)?;
    } else {
        render_analysis(&analysis, policy.tie_break, out)?;
    }
    Ok(())
}

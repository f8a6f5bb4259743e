//! Command-line interface for tallytoe.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tallytoe_core::{Board, Player};

/// Tallytoe - console tic-tac-toe against an outcome-counting search
#[derive(Parser, Debug)]
#[command(name = "tallytoe")]
#[command(about = "Play tic-tac-toe against the machine", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to game config file
    #[arg(short, long, global = true, default_value = "tallytoe.toml")]
    pub config: PathBuf,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a game at the console
    Play(PlayArgs),

    /// Score every empty square of a board
    Analyze(AnalyzeArgs),
}

impl Default for Command {
    fn default() -> Self {
        Command::Play(PlayArgs::default())
    }
}

/// Options for `play`.
#[derive(Args, Debug, Default)]
pub struct PlayArgs {
    /// Let the machine move first
    #[arg(long)]
    pub computer_first: bool,

    /// Use the legacy urgent weight of 200 and last-square tie-break
    #[arg(long)]
    pub legacy_scoring: bool,
}

/// Options for `analyze`.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Board as nine squares: X (machine), O (player), . (empty); `/` between rows is optional
    #[arg(short, long)]
    pub board: Board,

    /// Side to score the moves for
    #[arg(long, default_value = "computer")]
    pub to_move: Player,

    /// Print the full analysis as JSON
    #[arg(long)]
    pub json: bool,

    /// Use the legacy urgent weight of 200 and last-square tie-break
    #[arg(long)]
    pub legacy_scoring: bool,
}

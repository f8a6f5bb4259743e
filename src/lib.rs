//! Tallytoe - console tic-tac-toe against an outcome-counting search.
//!
//! The board model, search and scoring live in [`tallytoe_core`]; this crate
//! adds configuration, the console front end and the game loop.
//!
//! # Example
//!
//! ```
//! use std::io::Cursor;
//! use tallytoe::{play, GameConfig};
//! use tallytoe_core::{Outcome, Player};
//!
//! // Column then row, 1-based.
//! let moves = Cursor::new("1 1\n2 1\n1 2\n");
//! let mut screen = Vec::new();
//! let outcome = play(&GameConfig::default(), moves, &mut screen)?;
//! assert_eq!(outcome, Outcome::Winner(Player::Computer));
//! # Ok::<(), anyhow::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod console;

pub use cli::{AnalyzeArgs, Cli, Command, PlayArgs};
pub use config::{ConfigError, FirstPlayer, GameConfig};
pub use console::{
    coords_label, locate, play, render_analysis, render_board, run_analysis, ComputerPlayer,
    ConsoleInput, HumanPlayer, InputError, Orchestrator, Player, Rejection,
};

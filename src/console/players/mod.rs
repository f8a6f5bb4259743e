//! Player trait and implementations.

mod computer;
mod human;

pub use computer::ComputerPlayer;
pub use human::HumanPlayer;

use anyhow::Result;
use std::io::Write;
use tallytoe_core::{Board, Player as Mark, Position};

/// Trait for players that can make moves.
pub trait Player {
    /// Picks an empty square on `board`.
    ///
    /// Anything the player wants to show (prompts, complaints) goes to `out`.
    fn choose_move(&mut self, board: &Board, out: &mut dyn Write) -> Result<Position>;

    /// Returns the player's display name.
    fn name(&self) -> &str;

    /// Side this player places.
    fn mark(&self) -> Mark;
}

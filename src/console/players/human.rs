//! Human player that types coordinates at the console.

use super::Player;
use crate::console::input::ConsoleInput;
use anyhow::Result;
use std::io::{BufRead, Write};
use tallytoe_core::{Board, Player as Mark, Position};

/// Human player reading moves from a line-oriented reader.
pub struct HumanPlayer<R> {
    name: String,
    input: ConsoleInput<R>,
}

impl<R: BufRead> HumanPlayer<R> {
    /// Creates a new human player.
    pub fn new(name: impl Into<String>, reader: R) -> Self {
        Self {
            name: name.into(),
            input: ConsoleInput::new(reader),
        }
    }
}

impl<R: BufRead> Player for HumanPlayer<R> {
    fn choose_move(&mut self, board: &Board, out: &mut dyn Write) -> Result<Position> {
        Ok(self.input.ask_position(board, out)?)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn mark(&self) -> Mark {
        Mark::Human
    }
}

//! Computer player backed by the outcome-counting search.

use super::Player;
use anyhow::Result;
use std::io::Write;
use tallytoe_core::{choose_move, Board, Choice, Player as Mark, Position, ScoringPolicy};
use tracing::debug;

/// Picks the square with the best `wins - losses` under a scoring policy.
pub struct ComputerPlayer {
    name: String,
    policy: ScoringPolicy,
    last_choice: Option<Choice>,
}

impl ComputerPlayer {
    /// Creates a new computer player.
    pub fn new(name: impl Into<String>, policy: ScoringPolicy) -> Self {
        Self {
            name: name.into(),
            policy,
            last_choice: None,
        }
    }

    /// Selection made on the previous turn, with its full analysis.
    pub fn last_choice(&self) -> Option<&Choice> {
        self.last_choice.as_ref()
    }
}

impl Player for ComputerPlayer {
    fn choose_move(&mut self, board: &Board, _out: &mut dyn Write) -> Result<Position> {
        let choice = choose_move(board, Mark::Computer, &self.policy)?;
        let position = *choice.position();
        debug!(ai = %self.name, %position, score = *choice.score(), "AI chose position");
        self.last_choice = Some(choice);
        Ok(position)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn mark(&self) -> Mark {
        Mark::Computer
    }
}

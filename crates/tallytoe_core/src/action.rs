//! First-class move type for tic-tac-toe.

use super::{Board, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A move in tic-tac-toe: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }

    /// Checks the move against a board without applying it.
    #[instrument(skip(board))]
    pub fn validate(&self, board: &Board) -> Result<(), MoveError> {
        if let Some(winner) = board.winner() {
            return Err(MoveError::GameOver(winner));
        }
        if !board.is_empty(self.position) {
            return Err(MoveError::SquareOccupied(self.position));
        }
        Ok(())
    }

    /// Validates and applies the move.
    #[instrument(skip(board))]
    pub fn apply(&self, board: &mut Board) -> Result<(), MoveError> {
        self.validate(board)?;
        board.place(self.position, self.player);
        Ok(())
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.label())
    }
}

/// Error that can occur when validating or applying a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The board already has a winner.
    #[display("Game is already over, {} won", _0)]
    GameOver(Player),
}

impl std::error::Error for MoveError {}

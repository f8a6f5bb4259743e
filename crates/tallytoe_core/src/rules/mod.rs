//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]; the board stores squares, the rules
//! decide what they mean.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{check_winner, completed_lines, LINES};

use super::outcome::Outcome;
use super::Board;

/// A board is terminal once someone has won or no square is left.
pub fn is_terminal(board: &Board) -> bool {
    check_winner(board).is_some() || is_full(board)
}

/// Outcome of a terminal board, `None` while play can continue.
pub fn outcome(board: &Board) -> Option<Outcome> {
    match check_winner(board) {
        Some(player) => Some(Outcome::Winner(player)),
        None if is_full(board) => Some(Outcome::Draw),
        None => None,
    }
}

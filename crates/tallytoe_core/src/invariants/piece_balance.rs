//! Piece balance invariant: sides take turns, so counts stay within one.

use super::super::{Board, Player};
use super::Invariant;

/// Invariant: the two sides' piece counts differ by at most one.
///
/// Either side may open, so the sign of the difference is not fixed.
pub struct PieceBalanceInvariant;

impl Invariant<Board> for PieceBalanceInvariant {
    fn holds(board: &Board) -> bool {
        let human = board.count(Player::Human);
        let computer = board.count(Player::Computer);
        human.abs_diff(computer) <= 1
    }

    fn description() -> &'static str {
        "Piece counts differ by at most one"
    }
}

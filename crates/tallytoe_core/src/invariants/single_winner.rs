//! Single winner invariant: at most one player owns a completed line.

use super::super::rules::completed_lines;
use super::super::Board;
use super::Invariant;

/// Invariant: no board has completed lines for both players.
///
/// Legal play stops at the first completed line, so two different winners
/// can only come from a corrupted board.
pub struct SingleWinnerInvariant;

impl Invariant<Board> for SingleWinnerInvariant {
    fn holds(board: &Board) -> bool {
        let mut owners = completed_lines(board).map(|(player, _)| player);
        match owners.next() {
            Some(first) => owners.all(|player| player == first),
            None => true,
        }
    }

    fn description() -> &'static str {
        "At most one player has a completed line"
    }
}

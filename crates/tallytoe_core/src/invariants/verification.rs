//! Bounded proofs of board properties using the Kani model checker.

#[cfg(kani)]
mod proofs {
    use crate::{Board, Invariant, Player, Position, SingleWinnerInvariant, Square};

    /// Placing then removing on an empty square restores the board.
    #[kani::proof]
    fn verify_place_remove_round_trip() {
        let board: Board = kani::any();
        let pos: Position = kani::any();
        let player: Player = kani::any();
        kani::assume(board.is_empty(pos));

        let mut scratch = board;
        scratch.place(pos, player);
        assert_eq!(scratch.remove(pos), Square::Occupied(player));
        assert_eq!(scratch, board);
    }

    /// A reported winner owns a completed line.
    #[kani::proof]
    #[kani::unwind(10)]
    fn verify_winner_owns_a_line() {
        let board: Board = kani::any();
        if let Some(winner) = board.winner() {
            assert!(crate::rules::completed_lines(&board).any(|(p, _)| p == winner));
        }
    }

    /// One placement on a board without a winner cannot create two winners.
    #[kani::proof]
    #[kani::unwind(10)]
    fn verify_single_move_keeps_single_winner() {
        let board: Board = kani::any();
        let pos: Position = kani::any();
        let player: Player = kani::any();
        kani::assume(board.winner().is_none());
        kani::assume(board.is_empty(pos));

        assert!(SingleWinnerInvariant::holds(&board.with(pos, player)));
    }
}

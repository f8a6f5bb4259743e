//! Kani arbitrary implementations for tic-tac-toe types.
//!
//! These implementations allow Kani to explore all possible values of our types
//! during model checking, including boards no legal game reaches.

#[cfg(kani)]
use super::{Board, Move, Player, Position, Square};

#[cfg(kani)]
impl kani::Arbitrary for Player {
    fn any() -> Self {
        if kani::any() {
            Player::Human
        } else {
            Player::Computer
        }
    }
}

#[cfg(kani)]
impl kani::Arbitrary for Position {
    fn any() -> Self {
        let index: u8 = kani::any();
        kani::assume(index < 9);
        Position::ALL[index as usize]
    }
}

#[cfg(kani)]
impl kani::Arbitrary for Square {
    fn any() -> Self {
        if kani::any() {
            Square::Empty
        } else {
            Square::Occupied(kani::any())
        }
    }
}

#[cfg(kani)]
impl kani::Arbitrary for Move {
    fn any() -> Self {
        Move::new(kani::any(), kani::any())
    }
}

#[cfg(kani)]
impl kani::Arbitrary for Board {
    fn any() -> Self {
        let rows: [[Square; 3]; 3] = kani::any();
        Board::from_rows(rows)
    }
}

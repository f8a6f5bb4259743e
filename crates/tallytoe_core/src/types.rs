//! Core domain types for tic-tac-toe.

use super::position::Position;
use super::rules;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Side in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Player {
    /// The person at the console, drawn as `O`.
    Human,
    /// The search-driven opponent, drawn as `X`.
    Computer,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::Human => Player::Computer,
            Player::Computer => Player::Human,
        }
    }

    /// Glyph used on the rendered board.
    pub fn glyph(self) -> char {
        match self {
            Player::Human => 'O',
            Player::Computer => 'X',
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Glyph used on the rendered board; a blank for empty squares.
    pub fn glyph(self) -> char {
        match self {
            Square::Empty => ' ',
            Square::Occupied(player) => player.glyph(),
        }
    }

    /// Returns the occupant, if any.
    pub fn occupant(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// Squares are stored as `squares[row][col]`: rows run top to bottom and
/// columns left to right, both in `0..3`. Access from outside goes through
/// [`Position`], so the row/column order is fixed in one place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    squares: [[Square; 3]; 3],
}

impl Board {
    /// Number of rows and of columns.
    pub const SIDE: usize = 3;

    /// Number of squares.
    pub const CELLS: usize = Self::SIDE * Self::SIDE;

    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [[Square::Empty; Self::SIDE]; Self::SIDE],
        }
    }

    /// Builds a board from rows, top row first.
    pub fn from_rows(squares: [[Square; 3]; 3]) -> Self {
        Self { squares }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.row()][pos.col()]
    }

    /// Gets the square at raw coordinates, or `None` when out of range.
    pub fn cell(&self, row: usize, col: usize) -> Option<Square> {
        Position::from_coords(row, col).map(|pos| self.get(pos))
    }

    /// Sets the square at the given position.
    pub fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.row()][pos.col()] = square;
    }

    /// Puts a player's piece on the given position.
    pub fn place(&mut self, pos: Position, player: Player) {
        self.set(pos, Square::Occupied(player));
    }

    /// Clears the given position, returning what was there.
    pub fn remove(&mut self, pos: Position) -> Square {
        let previous = self.get(pos);
        self.set(pos, Square::Empty);
        previous
    }

    /// Returns a copy of this board with the player's piece placed.
    #[must_use]
    pub fn with(mut self, pos: Position, player: Player) -> Self {
        self.place(pos, player);
        self
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Checks if the board is full.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// Checks for a winner on the board.
    pub fn winner(&self) -> Option<Player> {
        rules::check_winner(self)
    }

    /// Iterates over all squares in row-major order.
    pub fn squares(&self) -> impl Iterator<Item = (Position, Square)> + '_ {
        Position::ALL.iter().map(move |&pos| (pos, self.get(pos)))
    }

    /// Iterates over empty positions in row-major order.
    pub fn empty_positions(&self) -> impl Iterator<Item = Position> + '_ {
        Position::ALL
            .iter()
            .copied()
            .filter(move |&pos| self.is_empty(pos))
    }

    /// Counts the pieces a player has on the board.
    pub fn count(&self, player: Player) -> usize {
        self.squares()
            .filter(|(_, square)| *square == Square::Occupied(player))
            .count()
    }
}

/// Compact notation: rows joined by `/`, `X` for the computer, `O` for the
/// human and `.` for empty squares, e.g. `XO./.X./..O`.
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, squares) in self.squares.iter().enumerate() {
            if row > 0 {
                write!(f, "/")?;
            }
            for square in squares {
                let c = match square {
                    Square::Empty => '.',
                    Square::Occupied(player) => player.glyph(),
                };
                write!(f, "{}", c)?;
            }
        }
        Ok(())
    }
}

/// Error parsing the compact board notation.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum BoardParseError {
    /// A character that is neither a piece, an empty marker nor a separator.
    #[display("Unexpected character {:?} in board", _0)]
    InvalidChar(char),

    /// The notation did not describe exactly nine squares.
    #[display("Board needs 9 squares, found {}", _0)]
    WrongLength(usize),
}

impl std::error::Error for BoardParseError {}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Parses the compact notation. `/`, `|`, `,` and whitespace separate
    /// rows and are ignored; `.`, `-` and `_` mark empty squares.
    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut squares = Vec::with_capacity(Self::CELLS);
        for c in s.chars() {
            let square = match c {
                'X' | 'x' => Square::Occupied(Player::Computer),
                'O' | 'o' => Square::Occupied(Player::Human),
                '.' | '-' | '_' => Square::Empty,
                '/' | '|' | ',' => continue,
                c if c.is_whitespace() => continue,
                c => return Err(BoardParseError::InvalidChar(c)),
            };
            squares.push(square);
        }

        if squares.len() != Self::CELLS {
            return Err(BoardParseError::WrongLength(squares.len()));
        }

        let mut board = Self::new();
        for (pos, square) in Position::ALL.iter().zip(squares) {
            board.set(*pos, square);
        }
        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert!(Position::ALL.iter().all(|&pos| board.is_empty(pos)));
        assert_eq!(board.empty_positions().count(), 9);
    }

    #[test]
    fn test_place_then_remove_restores_square() {
        let mut board = Board::new();
        board.place(Position::Center, Player::Human);
        assert_eq!(board.get(Position::Center), Square::Occupied(Player::Human));

        let removed = board.remove(Position::Center);
        assert_eq!(removed, Square::Occupied(Player::Human));
        assert_eq!(board.get(Position::Center), Square::Empty);
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_with_leaves_original_untouched() {
        let board = Board::new();
        let child = board.with(Position::TopRight, Player::Computer);
        assert!(board.is_empty(Position::TopRight));
        assert_eq!(child.get(Position::TopRight), Square::Occupied(Player::Computer));
    }

    #[test]
    fn test_cell_uses_row_then_column() {
        let mut board = Board::new();
        board.place(Position::MiddleRight, Player::Computer);
        assert_eq!(board.cell(1, 2), Some(Square::Occupied(Player::Computer)));
        assert_eq!(board.cell(2, 1), Some(Square::Empty));
        assert_eq!(board.cell(3, 0), None);
    }

    #[test]
    fn test_parse_and_display() {
        let board: Board = "XO./.X./..O".parse().unwrap();
        assert_eq!(board.get(Position::TopLeft), Square::Occupied(Player::Computer));
        assert_eq!(board.get(Position::TopCenter), Square::Occupied(Player::Human));
        assert_eq!(board.get(Position::BottomRight), Square::Occupied(Player::Human));
        assert_eq!(board.to_string(), "XO./.X./..O");
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert_eq!(
            "XO.".parse::<Board>(),
            Err(BoardParseError::WrongLength(3))
        );
        assert_eq!(
            "XO?/.../...".parse::<Board>(),
            Err(BoardParseError::InvalidChar('?'))
        );
    }

    #[test]
    fn test_player_from_str() {
        assert_eq!("human".parse::<Player>(), Ok(Player::Human));
        assert_eq!("Computer".parse::<Player>(), Ok(Player::Computer));
        assert!("nobody".parse::<Player>().is_err());
    }
}

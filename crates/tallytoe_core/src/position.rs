//! Named board positions and their row/column coordinates.

use super::types::Board;
use serde::{Deserialize, Serialize};

/// A position on the tic-tac-toe board.
///
/// Variants are declared in row-major order, so iteration order and
/// [`Position::to_index`] both follow the scan order used by the search.
/// Coordinates are `(row, col)`, zero-based, row 0 at the top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, strum::EnumIter)]
pub enum Position {
    /// Top-left (row 0, column 0)
    TopLeft,
    /// Top-center (row 0, column 1)
    TopCenter,
    /// Top-right (row 0, column 2)
    TopRight,
    /// Middle-left (row 1, column 0)
    MiddleLeft,
    /// Center (row 1, column 1)
    Center,
    /// Middle-right (row 1, column 2)
    MiddleRight,
    /// Bottom-left (row 2, column 0)
    BottomLeft,
    /// Bottom-center (row 2, column 1)
    BottomCenter,
    /// Bottom-right (row 2, column 2)
    BottomRight,
}

/// Coordinates that do not name a square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
#[display("Position (row {}, column {}) is outside the board", row, col)]
pub struct PositionError {
    /// Requested row.
    pub row: usize,
    /// Requested column.
    pub col: usize,
}

impl std::error::Error for PositionError {}

impl Position {
    /// All 9 positions, row-major.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Get label for this position (for display).
    pub fn label(&self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Converts position to row-major board index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Creates position from row-major board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Zero-based row, top to bottom.
    pub fn row(self) -> usize {
        self.to_index() / Board::SIDE
    }

    /// Zero-based column, left to right.
    pub fn col(self) -> usize {
        self.to_index() % Board::SIDE
    }

    /// True iff both coordinates are in `0..3`.
    pub fn is_valid(row: usize, col: usize) -> bool {
        row < Board::SIDE && col < Board::SIDE
    }

    /// Creates position from zero-based `(row, col)`.
    pub fn from_coords(row: usize, col: usize) -> Option<Self> {
        if Self::is_valid(row, col) {
            Self::from_index(row * Board::SIDE + col)
        } else {
            None
        }
    }
}

impl TryFrom<(usize, usize)> for Position {
    type Error = PositionError;

    fn try_from((row, col): (usize, usize)) -> Result<Self, Self::Error> {
        Self::from_coords(row, col).ok_or(PositionError { row, col })
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

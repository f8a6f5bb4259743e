//! Reading board coordinates from a line-oriented reader.

use derive_more::Display;
use std::collections::VecDeque;
use std::io::{BufRead, Write};
use tallytoe_core::{Board, Position};
use tracing::{debug, instrument};

/// Console input failed; the game cannot continue.
#[derive(Debug, Display)]
pub enum InputError {
    /// The reader hit end of input before a move was entered.
    #[display("Input closed before the game finished")]
    Closed,

    /// Reading input or writing a prompt failed.
    #[display("Console I/O failed: {}", _0)]
    Io(std::io::Error),
}

impl std::error::Error for InputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InputError::Closed => None,
            InputError::Io(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for InputError {
    fn from(e: std::io::Error) -> Self {
        InputError::Io(e)
    }
}

/// Coordinates that cannot take a piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Rejection {
    /// Column or row outside `1..=3`.
    #[display("That position is out of the board")]
    OutOfBoard,

    /// The square already holds a piece.
    #[display("That position is already occupied")]
    Occupied,
}

/// Resolves 1-based column `x` and row `y` to an empty square.
pub fn locate(board: &Board, x: i64, y: i64) -> Result<Position, Rejection> {
    let to_index = |v: i64| usize::try_from(v - 1).ok();
    let position = match (to_index(y), to_index(x)) {
        (Some(row), Some(col)) => Position::from_coords(row, col),
        _ => None,
    }
    .ok_or(Rejection::OutOfBoard)?;

    if board.is_empty(position) {
        Ok(position)
    } else {
        Err(Rejection::Occupied)
    }
}

/// Whitespace-separated tokens from a reader, one line at a time.
///
/// Both coordinates may be typed on one line (`2 3`) or on separate lines.
pub struct ConsoleInput<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> ConsoleInput<R> {
    /// Wraps a reader.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// Next token, reading further lines as needed.
    fn next_token(&mut self) -> Result<String, InputError> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Err(InputError::Closed);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
    }

    /// Prompts for one coordinate; `None` when the token is not a number.
    fn read_coordinate(
        &mut self,
        prompt: &str,
        out: &mut dyn Write,
    ) -> Result<Option<i64>, InputError> {
        write!(out, "{}", prompt)?;
        out.flush()?;
        let token = self.next_token()?;
        Ok(token.parse().ok())
    }

    /// Asks for a column and row until they name an empty square.
    #[instrument(skip_all, fields(board = %board))]
    pub fn ask_position(
        &mut self,
        board: &Board,
        out: &mut dyn Write,
    ) -> Result<Position, InputError> {
        writeln!(out)?;
        writeln!(out, "Your turn. Place piece at...")?;

        loop {
            let Some(x) = self.read_coordinate("X position: ", out)? else {
                self.reject_number(out)?;
                continue;
            };
            let Some(y) = self.read_coordinate("Y position: ", out)? else {
                self.reject_number(out)?;
                continue;
            };

            match locate(board, x, y) {
                Ok(position) => {
                    writeln!(out)?;
                    debug!(%position, "Human entered move");
                    return Ok(position);
                }
                Err(rejection) => {
                    debug!(x, y, %rejection, "Rejected coordinates");
                    writeln!(out, "{}", rejection)?;
                }
            }
        }
    }

    /// Reports a non-numeric token and drops the rest of its line.
    fn reject_number(&mut self, out: &mut dyn Write) -> Result<(), InputError> {
        self.pending.clear();
        writeln!(out, "Please enter a whole number")?;
        Ok(())
    }
}

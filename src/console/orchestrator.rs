//! Game orchestration between players.

use super::players::Player;
use super::render::{coords_label, render_board};
use crate::config::FirstPlayer;
use anyhow::{anyhow, Result};
use std::io::Write;
use tallytoe_core::{rules, Board, BoardInvariants, InvariantSet, Move, Outcome, Player as Mark};
use tracing::{debug, info, instrument};

/// Alternates turns between the human and the computer until the game ends.
pub struct Orchestrator<W> {
    board: Board,
    human: Box<dyn Player>,
    computer: Box<dyn Player>,
    first: Mark,
    out: W,
    history: Vec<Move>,
}

impl<W: Write> Orchestrator<W> {
    /// Creates a new orchestrator over an empty board.
    pub fn new(
        human: Box<dyn Player>,
        computer: Box<dyn Player>,
        first: FirstPlayer,
        out: W,
    ) -> Self {
        Self {
            board: Board::new(),
            human,
            computer,
            first: first.mark(),
            out,
            history: Vec::new(),
        }
    }

    /// Current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Moves played so far, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Hands back the output sink.
    pub fn into_output(self) -> W {
        self.out
    }

    /// Runs the game loop until a line is completed or the board fills.
    #[instrument(skip(self), fields(first = %self.first))]
    pub fn run(&mut self) -> Result<Outcome> {
        info!(
            human = self.human.name(),
            computer = self.computer.name(),
            "Starting game orchestration"
        );

        let mut to_move = self.first;
        loop {
            if let Some(outcome) = rules::outcome(&self.board) {
                render_board(&self.board, &mut self.out)?;
                writeln!(self.out, "{}", outcome)?;
                self.out.flush()?;
                info!(?outcome, moves = self.history.len(), "Game over");
                return Ok(outcome);
            }

            let position = match to_move {
                Mark::Human => {
                    render_board(&self.board, &mut self.out)?;
                    self.human.choose_move(&self.board, &mut self.out)?
                }
                Mark::Computer => {
                    let position = self.computer.choose_move(&self.board, &mut self.out)?;
                    writeln!(self.out, "Machine places at {}", coords_label(position))?;
                    position
                }
            };

            debug_assert_eq!(self.player(to_move).mark(), to_move);
            let mv = Move::new(to_move, position);
            mv.apply(&mut self.board)
                .map_err(|e| anyhow!("{} returned an illegal move: {}", self.player(to_move).name(), e))?;
            debug!(%mv, board = %self.board, "Move applied");

            debug_assert!(
                BoardInvariants::check_all(&self.board).is_ok(),
                "board invariants violated after {}",
                mv
            );

            self.history.push(mv);
            to_move = to_move.opponent();
        }
    }

    fn player(&self, mark: Mark) -> &dyn Player {
        match mark {
            Mark::Human => self.human.as_ref(),
            Mark::Computer => self.computer.as_ref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::players::{ComputerPlayer, HumanPlayer};
    use std::io::Cursor;
    use tallytoe_core::{Position, ScoringPolicy};

    fn orchestrator(input: &str, first: FirstPlayer) -> Orchestrator<Vec<u8>> {
        Orchestrator::new(
            Box::new(HumanPlayer::new("Player", Cursor::new(input.to_string()))),
            Box::new(ComputerPlayer::new("Machine", ScoringPolicy::default())),
            first,
            Vec::new(),
        )
    }

    #[test]
    fn test_history_alternates_from_first_player() {
        let mut game = orchestrator("1 1\n2 1\n1 2\n", FirstPlayer::Human);
        let outcome = game.run().unwrap();
        assert_eq!(outcome, Outcome::Winner(Mark::Computer));

        let marks: Vec<Mark> = game.history().iter().map(|mv| mv.player).collect();
        assert_eq!(
            marks,
            vec![
                Mark::Human,
                Mark::Computer,
                Mark::Human,
                Mark::Computer,
                Mark::Human,
                Mark::Computer
            ]
        );
        assert_eq!(game.history()[1].position, Position::Center);
    }

    #[test]
    fn test_players_seated_by_mark() {
        let game = orchestrator("", FirstPlayer::Human);
        assert_eq!(game.player(Mark::Human).mark(), Mark::Human);
        assert_eq!(game.player(Mark::Computer).mark(), Mark::Computer);
        assert_eq!(game.player(Mark::Computer).name(), "Machine");
    }

    #[test]
    fn test_computer_first_opens_in_center() {
        let mut game = orchestrator("", FirstPlayer::Computer);
        assert!(game.run().is_err());
        assert_eq!(game.history().len(), 1);
        assert_eq!(game.board().get(Position::Center).occupant(), Some(Mark::Computer));

        let out = String::from_utf8(game.into_output()).unwrap();
        assert!(out.starts_with("Machine places at X2 Y2\n"));
    }
}

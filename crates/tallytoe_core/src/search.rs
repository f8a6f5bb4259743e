//! Exhaustive backtracking enumeration of game continuations.
//!
//! Starting from a board and the side to move, the [`Enumerator`] plays out
//! every legal sequence of moves, alternating sides, until each sequence
//! reaches a terminal board. Every terminal board is reported to a
//! [`LeafVisitor`] as a [`Leaf`], attributed to the first move of its
//! sequence (the candidate move).
//!
//! Child boards are copies of their parent with one more piece, so the
//! caller's board is never touched and there is nothing to undo.

use super::{rules, Board, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// How far to descend below a board that already has a winner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pruning {
    /// Stop at the first completed line; the line's depth is the leaf depth.
    #[default]
    StopAtWin,
    /// Keep filling squares until the board is full. The leaf still reports
    /// the first line completed along the way.
    Exhaustive,
}

/// How a simulated sequence ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LeafOutcome {
    /// A player completed a line.
    Won(Player),
    /// The board filled with no completed line.
    Tie,
}

/// One terminal solution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_new::new)]
pub struct Leaf {
    candidate: Position,
    depth: usize,
    outcome: LeafOutcome,
}

impl Leaf {
    /// The depth-0 move this sequence started with.
    pub fn candidate(&self) -> Position {
        self.candidate
    }

    /// Ply at which the outcome was decided; the candidate move is ply 0.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// How the sequence ended.
    pub fn outcome(&self) -> LeafOutcome {
        self.outcome
    }
}

/// Receives every leaf the enumerator reaches.
pub trait LeafVisitor {
    /// Called once per terminal solution, in search order.
    fn visit(&mut self, leaf: Leaf);
}

impl<F: FnMut(Leaf)> LeafVisitor for F {
    fn visit(&mut self, leaf: Leaf) {
        self(leaf)
    }
}

/// Counters collected during one enumeration.
///
/// `wins` and `losses` are from the point of view of the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SearchStats {
    /// Boards expanded, the root included.
    pub nodes: u64,
    /// Terminal solutions reported.
    pub leaves: u64,
    /// Leaves won by the side to move.
    pub wins: u64,
    /// Leaves won by the opponent.
    pub losses: u64,
    /// Leaves that filled the board with no winner.
    pub ties: u64,
}

/// Depth-first enumerator over all continuations of a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Enumerator {
    to_move: Player,
    pruning: Pruning,
}

impl Enumerator {
    /// Creates an enumerator for `to_move`, stopping at wins.
    pub fn new(to_move: Player) -> Self {
        Self {
            to_move,
            pruning: Pruning::default(),
        }
    }

    /// Sets the pruning mode.
    #[must_use]
    pub fn with_pruning(mut self, pruning: Pruning) -> Self {
        self.pruning = pruning;
        self
    }

    /// Side that plays the candidate move.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Side that moves at the given ply.
    pub fn mover_at(&self, depth: usize) -> Player {
        if depth % 2 == 0 {
            self.to_move
        } else {
            self.to_move.opponent()
        }
    }

    /// Enumerates every continuation of `board`, feeding leaves to `visitor`.
    ///
    /// A board that is already won or full yields no leaves.
    #[instrument(skip(self, board, visitor), fields(board = %board, to_move = %self.to_move, pruning = ?self.pruning))]
    pub fn run<V: LeafVisitor>(&self, board: &Board, visitor: &mut V) -> SearchStats {
        let mut stats = SearchStats::default();
        if rules::is_terminal(board) {
            debug!("Board is terminal, nothing to enumerate");
            return stats;
        }

        self.descend(*board, 0, None, None, visitor, &mut stats);
        debug!(
            nodes = stats.nodes,
            leaves = stats.leaves,
            wins = stats.wins,
            losses = stats.losses,
            ties = stats.ties,
            "Enumeration finished"
        );
        stats
    }

    /// Expands one board. `decided` carries the first line completed on the
    /// path (only ever set here in exhaustive mode).
    fn descend<V: LeafVisitor>(
        &self,
        board: Board,
        depth: usize,
        candidate: Option<Position>,
        decided: Option<(Player, usize)>,
        visitor: &mut V,
        stats: &mut SearchStats,
    ) {
        stats.nodes += 1;
        let mover = self.mover_at(depth);

        for position in board.empty_positions() {
            let child = board.with(position, mover);
            let candidate = candidate.unwrap_or(position);
            let decided = decided.or_else(|| child.winner().map(|winner| (winner, depth)));

            let stop = match decided {
                Some(_) => self.pruning == Pruning::StopAtWin || child.is_full(),
                None => child.is_full(),
            };

            if !stop {
                self.descend(child, depth + 1, Some(candidate), decided, visitor, stats);
                continue;
            }

            let leaf = match decided {
                Some((winner, at)) => Leaf::new(candidate, at, LeafOutcome::Won(winner)),
                None => Leaf::new(candidate, depth, LeafOutcome::Tie),
            };
            self.record(&leaf, stats);
            visitor.visit(leaf);
        }
    }

    fn record(&self, leaf: &Leaf, stats: &mut SearchStats) {
        stats.leaves += 1;
        match leaf.outcome {
            LeafOutcome::Won(player) if player == self.to_move => stats.wins += 1,
            LeafOutcome::Won(_) => stats.losses += 1,
            LeafOutcome::Tie => stats.ties += 1,
        }
    }
}

/// Enumerates with [`Pruning::StopAtWin`], the mode the move selector uses.
pub fn enumerate<V: LeafVisitor>(board: &Board, to_move: Player, visitor: &mut V) -> SearchStats {
    Enumerator::new(to_move).run(board, visitor)
}

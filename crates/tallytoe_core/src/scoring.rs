//! Outcome scoring and move selection.
//!
//! A [`Tally`] turns the leaves of one enumeration into per-candidate win
//! and loss weights. [`Analysis`] combines them into `wins - losses` per
//! empty square, and [`choose_move`] picks the best square under the
//! [`ScoringPolicy`].

use super::search::{enumerate, Leaf, LeafOutcome, LeafVisitor, SearchStats};
use super::{Board, Player, Position};
use derive_getters::Getters;
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Which square wins when several share the best score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// First maximal square in row-major order.
    #[default]
    FirstInScanOrder,
    /// Last maximal square in row-major order.
    LastInScanOrder,
}

/// Weights applied to each leaf.
///
/// An outcome decided at ply `depth` weighs `urgent_weight` when
/// `depth < urgent_depth`, and `9 - depth` otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Setters)]
#[serde(default)]
#[setters(prefix = "with_")]
pub struct ScoringPolicy {
    /// Plies that count as imminent. With the default of 2 these are the
    /// candidate move itself and the opponent's direct reply.
    pub urgent_depth: usize,
    /// Weight of an imminent outcome.
    pub urgent_weight: i64,
    /// Choice among equally scored squares.
    pub tie_break: TieBreak,
}

/// Largest sum of non-urgent weights one candidate can collect: at most 8!
/// continuations, each weighing at most `9 - 2`.
const MAX_DISTANT_TOTAL: i64 = 40_320 * 7;

impl ScoringPolicy {
    /// Imminent-outcome weight that no pile of distant outcomes can offset,
    /// even on both the win and the loss side at once.
    pub const DOMINANT_WEIGHT: i64 = 1_000_000;

    /// The fixed weight the first merged-score version of this game used.
    pub const LEGACY_WEIGHT: i64 = 200;

    /// Largest accepted `urgent_weight`: every one of the 9! continuations
    /// can carry it on both grids without overflowing a score.
    pub const MAX_URGENT_WEIGHT: i64 = i64::MAX / (2 * 362_880);

    /// Weights of the first merged-score version: urgent weight 200, last
    /// maximal square wins ties.
    pub fn legacy() -> Self {
        Self {
            urgent_depth: 2,
            urgent_weight: Self::LEGACY_WEIGHT,
            tie_break: TieBreak::LastInScanOrder,
        }
    }

    /// Weight of an outcome decided at `depth`.
    pub fn weight(&self, depth: usize) -> i64 {
        if depth < self.urgent_depth {
            self.urgent_weight
        } else {
            (Board::CELLS as i64 - depth as i64).max(0)
        }
    }

    /// True when imminent outcomes always outrank distant ones.
    pub fn is_dominant(&self) -> bool {
        self.urgent_weight > 2 * MAX_DISTANT_TOTAL
    }

    /// Rejects policies that cannot rank moves.
    pub fn validate(&self) -> Result<(), PolicyError> {
        if self.urgent_weight <= 0 {
            return Err(PolicyError::NonPositiveWeight(self.urgent_weight));
        }
        if self.urgent_weight > Self::MAX_URGENT_WEIGHT {
            return Err(PolicyError::WeightTooLarge(self.urgent_weight));
        }
        if self.urgent_depth > Board::CELLS {
            return Err(PolicyError::UrgentDepthTooLarge(self.urgent_depth));
        }
        Ok(())
    }
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        Self {
            urgent_depth: 2,
            urgent_weight: Self::DOMINANT_WEIGHT,
            tie_break: TieBreak::default(),
        }
    }
}

/// A scoring policy that cannot be used.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum PolicyError {
    /// `urgent_weight` must be positive.
    #[display("urgent_weight must be positive, got {}", _0)]
    NonPositiveWeight(i64),

    /// `urgent_weight` large enough to overflow a score.
    #[display(
        "urgent_weight must be at most {}, got {}",
        ScoringPolicy::MAX_URGENT_WEIGHT,
        _0
    )]
    WeightTooLarge(i64),

    /// `urgent_depth` beyond the deepest possible ply.
    #[display("urgent_depth must be at most 9, got {}", _0)]
    UrgentDepthTooLarge(usize),
}

impl std::error::Error for PolicyError {}

/// One entry of a [`ScoreGrid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Marker {
    /// Square is occupied; never selected.
    Unusable,
    /// Accumulated weight for a move on this square.
    Score(i64),
}

impl Marker {
    /// The score, or `None` for unusable squares.
    pub fn score(self) -> Option<i64> {
        match self {
            Marker::Unusable => None,
            Marker::Score(score) => Some(score),
        }
    }
}

/// 3x3 grid of markers, parallel to a [`Board`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScoreGrid {
    markers: [[Marker; 3]; 3],
}

impl ScoreGrid {
    /// Grid with `Score(0)` on empty squares and `Unusable` elsewhere.
    pub fn for_board(board: &Board) -> Self {
        let mut grid = Self {
            markers: [[Marker::Unusable; 3]; 3],
        };
        for pos in board.empty_positions() {
            grid.set(pos, Marker::Score(0));
        }
        grid
    }

    /// Marker at a position.
    pub fn get(&self, pos: Position) -> Marker {
        self.markers[pos.row()][pos.col()]
    }

    /// Replaces the marker at a position.
    pub fn set(&mut self, pos: Position, marker: Marker) {
        self.markers[pos.row()][pos.col()] = marker;
    }

    /// Adds weight to a usable square; unusable squares stay unusable.
    /// Scores saturate at the `i64` bounds.
    pub fn add(&mut self, pos: Position, weight: i64) {
        if let Marker::Score(score) = self.get(pos) {
            self.set(pos, Marker::Score(score.saturating_add(weight)));
        }
    }

    /// Markers in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, Marker)> + '_ {
        Position::ALL.iter().map(move |&pos| (pos, self.get(pos)))
    }

    /// Best usable square under the tie-break rule.
    pub fn best(&self, tie_break: TieBreak) -> Option<(Position, i64)> {
        let mut best: Option<(Position, i64)> = None;
        for (pos, marker) in self.iter() {
            let Some(score) = marker.score() else {
                continue;
            };
            let better = match (best, tie_break) {
                (None, _) => true,
                (Some((_, current)), TieBreak::FirstInScanOrder) => score > current,
                (Some((_, current)), TieBreak::LastInScanOrder) => score >= current,
            };
            if better {
                best = Some((pos, score));
            }
        }
        best
    }
}

/// Accumulates leaf weights per candidate move.
#[derive(Debug, Clone)]
pub struct Tally {
    side: Player,
    policy: ScoringPolicy,
    wins: ScoreGrid,
    losses: ScoreGrid,
}

impl Tally {
    /// Empty tally for `side` playing on `board`.
    pub fn new(board: &Board, side: Player, policy: ScoringPolicy) -> Self {
        let grid = ScoreGrid::for_board(board);
        Self {
            side,
            policy,
            wins: grid,
            losses: grid,
        }
    }

    /// Win weights per candidate.
    pub fn wins(&self) -> &ScoreGrid {
        &self.wins
    }

    /// Loss weights per candidate.
    pub fn losses(&self) -> &ScoreGrid {
        &self.losses
    }

    /// `wins - losses` on usable squares.
    pub fn combined(&self) -> ScoreGrid {
        let mut combined = self.wins;
        for (pos, marker) in self.losses.iter() {
            if let Marker::Score(loss) = marker {
                combined.add(pos, loss.saturating_neg());
            }
        }
        combined
    }
}

impl LeafVisitor for Tally {
    fn visit(&mut self, leaf: Leaf) {
        let weight = self.policy.weight(leaf.depth());
        match leaf.outcome() {
            LeafOutcome::Won(player) if player == self.side => {
                self.wins.add(leaf.candidate(), weight)
            }
            LeafOutcome::Won(_) => self.losses.add(leaf.candidate(), weight),
            LeafOutcome::Tie => {}
        }
    }
}

/// Scores of every candidate move for one side on one board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct Analysis {
    /// Board that was searched.
    board: Board,
    /// Side the scores are for.
    to_move: Player,
    /// Win weights per candidate.
    wins: ScoreGrid,
    /// Loss weights per candidate.
    losses: ScoreGrid,
    /// `wins - losses` per candidate.
    combined: ScoreGrid,
    /// Enumeration counters.
    stats: SearchStats,
}

impl Analysis {
    /// Best square under the tie-break rule.
    pub fn best(&self, tie_break: TieBreak) -> Option<(Position, i64)> {
        self.combined.best(tie_break)
    }
}

/// A selected move with the analysis behind it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct Choice {
    /// Selected square.
    position: Position,
    /// Its combined score.
    score: i64,
    /// Full scoring of the board.
    analysis: Analysis,
}

/// No move can be selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum SelectError {
    /// The board already has a completed line.
    #[display("Game is already over, {} won", _0)]
    AlreadyWon(Player),

    /// No empty square left.
    #[display("Board is full")]
    BoardFull,
}

impl std::error::Error for SelectError {}

/// Runs the enumeration for `to_move` and scores every empty square.
#[instrument(skip(board, policy), fields(board = %board))]
pub fn analyze(board: &Board, to_move: Player, policy: &ScoringPolicy) -> Analysis {
    let mut tally = Tally::new(board, to_move, *policy);
    let stats = enumerate(board, to_move, &mut tally);
    let combined = tally.combined();

    Analysis {
        board: *board,
        to_move,
        wins: tally.wins,
        losses: tally.losses,
        combined,
        stats,
    }
}

/// Picks the move with the greatest `wins - losses` for `to_move`.
#[instrument(skip(board, policy), fields(board = %board))]
pub fn choose_move(
    board: &Board,
    to_move: Player,
    policy: &ScoringPolicy,
) -> Result<Choice, SelectError> {
    if let Some(winner) = board.winner() {
        return Err(SelectError::AlreadyWon(winner));
    }

    let analysis = analyze(board, to_move, policy);
    let (position, score) = analysis
        .best(policy.tie_break)
        .ok_or(SelectError::BoardFull)?;

    debug!(combined = ?analysis.combined, "Scored candidate moves");
    info!(%position, score, leaves = analysis.stats.leaves, "Selected move");

    Ok(Choice {
        position,
        score,
        analysis,
    })
}

//! Tic-tac-toe board model and an exhaustive outcome-counting move search.
//!
//! # Architecture
//!
//! - **Board**: [`Board`], [`Square`], [`Player`] and named [`Position`]s,
//!   indexed row first, column second.
//! - **Rules**: win, draw and terminal detection in [`rules`].
//! - **Search**: [`Enumerator`] plays out every continuation of a board and
//!   reports each terminal board as a [`Leaf`].
//! - **Scoring**: [`Tally`] weights leaves by depth under a
//!   [`ScoringPolicy`]; [`choose_move`] picks the square with the best
//!   `wins - losses`.
//!
//! # Example
//!
//! ```
//! use tallytoe_core::{choose_move, Board, Player, Position, ScoringPolicy};
//!
//! // Human threatens the descending diagonal; the computer must block.
//! let board: Board = "OX./.O./...".parse()?;
//! let choice = choose_move(&board, Player::Computer, &ScoringPolicy::default())?;
//! assert_eq!(*choice.position(), Position::BottomRight);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod invariants;
mod kani_support;
mod outcome;
mod position;
pub mod rules;
mod scoring;
mod search;
mod types;

pub use action::{Move, MoveError};
pub use invariants::{
    BoardInvariants, Invariant, InvariantSet, InvariantViolation, PieceBalanceInvariant,
    SingleWinnerInvariant,
};
pub use outcome::Outcome;
pub use position::{Position, PositionError};
pub use scoring::{
    analyze, choose_move, Analysis, Choice, Marker, PolicyError, ScoreGrid, ScoringPolicy,
    SelectError, Tally, TieBreak,
};
pub use search::{enumerate, Enumerator, Leaf, LeafOutcome, LeafVisitor, Pruning, SearchStats};
pub use types::{Board, BoardParseError, Player, Square};

//! # rust-ttt
//!
//! Tic-tac-toe against an automated opponent that decides by random playouts.
//!
//! ## Design Principles
//!
//! 1. **Plain Data Core**: The board, outcomes, and coordinates are values.
//!    Nothing in the core prints or reads input.
//!
//! 2. **Copy on Branch**: The engine only ever works on copies of the real
//!    board. The caller applies the chosen move.
//!
//! 3. **Deterministic**: All randomness flows from a seeded `GameRng`, so
//!    the same seed reproduces the same games.
//!
//! ## Architecture
//!
//! - **Candidate Sampling**: A few distinct free cells are drawn at random.
//!
//! - **Decision Trees**: Each candidate gets an arena tree of random
//!   alternating continuations grown until every branch ends.
//!
//! - **Leaf Tally**: Engine wins count +1, human wins -1, draws 0. The
//!   highest tally wins; ties go to the first candidate.
//!
//! ## Modules
//!
//! - `core`: Players, cells, grid, board, outcome, RNG
//! - `sampler`: Random candidate-move sampling
//! - `search`: Decision trees and the decision engine
//! - `game`: Turn-tracking session around the real board
//! - `arena`: Automated matches against opponent policies
//! - `error`: Error types

pub mod arena;
pub mod core;
pub mod error;
pub mod game;
pub mod sampler;
pub mod search;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{Board, Cell, GameRng, GameRngState, Grid, Outcome, Player, Position, DIM};

pub use crate::error::{Error, MoveError};

pub use crate::sampler::{sample_moves, sample_pair, Candidates};

pub use crate::search::{
    best_candidate, CandidateEval, DecisionEngine, DecisionTree, NodeId, SearchConfig,
    SearchStats, SimNode, TreeStats,
};

pub use crate::game::{Game, MoveRecord};

pub use crate::arena::{
    Arena, FirstFreeOpponent, FirstMover, MatchConfig, MatchRecord, MatchSummary, Opponent,
    UniformOpponent,
};

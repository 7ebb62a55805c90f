//! Random-playout decision engine.
//!
//! ## Overview
//!
//! The automated opponent does not search the game tree exhaustively. For
//! each of a few randomly sampled candidate moves it:
//!
//! - plays the candidate on a copy of the board,
//! - grows a tree of random alternating continuations, each node sampling
//!   up to `branching` free cells, until every branch ends,
//! - folds the tree into a score: +1 per engine win leaf, -1 per human win
//!   leaf, 0 per draw.
//!
//! The candidate with the highest score is played. The score is a plain
//! leaf tally, so a candidate whose playouts happen to produce more leaves
//! can outrank one with a better win ratio.
//!
//! ## Usage
//!
//! ```rust
//! use rust_ttt::core::{Board, Player};
//! use rust_ttt::search::{DecisionEngine, SearchConfig};
//!
//! let mut board = Board::new();
//! board.apply_move(1, 1, Player::Human).unwrap();
//!
//! let mut engine = DecisionEngine::new(SearchConfig::default()).unwrap();
//! let pos = engine.choose_ai_move(&board).unwrap();
//! board.apply(pos, Player::Ai).unwrap();
//! ```

pub mod config;
pub mod engine;
pub mod node;
pub mod stats;
pub mod tree;

// Re-export main types
pub use config::SearchConfig;
pub use engine::{best_candidate, CandidateEval, DecisionEngine};
pub use node::{NodeId, SimNode};
pub use stats::SearchStats;
pub use tree::{DecisionTree, TreeStats};

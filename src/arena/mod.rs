//! Automated matches for evaluating the engine.
//!
//! The engine plays full games against a scripted or random stand-in for the
//! human, through the same `Game` session a front end would use. Results are
//! tallied into a `MatchSummary`.

mod opponent;
mod runner;

pub use opponent::{FirstFreeOpponent, Opponent, UniformOpponent};
pub use runner::{Arena, FirstMover, MatchConfig, MatchRecord, MatchSummary};

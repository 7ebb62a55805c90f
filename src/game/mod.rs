//! Game session: one real board shared by a human and the engine.
//!
//! Holds the state half of an interactive game loop:
//! - The caller picks who moves first
//! - Turns alternate; playing out of turn is rejected
//! - A rejected move leaves the turn with the same player
//! - Every applied move is recorded
//!
//! Prompts, input parsing, and rendering belong to the caller.

mod session;

pub use session::{Game, MoveRecord};

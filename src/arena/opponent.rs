//! Stand-ins for the human side.

use crate::core::{Board, GameRng, Position};

/// Policy that picks the human side's moves in automated matches.
pub trait Opponent: Send + Sync {
    /// Choose a free cell on `board`.
    ///
    /// Returns `None` if no cell is free.
    fn choose(&self, board: &Board, rng: &mut GameRng) -> Option<Position>;

    /// Short name for logs and summaries.
    fn name(&self) -> &'static str;
}

/// Plays a uniformly random free cell.
#[derive(Clone, Debug, Default)]
pub struct UniformOpponent;

impl Opponent for UniformOpponent {
    fn choose(&self, board: &Board, rng: &mut GameRng) -> Option<Position> {
        let free: Vec<Position> = board.free_cells().collect();
        rng.choose(&free).copied()
    }

    fn name(&self) -> &'static str {
        "uniform"
    }
}

/// Always plays the first free cell in row-major order.
#[derive(Clone, Debug, Default)]
pub struct FirstFreeOpponent;

impl Opponent for FirstFreeOpponent {
    fn choose(&self, board: &Board, _rng: &mut GameRng) -> Option<Position> {
        board.free_cells().next()
    }

    fn name(&self) -> &'static str {
        "first-free"
    }
}

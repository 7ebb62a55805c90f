//! Random candidate-move sampling.
//!
//! Draws a handful of distinct free cells without replacement. Near the end
//! of a game there may be fewer free cells than requested; the sampler then
//! returns every one that is left.

use smallvec::SmallVec;

use crate::core::{Board, GameRng, Position, DIM};

/// Sampled candidate positions, in the order they were drawn.
pub type Candidates = SmallVec<[Position; 4]>;

/// Select up to `k` distinct free positions uniformly at random.
///
/// Returns `min(k, free)` positions in random order. Callers must check
/// `Board::outcome` first; a full board yields an empty selection.
pub fn sample_moves(board: &Board, k: usize, rng: &mut GameRng) -> Candidates {
    let free: SmallVec<[Position; DIM * DIM]> = board.free_cells().collect();
    rng.sample_indices(free.len(), k)
        .into_iter()
        .map(|i| free[i])
        .collect()
}

/// Two-candidate form of `sample_moves`.
///
/// The second slot is `None` when exactly one free cell remains; the whole
/// result is `None` only on a full board.
pub fn sample_pair(board: &Board, rng: &mut GameRng) -> Option<(Position, Option<Position>)> {
    let picks = sample_moves(board, 2, rng);
    let first = *picks.first()?;
    Some((first, picks.get(1).copied()))
}

//! Game-state model: players, cells, the grid, boards, and RNG.
//!
//! Everything here is plain data. The board never prints and never decides
//! moves; the sampler and the search tree build on top of it.

pub mod board;
pub mod cell;
pub mod grid;
pub mod rng;

pub use board::Board;
pub use cell::{Cell, Player, Position, DIM};
pub use grid::{Grid, Outcome};
pub use rng::{GameRng, GameRngState};

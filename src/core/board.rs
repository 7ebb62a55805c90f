//! Board: a grid plus last-move metadata.

use serde::{Deserialize, Serialize};

use super::cell::{Cell, Player, Position, DIM};
use super::grid::{Grid, Outcome};
use crate::error::MoveError;

/// The unit passed between the sampler, the decision tree, and the caller.
///
/// The last position and last player are only used to work out whose turn
/// comes next during simulation. They are never validated against the grid.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    grid: Grid,
    last_pos: Option<Position>,
    last_player: Option<Player>,
}

impl Board {
    /// Create an empty board with no move history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap a grid copy with caller-supplied metadata.
    #[must_use]
    pub fn with_grid(grid: Grid, last_pos: Option<Position>, last_player: Option<Player>) -> Self {
        Self {
            grid,
            last_pos,
            last_player,
        }
    }

    #[inline]
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    #[must_use]
    pub fn last_pos(&self) -> Option<Position> {
        self.last_pos
    }

    #[inline]
    #[must_use]
    pub fn last_player(&self) -> Option<Player> {
        self.last_player
    }

    /// Player who moves next in a simulated continuation.
    #[inline]
    #[must_use]
    pub fn next_player(&self) -> Player {
        Player::after(self.last_player)
    }

    /// Place `player`'s symbol at `(row, col)`.
    ///
    /// Fails without touching the board if the coordinate is off the grid or
    /// the cell is taken.
    pub fn apply_move(&mut self, row: usize, col: usize, player: Player) -> Result<(), MoveError> {
        if row >= DIM || col >= DIM {
            return Err(MoveError::OutOfBounds { row, col });
        }
        let pos = Position::new(row, col);
        if !self.grid.cell(pos).is_empty() {
            return Err(MoveError::AlreadyOccupied { row, col });
        }

        self.grid.set(pos, Cell::from(player));
        self.last_pos = Some(pos);
        self.last_player = Some(player);
        Ok(())
    }

    /// `apply_move` taking a `Position`.
    #[inline]
    pub fn apply(&mut self, pos: Position, player: Player) -> Result<(), MoveError> {
        self.apply_move(pos.row, pos.col, player)
    }

    /// Copy of this board with one extra move applied.
    pub fn with_move(&self, pos: Position, player: Player) -> Result<Self, MoveError> {
        let mut next = self.clone();
        next.apply(pos, player)?;
        Ok(next)
    }

    /// Classify the board. Always a full scan of the grid.
    #[inline]
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        self.grid.outcome()
    }

    /// Empty positions in row-major order.
    pub fn free_cells(&self) -> impl Iterator<Item = Position> + '_ {
        self.grid.free_cells()
    }

    /// Deep copy of the cells only.
    #[inline]
    #[must_use]
    pub fn copy_grid(&self) -> Grid {
        self.grid
    }
}

impl From<Grid> for Board {
    fn from(grid: Grid) -> Self {
        Self::with_grid(grid, None, None)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.grid, f)
    }
}

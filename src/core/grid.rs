//! The `DIM × DIM` cell matrix and terminal-state detection.

use serde::{Deserialize, Serialize};

use super::cell::{Cell, Player, Position, DIM};
use crate::error::Error;

/// Classification of a grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// No completed line and at least one empty cell.
    InProgress,
    /// Board full with no completed line.
    Draw,
    /// Some row, column, or diagonal holds this player's symbol throughout.
    Win(Player),
}

impl Outcome {
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// Leaf value from the engine's point of view.
    ///
    /// `None` while the game is still running.
    #[must_use]
    pub const fn leaf_score(self) -> Option<i64> {
        match self {
            Outcome::InProgress => None,
            Outcome::Draw => Some(0),
            Outcome::Win(Player::Ai) => Some(1),
            Outcome::Win(Player::Human) => Some(-1),
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "in progress"),
            Outcome::Draw => write!(f, "draw"),
            Outcome::Win(player) => write!(f, "{} wins", player),
        }
    }
}

/// Square matrix of cells.
///
/// Stored inline, so `Copy` is a deep copy and grids never alias.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Grid {
    cells: [[Cell; DIM]; DIM],
}

impl Grid {
    /// Create an empty grid.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a grid from explicit rows.
    #[must_use]
    pub const fn from_rows(cells: [[Cell; DIM]; DIM]) -> Self {
        Self { cells }
    }

    /// Parse the plain-text form produced by `Display`.
    ///
    /// Whitespace is ignored; exactly `DIM * DIM` glyphs (`-`, `X`, `O`)
    /// are expected in row-major order.
    pub fn parse(text: &str) -> Result<Self, Error> {
        let glyphs: Vec<char> = text.chars().filter(|c| !c.is_whitespace()).collect();
        if glyphs.len() != DIM * DIM {
            return Err(Error::InvalidBoard {
                message: format!("expected {} cells, got {}", DIM * DIM, glyphs.len()),
            });
        }

        let mut grid = Self::new();
        for (i, &glyph) in glyphs.iter().enumerate() {
            let cell = Cell::from_glyph(glyph).ok_or_else(|| Error::InvalidBoard {
                message: format!("invalid character '{}' at position {}", glyph, i),
            })?;
            grid.cells[i / DIM][i % DIM] = cell;
        }
        Ok(grid)
    }

    /// Cell at a position.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is off the grid. Use [`Grid::get`] for unchecked
    /// coordinates.
    #[inline]
    #[must_use]
    pub fn cell(&self, pos: Position) -> Cell {
        debug_assert!(pos.in_bounds(), "position {} is off the grid", pos);
        self.cells[pos.row][pos.col]
    }

    /// Cell at a position, or `None` off the grid.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Overwrite a cell. No validation; `Board::apply_move` is the checked path.
    #[inline]
    pub(crate) fn set(&mut self, pos: Position, cell: Cell) {
        self.cells[pos.row][pos.col] = cell;
    }

    /// Rows of the grid.
    #[must_use]
    pub fn rows(&self) -> &[[Cell; DIM]; DIM] {
        &self.cells
    }

    /// Empty positions in row-major order.
    ///
    /// Lazy and restartable: every call yields the sequence from the start.
    pub fn free_cells(&self) -> impl Iterator<Item = Position> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .filter(|(_, cell)| cell.is_empty())
                .map(move |(col, _)| Position::new(row, col))
        })
    }

    /// Number of empty cells.
    #[must_use]
    pub fn free_count(&self) -> usize {
        self.cells.iter().flatten().filter(|c| c.is_empty()).count()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|c| !c.is_empty())
    }

    /// All winning index sets: `DIM` rows, `DIM` columns, both diagonals.
    pub fn lines() -> impl Iterator<Item = [Position; DIM]> {
        let rows = (0..DIM).map(|r| -> [Position; DIM] {
            std::array::from_fn(|c| Position::new(r, c))
        });
        let cols = (0..DIM).map(|c| -> [Position; DIM] {
            std::array::from_fn(|r| Position::new(r, c))
        });
        let diag: [Position; DIM] = std::array::from_fn(|i| Position::new(i, i));
        let anti: [Position; DIM] = std::array::from_fn(|i| Position::new(i, DIM - 1 - i));
        rows.chain(cols).chain([diag, anti])
    }

    /// Check whether `player` owns every cell of some line.
    #[must_use]
    pub fn has_line(&self, player: Player) -> bool {
        let target = Cell::from(player);
        Self::lines().any(|line| line.iter().all(|&pos| self.cell(pos) == target))
    }

    /// Scan the grid and classify it.
    ///
    /// The engine's lines are checked before the human's. On a legal board
    /// at most one side can hold a line, so the order never changes the
    /// result there.
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        for player in Player::CHECK_ORDER {
            if self.has_line(player) {
                return Outcome::Win(player);
            }
        }
        if self.is_full() {
            Outcome::Draw
        } else {
            Outcome::InProgress
        }
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, cell) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", cell)?;
            }
        }
        Ok(())
    }
}

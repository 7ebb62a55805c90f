//! Players, cell contents, and board coordinates.

use serde::{Deserialize, Serialize};

/// Side length of the square grid.
pub const DIM: usize = 3;

/// One of the two sides of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// The human player (`X`).
    Human,
    /// The automated opponent (`O`).
    Ai,
}

impl Player {
    /// Both players, in the order their win conditions are checked.
    pub const CHECK_ORDER: [Player; 2] = [Player::Ai, Player::Human];

    /// The other side.
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Player::Human => Player::Ai,
            Player::Ai => Player::Human,
        }
    }

    /// Player to move after `last` placed a symbol.
    ///
    /// Nothing placed yet counts as the human having moved, so the engine
    /// plays first on a fresh board.
    #[inline]
    #[must_use]
    pub fn after(last: Option<Player>) -> Self {
        match last {
            Some(Player::Ai) => Player::Human,
            _ => Player::Ai,
        }
    }

    /// Display glyph for this player's symbol.
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Player::Human => 'X',
            Player::Ai => 'O',
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// Contents of a single grid position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Human,
    Ai,
}

impl Cell {
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// The player occupying this cell, if any.
    #[must_use]
    pub const fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Human => Some(Player::Human),
            Cell::Ai => Some(Player::Ai),
        }
    }

    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Cell::Empty => '-',
            Cell::Human => 'X',
            Cell::Ai => 'O',
        }
    }

    /// Parse a display glyph back into a cell.
    #[must_use]
    pub fn from_glyph(c: char) -> Option<Self> {
        match c {
            '-' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::Human),
            'O' | 'o' => Some(Cell::Ai),
            _ => None,
        }
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        match player {
            Player::Human => Cell::Human,
            Player::Ai => Cell::Ai,
        }
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// A `(row, col)` coordinate on the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Check the coordinate lies on the grid.
    #[inline]
    #[must_use]
    pub const fn in_bounds(self) -> bool {
        self.row < DIM && self.col < DIM
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl From<Position> for (usize, usize) {
    fn from(pos: Position) -> Self {
        (pos.row, pos.col)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_opponent() {
        assert_eq!(Player::Human.opponent(), Player::Ai);
        assert_eq!(Player::Ai.opponent(), Player::Human);
    }

    #[test]
    fn test_player_after() {
        assert_eq!(Player::after(Some(Player::Ai)), Player::Human);
        assert_eq!(Player::after(Some(Player::Human)), Player::Ai);
        assert_eq!(Player::after(None), Player::Ai);
    }

    #[test]
    fn test_cell_from_player() {
        assert_eq!(Cell::from(Player::Human), Cell::Human);
        assert_eq!(Cell::from(Player::Ai), Cell::Ai);
        assert_eq!(Cell::Ai.player(), Some(Player::Ai));
        assert_eq!(Cell::Empty.player(), None);
        assert!(Cell::default().is_empty());
    }

    #[test]
    fn test_glyph_roundtrip() {
        for cell in [Cell::Empty, Cell::Human, Cell::Ai] {
            assert_eq!(Cell::from_glyph(cell.glyph()), Some(cell));
        }
        assert_eq!(Cell::from_glyph('?'), None);
    }

    #[test]
    fn test_position_bounds() {
        assert!(Position::new(0, 0).in_bounds());
        assert!(Position::new(2, 2).in_bounds());
        assert!(!Position::new(3, 0).in_bounds());
        assert!(!Position::new(0, 3).in_bounds());
        assert_eq!(format!("{}", Position::new(1, 2)), "(1, 2)");
    }
}

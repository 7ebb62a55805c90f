//! Error types for rust-ttt.
//!
//! `MoveError` is raised at the board boundary and is always recoverable by
//! the caller: the board is left untouched and the caller may retry with a
//! different coordinate. `Error` wraps it for the higher-level session,
//! engine, and arena APIs.

use thiserror::Error;

use crate::core::{Outcome, Player};

/// Rejected move on a board.
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveError {
    /// Row or column lies outside `0..DIM`.
    #[error("cell ({row}, {col}) does not exist on the board")]
    OutOfBounds { row: usize, col: usize },

    /// Target cell already holds a symbol.
    #[error("cell ({row}, {col}) is not empty")]
    AlreadyOccupied { row: usize, col: usize },
}

/// Main error type for the crate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    Move(#[from] MoveError),

    #[error("game already over: {outcome}")]
    GameOver { outcome: Outcome },

    #[error("not your turn: waiting for {expected}")]
    NotYourTurn { expected: Player },

    #[error("invalid configuration: {message}")]
    InvalidConfig { message: String },

    #[error("invalid board: {message}")]
    InvalidBoard { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_error_messages() {
        let err = MoveError::OutOfBounds { row: 3, col: 0 };
        assert_eq!(err.to_string(), "cell (3, 0) does not exist on the board");

        let err = MoveError::AlreadyOccupied { row: 1, col: 2 };
        assert_eq!(err.to_string(), "cell (1, 2) is not empty");
    }

    #[test]
    fn test_error_from_move_error() {
        let err: Error = MoveError::AlreadyOccupied { row: 0, col: 0 }.into();
        assert!(matches!(err, Error::Move(MoveError::AlreadyOccupied { .. })));
        // transparent keeps the inner message
        assert_eq!(err.to_string(), "cell (0, 0) is not empty");
    }

    #[test]
    fn test_game_over_message() {
        let err = Error::GameOver {
            outcome: Outcome::Win(Player::Ai),
        };
        assert_eq!(err.to_string(), "game already over: O wins");
    }
}

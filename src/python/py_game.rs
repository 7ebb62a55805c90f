//! Game session bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{Outcome, Player};
use crate::game::Game;
use crate::search::SearchConfig;

/// Python wrapper for a game session.
#[pyclass(name = "Game")]
pub struct PyGame {
    game: Game,
}

#[pymethods]
impl PyGame {
    /// Create a new game.
    ///
    /// # Arguments
    /// - first: "me" for the human to open, "ai" for the engine
    /// - seed: RNG seed for the engine
    #[new]
    #[pyo3(signature = (first = "me", seed = 42))]
    fn new(first: &str, seed: u64) -> PyResult<Self> {
        let first = match first {
            "me" => Player::Human,
            "ai" => Player::Ai,
            other => {
                return Err(PyValueError::new_err(format!(
                    "first must be 'ai' or 'me', got '{}'",
                    other
                )))
            }
        };
        let game = Game::new(first, SearchConfig::default().with_seed(seed))?;
        Ok(Self { game })
    }

    /// Play the human's move.
    fn play(&mut self, row: usize, col: usize) -> PyResult<()> {
        Ok(self.game.play(row, col)?)
    }

    /// Let the engine move. Returns (row, col).
    fn play_ai(&mut self) -> PyResult<(usize, usize)> {
        Ok(self.game.play_ai()?.into())
    }

    /// "in_progress", "draw", "human", or "ai".
    fn outcome(&self) -> &'static str {
        match self.game.outcome() {
            Outcome::InProgress => "in_progress",
            Outcome::Draw => "draw",
            Outcome::Win(Player::Human) => "human",
            Outcome::Win(Player::Ai) => "ai",
        }
    }

    /// Glyph at (row, col): "-", "X", or "O".
    fn cell(&self, row: usize, col: usize) -> PyResult<String> {
        self.game
            .board()
            .grid()
            .get(row, col)
            .map(|c| c.glyph().to_string())
            .ok_or_else(|| PyValueError::new_err(format!("cell ({}, {}) does not exist", row, col)))
    }

    /// Empty cells in row-major order.
    fn free_cells(&self) -> Vec<(usize, usize)> {
        self.game.board().free_cells().map(Into::into).collect()
    }

    /// "ai" or "me".
    #[getter]
    fn to_move(&self) -> &'static str {
        match self.game.to_move() {
            Player::Ai => "ai",
            Player::Human => "me",
        }
    }

    fn __repr__(&self) -> String {
        format!("Game(outcome={}, to_move={})", self.outcome(), self.to_move())
    }

    fn __str__(&self) -> String {
        self.game.board().to_string()
    }
}

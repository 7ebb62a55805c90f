//! Python bindings for rust-ttt.
//!
//! Exposes the game session so a Python front end can run the prompt loop.
//!
//! # Quick Start
//!
//! ```python
//! import rust_ttt
//!
//! game = rust_ttt.Game(first="me", seed=42)
//! game.play(1, 1)
//! row, col = game.play_ai()
//! print(game)
//! print(game.outcome())
//! ```

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::error::Error;

mod py_game;

pub use py_game::*;

impl From<Error> for PyErr {
    fn from(err: Error) -> Self {
        PyValueError::new_err(err.to_string())
    }
}

/// rust-ttt: tic-tac-toe against a random-playout decision engine.
#[pymodule]
fn rust_ttt(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyGame>()?;
    Ok(())
}

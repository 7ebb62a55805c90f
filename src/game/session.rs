//! Game session implementation.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{Board, Outcome, Player, Position};
use crate::error::Error;
use crate::search::{DecisionEngine, SearchConfig};

/// One applied move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub player: Player,
    pub position: Position,
}

/// The real board, the engine, and whose turn it is.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    engine: DecisionEngine,
    first: Player,
    to_move: Player,
    history: Vec<MoveRecord>,
}

impl Game {
    /// Start a game. `first` picks who opens.
    pub fn new(first: Player, config: SearchConfig) -> Result<Self, Error> {
        Ok(Self {
            board: Board::new(),
            engine: DecisionEngine::new(config)?,
            first,
            to_move: first,
            history: Vec::new(),
        })
    }

    /// Human move at `(row, col)`.
    ///
    /// On any error the board and the turn are unchanged, so the caller can
    /// ask for another coordinate.
    pub fn play(&mut self, row: usize, col: usize) -> Result<(), Error> {
        self.ensure_turn(Player::Human)?;
        self.board.apply_move(row, col, Player::Human)?;
        self.finish_turn(Player::Human, Position::new(row, col));
        Ok(())
    }

    /// Let the engine move. Returns where it played.
    pub fn play_ai(&mut self) -> Result<Position, Error> {
        self.ensure_turn(Player::Ai)?;
        let pos = self.engine.choose_ai_move(&self.board)?;
        self.board.apply(pos, Player::Ai)?;
        self.finish_turn(Player::Ai, pos);
        Ok(pos)
    }

    fn ensure_turn(&self, player: Player) -> Result<(), Error> {
        let outcome = self.board.outcome();
        if outcome.is_terminal() {
            return Err(Error::GameOver { outcome });
        }
        if self.to_move != player {
            return Err(Error::NotYourTurn {
                expected: self.to_move,
            });
        }
        Ok(())
    }

    fn finish_turn(&mut self, player: Player, position: Position) {
        self.history.push(MoveRecord { player, position });
        self.to_move = player.opponent();
        debug!(%player, %position, outcome = %self.board.outcome(), "move applied");
    }

    #[must_use]
    pub fn outcome(&self) -> Outcome {
        self.board.outcome()
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.outcome().is_terminal()
    }

    /// Side to move next. Meaningless once the game is over.
    #[must_use]
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    #[must_use]
    pub fn first(&self) -> Player {
        self.first
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    #[must_use]
    pub fn engine(&self) -> &DecisionEngine {
        &self.engine
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MoveError;

    #[test]
    fn test_human_first() {
        let mut game = Game::new(Player::Human, SearchConfig::default()).unwrap();
        assert_eq!(game.to_move(), Player::Human);

        game.play(1, 1).unwrap();
        assert_eq!(game.to_move(), Player::Ai);

        let pos = game.play_ai().unwrap();
        assert_ne!(pos, Position::new(1, 1));
        assert_eq!(game.to_move(), Player::Human);
        assert_eq!(game.history().len(), 2);
        assert_eq!(
            game.history()[0],
            MoveRecord {
                player: Player::Human,
                position: Position::new(1, 1)
            }
        );
    }

    #[test]
    fn test_wrong_turn() {
        let mut game = Game::new(Player::Ai, SearchConfig::default()).unwrap();
        assert_eq!(
            game.play(0, 0),
            Err(Error::NotYourTurn {
                expected: Player::Ai
            })
        );

        game.play_ai().unwrap();
        assert_eq!(
            game.play_ai(),
            Err(Error::NotYourTurn {
                expected: Player::Human
            })
        );
    }

    #[test]
    fn test_bad_move_keeps_turn() {
        let mut game = Game::new(Player::Human, SearchConfig::default()).unwrap();
        game.play(0, 0).unwrap();
        game.play_ai().unwrap();

        let err = game.play(0, 0).unwrap_err();
        assert_eq!(err, Error::Move(MoveError::AlreadyOccupied { row: 0, col: 0 }));
        assert_eq!(game.to_move(), Player::Human);

        let err = game.play(5, 1).unwrap_err();
        assert_eq!(err, Error::Move(MoveError::OutOfBounds { row: 5, col: 1 }));
        assert_eq!(game.history().len(), 2);
    }

    #[test]
    fn test_game_runs_to_completion() {
        let mut game = Game::new(Player::Ai, SearchConfig::default().with_seed(9)).unwrap();

        while !game.is_over() {
            match game.to_move() {
                Player::Ai => {
                    game.play_ai().unwrap();
                }
                Player::Human => {
                    let pos = game.board().free_cells().next().unwrap();
                    game.play(pos.row, pos.col).unwrap();
                }
            }
        }

        assert!(game.history().len() >= 5 && game.history().len() <= 9);
        assert!(matches!(game.play_ai(), Err(Error::GameOver { .. })));
        assert!(matches!(game.play(0, 0), Err(Error::GameOver { .. })));
    }
}

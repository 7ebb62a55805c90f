//! Match loop: engine against an `Opponent` over many games.

use serde::{Deserialize, Serialize};
use tracing::info;

use super::opponent::Opponent;
use crate::core::{GameRng, Outcome, Player};
use crate::error::Error;
use crate::game::{Game, MoveRecord};
use crate::search::SearchConfig;

/// Who opens each game of a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FirstMover {
    Human,
    Ai,
    /// Engine opens even-numbered games, the opponent odd-numbered ones.
    Alternate,
}

impl FirstMover {
    /// Opening player for game `index`.
    #[must_use]
    pub fn for_game(self, index: usize) -> Player {
        match self {
            FirstMover::Human => Player::Human,
            FirstMover::Ai => Player::Ai,
            FirstMover::Alternate if index % 2 == 0 => Player::Ai,
            FirstMover::Alternate => Player::Human,
        }
    }
}

/// Configuration for a match.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Number of games to play.
    pub games: usize,

    /// Who opens each game.
    pub first: FirstMover,

    /// Base seed. Game `i` seeds its engine with `seed + i`.
    pub seed: u64,

    /// Engine settings (its own seed is replaced per game).
    pub search: SearchConfig,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            games: 10,
            first: FirstMover::Alternate,
            seed: 0,
            search: SearchConfig::default(),
        }
    }
}

impl MatchConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_games(mut self, games: usize) -> Self {
        self.games = games;
        self
    }

    pub fn with_first(mut self, first: FirstMover) -> Self {
        self.first = first;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_search(mut self, search: SearchConfig) -> Self {
        self.search = search;
        self
    }

    /// Engine config for game `index`.
    #[must_use]
    pub fn search_for_game(&self, index: usize) -> SearchConfig {
        self.search
            .clone()
            .with_seed(self.seed.wrapping_add(index as u64))
    }
}

/// A finished game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub first: Player,
    pub moves: Vec<MoveRecord>,
    pub outcome: Outcome,
}

/// Tally over all games of a match.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct MatchSummary {
    pub ai_wins: usize,
    pub opponent_wins: usize,
    pub draws: usize,
    pub records: Vec<MatchRecord>,
}

impl MatchSummary {
    #[must_use]
    pub fn games(&self) -> usize {
        self.records.len()
    }

    /// Engine points per game: 1 per win, 0.5 per draw.
    #[must_use]
    pub fn ai_score_rate(&self) -> f64 {
        if self.records.is_empty() {
            0.0
        } else {
            (self.ai_wins as f64 + 0.5 * self.draws as f64) / self.records.len() as f64
        }
    }

    fn record(&mut self, record: MatchRecord) -> Result<(), Error> {
        match record.outcome {
            Outcome::Win(Player::Ai) => self.ai_wins += 1,
            Outcome::Win(Player::Human) => self.opponent_wins += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::InProgress => {
                return Err(Error::InvalidBoard {
                    message: "match record ends in progress".to_string(),
                });
            }
        }
        self.records.push(record);
        Ok(())
    }
}

/// Plays the engine against an opponent policy.
pub struct Arena<O: Opponent> {
    opponent: O,
    config: MatchConfig,
}

impl<O: Opponent> Arena<O> {
    pub fn new(opponent: O, config: MatchConfig) -> Self {
        Self { opponent, config }
    }

    /// Play every game of the match.
    pub fn run(&self) -> Result<MatchSummary, Error> {
        let mut summary = MatchSummary::default();
        let mut rng = GameRng::new(self.config.seed);

        for index in 0..self.config.games {
            let mut game_rng = rng.fork();
            let record = self.play_game(index, &mut game_rng)?;
            info!(
                game = index,
                opponent = self.opponent.name(),
                first = %record.first,
                moves = record.moves.len(),
                outcome = %record.outcome,
                "arena game finished"
            );
            summary.record(record)?;
        }

        Ok(summary)
    }

    /// Play game `index` to the end.
    pub fn play_game(&self, index: usize, rng: &mut GameRng) -> Result<MatchRecord, Error> {
        let first = self.config.first.for_game(index);
        let mut game = Game::new(first, self.config.search_for_game(index))?;

        while !game.is_over() {
            match game.to_move() {
                Player::Ai => {
                    game.play_ai()?;
                }
                Player::Human => {
                    let pos = self.opponent.choose(game.board(), rng).ok_or_else(|| {
                        Error::InvalidBoard {
                            message: format!(
                                "{} found no move on an unfinished board",
                                self.opponent.name()
                            ),
                        }
                    })?;
                    game.play(pos.row, pos.col)?;
                }
            }
        }

        Ok(MatchRecord {
            first,
            moves: game.history().to_vec(),
            outcome: game.outcome(),
        })
    }

    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }
}

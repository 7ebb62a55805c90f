//! Candidate scoring and move selection.
//!
//! The engine samples a few candidate moves on the real board, builds one
//! random-playout tree per candidate on a private copy, and returns the
//! candidate whose tree scored highest. The caller's board is never touched.

use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::config::SearchConfig;
use super::stats::SearchStats;
use super::tree::{DecisionTree, TreeStats};
use crate::core::{Board, GameRng, GameRngState, Position};
use crate::error::Error;
use crate::sampler::sample_moves;

/// Score of one evaluated candidate move.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateEval {
    /// Where the engine would play.
    pub position: Position,

    /// Folded tree score (engine-won leaves minus human-won leaves).
    pub score: i64,

    /// Shape of the tree that produced the score.
    pub tree: TreeStats,
}

/// Pick the evaluation with the strictly greatest score.
///
/// Ties go to the earliest candidate.
#[must_use]
pub fn best_candidate(evals: &[CandidateEval]) -> Option<&CandidateEval> {
    evals.iter().fold(None, |best, eval| match best {
        Some(b) if b.score >= eval.score => Some(b),
        _ => Some(eval),
    })
}

/// Automated opponent.
///
/// Owns the sampling RNG and the statistics of the last decision.
#[derive(Clone, Debug)]
pub struct DecisionEngine {
    config: SearchConfig,
    rng: GameRng,
    stats: SearchStats,
}

impl DecisionEngine {
    /// Create an engine, rejecting unusable configurations.
    pub fn new(config: SearchConfig) -> Result<Self, Error> {
        config.validate()?;
        let rng = GameRng::new(config.seed);
        Ok(Self {
            config,
            rng,
            stats: SearchStats::default(),
        })
    }

    /// Create an engine that resumes a saved RNG position.
    pub fn with_rng_state(config: SearchConfig, state: &GameRngState) -> Result<Self, Error> {
        let mut engine = Self::new(config)?;
        engine.rng = GameRng::from_state(state);
        Ok(engine)
    }

    /// Choose the engine's next move on `board`.
    ///
    /// With a single free cell left it is returned straight away. Otherwise
    /// every sampled candidate gets a full decision tree and the best score
    /// wins. The caller applies the result with `Player::Ai`.
    ///
    /// Fails with `Error::GameOver` if the board is already decided.
    pub fn choose_ai_move(&mut self, board: &Board) -> Result<Position, Error> {
        let start = Instant::now();
        self.stats.reset();

        let outcome = board.outcome();
        if outcome.is_terminal() {
            return Err(Error::GameOver { outcome });
        }

        let candidates = sample_moves(board, self.config.candidates, &mut self.rng);
        let choice = match candidates.as_slice() {
            [] => return Err(Error::GameOver { outcome }),
            [only] => *only,
            _ => {
                let evals = self.score_candidates(board, &candidates)?;
                match best_candidate(&evals) {
                    Some(best) => best.position,
                    None => candidates[0],
                }
            }
        };

        self.stats.time_us = start.elapsed().as_micros() as u64;
        debug!(
            choice = %choice,
            candidates = candidates.len(),
            nodes = self.stats.nodes_built,
            time_us = self.stats.time_us,
            "engine chose move"
        );
        Ok(choice)
    }

    /// Sample candidates and score every one of them, even a lone one.
    ///
    /// Diagnostic counterpart of `choose_ai_move`; returned in sample order.
    pub fn evaluate(&mut self, board: &Board) -> Result<Vec<CandidateEval>, Error> {
        let start = Instant::now();
        self.stats.reset();

        let outcome = board.outcome();
        if outcome.is_terminal() {
            return Err(Error::GameOver { outcome });
        }

        let candidates = sample_moves(board, self.config.candidates, &mut self.rng);
        let evals = self.score_candidates(board, &candidates)?;

        self.stats.time_us = start.elapsed().as_micros() as u64;
        Ok(evals)
    }

    /// Build and score one tree per candidate, each with its own RNG stream.
    fn score_candidates(
        &mut self,
        board: &Board,
        candidates: &[Position],
    ) -> Result<Vec<CandidateEval>, Error> {
        let mut evals = Vec::with_capacity(candidates.len());

        for &position in candidates {
            let mut tree_rng = self.rng.fork();
            let mut tree = DecisionTree::for_candidate(board, position)?;
            tree.build(&mut tree_rng, self.config.branching)?;

            let score = tree.score();
            let tree_stats = tree.stats();

            self.stats.trees_built += 1;
            self.stats.nodes_built += tree_stats.node_count as u64;
            self.stats.leaves_scored += tree_stats.leaf_count as u64;
            self.stats.max_depth = self.stats.max_depth.max(tree_stats.max_depth);

            debug!(
                candidate = %position,
                score,
                nodes = tree_stats.node_count,
                leaves = tree_stats.leaf_count,
                "scored candidate"
            );

            evals.push(CandidateEval {
                position,
                score,
                tree: tree_stats,
            });
        }

        Ok(evals)
    }

    /// Get statistics for the last decision.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Get the configuration.
    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Current RNG position, for resuming with `with_rng_state`.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }
}

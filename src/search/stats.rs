//! Decision statistics for diagnostics and tuning.

use serde::{Deserialize, Serialize};

/// Statistics collected during one `choose_ai_move` call.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SearchStats {
    /// Candidate trees built.
    pub trees_built: u32,

    /// Nodes allocated across all trees.
    pub nodes_built: u64,

    /// Terminal leaves folded into scores.
    pub leaves_scored: u64,

    /// Deepest node reached in any tree.
    pub max_depth: u16,

    /// Total time spent deciding (microseconds).
    pub time_us: u64,
}

impl SearchStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Calculate nodes built per second.
    #[must_use]
    pub fn nodes_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.nodes_built as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }

    #[must_use]
    pub fn avg_nodes_per_tree(&self) -> f64 {
        if self.trees_built == 0 {
            0.0
        } else {
            self.nodes_built as f64 / self.trees_built as f64
        }
    }
}

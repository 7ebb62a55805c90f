//! Decision tree nodes.
//!
//! Nodes live in the `DecisionTree` arena and refer to their children by
//! `NodeId`. There are no parent links; the arena owns everything and drops
//! it all at once.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Board, Outcome};

/// Index into the `DecisionTree` node arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub u32);

impl NodeId {
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

/// A hypothetical board reached by random play.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SimNode {
    /// Board snapshot at this node.
    pub board: Board,

    /// Outcome of `board`, scanned once when the node is created.
    pub outcome: Outcome,

    /// Depth in tree (root = 0).
    pub depth: u16,

    /// Child nodes. Empty for terminal nodes.
    /// SmallVec fits the usual branching factor of 2 inline.
    pub children: SmallVec<[NodeId; 2]>,
}

impl SimNode {
    /// Wrap a board, scanning its outcome.
    pub fn new(board: Board, depth: u16) -> Self {
        let outcome = board.outcome();
        Self {
            board,
            outcome,
            depth,
            children: SmallVec::new(),
        }
    }

    /// Terminal nodes never get children.
    #[inline]
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_terminal()
    }

    #[inline]
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

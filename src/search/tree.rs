//! Arena-based random-playout decision tree.
//!
//! One tree is built per candidate move. The root holds the board with the
//! candidate already played by the engine; every other node extends its
//! parent by one random move of the side whose turn it is, until each
//! branch reaches a finished game.
//!
//! Nodes are stored in a flat `Vec<SimNode>` and linked by `NodeId`. The
//! build uses an explicit stack instead of recursion, and scoring sweeps the
//! arena backwards: a child is always allocated after its parent, so by the
//! time a node is visited all of its children already have their scores.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::trace;

use super::node::{NodeId, SimNode};
use crate::core::{Board, GameRng, Grid, Outcome, Player, Position};
use crate::error::MoveError;
use crate::sampler::sample_moves;

/// Random-playout tree rooted at one candidate move.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DecisionTree {
    /// All nodes in the tree. The root is always at index 0.
    nodes: Vec<SimNode>,
}

impl DecisionTree {
    /// Create an unbuilt tree with `board` as its root.
    pub fn new(board: Board) -> Self {
        Self {
            nodes: vec![SimNode::new(board, 0)],
        }
    }

    /// Create an unbuilt tree for the engine playing `choice` on `board`.
    ///
    /// The caller's board is not modified.
    pub fn for_candidate(board: &Board, choice: Position) -> Result<Self, MoveError> {
        Ok(Self::new(board.with_move(choice, Player::Ai)?))
    }

    /// The candidate move this tree evaluates (last move of the root board).
    #[must_use]
    pub fn choice(&self) -> Option<Position> {
        self.root_node().board.last_pos()
    }

    #[inline]
    #[must_use]
    pub fn root(&self) -> NodeId {
        NodeId::new(0)
    }

    #[inline]
    #[must_use]
    pub fn root_node(&self) -> &SimNode {
        &self.nodes[0]
    }

    /// Get a node by ID.
    #[inline]
    #[must_use]
    pub fn get(&self, id: NodeId) -> &SimNode {
        &self.nodes[id.index()]
    }

    #[inline]
    fn get_mut(&mut self, id: NodeId) -> &mut SimNode {
        &mut self.nodes[id.index()]
    }

    fn alloc(&mut self, node: SimNode) -> NodeId {
        let id = NodeId::new(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Number of nodes in the tree.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate over all nodes in allocation order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &SimNode)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (NodeId::new(i as u32), n))
    }

    /// Expand every branch with random alternating moves until the game ends.
    ///
    /// Each in-progress node gets up to `branching` children, one per sampled
    /// free cell, played by the side after the node's last mover. Fewer free
    /// cells than `branching` means fewer children. Branches are expanded
    /// depth-first in sample order. Building again discards the previous
    /// expansion.
    pub fn build(&mut self, rng: &mut GameRng, branching: usize) -> Result<(), MoveError> {
        debug_assert!(branching > 0, "branching factor must be positive");

        self.nodes.truncate(1);
        self.nodes[0].children.clear();

        let mut stack = vec![self.root()];
        while let Some(id) = stack.pop() {
            let node = self.get(id);
            if node.is_terminal() {
                continue;
            }

            let parent = node.board.clone();
            let depth = node.depth + 1;
            let player = parent.next_player();

            let mut children: SmallVec<[NodeId; 2]> = SmallVec::new();
            for pos in sample_moves(&parent, branching, rng) {
                let child = SimNode::new(parent.with_move(pos, player)?, depth);
                children.push(self.alloc(child));
            }

            stack.extend(children.iter().rev().copied());
            self.get_mut(id).children = children;
        }

        trace!(
            choice = ?self.choice(),
            nodes = self.nodes.len(),
            leaves = self.nodes.iter().filter(|n| n.is_leaf()).count(),
            branching,
            "decision tree built"
        );
        Ok(())
    }

    /// Folded score of every node, indexed by `NodeId`.
    ///
    /// Terminal nodes score +1 for an engine win, -1 for a human win, 0 for a
    /// draw; other nodes sum their children. An unbuilt in-progress root
    /// scores 0.
    #[must_use]
    pub fn subtree_scores(&self) -> Vec<i64> {
        let mut scores = vec![0i64; self.nodes.len()];
        for (i, node) in self.nodes.iter().enumerate().rev() {
            scores[i] = match node.outcome.leaf_score() {
                Some(score) => score,
                None => node.children.iter().map(|c| scores[c.index()]).sum(),
            };
        }
        scores
    }

    /// Unweighted tally of favorable minus unfavorable playout leaves.
    #[must_use]
    pub fn score(&self) -> i64 {
        self.subtree_scores()[0]
    }

    /// Get statistics about the tree.
    #[must_use]
    pub fn stats(&self) -> TreeStats {
        let mut stats = TreeStats {
            node_count: self.nodes.len(),
            ..TreeStats::default()
        };
        let mut distinct: FxHashSet<Grid> = FxHashSet::default();

        for node in &self.nodes {
            stats.max_depth = stats.max_depth.max(node.depth);
            if !node.is_leaf() {
                continue;
            }
            stats.leaf_count += 1;
            distinct.insert(*node.board.grid());
            match node.outcome {
                Outcome::Win(Player::Ai) => stats.ai_wins += 1,
                Outcome::Win(Player::Human) => stats.human_wins += 1,
                Outcome::Draw => stats.draws += 1,
                Outcome::InProgress => {}
            }
        }

        stats.distinct_leaves = distinct.len();
        stats
    }
}

/// Statistics about a decision tree.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeStats {
    /// Total number of nodes.
    pub node_count: usize,

    /// Nodes without children.
    pub leaf_count: usize,

    /// Leaves where the engine won.
    pub ai_wins: usize,

    /// Leaves where the human won.
    pub human_wins: usize,

    /// Leaves that ended in a draw.
    pub draws: usize,

    /// Maximum depth reached (root = 0).
    pub max_depth: u16,

    /// Leaves with pairwise different grids. Random play can reach the same
    /// position along several branches; those nodes are never shared.
    pub distinct_leaves: usize,
}

impl TreeStats {
    /// Average number of children per internal node.
    #[must_use]
    pub fn branching_factor(&self) -> f64 {
        let internal = self.node_count - self.leaf_count;
        if internal == 0 {
            0.0
        } else {
            // every node except the root is somebody's child
            (self.node_count - 1) as f64 / internal as f64
        }
    }
}

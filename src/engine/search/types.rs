//! Search configuration, results and score bounds.

use crate::engine::eval::Evaluation;
use crate::rules::Notation;

/// Window bound standing in for an infinite score. Larger than any
/// reachable material balance.
pub const INFINITY: i32 = 30000;

pub const DEFAULT_DEPTH: i32 = 3;

/// Deepest search accepted; anything above is rejected as `IllegalDepth`.
pub const MAX_DEPTH: i32 = 64;

#[derive(Clone, Debug)]
pub struct SearchConfig {
    /// Plies to search below the root.
    pub depth: i32,
    /// Notation used when printing the chosen move.
    pub notation: Notation,
    pub evaluation: Evaluation,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            notation: Notation::Uci,
            evaluation: Evaluation::Material,
        }
    }
}

/// Counters for a single search. Only logged, never persisted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes visited by the alpha-beta recursion.
    pub nodes: u64,
    /// Nodes whose children were generated.
    pub expansions: u64,
    /// Sibling loops cut short by `beta <= alpha`.
    pub cutoffs: u64,
}

/// Backed-up score of the root and the move that achieves it.
#[derive(Clone, Debug)]
pub struct SearchOutcome<M> {
    pub score: i32,
    /// `None` when the root was not expanded (depth 0 or terminal).
    pub best_move: Option<M>,
    pub stats: SearchStats,
}

//! Searcher: validates input, builds the root and runs the recursion.

use shakmaty::Color;
use tracing::debug;

use crate::engine::eval::Evaluation;
use crate::engine::node::SearchNode;
use crate::error::{SearchError, SearchResult};
use crate::rules::{Notation, Rules, ShakmatyRules};

use super::types::{SearchOutcome, SearchStats, INFINITY, MAX_DEPTH};

/// Accept `depth` if it lies in `0..=MAX_DEPTH`.
pub fn check_depth(depth: i32) -> SearchResult<u32> {
    if (0..=MAX_DEPTH).contains(&depth) {
        Ok(depth as u32)
    } else {
        Err(SearchError::IllegalDepth(depth))
    }
}

pub struct Searcher<R: Rules> {
    pub(super) rules: R,
    pub(super) evaluation: Evaluation,
    pub(super) stats: SearchStats,
}

impl<R: Rules> Searcher<R> {
    pub fn new(rules: R) -> Self {
        Searcher {
            rules,
            evaluation: Evaluation::default(),
            stats: SearchStats::default(),
        }
    }

    pub fn with_evaluation(mut self, evaluation: Evaluation) -> Self {
        self.evaluation = evaluation;
        self
    }

    pub fn set_evaluation(&mut self, evaluation: Evaluation) {
        self.evaluation = evaluation;
    }

    pub fn rules(&self) -> &R {
        &self.rules
    }

    /// Counters from the most recent search.
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Search `depth` plies below `pos` and report the root score and move.
    ///
    /// The tree is built fresh for this call and dropped before returning.
    pub fn search(&mut self, pos: &R::Position, depth: i32) -> SearchResult<SearchOutcome<R::Move>> {
        let plies = check_depth(depth)?;

        self.stats = SearchStats::default();
        let side = self.rules.side_to_move(pos);
        debug!(
            fen = %self.rules.to_fen(pos),
            depth,
            evaluation = %self.evaluation,
            "search started"
        );

        let mut root = SearchNode::root(pos.clone(), side);
        let (score, best_move) =
            self.alpha_beta(&mut root, plies, -INFINITY, INFINITY, side == Color::White)?;

        debug!(
            score,
            best_move = ?best_move,
            nodes = self.stats.nodes,
            expansions = self.stats.expansions,
            cutoffs = self.stats.cutoffs,
            "search finished"
        );

        Ok(SearchOutcome {
            score,
            best_move,
            stats: self.stats.clone(),
        })
    }

    /// Best move for the side to move in `pos`.
    ///
    /// Fails with `NoLegalMove` if `pos` is already terminal. At depth 0
    /// nothing is expanded and the result is `Ok(None)`.
    pub fn find_best_move_in(&mut self, pos: &R::Position, depth: i32) -> SearchResult<Option<R::Move>> {
        check_depth(depth)?;
        if self.rules.is_terminal(pos) {
            return Err(SearchError::NoLegalMove);
        }
        Ok(self.search(pos, depth)?.best_move)
    }

    /// Parse `fen` and return the best move for the side to move.
    pub fn find_best_move(&mut self, fen: &str, depth: i32) -> SearchResult<Option<R::Move>> {
        check_depth(depth)?;
        let pos = self.rules.parse_position(fen)?;
        self.find_best_move_in(&pos, depth)
    }
}

impl Searcher<ShakmatyRules> {
    /// Like [`Searcher::find_best_move`], rendering the move in `notation`.
    pub fn best_move_in(&mut self, fen: &str, depth: i32, notation: Notation) -> SearchResult<Option<String>> {
        check_depth(depth)?;
        let pos = self.rules.parse_position(fen)?;
        let best = self.find_best_move_in(&pos, depth)?;
        Ok(best.map(|mv| self.rules.format_move(&pos, &mv, notation)))
    }
}

impl Default for Searcher<ShakmatyRules> {
    fn default() -> Self {
        Self::new(ShakmatyRules)
    }
}

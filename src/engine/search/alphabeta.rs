//! Alpha-beta recursion.

use tracing::trace;

use crate::engine::node::SearchNode;
use crate::error::SearchResult;
use crate::rules::Rules;

use super::searcher::Searcher;
use super::types::INFINITY;

impl<R: Rules> Searcher<R> {
    /// Fail-soft alpha-beta below `node`.
    ///
    /// White maximizes, Black minimizes. Returns the backed-up score and
    /// the first child move reaching it; the move is `None` at a leaf.
    /// Children are generated in full before any of them is searched.
    pub fn alpha_beta(
        &mut self,
        node: &mut SearchNode<R>,
        depth: u32,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> SearchResult<(i32, Option<R::Move>)> {
        self.stats.nodes += 1;

        let score = self.evaluation.evaluate(&self.rules, node.position(), depth);
        node.set_cached_score(score);

        if depth == 0 || self.rules.is_terminal(node.position()) {
            let leaf = self.evaluation.evaluate(&self.rules, node.position(), 0);
            return Ok((leaf, None));
        }

        if !node.is_expanded() {
            node.expand(&self.rules)?;
            self.stats.expansions += 1;
        }

        let mut best_move: Option<R::Move> = None;

        if maximizing {
            let mut best = -INFINITY;
            for (child, mv) in node.children_mut().iter_mut() {
                let (child_score, _) = self.alpha_beta(child, depth - 1, alpha, beta, false)?;
                if child_score > best {
                    best = child_score;
                    best_move = Some(mv.clone());
                }
                alpha = alpha.max(child_score);
                if beta <= alpha {
                    self.stats.cutoffs += 1;
                    trace!(depth, alpha, beta, "beta cutoff");
                    break;
                }
            }
            Ok((best, best_move))
        } else {
            let mut best = INFINITY;
            for (child, mv) in node.children_mut().iter_mut() {
                let (child_score, _) = self.alpha_beta(child, depth - 1, alpha, beta, true)?;
                if child_score < best {
                    best = child_score;
                    best_move = Some(mv.clone());
                }
                beta = beta.min(child_score);
                if beta <= alpha {
                    self.stats.cutoffs += 1;
                    trace!(depth, alpha, beta, "alpha cutoff");
                    break;
                }
            }
            Ok((best, best_move))
        }
    }
}

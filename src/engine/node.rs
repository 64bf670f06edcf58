//! Search tree nodes.

use shakmaty::Color;
use tracing::trace;

use crate::error::SearchResult;
use crate::rules::Rules;

/// One position in the search tree together with the moves leading out of it.
///
/// A node owns its position and its whole subtree. Children are built at
/// most once, each from a fresh copy of the parent position.
pub struct SearchNode<R: Rules> {
    position: R::Position,
    side_to_move: Color,
    cached_score: Option<i32>,
    children: Vec<(SearchNode<R>, R::Move)>,
    expanded: bool,
}

impl<R: Rules> SearchNode<R> {
    /// Wrap `position` with no children and no score.
    pub fn root(position: R::Position, side_to_move: Color) -> Self {
        SearchNode {
            position,
            side_to_move,
            cached_score: None,
            children: Vec::new(),
            expanded: false,
        }
    }

    pub fn position(&self) -> &R::Position {
        &self.position
    }

    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Last evaluation stored on this node, if it was scored.
    pub fn cached_score(&self) -> Option<i32> {
        self.cached_score
    }

    pub(crate) fn set_cached_score(&mut self, score: i32) {
        self.cached_score = Some(score);
    }

    pub fn children(&self) -> &[(SearchNode<R>, R::Move)] {
        &self.children
    }

    pub(crate) fn children_mut(&mut self) -> &mut [(SearchNode<R>, R::Move)] {
        &mut self.children
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Generate one child per legal move, in the order the rules list them.
    ///
    /// Does nothing on a node that was already expanded. Returns the number
    /// of children created by this call.
    pub fn expand(&mut self, rules: &R) -> SearchResult<usize> {
        if self.expanded {
            return Ok(0);
        }

        let moves = rules.legal_moves(&self.position);
        let mut children = Vec::with_capacity(moves.len());
        for mv in moves {
            let next = rules.apply_move(&self.position, &mv)?;
            children.push((SearchNode::root(next, !self.side_to_move), mv));
        }

        trace!(children = children.len(), "expanded node");
        self.children = children;
        self.expanded = true;
        Ok(self.children.len())
    }
}

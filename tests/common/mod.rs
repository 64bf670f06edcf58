//! Test helpers: FEN shortcuts and a scripted rules provider over a fixed tree.

#![allow(dead_code)]

use std::cell::Cell;

use chess_tree::error::{SearchError, SearchResult};
use chess_tree::rules::Rules;
use chess_tree::shakmaty::fen::Fen;
use chess_tree::shakmaty::{CastlingMode, Chess, Color, Role};

pub fn from_fen(fen: &str) -> Chess {
    let f: Fen = fen.parse().unwrap();
    f.into_position(CastlingMode::Standard).unwrap()
}

/// One scripted position: material balance for White, whether it is
/// terminal, and its (move label, child index) edges in enumeration order.
pub struct FakeNode {
    pub side: Color,
    pub material: i32,
    pub terminal: bool,
    pub children: Vec<(&'static str, usize)>,
}

/// A rules provider whose positions are indices into a hand-built tree.
///
/// Positions are written as their index, e.g. `"0"` for the root.
pub struct TreeRules {
    nodes: Vec<FakeNode>,
    pub legal_move_calls: Cell<usize>,
}

impl TreeRules {
    pub fn new() -> Self {
        TreeRules { nodes: Vec::new(), legal_move_calls: Cell::new(0) }
    }

    /// Add an inner node and return its index.
    pub fn inner(&mut self, side: Color, children: Vec<(&'static str, usize)>) -> usize {
        self.nodes.push(FakeNode { side, material: 0, terminal: false, children });
        self.nodes.len() - 1
    }

    /// Add a non-terminal leaf with the given material balance.
    pub fn leaf(&mut self, side: Color, material: i32) -> usize {
        self.nodes.push(FakeNode { side, material, terminal: false, children: Vec::new() });
        self.nodes.len() - 1
    }

    pub fn terminal(&mut self, side: Color, material: i32) -> usize {
        self.nodes.push(FakeNode { side, material, terminal: true, children: Vec::new() });
        self.nodes.len() - 1
    }

    /// Replace the children of `node`; lets a root be declared before its subtrees.
    pub fn set_children(&mut self, node: usize, children: Vec<(&'static str, usize)>) {
        self.nodes[node].children = children;
    }
}

impl Rules for TreeRules {
    type Position = usize;
    type Move = &'static str;

    fn parse_position(&self, fen: &str) -> SearchResult<usize> {
        fen.trim()
            .parse::<usize>()
            .ok()
            .filter(|&i| i < self.nodes.len())
            .ok_or_else(|| SearchError::InvalidPosition {
                fen: fen.to_string(),
                reason: "no such node".to_string(),
            })
    }

    fn side_to_move(&self, pos: &usize) -> Color {
        self.nodes[*pos].side
    }

    fn legal_moves(&self, pos: &usize) -> Vec<&'static str> {
        self.legal_move_calls.set(self.legal_move_calls.get() + 1);
        self.nodes[*pos].children.iter().map(|(mv, _)| *mv).collect()
    }

    fn apply_move(&self, pos: &usize, mv: &&'static str) -> SearchResult<usize> {
        self.nodes[*pos]
            .children
            .iter()
            .find(|(label, _)| label == mv)
            .map(|(_, child)| *child)
            .ok_or_else(|| SearchError::IllegalMove {
                mv: mv.to_string(),
                reason: "not a scripted edge".to_string(),
            })
    }

    fn is_checkmate(&self, pos: &usize) -> bool {
        self.nodes[*pos].terminal
    }

    fn is_stalemate(&self, _pos: &usize) -> bool {
        false
    }

    fn is_insufficient_material(&self, _pos: &usize) -> bool {
        false
    }

    fn to_fen(&self, pos: &usize) -> String {
        pos.to_string()
    }

    /// Material is expressed as surplus pawns for whichever side is ahead.
    fn piece_count(&self, pos: &usize, color: Color, role: Role) -> u32 {
        let material = self.nodes[*pos].material;
        match (role, color) {
            (Role::Pawn, Color::White) if material > 0 => material as u32,
            (Role::Pawn, Color::Black) if material < 0 => (-material) as u32,
            _ => 0,
        }
    }
}

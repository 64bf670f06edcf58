//! Rules Provider
//!
//! The search never knows how chess works. Everything it needs from the
//! game (legal moves, applying a move, terminal tests, piece counts) goes
//! through the [`Rules`] trait. [`ShakmatyRules`] implements it on top of
//! `shakmaty`.

use std::fmt;
use std::str::FromStr;

use shakmaty::fen::Fen;
use shakmaty::san::SanPlus;
use shakmaty::uci::UciMove;
use shakmaty::{CastlingMode, Chess, Color, EnPassantMode, Move, Position, Role};

use crate::error::{SearchError, SearchResult};

pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Capabilities the search consumes from a chess-rules component.
pub trait Rules {
    type Position: Clone;
    type Move: Clone + PartialEq + fmt::Debug;

    /// Parse a FEN string into a position.
    fn parse_position(&self, fen: &str) -> SearchResult<Self::Position>;

    fn side_to_move(&self, pos: &Self::Position) -> Color;

    /// Legal moves in a stable, provider-defined order.
    fn legal_moves(&self, pos: &Self::Position) -> Vec<Self::Move>;

    /// Return the position after `mv`. `pos` is left untouched.
    fn apply_move(&self, pos: &Self::Position, mv: &Self::Move) -> SearchResult<Self::Position>;

    fn is_checkmate(&self, pos: &Self::Position) -> bool;

    fn is_stalemate(&self, pos: &Self::Position) -> bool;

    fn is_insufficient_material(&self, pos: &Self::Position) -> bool;

    /// Checkmate, stalemate or insufficient material.
    fn is_terminal(&self, pos: &Self::Position) -> bool {
        self.is_checkmate(pos) || self.is_stalemate(pos) || self.is_insufficient_material(pos)
    }

    fn to_fen(&self, pos: &Self::Position) -> String;

    /// Number of `color` pieces of kind `role` on the board.
    fn piece_count(&self, pos: &Self::Position, color: Color, role: Role) -> u32;
}

/// Move notation used when reading or printing moves.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Notation {
    /// Coordinate notation, e.g. `e2e4`, `e7e8q`.
    #[default]
    Uci,
    /// Standard algebraic notation, e.g. `Nf3`, `exd5`, `O-O`.
    San,
}

impl FromStr for Notation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "uci" => Ok(Notation::Uci),
            "san" => Ok(Notation::San),
            other => Err(format!("unknown notation '{other}' (expected 'uci' or 'san')")),
        }
    }
}

impl fmt::Display for Notation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notation::Uci => f.write_str("uci"),
            Notation::San => f.write_str("san"),
        }
    }
}

/// Standard chess rules backed by `shakmaty`.
#[derive(Clone, Copy, Debug, Default)]
pub struct ShakmatyRules;

impl ShakmatyRules {
    pub fn new() -> Self {
        ShakmatyRules
    }

    /// Parse `text` as a legal move in `pos`.
    pub fn parse_move(&self, pos: &Chess, text: &str, notation: Notation) -> SearchResult<Move> {
        let illegal = |reason: String| SearchError::IllegalMove {
            mv: text.to_string(),
            reason,
        };
        let mv = match notation {
            Notation::Uci => {
                let uci: UciMove = text.trim().parse().map_err(|e| illegal(format!("{e}")))?;
                uci.to_move(pos).map_err(|e| illegal(format!("{e}")))?
            }
            Notation::San => {
                let san: SanPlus = text.trim().parse().map_err(|e| illegal(format!("{e}")))?;
                san.san.to_move(pos).map_err(|e| illegal(format!("{e}")))?
            }
        };
        if pos.is_legal(&mv) {
            Ok(mv)
        } else {
            Err(illegal("not legal in this position".to_string()))
        }
    }

    /// Parse and play a move given in `notation`.
    pub fn play_notation(&self, pos: &Chess, text: &str, notation: Notation) -> SearchResult<Chess> {
        let mv = self.parse_move(pos, text, notation)?;
        self.apply_move(pos, &mv)
    }

    /// Render `mv`, which must be legal in `pos`.
    pub fn format_move(&self, pos: &Chess, mv: &Move, notation: Notation) -> String {
        match notation {
            Notation::Uci => mv.to_uci(CastlingMode::Standard).to_string(),
            Notation::San => SanPlus::from_move(pos.clone(), mv).to_string(),
        }
    }
}

impl Rules for ShakmatyRules {
    type Position = Chess;
    type Move = Move;

    fn parse_position(&self, fen: &str) -> SearchResult<Chess> {
        let invalid = |reason: String| SearchError::InvalidPosition {
            fen: fen.to_string(),
            reason,
        };
        let parsed: Fen = fen.trim().parse().map_err(|e| invalid(format!("{e}")))?;
        parsed
            .into_position::<Chess>(CastlingMode::Standard)
            .map_err(|e| invalid(format!("{e}")))
    }

    fn side_to_move(&self, pos: &Chess) -> Color {
        pos.turn()
    }

    fn legal_moves(&self, pos: &Chess) -> Vec<Move> {
        pos.legal_moves().into_iter().collect()
    }

    fn apply_move(&self, pos: &Chess, mv: &Move) -> SearchResult<Chess> {
        pos.clone().play(mv).map_err(|_| SearchError::IllegalMove {
            mv: mv.to_uci(CastlingMode::Standard).to_string(),
            reason: "not legal in this position".to_string(),
        })
    }

    fn is_checkmate(&self, pos: &Chess) -> bool {
        pos.is_checkmate()
    }

    fn is_stalemate(&self, pos: &Chess) -> bool {
        pos.is_stalemate()
    }

    fn is_insufficient_material(&self, pos: &Chess) -> bool {
        pos.is_insufficient_material()
    }

    fn to_fen(&self, pos: &Chess) -> String {
        Fen(pos.clone().into_setup(EnPassantMode::Legal)).to_string()
    }

    fn piece_count(&self, pos: &Chess, color: Color, role: Role) -> u32 {
        let board = pos.board();
        (board.by_color(color) & board.by_role(role)).count() as u32
    }
}

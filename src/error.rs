//! Error types for position setup and search.

use thiserror::Error;

/// Errors surfaced to callers of the search.
///
/// All of them are input-validation failures: the search itself is
/// deterministic and never fails half-way through a tree.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The FEN string could not be parsed, or describes an illegal setup.
    #[error("invalid position '{fen}': {reason}")]
    InvalidPosition { fen: String, reason: String },

    /// Search depth was negative or above `MAX_DEPTH`.
    #[error("illegal search depth {0}: depth must be in 0..={max}", max = crate::engine::search::MAX_DEPTH)]
    IllegalDepth(i32),

    /// The root position is already checkmate, stalemate or a dead draw.
    #[error("no legal move: position is terminal")]
    NoLegalMove,

    /// A move string was malformed or not legal in the position.
    #[error("illegal move '{mv}': {reason}")]
    IllegalMove { mv: String, reason: String },
}

pub type SearchResult<T> = Result<T, SearchError>;

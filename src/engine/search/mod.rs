//! Search: depth-limited fail-soft alpha-beta minimax.

mod alphabeta;
mod searcher;
mod types;

pub use searcher::{check_depth, Searcher};
pub use types::{SearchConfig, SearchOutcome, SearchStats, DEFAULT_DEPTH, INFINITY, MAX_DEPTH};

//! Engine components
//!
//! - Material evaluation
//! - Search tree nodes
//! - Alpha-beta search

pub mod eval;
pub mod node;
pub mod search;

pub use eval::{evaluate, supported_evaluations, Evaluation};
pub use node::SearchNode;
pub use search::{SearchConfig, SearchOutcome, SearchStats, Searcher, INFINITY};

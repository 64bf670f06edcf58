pub mod engine;
pub mod error;
pub mod rules;
pub mod uci;

pub use engine::eval::evaluate;
pub use engine::search::{SearchConfig, Searcher};
pub use error::{SearchError, SearchResult};
pub use rules::{Notation, Rules, ShakmatyRules};
pub use shakmaty;
pub use uci::UCI;

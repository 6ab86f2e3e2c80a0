pub mod alphabeta;
pub mod eval;

pub use alphabeta::{SearchParams, SearchResult, Searcher};

// N-in-a-row engine: board model, win rules, alpha-beta search.
pub mod board;
pub mod engine;
pub mod rules;
pub mod search;

pub use board::{GameConfig, Grid, Move, Occupant};
pub use engine::Engine;
pub use rules::MoveOutcome;

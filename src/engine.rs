//! Public entry points for the rest of the application: classify a placed
//! mark, or ask for the Bot's move.

use log::debug;

use crate::board::{ConfigError, GameConfig, Grid, Move, Occupant, Snapshot};
use crate::rules::{self, MoveOutcome};
use crate::search::Searcher;

pub struct Engine {
    cfg: GameConfig,
}

impl Engine {
    /// Rejects out-of-range configuration up front; the search itself assumes
    /// a valid config.
    pub fn new(cfg: GameConfig) -> Result<Self, ConfigError> {
        cfg.validate()?;
        Ok(Self { cfg })
    }

    pub fn config(&self) -> &GameConfig {
        &self.cfg
    }

    /// Classifies the mark just placed at `(row, col)`: did it win the match,
    /// tie it (board full), or leave it ongoing?
    pub fn evaluate_move(&self, grid: &Grid, occupant: Occupant, row: i32, col: i32) -> MoveOutcome {
        let snap = Snapshot::from_grid(grid);
        rules::classify_move(&snap, occupant, row, col, self.cfg.win_length)
    }

    /// The Bot's chosen move, or `Move::INVALID` when no free cell remains.
    /// The caller applies it to the live board and re-evaluates.
    pub fn best_move(&self, grid: &Grid) -> Move {
        let res = Searcher::new(self.cfg).best_move(grid);
        debug!("engine: chose {} ({} nodes)", res.best, res.nodes);
        res.best
    }
}

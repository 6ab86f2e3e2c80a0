use log::debug;

use crate::board::{GameConfig, Grid, Move, Occupant, Snapshot};
use crate::rules;
use crate::search::eval::{self, DRAW_SCORE, WIN_SCORE};

#[derive(Clone, Copy, Debug)]
pub struct SearchParams {
    /// Ply budget before falling back to the heuristic.
    pub depth: u32,
    /// Disable to run the identical traversal without alpha-beta cutoffs;
    /// scores must not change, only node counts.
    pub use_pruning: bool,
}

impl SearchParams {
    pub fn from_config(cfg: &GameConfig) -> Self {
        Self { depth: cfg.search_depth, use_pruning: true }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct SearchResult {
    /// `Move::INVALID` when the board has no free cell.
    pub best: Move,
    pub score: i32,
    pub nodes: u64,
}

/// Depth-limited minimax with alpha-beta pruning over a private board
/// snapshot. Moves are simulated in place and undone on the way back up, so
/// one snapshot serves the whole tree.
pub struct Searcher {
    cfg: GameConfig,
    params: SearchParams,
    nodes: u64,
}

impl Searcher {
    pub fn new(cfg: GameConfig) -> Self {
        let params = SearchParams::from_config(&cfg);
        Self::with_params(cfg, params)
    }

    pub fn with_params(cfg: GameConfig, params: SearchParams) -> Self {
        Self { cfg, params, nodes: 0 }
    }

    /// Scores every free cell as a Bot move and returns the first cell
    /// achieving the best score. Each candidate is searched with a fresh full
    /// window, so the root scores are exact minimax values and the chosen
    /// move is deterministic for a fixed free-move order (row-major).
    pub fn best_move(&mut self, grid: &Grid) -> SearchResult {
        self.nodes = 0;
        let mut snap = Snapshot::from_grid(grid);
        let mut best = Move::INVALID;
        let mut best_score = i32::MIN;
        for i in 0..snap.free_count() {
            let mv = snap.free_move(i);
            let (r, c) = (mv.row as usize, mv.col as usize);
            snap.set_occupant(r, c, Occupant::Bot);
            // The Bot just moved, so the ply below is the opponent's.
            let score = self.minimax(&mut snap, 0, false, i32::MIN, i32::MAX);
            snap.set_occupant(r, c, Occupant::Empty);
            if score > best_score {
                best_score = score;
                best = mv;
            }
        }
        debug!(
            "root: best={} score={} nodes={} depth={}",
            best, best_score, self.nodes, self.params.depth
        );
        SearchResult { best, score: best_score, nodes: self.nodes }
    }

    fn minimax(
        &mut self,
        snap: &mut Snapshot,
        depth: u32,
        maximizing: bool,
        alpha: i32,
        beta: i32,
    ) -> i32 {
        self.nodes += 1;
        if depth >= self.params.depth {
            return eval::heuristic(snap, depth);
        }
        if let Some(score) = self.terminal_score(snap, depth) {
            return score;
        }
        if maximizing {
            self.maximize(snap, depth, alpha, beta)
        } else {
            self.minimize(snap, depth, alpha, beta)
        }
    }

    /// Scans the originally-free cells for the mark placed since the parent
    /// ply. A Bot win scores `WIN_SCORE - depth`, a Human win the mirror, a
    /// full board with no run ties at zero; depth biasing makes the search
    /// prefer the fastest win and the slowest loss.
    fn terminal_score(&self, snap: &Snapshot, depth: u32) -> Option<i32> {
        let win_length = self.cfg.win_length;
        let mut open = 0usize;
        for i in 0..snap.free_count() {
            let mv = snap.free_move(i);
            let occ = snap.occupant(mv.row as usize, mv.col as usize);
            if occ.is_empty() {
                open += 1;
            } else if occ == Occupant::Bot
                && rules::has_winning_run(snap, Occupant::Bot, mv.row, mv.col, win_length)
            {
                return Some(WIN_SCORE - depth as i32);
            } else if rules::has_winning_run(snap, Occupant::Human, mv.row, mv.col, win_length) {
                return Some(-WIN_SCORE + depth as i32);
            }
        }
        if open == 0 {
            return Some(DRAW_SCORE);
        }
        None
    }

    fn maximize(&mut self, snap: &mut Snapshot, depth: u32, mut alpha: i32, beta: i32) -> i32 {
        let mut best = i32::MIN;
        for i in 0..snap.free_count() {
            let mv = snap.free_move(i);
            let (r, c) = (mv.row as usize, mv.col as usize);
            if !snap.occupant(r, c).is_empty() {
                continue;
            }
            snap.set_occupant(r, c, Occupant::Bot);
            best = best.max(self.minimax(snap, depth + 1, false, alpha, beta));
            snap.set_occupant(r, c, Occupant::Empty);
            alpha = alpha.max(best);
            if self.params.use_pruning && beta <= alpha {
                break;
            }
        }
        best
    }

    fn minimize(&mut self, snap: &mut Snapshot, depth: u32, alpha: i32, mut beta: i32) -> i32 {
        let mut best = i32::MAX;
        for i in 0..snap.free_count() {
            let mv = snap.free_move(i);
            let (r, c) = (mv.row as usize, mv.col as usize);
            if !snap.occupant(r, c).is_empty() {
                continue;
            }
            snap.set_occupant(r, c, Occupant::Human);
            best = best.min(self.minimax(snap, depth + 1, true, alpha, beta));
            snap.set_occupant(r, c, Occupant::Empty);
            beta = beta.min(best);
            if self.params.use_pruning && beta <= alpha {
                break;
            }
        }
        best
    }
}

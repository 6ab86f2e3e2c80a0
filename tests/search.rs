//! Search-level properties: pruning equivalence, determinism, and win-rule
//! symmetry, over seeded random boards.

use gridbot::board::Snapshot;
use gridbot::rules::has_winning_run;
use gridbot::search::{SearchParams, Searcher};
use gridbot::{GameConfig, Grid, Occupant};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

fn random_grid(rng: &mut SmallRng, rows: usize, cols: usize, fill: f64) -> Grid {
    let mut grid = Grid::new(rows, cols);
    for r in 0..rows {
        for c in 0..cols {
            if rng.gen_bool(fill) {
                let occ = if rng.gen_bool(0.5) { Occupant::Human } else { Occupant::Bot };
                grid.set(r, c, occ);
            }
        }
    }
    grid
}

fn free_cells(grid: &Grid) -> Vec<(usize, usize)> {
    let mut out = Vec::new();
    for r in 0..grid.rows() {
        for c in 0..grid.cols() {
            if grid.get(r, c).is_empty() {
                out.push((r, c));
            }
        }
    }
    out
}

#[test]
fn pruned_search_equals_plain_minimax() {
    let mut rng = SmallRng::seed_from_u64(7);
    for round in 0..24 {
        let (rows, cols) = if round % 3 == 0 { (4, 4) } else { (3, 3) };
        let fill = if rows == 4 { 0.6 } else { 0.4 };
        let grid = random_grid(&mut rng, rows, cols, fill);
        let cfg = GameConfig::new(rows, cols, 3, 3);

        let a = Searcher::new(cfg).best_move(&grid);
        let b = Searcher::with_params(cfg, SearchParams { depth: 3, use_pruning: false })
            .best_move(&grid);

        assert_eq!(a.score, b.score, "score diverged on {}", grid);
        assert_eq!(a.best, b.best, "move diverged on {}", grid);
        assert!(a.nodes <= b.nodes, "pruning expanded the tree on {}", grid);
    }
}

#[test]
fn best_move_is_deterministic() {
    let mut rng = SmallRng::seed_from_u64(11);
    let grid = random_grid(&mut rng, 3, 3, 0.3);
    let cfg = GameConfig::new(3, 3, 3, 4);
    let first = Searcher::new(cfg).best_move(&grid);
    for _ in 0..3 {
        let again = Searcher::new(cfg).best_move(&grid);
        assert_eq!(first.best, again.best);
        assert_eq!(first.score, again.score);
        assert_eq!(first.nodes, again.nodes);
    }
}

#[test]
fn best_move_targets_a_free_cell() {
    let mut rng = SmallRng::seed_from_u64(23);
    let cfg = GameConfig::new(3, 3, 3, 2);
    for _ in 0..32 {
        let grid = random_grid(&mut rng, 3, 3, 0.5);
        let free = free_cells(&grid);
        let mv = Searcher::new(cfg).best_move(&grid).best;
        if free.is_empty() {
            assert!(!mv.is_valid(), "sentinel expected on full board {}", grid);
        } else {
            assert!(mv.is_valid(), "valid move expected on {}", grid);
            assert!(
                free.contains(&(mv.row as usize, mv.col as usize)),
                "chose occupied cell {} on {}",
                mv,
                grid
            );
        }
    }
}

mod symmetry {
    use super::*;

    fn rot90(grid: &Grid) -> Grid {
        let mut out = Grid::new(grid.cols(), grid.rows());
        for r in 0..grid.rows() {
            for c in 0..grid.cols() {
                out.set(c, grid.rows() - 1 - r, grid.get(r, c));
            }
        }
        out
    }

    fn mirror(grid: &Grid) -> Grid {
        let mut out = Grid::new(grid.rows(), grid.cols());
        for r in 0..grid.rows() {
            for c in 0..grid.cols() {
                out.set(r, grid.cols() - 1 - c, grid.get(r, c));
            }
        }
        out
    }

    fn assert_equivalent(a: &Grid, b: &Grid, map: impl Fn(usize, usize) -> (usize, usize)) {
        let sa = Snapshot::from_grid(a);
        let sb = Snapshot::from_grid(b);
        for occ in [Occupant::Human, Occupant::Bot] {
            for r in 0..a.rows() {
                for c in 0..a.cols() {
                    let (tr, tc) = map(r, c);
                    assert_eq!(
                        has_winning_run(&sa, occ, r as i32, c as i32, 3),
                        has_winning_run(&sb, occ, tr as i32, tc as i32, 3),
                        "mismatch at ({},{}) on {}",
                        r,
                        c,
                        a
                    );
                }
            }
        }
    }

    #[test]
    fn winning_runs_survive_rotation_and_mirroring() {
        let mut rng = SmallRng::seed_from_u64(42);
        for round in 0..16 {
            let (rows, cols) = if round % 2 == 0 { (3, 3) } else { (4, 5) };
            let grid = random_grid(&mut rng, rows, cols, 0.55);

            let r90 = rot90(&grid);
            assert_equivalent(&grid, &r90, |r, c| (c, rows - 1 - r));

            let r180 = rot90(&r90);
            assert_equivalent(&grid, &r180, |r, c| (rows - 1 - r, cols - 1 - c));

            let m = mirror(&grid);
            assert_equivalent(&grid, &m, |r, c| (r, cols - 1 - c));
        }
    }
}

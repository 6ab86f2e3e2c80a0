//! Depth-cutoff heuristic: line dominance scanning.
//!
//! A line "dominated" by one side contains marks from that side only, with
//! empties ignored. This is a coarse bias used when the search runs out of
//! depth budget; it rewards any exclusively held line, not just near-complete
//! ones, and the diagonal walk is intentionally approximate on non-square
//! boards.

use crate::board::{Occupant, Snapshot};

pub const WIN_SCORE: i32 = 100;
pub const DRAW_SCORE: i32 = 0;

/// Heuristic score from the Bot's perspective, biased by depth so nearer
/// outcomes dominate deeper ones.
pub fn heuristic(snap: &Snapshot, depth: u32) -> i32 {
    let row = dominant_row(snap);
    let col = dominant_col(snap);
    let diag = dominant_diagonal(snap);
    if row == Occupant::Bot || col == Occupant::Bot || diag == Occupant::Bot {
        WIN_SCORE - depth as i32
    } else if row == Occupant::Human || col == Occupant::Human || diag == Occupant::Human {
        -WIN_SCORE + depth as i32
    } else {
        DRAW_SCORE
    }
}

/// Folds one cell into a running dominance scan. Returns `false` once the
/// line holds marks from both sides.
fn fold(current: &mut Occupant, cell: Occupant) -> bool {
    if current.is_empty() {
        *current = cell;
        true
    } else {
        cell.is_empty() || cell == *current
    }
}

/// First row whose occupied cells all share one occupant. An all-empty row
/// counts as dominated by `Empty` and masks later rows.
fn dominant_row(snap: &Snapshot) -> Occupant {
    for r in 0..snap.rows() {
        let mut occupant = snap.occupant(r, 0);
        let dominated = (1..snap.cols()).all(|c| fold(&mut occupant, snap.occupant(r, c)));
        if dominated {
            return occupant;
        }
    }
    Occupant::Empty
}

fn dominant_col(snap: &Snapshot) -> Occupant {
    for c in 0..snap.cols() {
        let mut occupant = snap.occupant(0, c);
        let dominated = (1..snap.rows()).all(|r| fold(&mut occupant, snap.occupant(r, c)));
        if dominated {
            return occupant;
        }
    }
    Occupant::Empty
}

/// Main diagonal from the top-left corner, then an anti-diagonal walk seeded
/// near the bottom-right corner. The anti-diagonal bounds reproduce the
/// historical offsets and do not cover the exact corner-to-corner line on
/// every board shape; the heuristic is approximate by design.
fn dominant_diagonal(snap: &Snapshot) -> Occupant {
    let rows = snap.rows() as i32;
    let cols = snap.cols() as i32;

    let mut occupant = snap.occupant(0, 0);
    let mut r = 1;
    let mut c = 1;
    let mut dominated = true;
    while r < rows && c < cols {
        if !fold(&mut occupant, snap.occupant(r as usize, c as usize)) {
            dominated = false;
            break;
        }
        r += 1;
        c += 1;
    }
    if dominated {
        return occupant;
    }

    occupant = snap.occupant((rows - 3) as usize, (cols - 3) as usize);
    r = rows - 2;
    c = cols - 2;
    dominated = true;
    while r >= 0 && c < cols {
        if !fold(&mut occupant, snap.occupant(r as usize, c as usize)) {
            dominated = false;
            break;
        }
        r -= 1;
        c += 1;
    }
    if dominated {
        return occupant;
    }
    Occupant::Empty
}

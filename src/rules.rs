//! Win and tie detection on a board snapshot.

use crate::board::{Occupant, Snapshot};

/// What a just-placed mark did to the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    Win,
    Tie,
    Ongoing,
}

/// The four run axes: horizontal, vertical and both diagonals. Each axis is
/// scanned in both directions from the origin cell.
const AXES: [(i32, i32); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Does the cell at `(row, col)` sit on a run of `win_length` or more
/// consecutive cells held by `occupant`? Scans stop at the board edges.
pub fn has_winning_run(
    snap: &Snapshot,
    occupant: Occupant,
    row: i32,
    col: i32,
    win_length: usize,
) -> bool {
    // A cell that does not hold the occupant is never part of one of its
    // runs; without this the backward scan would count a run lying entirely
    // to one side of the origin.
    if snap.occupant_at(row, col) != Some(occupant) {
        return false;
    }
    AXES.iter().any(|&(dr, dc)| {
        // The forward scan starts at the origin so it is counted exactly
        // once; the backward scan starts one step away.
        let run = count_dir(snap, occupant, row, col, dr, dc)
            + count_dir(snap, occupant, row - dr, col - dc, -dr, -dc);
        run >= win_length
    })
}

fn count_dir(
    snap: &Snapshot,
    occupant: Occupant,
    mut row: i32,
    mut col: i32,
    dr: i32,
    dc: i32,
) -> usize {
    let mut run = 0;
    while snap.occupant_at(row, col) == Some(occupant) {
        run += 1;
        row += dr;
        col += dc;
    }
    run
}

pub fn is_board_full(snap: &Snapshot) -> bool {
    (0..snap.rows()).all(|r| (0..snap.cols()).all(|c| !snap.occupant(r, c).is_empty()))
}

/// Classify a just-placed mark: `Win` if it completed a run, otherwise `Tie`
/// when the board is full, otherwise `Ongoing`.
///
/// Win is deliberately tested before fullness, so a mark that both fills the
/// last cell and completes a run reports `Win`.
pub fn classify_move(
    snap: &Snapshot,
    occupant: Occupant,
    row: i32,
    col: i32,
    win_length: usize,
) -> MoveOutcome {
    if has_winning_run(snap, occupant, row, col, win_length) {
        return MoveOutcome::Win;
    }
    if is_board_full(snap) {
        return MoveOutcome::Tie;
    }
    MoveOutcome::Ongoing
}

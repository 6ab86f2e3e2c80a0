use super::{Grid, Move, Occupant};

/// A search-private copy of the board, built once per move request. The
/// search mutates occupants in place and undoes them on the way back up, so
/// the live board is never touched.
///
/// `free` is computed once at creation and never resynced: it lists the cells
/// that were empty when the snapshot was taken, in row-major order. Cells
/// filled during search stay in the list, so consumers must re-check a cell's
/// current occupant before simulating onto it.
#[derive(Clone, Debug)]
pub struct Snapshot {
    rows: usize,
    cols: usize,
    cells: Vec<Occupant>,
    free: Vec<Move>,
}

impl Snapshot {
    pub fn from_grid(grid: &Grid) -> Self {
        let rows = grid.rows();
        let cols = grid.cols();
        let cells = grid.cells().to_vec();
        let mut free = Vec::new();
        for r in 0..rows {
            for c in 0..cols {
                if grid.get(r, c).is_empty() {
                    free.push(Move::new(r as i32, c as i32));
                }
            }
        }
        Self { rows, cols, cells, free }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn occupant(&self, row: usize, col: usize) -> Occupant {
        debug_assert!(row < self.rows && col < self.cols);
        self.cells[row * self.cols + col]
    }

    /// Occupant at possibly out-of-bounds coordinates; `None` off the board.
    /// Scans use this so runs stop at the edges instead of wrapping.
    pub fn occupant_at(&self, row: i32, col: i32) -> Option<Occupant> {
        if row < 0 || col < 0 || row as usize >= self.rows || col as usize >= self.cols {
            return None;
        }
        Some(self.cells[row as usize * self.cols + col as usize])
    }

    pub fn set_occupant(&mut self, row: usize, col: usize, occupant: Occupant) {
        debug_assert!(row < self.rows && col < self.cols);
        self.cells[row * self.cols + col] = occupant;
    }

    pub fn free_count(&self) -> usize {
        self.free.len()
    }

    /// The i-th originally-free cell (row-major enumeration order).
    pub fn free_move(&self, i: usize) -> Move {
        self.free[i]
    }
}

use super::{BoardError, Occupant, MAX_BOARD_SIZE, MIN_BOARD_SIZE};

/// The live board's occupancy. The engine only ever reads this; turn logic
/// owns mutation through `set`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Occupant>,
}

impl Grid {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols, cells: vec![Occupant::Empty; rows * cols] }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> Occupant {
        debug_assert!(row < self.rows && col < self.cols);
        self.cells[row * self.cols + col]
    }

    pub fn set(&mut self, row: usize, col: usize, occupant: Occupant) {
        debug_assert!(row < self.rows && col < self.cols);
        self.cells[row * self.cols + col] = occupant;
    }

    pub fn in_bounds(&self, row: i32, col: i32) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.rows && (col as usize) < self.cols
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    pub(crate) fn cells(&self) -> &[Occupant] {
        &self.cells
    }
}

impl std::str::FromStr for Grid {
    type Err = BoardError;

    /// Board text: rows joined by `/`, cells `X` (human), `O` (bot), `.`
    /// (empty). Example 3x3: `XX./OO./...`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut rows: Vec<Vec<Occupant>> = Vec::new();
        for line in s.trim().split('/') {
            let mut row = Vec::new();
            for c in line.chars() {
                row.push(Occupant::from_char(c).ok_or(BoardError::BadCell(c))?);
            }
            rows.push(row);
        }
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.len());
        for (i, r) in rows.iter().enumerate() {
            if r.len() != width {
                return Err(BoardError::RaggedRow { row: i, expected: width, got: r.len() });
            }
        }
        let size_ok = |n| (MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&n);
        if !size_ok(height) || !size_ok(width) {
            return Err(BoardError::BadSize { rows: height, cols: width });
        }
        Ok(Self { rows: height, cols: width, cells: rows.into_iter().flatten().collect() })
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for r in 0..self.rows {
            for c in 0..self.cols {
                write!(f, "{}", self.get(r, c).to_char())?;
            }
            if r + 1 < self.rows {
                write!(f, "/")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_round_trips() {
        let g: Grid = "XX./OO./...".parse().unwrap();
        assert_eq!(g.rows(), 3);
        assert_eq!(g.cols(), 3);
        assert_eq!(g.get(0, 0), Occupant::Human);
        assert_eq!(g.get(1, 1), Occupant::Bot);
        assert_eq!(g.get(2, 2), Occupant::Empty);
        assert_eq!(g.to_string(), "XX./OO./...");
    }

    #[test]
    fn parse_rejects_bad_input() {
        assert!("XX./OO.".parse::<Grid>().is_err()); // 2 rows
        assert!("XX/OO./...".parse::<Grid>().is_err()); // ragged
        assert!("XZ./OO./...".parse::<Grid>().is_err()); // bad cell
    }

    #[test]
    fn fullness() {
        let mut g = Grid::new(3, 3);
        assert!(!g.is_full());
        for r in 0..3 {
            for c in 0..3 {
                g.set(r, c, Occupant::Human);
            }
        }
        assert!(g.is_full());
    }
}

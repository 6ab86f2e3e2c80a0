pub mod grid;
pub mod snapshot;

pub use grid::Grid;
pub use snapshot::Snapshot;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Which side, if any, holds a cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Occupant {
    #[default]
    Empty,
    Human,
    Bot,
}

impl Occupant {
    pub fn is_empty(self) -> bool {
        self == Occupant::Empty
    }

    /// Board-text character: `X` human, `O` bot, `.` empty.
    pub fn to_char(self) -> char {
        match self {
            Occupant::Empty => '.',
            Occupant::Human => 'X',
            Occupant::Bot => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '.' => Some(Occupant::Empty),
            'X' | 'x' => Some(Occupant::Human),
            'O' | 'o' => Some(Occupant::Bot),
            _ => None,
        }
    }
}

/// A board coordinate the engine can return. `(-1, -1)` is the sentinel for
/// "no move found": callers must check `is_valid` before applying.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub row: i32,
    pub col: i32,
}

impl Move {
    pub const INVALID: Move = Move { row: -1, col: -1 };

    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    pub fn is_valid(self) -> bool {
        self.row != -1 && self.col != -1
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}

impl std::str::FromStr for Move {
    type Err = BoardError;

    /// Parses `"row,col"` (also accepts whitespace-separated coordinates).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut it = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|t| !t.is_empty());
        let row = it.next().and_then(|t| t.parse::<i32>().ok());
        let col = it.next().and_then(|t| t.parse::<i32>().ok());
        match (row, col, it.next()) {
            (Some(row), Some(col), None) => Ok(Move::new(row, col)),
            _ => Err(BoardError::BadMove(s.to_string())),
        }
    }
}

pub const MIN_BOARD_SIZE: usize = 3;
pub const MAX_BOARD_SIZE: usize = 10;
pub const MIN_WIN_LENGTH: usize = 3;
pub const MAX_WIN_LENGTH: usize = 5;
pub const MIN_SEARCH_DEPTH: u32 = 2;
pub const MAX_SEARCH_DEPTH: u32 = 10;

/// Match configuration, fixed for the lifetime of a game. Always passed
/// explicitly; the engine keeps no global settings.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct GameConfig {
    pub rows: usize,
    pub cols: usize,
    /// Consecutive same-occupant cells required to win.
    pub win_length: usize,
    /// Ply budget before the search falls back to the heuristic.
    pub search_depth: u32,
}

impl GameConfig {
    pub fn new(rows: usize, cols: usize, win_length: usize, search_depth: u32) -> Self {
        Self { rows, cols, win_length, search_depth }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let size_ok = |n| (MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&n);
        if !size_ok(self.rows) || !size_ok(self.cols) {
            return Err(ConfigError::BoardSize { rows: self.rows, cols: self.cols });
        }
        if !(MIN_WIN_LENGTH..=MAX_WIN_LENGTH).contains(&self.win_length)
            || self.win_length > self.rows.max(self.cols)
        {
            return Err(ConfigError::WinLength(self.win_length));
        }
        if !(MIN_SEARCH_DEPTH..=MAX_SEARCH_DEPTH).contains(&self.search_depth) {
            return Err(ConfigError::SearchDepth(self.search_depth));
        }
        Ok(())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("board size {rows}x{cols} outside supported range 3-10")]
    BoardSize { rows: usize, cols: usize },
    #[error("win length {0} outside supported range or exceeds board dimensions")]
    WinLength(usize),
    #[error("search depth {0} outside supported range 2-10")]
    SearchDepth(u32),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("unrecognized move: {0:?}")]
    BadMove(String),
    #[error("unrecognized board cell {0:?}")]
    BadCell(char),
    #[error("ragged board rows: expected {expected} columns, row {row} has {got}")]
    RaggedRow { row: usize, expected: usize, got: usize },
    #[error("board size {rows}x{cols} outside supported range 3-10")]
    BadSize { rows: usize, cols: usize },
}

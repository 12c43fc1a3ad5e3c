use std::fmt;

use serde::{Deserialize, Serialize};

use super::board::CELL_COUNT;
use super::score::ScoreBoard;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mark {
    Empty,
    X,
    O,
}

impl Mark {
    pub fn opponent(&self) -> Option<Mark> {
        match self {
            Mark::X => Some(Mark::O),
            Mark::O => Some(Mark::X),
            Mark::Empty => None,
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Mark::Empty => ".",
            Mark::X => "X",
            Mark::O => "O",
        };
        write!(f, "{}", symbol)
    }
}

/// One of the 8 straight lines, with the mark that filled it. `cells` are
/// board indices in table order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinningLine {
    pub mark: Mark,
    pub cells: [usize; 3],
}

impl WinningLine {
    pub fn new(mark: Mark, cells: [usize; 3]) -> Self {
        Self { mark, cells }
    }

    pub fn contains(&self, index: usize) -> bool {
        self.cells.contains(&index)
    }
}

/// The winner and its line exist only inside `Won`, so a winner can never
/// coexist with an in-progress round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    InProgress,
    Won(WinningLine),
    Draw,
}

impl GamePhase {
    pub fn is_over(&self) -> bool {
        !matches!(self, GamePhase::InProgress)
    }
}

/// Rejected moves are returned as values and leave the session untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveError {
    InvalidIndex,
    CellOccupied,
    GameAlreadyOver,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::InvalidIndex => write!(f, "Cell index is out of range"),
            MoveError::CellOccupied => write!(f, "Cell is already marked"),
            MoveError::GameAlreadyOver => write!(f, "Game is already over"),
        }
    }
}

impl std::error::Error for MoveError {}

/// Render-ready copy of the full session state, handed out after every
/// command so the presentation layer can redraw from it alone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct GameSnapshot {
    pub board: [Mark; CELL_COUNT],
    pub phase: GamePhase,
    pub current_mark: Mark,
    pub last_move: Option<usize>,
    pub score: ScoreBoard,
}

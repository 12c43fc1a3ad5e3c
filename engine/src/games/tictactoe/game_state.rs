use super::board::{Board, CELL_COUNT};
use super::types::{GamePhase, Mark, MoveError};
use super::win_detector::check_win;

/// One round from empty board to a terminal phase. X always opens; the board
/// freezes as soon as the phase leaves `InProgress`.
#[derive(Clone, Copy, Debug)]
pub struct TicTacToeGameState {
    pub board: Board,
    pub current_mark: Mark,
    pub phase: GamePhase,
    pub last_move: Option<usize>,
}

impl TicTacToeGameState {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_mark: Mark::X,
            phase: GamePhase::InProgress,
            last_move: None,
        }
    }

    pub fn place_mark(&mut self, index: usize) -> Result<(), MoveError> {
        if index >= CELL_COUNT {
            return Err(MoveError::InvalidIndex);
        }

        if self.phase.is_over() {
            return Err(MoveError::GameAlreadyOver);
        }

        if self.board.get(index) != Some(Mark::Empty) {
            return Err(MoveError::CellOccupied);
        }

        self.board.set(index, self.current_mark);
        self.last_move = Some(index);

        self.check_game_over();

        if self.phase == GamePhase::InProgress {
            self.switch_turn();
        }

        Ok(())
    }

    fn switch_turn(&mut self) {
        if let Some(opponent) = self.current_mark.opponent() {
            self.current_mark = opponent;
        }
    }

    fn check_game_over(&mut self) {
        if let Some(line) = check_win(&self.board) {
            self.phase = GamePhase::Won(line);
            return;
        }

        if self.board.is_full() {
            self.phase = GamePhase::Draw;
        }
    }

    pub fn winner(&self) -> Option<Mark> {
        match self.phase {
            GamePhase::Won(line) => Some(line.mark),
            _ => None,
        }
    }
}

impl Default for TicTacToeGameState {
    fn default() -> Self {
        Self::new()
    }
}

use crate::games::SessionConfig;
use crate::log;

use super::game_state::TicTacToeGameState;
use super::score::ScoreBoard;
use super::types::{GamePhase, GameSnapshot, MoveError};

/// One interactive session: a sequence of rounds sharing a score. Every
/// renderer (browser tab, test) owns its own instance, so sessions never
/// share mutable state. All commands run to completion before the next one
/// is accepted; there is no background work.
pub struct TicTacToeSession {
    session_id: String,
    game_state: TicTacToeGameState,
    score: ScoreBoard,
}

impl TicTacToeSession {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            session_id: config.session_id,
            game_state: TicTacToeGameState::new(),
            score: ScoreBoard::new(),
        }
    }

    /// Applies the current mover's mark to `index`. The move that completes
    /// a line also increments the winner's score. Rejected moves leave
    /// board, phase and score untouched.
    pub fn place_mark(&mut self, index: usize) -> Result<GameSnapshot, MoveError> {
        self.game_state.place_mark(index)?;

        match self.game_state.phase {
            GamePhase::Won(line) => {
                self.score.record_win(line.mark);
                log!(
                    "[session:{}] Round won by {} on line {:?}",
                    self.session_id,
                    line.mark,
                    line.cells
                );
            }
            GamePhase::Draw => {
                log!("[session:{}] Round ended in a draw", self.session_id);
            }
            GamePhase::InProgress => {}
        }

        Ok(self.snapshot())
    }

    /// Starts a fresh round: empty board, X to move. The score carries over.
    pub fn reset_round(&mut self) -> GameSnapshot {
        self.game_state = TicTacToeGameState::new();
        log!("[session:{}] Round reset", self.session_id);
        self.snapshot()
    }

    /// Zeroes both win counters. The round in progress is untouched.
    pub fn reset_score(&mut self) -> GameSnapshot {
        self.score.reset();
        log!("[session:{}] Score reset", self.session_id);
        self.snapshot()
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: *self.game_state.board.cells(),
            phase: self.game_state.phase,
            current_mark: self.game_state.current_mark,
            last_move: self.game_state.last_move,
            score: self.score,
        }
    }
}

impl Default for TicTacToeSession {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

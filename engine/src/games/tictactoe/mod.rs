mod board;
mod game_state;
mod score;
mod session;
mod types;
mod win_detector;

pub use board::{Board, CELL_COUNT};
pub use game_state::TicTacToeGameState;
pub use score::ScoreBoard;
pub use session::TicTacToeSession;
pub use types::{GamePhase, GameSnapshot, Mark, MoveError, WinningLine};
pub use win_detector::{WIN_LINES, check_win};

pub mod games;
pub mod logger;

pub use games::SessionConfig;
pub use games::tictactoe::{
    Board, GamePhase, GameSnapshot, Mark, MoveError, ScoreBoard, TicTacToeGameState,
    TicTacToeSession, WinningLine,
};

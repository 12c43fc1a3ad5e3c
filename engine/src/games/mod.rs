mod session_config;

pub mod tictactoe;

pub use session_config::SessionConfig;

use serde::Serialize;

use super::types::Mark;

/// Win counters for one session. Rounds come and go, the score stays until
/// the session is dropped or explicitly reset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ScoreBoard {
    pub x_wins: u32,
    pub o_wins: u32,
}

impl ScoreBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_win(&mut self, mark: Mark) {
        match mark {
            Mark::X => self.x_wins += 1,
            Mark::O => self.o_wins += 1,
            Mark::Empty => {}
        }
    }

    pub fn wins(&self, mark: Mark) -> u32 {
        match mark {
            Mark::X => self.x_wins,
            Mark::O => self.o_wins,
            Mark::Empty => 0,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

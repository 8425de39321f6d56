use super::types::{Difficulty, Mark};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TicTacToeSessionSettings {
    pub human_mark: Mark,
    pub difficulty: Difficulty,
}

impl Default for TicTacToeSessionSettings {
    fn default() -> Self {
        Self {
            human_mark: Mark::X,
            difficulty: Difficulty::Hard,
        }
    }
}

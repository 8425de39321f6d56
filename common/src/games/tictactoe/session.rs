use crate::games::SessionRng;
use crate::{log, log_debug};
use super::bot_controller::{BotInput, calculate_move};
use super::error::{MatchError, MoveError};
use super::game_state::TicTacToeGameState;
use super::settings::TicTacToeSessionSettings;
use super::types::{Difficulty, GameStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchPhase {
    AwaitingHuman,
    AwaitingComputer,
    GameOver(GameStatus),
}

impl MatchPhase {
    pub fn is_over(&self) -> bool {
        matches!(self, MatchPhase::GameOver(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComputerMove {
    pub position: Option<usize>,
    pub phase: MatchPhase,
}

pub struct TicTacToeMatch {
    game_state: TicTacToeGameState,
    difficulty: Difficulty,
    phase: MatchPhase,
    rng: SessionRng,
}

impl TicTacToeMatch {
    pub fn new(settings: &TicTacToeSessionSettings, rng: SessionRng) -> Result<Self, MoveError> {
        let game_state = TicTacToeGameState::new(settings.human_mark)?;
        Ok(Self {
            game_state,
            difficulty: settings.difficulty,
            phase: MatchPhase::AwaitingHuman,
            rng,
        })
    }

    pub fn game_state(&self) -> &TicTacToeGameState {
        &self.game_state
    }

    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    pub fn status(&self) -> GameStatus {
        self.game_state.check_status()
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn play_human(&mut self, position: usize) -> Result<MatchPhase, MatchError> {
        if self.phase != MatchPhase::AwaitingHuman {
            return Err(MatchError::NotHumanTurn);
        }

        let human_mark = self.game_state.human_mark();
        if let Err(e) = self.game_state.apply_move(position, human_mark) {
            log!("Human {} failed to place mark at {}: {}", human_mark, position, e);
            return Err(e.into());
        }

        self.phase = self.phase_after_move(MatchPhase::AwaitingComputer);
        Ok(self.phase)
    }

    pub fn play_computer(&mut self) -> Result<ComputerMove, MatchError> {
        if self.phase != MatchPhase::AwaitingComputer {
            return Err(MatchError::NotComputerTurn);
        }

        let input = BotInput::from_game_state(&self.game_state);
        let Some(position) = calculate_move(self.difficulty, &input, &mut self.rng) else {
            log!("Computer {} has no moves left, resolving as a draw", input.bot_mark);
            self.phase = MatchPhase::GameOver(GameStatus::Draw);
            return Ok(ComputerMove {
                position: None,
                phase: self.phase,
            });
        };

        self.game_state.apply_move(position, input.bot_mark)?;
        log_debug!(
            "Computer {} ({}) placed mark at {}",
            input.bot_mark,
            self.difficulty,
            position
        );

        self.phase = self.phase_after_move(MatchPhase::AwaitingHuman);
        Ok(ComputerMove {
            position: Some(position),
            phase: self.phase,
        })
    }

    pub fn reset(&mut self) {
        self.game_state.reset();
        self.phase = MatchPhase::AwaitingHuman;
    }

    fn phase_after_move(&self, next: MatchPhase) -> MatchPhase {
        let status = self.game_state.check_status();
        if status.is_terminal() {
            MatchPhase::GameOver(status)
        } else {
            next
        }
    }

    #[cfg(test)]
    fn with_game_state(game_state: TicTacToeGameState, difficulty: Difficulty) -> Self {
        Self {
            game_state,
            difficulty,
            phase: MatchPhase::AwaitingHuman,
            rng: SessionRng::new(0),
        }
    }
}

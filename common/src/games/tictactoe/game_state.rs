use super::board::Board;
use super::error::MoveError;
use super::types::{CELL_COUNT, GameStatus, Mark, WinningLine};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicTacToeGameState {
    board: Board,
    human_mark: Mark,
    computer_mark: Mark,
    current_mark: Mark,
    is_over: bool,
}

impl Default for TicTacToeGameState {
    fn default() -> Self {
        Self {
            board: Board::new(),
            human_mark: Mark::X,
            computer_mark: Mark::O,
            current_mark: Mark::X,
            is_over: false,
        }
    }
}

impl TicTacToeGameState {
    pub fn new(human_mark: Mark) -> Result<Self, MoveError> {
        let computer_mark = human_mark.opponent().ok_or(MoveError::EmptyMark)?;
        Ok(Self {
            board: Board::new(),
            human_mark,
            computer_mark,
            current_mark: human_mark,
            is_over: false,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn human_mark(&self) -> Mark {
        self.human_mark
    }

    pub fn computer_mark(&self) -> Mark {
        self.computer_mark
    }

    pub fn current_mark(&self) -> Mark {
        self.current_mark
    }

    pub fn is_over(&self) -> bool {
        self.is_over
    }

    pub fn apply_move(&mut self, position: usize, mark: Mark) -> Result<(), MoveError> {
        if self.is_over {
            return Err(MoveError::GameOver);
        }

        let Some(next_mark) = mark.opponent() else {
            return Err(MoveError::EmptyMark);
        };

        if position >= CELL_COUNT {
            return Err(MoveError::OutOfBounds(position));
        }

        if !self.board.is_empty_at(position) {
            return Err(MoveError::CellOccupied(position));
        }

        self.board.set(position, mark);
        self.current_mark = next_mark;
        self.is_over = self.check_status().is_terminal();

        Ok(())
    }

    pub fn check_status(&self) -> GameStatus {
        if let Some(line) = self.board.winning_line() {
            return GameStatus::Won(line.mark);
        }

        if self.board.is_full() {
            return GameStatus::Draw;
        }

        GameStatus::InProgress
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        self.board.winning_line()
    }

    pub fn reset(&mut self) {
        self.board.clear();
        self.current_mark = self.human_mark;
        self.is_over = false;
    }

    #[cfg(test)]
    pub(crate) fn with_board(human_mark: Mark, board: Board) -> Self {
        let mut state = Self::new(human_mark).unwrap_or_default();
        state.board = board;
        state.is_over = state.check_status().is_terminal();
        state
    }
}

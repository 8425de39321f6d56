mod board;
mod bot_controller;
mod error;
mod game_state;
mod session;
mod settings;
mod types;
mod win_detector;

pub use board::{Board, get_available_moves};
pub use bot_controller::{
    BotInput, MEDIUM_RANDOM_CHANCE, MoveEvaluation, calculate_minimax_move, calculate_move,
    calculate_random_move, evaluate_moves, select_move,
};
pub use error::{MatchError, MoveError};
pub use game_state::TicTacToeGameState;
pub use session::{ComputerMove, MatchPhase, TicTacToeMatch};
pub use settings::TicTacToeSessionSettings;
pub use types::{BOARD_SIZE, CELL_COUNT, Difficulty, GameStatus, Mark, WinningLine};
pub use win_detector::{WINNING_LINES, check_win_with_line};

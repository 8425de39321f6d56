use crate::games::SessionRng;
use super::board::{Board, get_available_moves};
use super::game_state::TicTacToeGameState;
use super::types::{Difficulty, Mark};

pub const MEDIUM_RANDOM_CHANCE: f64 = 0.5;

const WIN_SCORE: i32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BotInput {
    pub board: Board,
    pub bot_mark: Mark,
    pub opponent_mark: Mark,
}

impl BotInput {
    pub fn new(board: Board, bot_mark: Mark, opponent_mark: Mark) -> Self {
        Self {
            board,
            bot_mark,
            opponent_mark,
        }
    }

    pub fn from_game_state(state: &TicTacToeGameState) -> Self {
        Self::new(*state.board(), state.computer_mark(), state.human_mark())
    }

    fn has_valid_marks(&self) -> bool {
        self.bot_mark.opponent() == Some(self.opponent_mark)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveEvaluation {
    pub position: usize,
    pub score: i32,
}

pub fn select_move(
    board: &Board,
    difficulty: Difficulty,
    computer_mark: Mark,
    opponent_mark: Mark,
    rng: &mut SessionRng,
) -> Option<usize> {
    calculate_move(
        difficulty,
        &BotInput::new(*board, computer_mark, opponent_mark),
        rng,
    )
}

pub fn calculate_move(
    difficulty: Difficulty,
    input: &BotInput,
    rng: &mut SessionRng,
) -> Option<usize> {
    if !input.has_valid_marks() {
        return None;
    }

    match difficulty {
        Difficulty::Easy => calculate_random_move(input, rng),
        Difficulty::Medium => {
            if rng.chance(MEDIUM_RANDOM_CHANCE) {
                calculate_random_move(input, rng)
            } else {
                calculate_minimax_move(input)
            }
        }
        Difficulty::Hard => calculate_minimax_move(input),
    }
}

pub fn calculate_random_move(input: &BotInput, rng: &mut SessionRng) -> Option<usize> {
    if !input.has_valid_marks() {
        return None;
    }
    rng.choose(&get_available_moves(&input.board))
}

pub fn calculate_minimax_move(input: &BotInput) -> Option<usize> {
    let mut best_move = None;
    let mut best_score = i32::MIN;

    for evaluation in evaluate_moves(input) {
        if evaluation.score > best_score {
            best_score = evaluation.score;
            best_move = Some(evaluation.position);
        }
    }

    best_move
}

pub fn evaluate_moves(input: &BotInput) -> Vec<MoveEvaluation> {
    if !input.has_valid_marks() {
        return Vec::new();
    }

    let mut board = input.board;
    let available_moves = get_available_moves(&board);
    let mut evaluations = Vec::with_capacity(available_moves.len());

    for position in available_moves {
        board.set(position, input.bot_mark);
        let score = minimax(
            &mut board,
            0,
            false,
            input.bot_mark,
            input.opponent_mark,
            i32::MIN,
            i32::MAX,
        );
        board.set(position, Mark::Empty);

        evaluations.push(MoveEvaluation { position, score });
    }

    evaluations
}

fn minimax(
    board: &mut Board,
    depth: i32,
    is_maximizing: bool,
    bot_mark: Mark,
    opponent_mark: Mark,
    mut alpha: i32,
    mut beta: i32,
) -> i32 {
    if board.has_line(bot_mark) {
        return WIN_SCORE - depth;
    }
    if board.has_line(opponent_mark) {
        return depth - WIN_SCORE;
    }
    if board.is_full() {
        return 0;
    }

    let moves = get_available_moves(board);

    if is_maximizing {
        let mut max_eval = i32::MIN;
        for position in moves {
            board.set(position, bot_mark);
            let eval = minimax(board, depth + 1, false, bot_mark, opponent_mark, alpha, beta);
            board.set(position, Mark::Empty);

            max_eval = max_eval.max(eval);
            alpha = alpha.max(eval);
            if beta <= alpha {
                break;
            }
        }
        max_eval
    } else {
        let mut min_eval = i32::MAX;
        for position in moves {
            board.set(position, opponent_mark);
            let eval = minimax(board, depth + 1, true, bot_mark, opponent_mark, alpha, beta);
            board.set(position, Mark::Empty);

            min_eval = min_eval.min(eval);
            beta = beta.min(eval);
            if beta <= alpha {
                break;
            }
        }
        min_eval
    }
}

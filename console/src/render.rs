use tictactoe_common::games::tictactoe::{
    BOARD_SIZE, Board, GameStatus, MatchPhase, TicTacToeMatch, WinningLine,
};

/// Empty cells show their keypad number; winning cells are bracketed.
pub fn render_board(board: &Board, winning_line: Option<WinningLine>) -> String {
    let rows: Vec<String> = (0..BOARD_SIZE)
        .map(|row| {
            (0..BOARD_SIZE)
                .map(|col| {
                    let position = row * BOARD_SIZE + col;
                    render_cell(board, position, winning_line)
                })
                .collect::<Vec<_>>()
                .join("|")
        })
        .collect();
    rows.join("\n---+---+---\n")
}

fn render_cell(board: &Board, position: usize, winning_line: Option<WinningLine>) -> String {
    match board.get(position) {
        Some(mark) if !mark.is_empty() => {
            if winning_line.is_some_and(|line| line.contains(position)) {
                format!("[{}]", mark)
            } else {
                format!(" {} ", mark)
            }
        }
        _ => format!(" {} ", position + 1),
    }
}

pub fn status_message(game: &TicTacToeMatch) -> String {
    let human_mark = game.game_state().human_mark();
    match game.phase() {
        MatchPhase::AwaitingHuman => format!("Your turn ({})", human_mark),
        MatchPhase::AwaitingComputer => "Computer is thinking...".to_string(),
        MatchPhase::GameOver(GameStatus::Won(mark)) if mark == human_mark => "You win!".to_string(),
        MatchPhase::GameOver(GameStatus::Won(_)) => "Computer wins!".to_string(),
        MatchPhase::GameOver(_) => "It is a draw.".to_string(),
    }
}

pub fn render_game(game: &TicTacToeMatch) -> String {
    let state = game.game_state();
    format!(
        "{}\n\n{}",
        render_board(state.board(), state.winning_line()),
        status_message(game)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_common::games::SessionRng;
    use tictactoe_common::games::tictactoe::{Difficulty, Mark, TicTacToeSessionSettings};

    const E: Mark = Mark::Empty;
    const X: Mark = Mark::X;
    const O: Mark = Mark::O;

    #[test]
    fn test_empty_board_shows_keypad_numbers() {
        let rendered = render_board(&Board::new(), None);
        assert_eq!(
            rendered,
            " 1 | 2 | 3 \n---+---+---\n 4 | 5 | 6 \n---+---+---\n 7 | 8 | 9 "
        );
    }

    #[test]
    fn test_winning_line_is_highlighted() {
        let board = Board::from_cells([X, X, X, O, O, E, E, E, E]);
        let rendered = render_board(&board, board.winning_line());
        let first_row = rendered.lines().next().unwrap();
        assert_eq!(first_row, "[X]|[X]|[X]");
        assert!(rendered.contains(" O | O | 6 "));
    }

    #[test]
    fn test_status_follows_match_phase() {
        let settings = TicTacToeSessionSettings {
            human_mark: O,
            difficulty: Difficulty::Hard,
        };
        let mut game = TicTacToeMatch::new(&settings, SessionRng::new(1)).unwrap();
        assert_eq!(status_message(&game), "Your turn (O)");
        game.play_human(4).unwrap();
        assert_eq!(status_message(&game), "Computer is thinking...");
        assert!(render_game(&game).ends_with("Computer is thinking..."));
    }
}

use std::time::Duration;

use tictactoe_common::games::tictactoe::{MatchError, MatchPhase, MoveError, TicTacToeMatch};
use tictactoe_common::{log, log_debug};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Lines};

use crate::command::{ConsoleCommand, HELP_TEXT, parse_command};
use crate::render::render_game;

#[derive(Debug, Default, PartialEq, Eq)]
pub struct CommandOutcome {
    pub output: Vec<String>,
    pub computer_to_move: bool,
    pub quit: bool,
}

impl CommandOutcome {
    fn say(message: impl Into<String>) -> Self {
        Self {
            output: vec![message.into()],
            ..Self::default()
        }
    }
}

pub struct ConsoleGame {
    game: TicTacToeMatch,
    thinking_delay: Duration,
}

impl ConsoleGame {
    pub fn new(game: TicTacToeMatch, thinking_delay: Duration) -> Self {
        Self {
            game,
            thinking_delay,
        }
    }

    pub fn game(&self) -> &TicTacToeMatch {
        &self.game
    }

    pub fn handle_input(&mut self, input: &str) -> CommandOutcome {
        match parse_command(input) {
            Ok(command) => self.handle_command(command),
            Err(message) => CommandOutcome::say(message),
        }
    }

    pub fn handle_command(&mut self, command: ConsoleCommand) -> CommandOutcome {
        match command {
            ConsoleCommand::Place(position) => self.place(position),
            ConsoleCommand::Reset => {
                self.game.reset();
                log!("New game started (difficulty {})", self.game.difficulty());
                CommandOutcome::say(render_game(&self.game))
            }
            ConsoleCommand::SetDifficulty(difficulty) => {
                self.game.set_difficulty(difficulty);
                CommandOutcome::say(format!("Difficulty set to {}", difficulty))
            }
            ConsoleCommand::Redraw => CommandOutcome::say(render_game(&self.game)),
            ConsoleCommand::Help => CommandOutcome::say(HELP_TEXT),
            ConsoleCommand::Quit => CommandOutcome {
                quit: true,
                ..CommandOutcome::default()
            },
        }
    }

    fn place(&mut self, position: usize) -> CommandOutcome {
        match self.game.play_human(position) {
            Ok(phase) => CommandOutcome {
                output: vec![render_game(&self.game)],
                computer_to_move: phase == MatchPhase::AwaitingComputer,
                quit: false,
            },
            Err(MatchError::NotHumanTurn) if self.game.phase().is_over() => {
                CommandOutcome::say("The game is over. Type 'reset' to play again.")
            }
            Err(MatchError::NotHumanTurn) => CommandOutcome::say("Wait for the computer to move."),
            Err(MatchError::Move(MoveError::CellOccupied(taken))) => {
                CommandOutcome::say(format!("Cell {} is already taken", taken + 1))
            }
            Err(e) => CommandOutcome::say(e.to_string()),
        }
    }

    pub async fn play_computer_turn<R>(
        &mut self,
        lines: &mut Lines<R>,
    ) -> std::io::Result<CommandOutcome>
    where
        R: AsyncBufRead + Unpin,
    {
        let ignored = wait_ignoring_input(self.thinking_delay, lines).await?;

        let mut outcome = match self.game.play_computer() {
            Ok(_) => CommandOutcome::say(render_game(&self.game)),
            Err(e) => {
                log!("Computer turn failed: {}", e);
                CommandOutcome::say(e.to_string())
            }
        };

        if ignored > 0 {
            log_debug!("Dropped {} input line(s) during the computer turn", ignored);
            outcome.output.insert(
                0,
                format!(
                    "Ignored {} input line(s) typed while the computer was thinking.",
                    ignored
                ),
            );
        }
        Ok(outcome)
    }
}

// Lines read while the computer is to move are discarded, never queued as moves.
async fn wait_ignoring_input<R>(delay: Duration, lines: &mut Lines<R>) -> std::io::Result<usize>
where
    R: AsyncBufRead + Unpin,
{
    let sleep = tokio::time::sleep(delay);
    tokio::pin!(sleep);

    let mut ignored = 0;
    let mut input_closed = false;
    loop {
        tokio::select! {
            _ = &mut sleep => return Ok(ignored),
            line = lines.next_line(), if !input_closed => match line? {
                Some(_) => ignored += 1,
                None => input_closed = true,
            },
        }
    }
}

fn print_outcome(outcome: &CommandOutcome) {
    for line in &outcome.output {
        println!("{}\n", line);
    }
}

pub async fn run_console_game(mut console: ConsoleGame) -> std::io::Result<()> {
    println!("{}\n", HELP_TEXT);
    println!("{}\n", render_game(console.game()));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let outcome = console.handle_input(&line);
        print_outcome(&outcome);

        if outcome.quit {
            break;
        }

        if outcome.computer_to_move {
            let computer_outcome = console.play_computer_turn(&mut lines).await?;
            print_outcome(&computer_outcome);
        }
    }

    log!("Leaving the game");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_common::games::SessionRng;
    use tictactoe_common::games::tictactoe::{
        Difficulty, GameStatus, Mark, TicTacToeSessionSettings,
    };

    fn create_console(difficulty: Difficulty) -> ConsoleGame {
        create_console_with_delay(difficulty, Duration::ZERO)
    }

    fn create_console_with_delay(difficulty: Difficulty, delay: Duration) -> ConsoleGame {
        let settings = TicTacToeSessionSettings {
            human_mark: Mark::X,
            difficulty,
        };
        let game = TicTacToeMatch::new(&settings, SessionRng::new(8)).unwrap();
        ConsoleGame::new(game, delay)
    }

    fn no_input() -> Lines<BufReader<&'static [u8]>> {
        BufReader::new(&b""[..]).lines()
    }

    #[test]
    fn test_place_hands_turn_to_computer() {
        let mut console = create_console(Difficulty::Hard);
        let outcome = console.handle_input("5");
        assert!(outcome.computer_to_move);
        assert!(!outcome.quit);
        assert_eq!(console.game().game_state().board().get(4), Some(Mark::X));
    }

    #[test]
    fn test_second_place_waits_for_computer() {
        let mut console = create_console(Difficulty::Hard);
        console.handle_input("5");
        let outcome = console.handle_input("1");
        assert_eq!(outcome.output, vec!["Wait for the computer to move.".to_string()]);
        assert!(!outcome.computer_to_move);
    }

    #[test]
    fn test_bad_input_reports_without_turn() {
        let mut console = create_console(Difficulty::Hard);
        let outcome = console.handle_input("42");
        assert!(!outcome.computer_to_move);
        assert_eq!(outcome.output.len(), 1);
        assert_eq!(console.game().phase(), MatchPhase::AwaitingHuman);
    }

    #[test]
    fn test_quit_and_difficulty_commands() {
        let mut console = create_console(Difficulty::Hard);
        assert!(console.handle_input("quit").quit);
        let outcome = console.handle_input("difficulty easy");
        assert_eq!(outcome.output, vec!["Difficulty set to easy".to_string()]);
        assert_eq!(console.game().difficulty(), Difficulty::Easy);
    }

    #[tokio::test]
    async fn test_computer_turn_after_delay() {
        let mut console = create_console(Difficulty::Hard);
        console.handle_input("1");
        let outcome = console.play_computer_turn(&mut no_input()).await.unwrap();
        assert!(outcome.output[0].ends_with("Your turn (X)"));
        assert_eq!(console.game().game_state().board().get(4), Some(Mark::O));

        let occupied = console.handle_input("5");
        assert_eq!(occupied.output, vec!["Cell 5 is already taken".to_string()]);
    }

    #[tokio::test]
    async fn test_full_game_then_reset() {
        let mut console = create_console(Difficulty::Hard);
        while !console.game().phase().is_over() {
            let position = console.game().game_state().board().available_moves()[0];
            let outcome = console.handle_command(ConsoleCommand::Place(position));
            if outcome.computer_to_move {
                console.play_computer_turn(&mut no_input()).await.unwrap();
            }
        }
        assert_ne!(console.game().status(), GameStatus::Won(Mark::X));

        let blocked = console.handle_input("1");
        assert_eq!(
            blocked.output,
            vec!["The game is over. Type 'reset' to play again.".to_string()]
        );

        console.handle_input("reset");
        assert_eq!(console.game().phase(), MatchPhase::AwaitingHuman);
    }

    #[tokio::test]
    async fn test_input_during_computer_turn_is_dropped() {
        let mut console = create_console_with_delay(Difficulty::Hard, Duration::from_millis(20));
        console.handle_input("1");

        let mut typed_ahead = BufReader::new(&b"2\n3\n"[..]).lines();
        let outcome = console.play_computer_turn(&mut typed_ahead).await.unwrap();
        assert_eq!(
            outcome.output[0],
            "Ignored 2 input line(s) typed while the computer was thinking."
        );
        assert!(outcome.output[1].ends_with("Your turn (X)"));
        assert_eq!(typed_ahead.next_line().await.unwrap(), None);

        let board = console.game().game_state().board();
        assert_eq!(board.get(1), Some(Mark::Empty));
        assert_eq!(board.get(2), Some(Mark::Empty));
        assert_eq!(board.get(4), Some(Mark::O));
        assert_eq!(console.game().phase(), MatchPhase::AwaitingHuman);
    }
}

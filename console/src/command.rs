use tictactoe_common::games::tictactoe::{CELL_COUNT, Difficulty};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleCommand {
    /// Board index, already converted from the 1-9 keypad number.
    Place(usize),
    Reset,
    SetDifficulty(Difficulty),
    Redraw,
    Help,
    Quit,
}

pub const HELP_TEXT: &str = "\
Commands:
  1-9                 place your mark (1 = top-left, 9 = bottom-right)
  reset, r            start a new game
  difficulty <level>  change difficulty: easy, medium or hard (alias: d)
  help, h             show this help
  quit, q             leave the game";

pub fn parse_command(input: &str) -> Result<ConsoleCommand, String> {
    let mut parts = input.split_whitespace();
    let Some(head) = parts.next() else {
        return Ok(ConsoleCommand::Redraw);
    };
    let argument = parts.next();

    if let Ok(number) = head.parse::<usize>() {
        if (1..=CELL_COUNT).contains(&number) {
            return Ok(ConsoleCommand::Place(number - 1));
        }
        return Err(format!("Choose a cell from 1 to {}", CELL_COUNT));
    }

    match head.to_ascii_lowercase().as_str() {
        "reset" | "r" | "new" => Ok(ConsoleCommand::Reset),
        "difficulty" | "d" => match argument {
            Some(level) => level.parse().map(ConsoleCommand::SetDifficulty),
            None => Err("Usage: difficulty <easy|medium|hard>".to_string()),
        },
        "help" | "h" | "?" => Ok(ConsoleCommand::Help),
        "quit" | "q" | "exit" => Ok(ConsoleCommand::Quit),
        other => Err(format!("Unknown command '{}', type 'help' for a list", other)),
    }
}

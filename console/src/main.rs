mod command;
mod config;
mod render;
mod runner;

use std::path::PathBuf;

use clap::Parser;
use tictactoe_common::config::Validate;
use tictactoe_common::games::SessionRng;
use tictactoe_common::games::tictactoe::{Difficulty, TicTacToeMatch};
use tictactoe_common::{log, logger};

use config::{Config, get_config_manager};
use runner::{ConsoleGame, run_console_game};

#[derive(Parser)]
#[command(name = "tictactoe_console", about = "Play tic-tac-toe against the computer")]
struct Args {
    /// easy, medium or hard
    #[arg(long)]
    difficulty: Option<Difficulty>,
    #[arg(long)]
    seed: Option<u64>,
    /// Pause before the computer answers, in milliseconds
    #[arg(long)]
    delay_ms: Option<u64>,
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    use_log_prefix: bool,
    #[arg(long)]
    verbose: bool,
    /// Write the effective settings back to the config file
    #[arg(long)]
    save_config: bool,
}

impl Args {
    fn apply_to(&self, mut config: Config) -> Config {
        if let Some(difficulty) = self.difficulty {
            config.difficulty = difficulty;
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(delay_ms) = self.delay_ms {
            config.thinking_delay_ms = delay_ms;
        }
        config.verbose |= self.verbose;
        config
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config_manager = get_config_manager(args.config.clone());
    let config = args.apply_to(config_manager.get_config()?);
    config.validate()?;

    let prefix = if args.use_log_prefix {
        Some("Console".to_string())
    } else {
        None
    };
    logger::init_logger(prefix, config.verbose);

    if args.save_config {
        config_manager.set_config(&config)?;
        log!("Saved settings to the config file");
    }

    let rng = SessionRng::from_seed_or_random(config.seed);
    let game = TicTacToeMatch::new(&config.session_settings(), rng)?;
    log!(
        "Starting game: difficulty {}, you play {}, seed {}",
        game.difficulty(),
        config.human_mark,
        game.seed()
    );

    run_console_game(ConsoleGame::new(game, config.thinking_delay())).await?;

    Ok(())
}

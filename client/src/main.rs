mod config;
mod console;
mod render;

use std::io;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tictactoe_common::games::tictactoe::{Mark, TicTacToeSession, TicTacToeSessionSettings};
use tictactoe_common::{log, log_warn, logger};

use config::get_config_manager;
use console::Console;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum HumanMark {
    X,
    O,
}

impl From<HumanMark> for Mark {
    fn from(mark: HumanMark) -> Self {
        match mark {
            HumanMark::X => Mark::X,
            HumanMark::O => Mark::O,
        }
    }
}

#[derive(Parser)]
#[command(name = "tictactoe", about = "Play tic-tac-toe against a perfect minimax bot")]
struct Args {
    /// Config file, defaults to tictactoe_config.yaml next to the executable
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long)]
    use_log_prefix: bool,

    /// Overrides the mark from the config file; X always moves first
    #[arg(long, value_enum)]
    human_mark: Option<HumanMark>,

    /// Write the effective config back to the config file before playing
    #[arg(long)]
    save_config: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config_manager = get_config_manager(args.config);
    let mut config = config_manager.get_config()?;
    if let Some(human_mark) = args.human_mark {
        config.tictactoe.human_mark = human_mark.into();
    }

    let prefix = if args.use_log_prefix {
        Some(config.log.prefix.clone().unwrap_or_else(|| "Client".to_string()))
    } else {
        config.log.prefix.clone()
    };
    logger::init_logger(prefix, config.log.level);

    if args.save_config
        && let Err(e) = config_manager.set_config(&config)
    {
        log_warn!("Failed to save config: {}", e);
    }

    let settings = TicTacToeSessionSettings::from(&config.tictactoe);
    let mut session = TicTacToeSession::new(settings)?;
    log!("Starting session, human plays {}", settings.human_mark);

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout(), config.tictactoe.show_hints);
    console.run(&mut session)?;

    let scores = session.scores();
    log!(
        "Session finished: human {}, bot {}, ties {}",
        scores.human_wins,
        scores.bot_wins,
        scores.ties
    );

    Ok(())
}

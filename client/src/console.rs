use std::error::Error;
use std::io::{BufRead, Write};

use tictactoe_common::games::tictactoe::{Move, TicTacToeSession, score_moves};
use tictactoe_common::{GameError, log_debug};

use crate::render::{render_board, render_hints, render_result, render_scores};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Place(Move),
    NewGame,
    ResetScores,
    ToggleHints,
    Quit,
}

pub fn parse_command(line: &str) -> Result<Command, String> {
    match line.trim().to_ascii_lowercase().as_str() {
        "n" | "new" => Ok(Command::NewGame),
        "r" | "reset" => Ok(Command::ResetScores),
        "h" | "hints" => Ok(Command::ToggleHints),
        "q" | "quit" | "exit" => Ok(Command::Quit),
        other => other
            .parse::<usize>()
            .ok()
            .and_then(|cell| cell.checked_sub(1))
            .and_then(Move::new)
            .map(Command::Place)
            .ok_or_else(|| format!("Unknown command '{}': type 1-9, n, r, h or q", other)),
    }
}

pub struct Console<R, W> {
    input: R,
    output: W,
    show_hints: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, show_hints: bool) -> Self {
        Self {
            input,
            output,
            show_hints,
        }
    }

    /// Runs until `q` or end of input.
    pub fn run(&mut self, session: &mut TicTacToeSession) -> Result<(), Box<dyn Error>> {
        if let Some(opening) = session.last_move() {
            writeln!(self.output, "Bot opens on {}", opening)?;
        }

        loop {
            self.print_state(session)?;

            write!(self.output, "> ")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                writeln!(self.output)?;
                break;
            }

            let command = match parse_command(&line) {
                Ok(command) => command,
                Err(message) => {
                    writeln!(self.output, "{}", message)?;
                    continue;
                }
            };
            log_debug!("Command {:?}", command);

            match command {
                Command::Quit => break,
                Command::NewGame => {
                    if let Some(opening) = session.new_game()? {
                        writeln!(self.output, "Bot opens on {}", opening)?;
                    }
                }
                Command::ResetScores => {
                    session.reset_scores();
                    writeln!(self.output, "Scores reset")?;
                }
                Command::ToggleHints => {
                    self.show_hints = !self.show_hints;
                    let state = if self.show_hints { "on" } else { "off" };
                    writeln!(self.output, "Hints {}", state)?;
                }
                Command::Place(mv) => self.place(session, mv)?,
            }
        }

        Ok(())
    }

    fn place(&mut self, session: &mut TicTacToeSession, mv: Move) -> Result<(), Box<dyn Error>> {
        match session.play_human_move(mv) {
            Ok(report) => {
                if let Some(bot_move) = report.bot_move {
                    writeln!(self.output, "Bot plays {}", bot_move)?;
                }
                Ok(())
            }
            Err(GameError::InvalidMove(taken)) => {
                writeln!(self.output, "Cell {} is already marked", taken)?;
                Ok(())
            }
            Err(GameError::GameOver) => {
                writeln!(self.output, "This game is over, type n for a new one")?;
                Ok(())
            }
            Err(err) => Err(err.into()),
        }
    }

    fn print_state(&mut self, session: &TicTacToeSession) -> Result<(), Box<dyn Error>> {
        writeln!(self.output)?;
        writeln!(self.output, "{}", render_board(session))?;
        writeln!(self.output, "{}", render_scores(session))?;

        if let Some(result) = session.result() {
            writeln!(self.output, "{}", render_result(result))?;
            writeln!(self.output, "n = new game, r = reset scores, q = quit")?;
        } else if self.show_hints {
            let hints = score_moves(session.board(), session.human_mark())?;
            writeln!(self.output, "{}", render_hints(&hints))?;
        }
        Ok(())
    }
}

use thiserror::Error;

use crate::games::tictactoe::{Mark, Move};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Cell {0} is already marked")]
    InvalidMove(Move),

    #[error("Invalid state: {0}")]
    InvalidState(&'static str),

    #[error("Cell index {0} is out of range")]
    OutOfRange(usize),

    #[error("Game is already over")]
    GameOver,

    #[error("Not {0}'s turn")]
    NotYourTurn(Mark),

    #[error("Failed to parse board: {0}")]
    Parse(String),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to access config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(String),

    #[error("Failed to deserialize config: {0}")]
    Deserialize(String),

    #[error("Config validation error: {0}")]
    Validation(String),
}

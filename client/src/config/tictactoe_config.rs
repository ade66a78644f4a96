use serde::{Deserialize, Serialize};
use tictactoe_common::config::Validate;
use tictactoe_common::games::tictactoe::{Mark, TicTacToeSessionSettings};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct TicTacToeConfig {
    pub human_mark: Mark,
    pub show_hints: bool,
}

impl Validate for TicTacToeConfig {
    fn validate(&self) -> Result<(), String> {
        if self.human_mark == Mark::Empty {
            return Err("human_mark must be X or O".to_string());
        }
        Ok(())
    }
}

impl Default for TicTacToeConfig {
    fn default() -> Self {
        Self {
            human_mark: Mark::X,
            show_hints: false,
        }
    }
}

impl From<&TicTacToeConfig> for TicTacToeSessionSettings {
    fn from(config: &TicTacToeConfig) -> Self {
        Self {
            human_mark: config.human_mark,
        }
    }
}

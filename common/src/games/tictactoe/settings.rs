use super::types::Mark;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TicTacToeSessionSettings {
    pub human_mark: Mark,
}

impl Default for TicTacToeSessionSettings {
    fn default() -> Self {
        Self {
            human_mark: Mark::X,
        }
    }
}

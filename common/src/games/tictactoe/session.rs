use crate::error::GameError;
use crate::log;
use super::board::Board;
use super::bot_controller::{BotInput, calculate_move};
use super::game_state::TicTacToeGameState;
use super::scoreboard::{RoundResult, Scoreboard};
use super::settings::TicTacToeSessionSettings;
use super::types::{Mark, Move, Outcome, WinningLine};

/// What happened during one human interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnReport {
    pub human_move: Move,
    pub bot_move: Option<Move>,
    pub status: Outcome,
    pub result: Option<RoundResult>,
}

/// A human playing a series of games against the bot, with a running score.
#[derive(Debug, Clone)]
pub struct TicTacToeSession {
    settings: TicTacToeSessionSettings,
    game_state: TicTacToeGameState,
    scores: Scoreboard,
}

impl TicTacToeSession {
    pub fn new(settings: TicTacToeSessionSettings) -> Result<Self, GameError> {
        let mut session = Self {
            settings,
            game_state: TicTacToeGameState::new(settings.human_mark)?,
            scores: Scoreboard::default(),
        };
        session.play_bot_turn()?;
        Ok(session)
    }

    pub fn play_human_move(&mut self, mv: Move) -> Result<TurnReport, GameError> {
        let human_mark = self.game_state.human_mark;
        let mut result = self.commit(human_mark, mv)?;

        let bot_move = if result.is_none() {
            let bot_move = self.play_bot_turn()?;
            result = RoundResult::from_outcome(self.game_state.status, human_mark);
            bot_move
        } else {
            None
        };

        Ok(TurnReport {
            human_move: mv,
            bot_move,
            status: self.game_state.status,
            result,
        })
    }

    /// Starts a fresh board and keeps the scores. Returns the bot's opening
    /// move when the bot holds X.
    pub fn new_game(&mut self) -> Result<Option<Move>, GameError> {
        self.game_state = TicTacToeGameState::new(self.settings.human_mark)?;
        log!("New game, human plays {}", self.settings.human_mark);
        self.play_bot_turn()
    }

    pub fn reset_scores(&mut self) {
        self.scores.reset();
        log!("Scores reset");
    }

    pub fn board(&self) -> &Board {
        &self.game_state.board
    }

    pub fn status(&self) -> Outcome {
        self.game_state.status
    }

    pub fn is_game_over(&self) -> bool {
        self.game_state.is_over()
    }

    pub fn scores(&self) -> &Scoreboard {
        &self.scores
    }

    pub fn human_mark(&self) -> Mark {
        self.game_state.human_mark
    }

    pub fn bot_mark(&self) -> Mark {
        self.game_state.bot_mark
    }

    pub fn last_move(&self) -> Option<Move> {
        self.game_state.last_move
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        self.game_state.winning_line()
    }

    pub fn result(&self) -> Option<RoundResult> {
        RoundResult::from_outcome(self.game_state.status, self.game_state.human_mark)
    }

    fn play_bot_turn(&mut self) -> Result<Option<Move>, GameError> {
        if !self.game_state.is_bot_turn() {
            return Ok(None);
        }

        let mv = calculate_move(BotInput::from_game_state(&self.game_state))?;
        let bot_mark = self.game_state.bot_mark;
        self.commit(bot_mark, mv)?;
        Ok(Some(mv))
    }

    /// Places a mark and tallies the score if it ended the game.
    fn commit(&mut self, mark: Mark, mv: Move) -> Result<Option<RoundResult>, GameError> {
        self.game_state.place_mark(mark, mv)?;

        let result = RoundResult::from_outcome(self.game_state.status, self.game_state.human_mark);
        if let Some(result) = result {
            self.scores.record(result);
            log!("Game over after {} played {}: {:?} ({})", mark, mv, result, self.game_state.board);
        }
        Ok(result)
    }
}

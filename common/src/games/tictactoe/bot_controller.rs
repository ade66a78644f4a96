use crate::error::GameError;
use crate::log_debug;
use super::board::Board;
use super::game_state::TicTacToeGameState;
use super::types::{Mark, Move};
use super::win_detector::{is_full, winner};

pub const WIN_SCORE: i32 = 1;
pub const DRAW_SCORE: i32 = 0;
pub const LOSS_SCORE: i32 = -1;

pub struct BotInput {
    pub board: Board,
    pub bot_mark: Mark,
}

impl BotInput {
    pub fn from_game_state(state: &TicTacToeGameState) -> Self {
        Self {
            board: state.board,
            bot_mark: state.bot_mark,
        }
    }
}

pub fn calculate_move(input: BotInput) -> Result<Move, GameError> {
    let mut search = Minimax::new(input.bot_mark)?;
    let (best, score) = search.best_move_with_score(&input.board)?;
    log_debug!(
        "Bot {} chose cell {} on {} (score {}, {} nodes)",
        input.bot_mark,
        best,
        input.board,
        score,
        search.nodes_visited()
    );
    Ok(best)
}

/// Scores `board` from the point of view of `bot_mark`: +1 forced win, 0 draw, -1 forced loss.
pub fn evaluate(board: &Board, bot_mark: Mark, is_maximizing: bool) -> Result<i32, GameError> {
    Ok(Minimax::new(bot_mark)?.evaluate(board, is_maximizing))
}

pub fn best_move(board: &Board, bot_mark: Mark) -> Result<Move, GameError> {
    Minimax::new(bot_mark)?
        .best_move_with_score(board)
        .map(|(mv, _)| mv)
}

pub fn score_moves(board: &Board, bot_mark: Mark) -> Result<Vec<(Move, i32)>, GameError> {
    Minimax::new(bot_mark)?.score_moves(board)
}

/// Exhaustive minimax over the 3x3 tree, no depth limit and no pruning.
///
/// Every recursive step works on its own copy of the board, so the caller's
/// board is never touched.
#[derive(Debug)]
pub struct Minimax {
    bot_mark: Mark,
    opponent_mark: Mark,
    nodes_visited: u64,
}

impl Minimax {
    pub fn new(bot_mark: Mark) -> Result<Self, GameError> {
        let opponent_mark = bot_mark
            .opponent()
            .ok_or(GameError::InvalidState("bot mark must be X or O"))?;
        Ok(Self {
            bot_mark,
            opponent_mark,
            nodes_visited: 0,
        })
    }

    pub fn bot_mark(&self) -> Mark {
        self.bot_mark
    }

    pub fn nodes_visited(&self) -> u64 {
        self.nodes_visited
    }

    pub fn evaluate(&mut self, board: &Board, is_maximizing: bool) -> i32 {
        self.nodes_visited += 1;

        if winner(board, self.bot_mark) {
            return WIN_SCORE;
        }
        if winner(board, self.opponent_mark) {
            return LOSS_SCORE;
        }
        if is_full(board) {
            return DRAW_SCORE;
        }

        if is_maximizing {
            let mut max_eval = i32::MIN;
            for mv in board.available_moves() {
                let eval = self.evaluate(&board.with_mark(mv, self.bot_mark), false);
                max_eval = max_eval.max(eval);
            }
            max_eval
        } else {
            let mut min_eval = i32::MAX;
            for mv in board.available_moves() {
                let eval = self.evaluate(&board.with_mark(mv, self.opponent_mark), true);
                min_eval = min_eval.min(eval);
            }
            min_eval
        }
    }

    pub fn score_moves(&mut self, board: &Board) -> Result<Vec<(Move, i32)>, GameError> {
        let available_moves = board.available_moves();
        if available_moves.is_empty() {
            return Err(GameError::InvalidState("no empty cell left for the bot"));
        }

        Ok(available_moves
            .into_iter()
            .map(|mv| {
                let score = self.evaluate(&board.with_mark(mv, self.bot_mark), false);
                (mv, score)
            })
            .collect())
    }

    /// Lowest-index move among those with the highest score.
    pub fn best_move_with_score(&mut self, board: &Board) -> Result<(Move, i32), GameError> {
        let mut best: Option<(Move, i32)> = None;

        for (mv, score) in self.score_moves(board)? {
            if best.is_none_or(|(_, best_score)| score > best_score) {
                best = Some((mv, score));
            }
        }

        best.ok_or(GameError::InvalidState("no empty cell left for the bot"))
    }
}

use crate::error::GameError;
use super::board::Board;
use super::types::{Mark, Move, Outcome, WinningLine};

#[derive(Debug, Clone)]
pub struct TicTacToeGameState {
    pub board: Board,
    pub human_mark: Mark,
    pub bot_mark: Mark,
    pub current_mark: Mark,
    pub status: Outcome,
    pub last_move: Option<Move>,
}

impl TicTacToeGameState {
    pub fn new(human_mark: Mark) -> Result<Self, GameError> {
        let bot_mark = human_mark
            .opponent()
            .ok_or(GameError::InvalidState("human mark must be X or O"))?;

        Ok(Self {
            board: Board::new(),
            human_mark,
            bot_mark,
            current_mark: Mark::X,
            status: Outcome::InProgress,
            last_move: None,
        })
    }

    pub fn place_mark(&mut self, mark: Mark, mv: Move) -> Result<(), GameError> {
        if self.status != Outcome::InProgress {
            return Err(GameError::GameOver);
        }

        if mark != self.current_mark {
            return Err(GameError::NotYourTurn(mark));
        }

        self.board.place(mv, mark)?;
        self.last_move = Some(mv);

        self.status = self.board.outcome();

        if self.status == Outcome::InProgress {
            self.switch_turn();
        }

        Ok(())
    }

    fn switch_turn(&mut self) {
        self.current_mark = if self.current_mark == Mark::X {
            Mark::O
        } else {
            Mark::X
        };
    }

    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    pub fn is_bot_turn(&self) -> bool {
        !self.is_over() && self.current_mark == self.bot_mark
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        self.board.winning_line()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mv(index: usize) -> Move {
        Move::new(index).unwrap()
    }

    #[test]
    fn test_x_moves_first() {
        let state = TicTacToeGameState::new(Mark::O).unwrap();
        assert_eq!(state.current_mark, Mark::X);
        assert_eq!(state.bot_mark, Mark::X);
        assert!(state.is_bot_turn());
    }

    #[test]
    fn test_empty_human_mark_is_rejected() {
        assert!(TicTacToeGameState::new(Mark::Empty).is_err());
    }

    #[test]
    fn test_wrong_turn_is_rejected() {
        let mut state = TicTacToeGameState::new(Mark::X).unwrap();
        assert_eq!(
            state.place_mark(Mark::O, mv(0)),
            Err(GameError::NotYourTurn(Mark::O))
        );
    }

    #[test]
    fn test_occupied_cell_keeps_turn() {
        let mut state = TicTacToeGameState::new(Mark::X).unwrap();
        state.place_mark(Mark::X, mv(4)).unwrap();

        assert_eq!(
            state.place_mark(Mark::O, mv(4)),
            Err(GameError::InvalidMove(mv(4)))
        );
        assert_eq!(state.current_mark, Mark::O);
        assert_eq!(state.last_move, Some(mv(4)));
    }

    #[test]
    fn test_win_ends_game() {
        let mut state = TicTacToeGameState::new(Mark::X).unwrap();
        for (mark, index) in [(Mark::X, 0), (Mark::O, 3), (Mark::X, 1), (Mark::O, 4), (Mark::X, 2)] {
            state.place_mark(mark, mv(index)).unwrap();
        }

        assert_eq!(state.status, Outcome::XWon);
        assert_eq!(state.current_mark, Mark::X);
        assert_eq!(state.place_mark(Mark::O, mv(5)), Err(GameError::GameOver));
        assert_eq!(
            state.winning_line().map(|line| line.cells.map(|m| m.index())),
            Some([0, 1, 2])
        );
    }
}

use std::fmt;
use std::str::FromStr;

use crate::error::GameError;
use super::types::{BOARD_SIDE, CELL_COUNT, Mark, Move, Outcome, WinningLine};
use super::win_detector::{check_win_with_line, is_full, winner};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [Mark; CELL_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Mark::Empty; CELL_COUNT],
        }
    }

    pub fn from_cells(cells: [Mark; CELL_COUNT]) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[Mark; CELL_COUNT] {
        &self.cells
    }

    pub fn get(&self, mv: Move) -> Mark {
        self.cells[mv.index()]
    }

    pub fn is_empty_at(&self, mv: Move) -> bool {
        self.get(mv) == Mark::Empty
    }

    pub fn place(&mut self, mv: Move, mark: Mark) -> Result<(), GameError> {
        if mark == Mark::Empty {
            return Err(GameError::InvalidState("cannot place an empty mark"));
        }
        if !self.is_empty_at(mv) {
            return Err(GameError::InvalidMove(mv));
        }
        self.cells[mv.index()] = mark;
        Ok(())
    }

    /// Copy of the board with `mark` written at `mv`, whatever was there before.
    pub(crate) fn with_mark(&self, mv: Move, mark: Mark) -> Board {
        let mut next = *self;
        next.cells[mv.index()] = mark;
        next
    }

    pub fn available_moves(&self) -> Vec<Move> {
        Move::all().filter(|&mv| self.is_empty_at(mv)).collect()
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|&&cell| cell == mark).count()
    }

    pub fn winner(&self, mark: Mark) -> bool {
        winner(self, mark)
    }

    pub fn is_full(&self) -> bool {
        is_full(self)
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        check_win_with_line(self)
    }

    pub fn outcome(&self) -> Outcome {
        if let Some(line) = self.winning_line()
            && let Some(outcome) = Outcome::won_by(line.mark)
        {
            return outcome;
        }
        if self.is_full() {
            Outcome::Draw
        } else {
            Outcome::InProgress
        }
    }

    /// X always opens, so X may lead O by at most one mark.
    pub fn is_consistent(&self) -> bool {
        let x = self.count(Mark::X);
        let o = self.count(Mark::O);
        x == o || x == o + 1
    }

    /// Whose turn it is under alternating play, `None` once the board is full.
    pub fn next_mark(&self) -> Option<Mark> {
        if self.is_full() {
            return None;
        }
        if self.count(Mark::X) > self.count(Mark::O) {
            Some(Mark::O)
        } else {
            Some(Mark::X)
        }
    }
}

impl FromStr for Board {
    type Err = GameError;

    /// Accepts nine of `X`, `O`, `.`, `-`, `_` or space, optionally split into
    /// rows by `/`, `|` or newlines.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = [Mark::Empty; CELL_COUNT];
        let mut count = 0;

        for symbol in s.chars().filter(|c| !matches!(*c, '/' | '|' | '\n' | '\r')) {
            let mark = Mark::from_symbol(symbol)
                .ok_or_else(|| GameError::Parse(format!("unexpected symbol '{}'", symbol)))?;
            if count >= CELL_COUNT {
                return Err(GameError::Parse(format!("more than {} cells", CELL_COUNT)));
            }
            cells[count] = mark;
            count += 1;
        }

        if count != CELL_COUNT {
            return Err(GameError::Parse(format!(
                "expected {} cells, got {}",
                CELL_COUNT, count
            )));
        }

        Ok(Self { cells })
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.cells.chunks(BOARD_SIDE).enumerate() {
            if y > 0 {
                write!(f, "/")?;
            }
            for mark in row {
                write!(f, "{}", mark)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mv(index: usize) -> Move {
        Move::new(index).unwrap()
    }

    #[test]
    fn test_new_board_is_empty_and_in_progress() {
        let board = Board::new();
        assert_eq!(board.available_moves().len(), 9);
        assert_eq!(board.outcome(), Outcome::InProgress);
        assert_eq!(board.next_mark(), Some(Mark::X));
    }

    #[test]
    fn test_place_on_occupied_cell_is_rejected() {
        let mut board = Board::new();
        board.place(mv(4), Mark::X).unwrap();

        let result = board.place(mv(4), Mark::O);

        assert_eq!(result, Err(GameError::InvalidMove(mv(4))));
        assert_eq!(board.get(mv(4)), Mark::X);
    }

    #[test]
    fn test_place_empty_mark_is_rejected() {
        let mut board = Board::new();
        assert!(matches!(
            board.place(mv(0), Mark::Empty),
            Err(GameError::InvalidState(_))
        ));
    }

    #[test]
    fn test_available_moves_are_ascending() {
        let board: Board = "X.O/.X./O..".parse().unwrap();
        let moves: Vec<usize> = board.available_moves().iter().map(|m| m.index()).collect();
        assert_eq!(moves, vec![1, 3, 5, 7, 8]);
    }

    #[test]
    fn test_outcome_variants() {
        assert_eq!("XXX/OO./...".parse::<Board>().unwrap().outcome(), Outcome::XWon);
        assert_eq!("XX./OOO/X..".parse::<Board>().unwrap().outcome(), Outcome::OWon);
        assert_eq!("XOX/XOO/OXX".parse::<Board>().unwrap().outcome(), Outcome::Draw);
        assert_eq!("XO./.../...".parse::<Board>().unwrap().outcome(), Outcome::InProgress);
    }

    #[test]
    fn test_is_consistent() {
        assert!("X../.../...".parse::<Board>().unwrap().is_consistent());
        assert!("XO./.../...".parse::<Board>().unwrap().is_consistent());
        assert!(!"XX./.../...".parse::<Board>().unwrap().is_consistent());
        assert!(!"O../.../...".parse::<Board>().unwrap().is_consistent());
    }

    #[test]
    fn test_parse_rejects_wrong_length_and_symbols() {
        assert!(matches!("XO".parse::<Board>(), Err(GameError::Parse(_))));
        assert!(matches!("XO./.../....".parse::<Board>(), Err(GameError::Parse(_))));
        assert!(matches!("XZ./.../...".parse::<Board>(), Err(GameError::Parse(_))));
    }

    #[test]
    fn test_display_uses_row_separators() {
        let board: Board = "x.o|.x.|o..".parse().unwrap();
        assert_eq!(board.to_string(), "X.O/.X./O..");
    }
}

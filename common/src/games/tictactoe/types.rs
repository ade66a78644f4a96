use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::GameError;

pub const BOARD_SIDE: usize = 3;
pub const CELL_COUNT: usize = BOARD_SIDE * BOARD_SIDE;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Mark {
    #[default]
    Empty,
    X,
    O,
}

impl Mark {
    pub fn opponent(&self) -> Option<Mark> {
        match self {
            Mark::X => Some(Mark::O),
            Mark::O => Some(Mark::X),
            Mark::Empty => None,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
            Mark::Empty => '.',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Mark> {
        match symbol {
            'X' | 'x' => Some(Mark::X),
            'O' | 'o' => Some(Mark::O),
            '.' | '-' | ' ' | '_' => Some(Mark::Empty),
            _ => None,
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A cell index on the 3x3 board, row-major, always in `0..9`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Move(u8);

impl Move {
    pub fn new(index: usize) -> Option<Self> {
        if index < CELL_COUNT {
            Some(Self(index as u8))
        } else {
            None
        }
    }

    pub fn from_coords(x: usize, y: usize) -> Option<Self> {
        if x >= BOARD_SIDE || y >= BOARD_SIDE {
            return None;
        }
        Self::new(y * BOARD_SIDE + x)
    }

    pub(crate) fn from_line_index(index: usize) -> Self {
        debug_assert!(index < CELL_COUNT);
        Self(index as u8)
    }

    pub fn index(&self) -> usize {
        self.0 as usize
    }

    pub fn x(&self) -> usize {
        self.index() % BOARD_SIDE
    }

    pub fn y(&self) -> usize {
        self.index() / BOARD_SIDE
    }

    pub fn all() -> impl Iterator<Item = Move> {
        (0..CELL_COUNT as u8).map(Move)
    }
}

impl TryFrom<usize> for Move {
    type Error = GameError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Move::new(index).ok_or(GameError::OutOfRange(index))
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index() + 1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    XWon,
    OWon,
    Draw,
    InProgress,
}

impl Outcome {
    pub fn won_by(mark: Mark) -> Option<Outcome> {
        match mark {
            Mark::X => Some(Outcome::XWon),
            Mark::O => Some(Outcome::OWon),
            Mark::Empty => None,
        }
    }

    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::XWon => Some(Mark::X),
            Outcome::OWon => Some(Mark::O),
            Outcome::Draw | Outcome::InProgress => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        *self != Outcome::InProgress
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningLine {
    pub mark: Mark,
    pub cells: [Move; 3],
}

impl WinningLine {
    pub fn new(mark: Mark, cells: [Move; 3]) -> Self {
        Self { mark, cells }
    }

    pub fn contains(&self, mv: Move) -> bool {
        self.cells.contains(&mv)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_rejects_out_of_range_index() {
        assert!(Move::new(8).is_some());
        assert!(Move::new(9).is_none());
        assert!(Move::from_coords(3, 0).is_none());
        assert_eq!(Move::try_from(12), Err(GameError::OutOfRange(12)));
    }

    #[test]
    fn test_move_coords_are_row_major() {
        let mv = Move::from_coords(2, 1).unwrap();
        assert_eq!(mv.index(), 5);
        assert_eq!((mv.x(), mv.y()), (2, 1));
        assert_eq!(mv.to_string(), "6");
    }

    #[test]
    fn test_opponent_of_empty_is_none() {
        assert_eq!(Mark::X.opponent(), Some(Mark::O));
        assert_eq!(Mark::O.opponent(), Some(Mark::X));
        assert_eq!(Mark::Empty.opponent(), None);
    }
}

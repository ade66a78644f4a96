use super::board::Board;
use super::types::{Mark, Move, WinningLine};

/// Rows, then columns, then the two diagonals.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// True if `mark` fills at least one winning line. Does not assume only one
/// player can be winning.
pub fn winner(board: &Board, mark: Mark) -> bool {
    if mark == Mark::Empty {
        return false;
    }
    let cells = board.cells();
    WINNING_LINES
        .iter()
        .any(|line| line.iter().all(|&i| cells[i] == mark))
}

pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|&cell| cell != Mark::Empty)
}

pub fn check_win(board: &Board) -> Option<Mark> {
    check_win_with_line(board).map(|line| line.mark)
}

/// First winning line in row, column, diagonal order.
pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    let cells = board.cells();

    for line in WINNING_LINES {
        let mark = cells[line[0]];
        if mark == Mark::Empty {
            continue;
        }
        if cells[line[1]] == mark && cells[line[2]] == mark {
            return Some(WinningLine::new(mark, line.map(Move::from_line_index)));
        }
    }

    None
}

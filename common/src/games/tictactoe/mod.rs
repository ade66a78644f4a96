mod board;
mod bot_controller;
mod game_state;
mod scoreboard;
mod session;
mod settings;
mod types;
mod win_detector;

pub use board::Board;
pub use bot_controller::{
    BotInput, DRAW_SCORE, LOSS_SCORE, Minimax, WIN_SCORE, best_move, calculate_move, evaluate,
    score_moves,
};
pub use game_state::TicTacToeGameState;
pub use scoreboard::{RoundResult, Scoreboard};
pub use session::{TicTacToeSession, TurnReport};
pub use settings::TicTacToeSessionSettings;
pub use types::{BOARD_SIDE, CELL_COUNT, Mark, Move, Outcome, WinningLine};
pub use win_detector::{WINNING_LINES, check_win, check_win_with_line, is_full, winner};

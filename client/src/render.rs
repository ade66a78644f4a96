use tictactoe_common::games::tictactoe::{
    BOARD_SIDE, DRAW_SCORE, Mark, Move, RoundResult, TicTacToeSession, WIN_SCORE,
};

/// Empty cells show their 1-based number so the player knows what to type.
pub fn render_board(session: &TicTacToeSession) -> String {
    let board = session.board();
    let winning_line = session.winning_line();
    let mut rows = Vec::with_capacity(BOARD_SIDE);

    for y in 0..BOARD_SIDE {
        let cells: Vec<String> = (0..BOARD_SIDE)
            .filter_map(|x| Move::from_coords(x, y))
            .map(|mv| match board.get(mv) {
                Mark::Empty => format!(" {} ", mv),
                mark if winning_line.is_some_and(|line| line.contains(mv)) => {
                    format!("[{}]", mark)
                }
                mark => format!(" {} ", mark),
            })
            .collect();
        rows.push(cells.join("|"));
    }

    rows.join("\n---+---+---\n")
}

pub fn render_scores(session: &TicTacToeSession) -> String {
    let scores = session.scores();
    format!(
        "You ({}): {} | Bot ({}): {} | Ties: {}",
        session.human_mark(),
        scores.human_wins,
        session.bot_mark(),
        scores.bot_wins,
        scores.ties
    )
}

pub fn render_result(result: RoundResult) -> &'static str {
    match result {
        RoundResult::HumanWon => "Game over - you win!",
        RoundResult::BotWon => "Game over - the bot wins!",
        RoundResult::Tie => "Game over - it's a tie!",
    }
}

/// Scores are from the human's side of the board.
pub fn render_hints(hints: &[(Move, i32)]) -> String {
    let parts: Vec<String> = hints
        .iter()
        .map(|&(mv, score)| {
            let label = match score {
                WIN_SCORE => "win",
                DRAW_SCORE => "draw",
                _ => "loss",
            };
            format!("{}={}", mv, label)
        })
        .collect();
    format!("Hints: {}", parts.join(" "))
}

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use tictactoe_common::games::tictactoe::{Board, Mark, best_move, evaluate};

fn bench_self_play_game() {
    let mut board = Board::new();
    let mut current_mark = Mark::X;

    while !board.outcome().is_terminal() {
        let Ok(mv) = best_move(&board, current_mark) else {
            break;
        };
        if board.place(mv, current_mark).is_err() {
            break;
        }
        current_mark = current_mark.opponent().unwrap_or(Mark::X);
    }
}

fn minimax_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimax");

    let empty = Board::new();
    let mid_game: Board = "X.O/.X./..."
        .parse()
        .expect("benchmark board should parse");

    group.bench_function("best_move_empty", |b| {
        b.iter(|| best_move(black_box(&empty), Mark::X))
    });

    group.bench_function("evaluate_empty", |b| {
        b.iter(|| evaluate(black_box(&empty), Mark::O, true))
    });

    group.bench_function("best_move_mid_game", |b| {
        b.iter(|| best_move(black_box(&mid_game), Mark::O))
    });

    group.bench_function("self_play_game", |b| b.iter(bench_self_play_game));

    group.finish();
}

criterion_group!(benches, minimax_bench);
criterion_main!(benches);

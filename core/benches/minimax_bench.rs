use criterion::{criterion_group, criterion_main, Criterion, SamplingMode};

use tictactoe_core::{choose_move, evaluate, Board, Mark, Outcome};

fn bench_first_move_empty_board() {
    let board = Board::new();
    choose_move(&board, Mark::X).unwrap();
}

fn bench_mid_game_move() {
    let mut board = Board::new();
    board.place(4, Mark::X);
    board.place(0, Mark::O);
    board.place(8, Mark::X);
    choose_move(&board, Mark::O).unwrap();
}

fn bench_full_self_playout() {
    let mut board = Board::new();
    let mut side = Mark::X;
    while evaluate(&board) == Outcome::Ongoing {
        let cell = choose_move(&board, side).unwrap();
        board.place(cell, side);
        side = side.opponent().unwrap();
    }
}

fn minimax_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimax");

    group.sampling_mode(SamplingMode::Flat).sample_size(20);

    group.bench_function("first_move_empty", |b| b.iter(bench_first_move_empty_board));

    group.bench_function("mid_game_move", |b| b.iter(bench_mid_game_move));

    group.bench_function("full_self_playout", |b| b.iter(bench_full_self_playout));

    group.finish();
}

criterion_group!(benches, minimax_bench);
criterion_main!(benches);

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use tictactoe_common::games::SessionRng;
use tictactoe_common::games::tictactoe::{Board, Mark, Position, choose_move};

fn board_after(moves: &[(usize, usize)]) -> Board {
    let mut board = Board::empty();
    for &(row, col) in moves {
        board = board
            .apply_move(Position::new(row, col))
            .expect("bench moves must be legal");
    }
    board
}

fn bench_full_game() {
    let mut session_rng = SessionRng::new(7);
    let mut board = Board::empty();
    while let Some(pos) = choose_move(&board, &mut session_rng) {
        board = board.apply_move(pos).expect("engine returned an illegal move");
    }
}

fn minimax_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimax");

    let after_opening = board_after(&[(0, 0)]);
    group.bench_function("reply_to_opening", |b| {
        let mut session_rng = SessionRng::new(1);
        b.iter(|| choose_move(black_box(&after_opening), &mut session_rng))
    });

    let mid_game = board_after(&[(1, 1), (0, 0), (2, 2), (0, 2)]);
    group.bench_function("single_move_mid_game", |b| {
        let mut session_rng = SessionRng::new(2);
        b.iter(|| choose_move(black_box(&mid_game), &mut session_rng))
    });

    group.bench_function("full_game", |b| b.iter(bench_full_game));

    group.bench_function("empty_board", |b| {
        let mut session_rng = SessionRng::new(3);
        let board = Board::empty();
        b.iter(|| {
            let pos = choose_move(black_box(&board), &mut session_rng);
            assert_eq!(pos.and_then(|p| board.get(p)), Some(Mark::Empty));
        })
    });

    group.finish();
}

criterion_group!(benches, minimax_bench);
criterion_main!(benches);

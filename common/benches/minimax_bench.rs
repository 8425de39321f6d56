use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use tictactoe_common::games::SessionRng;
use tictactoe_common::games::tictactoe::{
    Board, BotInput, Difficulty, GameStatus, Mark, TicTacToeGameState, calculate_minimax_move,
    select_move,
};

fn bench_single_move_empty_board() {
    let input = BotInput::new(Board::new(), Mark::X, Mark::O);
    black_box(calculate_minimax_move(&input));
}

fn bench_single_move_mid_game() {
    let board = Board::from_cells([
        Mark::X, Mark::Empty, Mark::Empty,
        Mark::Empty, Mark::O, Mark::Empty,
        Mark::Empty, Mark::Empty, Mark::X,
    ]);
    let input = BotInput::new(board, Mark::O, Mark::X);
    black_box(calculate_minimax_move(&input));
}

fn bench_hard_vs_hard_game(rng: &mut SessionRng) {
    let mut state = TicTacToeGameState::default();
    while state.check_status() == GameStatus::InProgress {
        let mark = state.current_mark();
        let Some(opponent) = mark.opponent() else {
            break;
        };
        let Some(position) = select_move(state.board(), Difficulty::Hard, mark, opponent, rng)
        else {
            break;
        };
        if state.apply_move(position, mark).is_err() {
            break;
        }
    }
    black_box(state.check_status());
}

fn minimax_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimax");

    group.bench_function("single_move_empty", |b| {
        b.iter(bench_single_move_empty_board)
    });

    group.bench_function("single_move_mid_game", |b| {
        b.iter(bench_single_move_mid_game)
    });

    let mut rng = SessionRng::new(0);
    group.bench_function("hard_vs_hard_game", |b| {
        b.iter(|| bench_hard_vs_hard_game(&mut rng))
    });

    group.finish();
}

criterion_group!(benches, minimax_bench);
criterion_main!(benches);

use criterion::{Criterion, criterion_group, criterion_main};
use sokoterm::core::Direction::{Down, Left, Right, Up};
use sokoterm::core::{Direction, History, MoveOutcome, level};
use std::hint::black_box;

const PUZZLE: &str = r#"
############
#          #
#  . $ @   #
#          #
#  ###     #
#  . $     #
#      ##  #
#  .$      #
#      $.  #
#          #
#          #
############
"#;

// A wandering walk with a few pushes; blocked moves are part of the mix.
const WALK: &[Direction] = &[
    Left, Left, Down, Down, Down, Right, Up, Left, Left, Down, Right, Right, Up, Up, Down, Down,
    Left, Up, Right, Down,
];

pub fn bench_apply_and_undo(c: &mut Criterion) {
    let board = level::parse_sized(PUZZLE.trim_matches('\n'), 12, 12).unwrap();

    c.bench_function("apply_move_walk", |b| {
        b.iter_with_setup(
            || board.clone(),
            |mut board| {
                for &dir in WALK {
                    black_box(board.apply_move(dir));
                }
                board
            },
        )
    });

    c.bench_function("apply_then_undo_walk", |b| {
        b.iter_with_setup(
            || (board.clone(), History::with_capacity(WALK.len())),
            |(mut board, mut history)| {
                for &dir in WALK {
                    if let MoveOutcome::Moved { pushed } = board.apply_move(dir) {
                        history.record(dir, pushed);
                    }
                }
                while let Some(record) = history.pop() {
                    black_box(board.apply_inverse(record));
                }
                board
            },
        )
    });
}

criterion_group!(benches, bench_apply_and_undo);
criterion_main!(benches);

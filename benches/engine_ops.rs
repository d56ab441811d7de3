use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use lookahead_2048::engine::{Board, Direction, Game};
use rand::{rngs::StdRng, SeedableRng};
use std::hint::black_box;

fn corpus() -> Vec<Game> {
    let mut rng = StdRng::seed_from_u64(42);
    let mut game = Game::new(&mut rng);
    let mut games = vec![game.clone()];
    // Derive a variety of densities deterministically
    let seq = [Direction::Left, Direction::Up, Direction::Right, Direction::Down];
    for i in 0..20 {
        game.play_move(seq[i % seq.len()], &mut rng);
        games.push(game.clone());
    }
    games
}

fn bench_resolve(c: &mut Criterion) {
    for dir in Direction::ALL {
        c.bench_function(&format!("resolve/{}", dir), |bch| {
            let games = corpus();
            bch.iter_batched(
                || games.clone(),
                |mut games| {
                    let mut acc = 0u64;
                    for game in &mut games {
                        acc ^= game.simulate_move(dir) as u64;
                    }
                    black_box(acc)
                },
                BatchSize::SmallInput,
            )
        });
    }
}

fn bench_spawn_and_play(c: &mut Criterion) {
    c.bench_function("board/spawn_random_tile", |bch| {
        bch.iter_batched(
            || (Board::empty(4), StdRng::seed_from_u64(7)),
            |(mut board, mut rng)| {
                for _ in 0..16 {
                    board.spawn_random_tile(&mut rng);
                }
                black_box(board)
            },
            BatchSize::SmallInput,
        )
    });
    c.bench_function("game/play_move_left", |bch| {
        bch.iter_batched(
            || {
                let mut rng = StdRng::seed_from_u64(9);
                (Game::new(&mut rng), rng)
            },
            |(mut game, mut rng)| {
                for _ in 0..64 {
                    game.play_move(Direction::Left, &mut rng);
                }
                black_box(game)
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_queries(c: &mut Criterion) {
    c.bench_function("query/possible_commands", |bch| {
        let games = corpus();
        bch.iter(|| {
            let mut acc = 0usize;
            for game in &games {
                acc ^= game.possible_commands().len();
            }
            black_box(acc)
        })
    });
    c.bench_function("query/empty_count", |bch| {
        let games = corpus();
        bch.iter(|| {
            let mut acc = 0usize;
            for game in &games {
                acc ^= game.board().empty_count();
            }
            black_box(acc)
        })
    });
    c.bench_function("query/max_exponent", |bch| {
        let games = corpus();
        bch.iter(|| {
            let mut acc = 0u8;
            for game in &games {
                acc ^= game.board().max_exponent();
            }
            black_box(acc)
        })
    });
}

criterion_group!(engine_ops, bench_resolve, bench_spawn_and_play, bench_queries);
criterion_main!(engine_ops);

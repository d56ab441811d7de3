//! Watch the two-ply strategy play a single game, board by board.

use lookahead_2048::engine::Game;
use lookahead_2048::runner::effective_direction;
use lookahead_2048::strategy::{Strategy, TwoPly};

fn main() {
    let mut rng = rand::thread_rng();
    let mut game = Game::new(&mut rng);
    let mut strategy = TwoPly::new();
    let mut moves = 0u64;

    while !game.is_over() {
        let picked = match strategy.pick_move(&game, &mut rng) {
            Some(dir) => dir,
            None => break,
        };
        let dir = match effective_direction(&game, picked, &mut rng) {
            Some(dir) => dir,
            None => break,
        };
        println!("{}\n{}", game.board(), dir);
        game.play_move(dir, &mut rng);
        moves += 1;
    }
    println!("{}", game.board());

    let outcome = if game.is_won() { "won" } else { "lost" };
    println!(
        "\nMoves made: {}, outcome: {}, highest tile exponent: {}",
        moves,
        outcome,
        game.board().max_exponent()
    );
}

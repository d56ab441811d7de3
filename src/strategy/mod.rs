//! Move-picking strategies, from a coin flip to a two-ply look-ahead.
//!
//! Every strategy implements [`Strategy`]: given a game it returns the
//! direction it wants to play, or `None` once no direction is legal.
//! Strategies never mutate the real game; the search ones probe moves
//! on cloned copies.
//!
//! Quick start:
//!
//! ```
//! use lookahead_2048::engine::Game;
//! use lookahead_2048::strategy::{Greedy, Strategy};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let game = Game::new(&mut rng);
//! let mut strategy = Greedy::open_space();
//! assert!(strategy.pick_move(&game, &mut rng).is_some());
//! ```

pub mod heuristic;
mod search;

use rand::{seq::SliceRandom, RngCore};

use crate::engine::{Direction, Game};

pub use search::{Greedy, TwoPly};

/// A move picker. `pick_move` returns `None` exactly when the game has
/// no legal direction left.
pub trait Strategy {
    /// Short name used in reports and transcript file names.
    fn name(&self) -> &'static str;

    fn pick_move(&mut self, game: &Game, rng: &mut dyn RngCore) -> Option<Direction>;
}

/// Plays a uniformly random legal direction. The baseline everything
/// else gets measured against.
pub struct Random;

impl Strategy for Random {
    fn name(&self) -> &'static str {
        "random"
    }

    fn pick_move(&mut self, game: &Game, rng: &mut dyn RngCore) -> Option<Direction> {
        game.possible_commands().choose(rng).copied()
    }
}

/// Every built-in strategy, in report order.
pub fn full_roster() -> Vec<Box<dyn Strategy>> {
    vec![
        Box::new(Random),
        Box::new(Greedy::tile_sum()),
        Box::new(Greedy::open_space()),
        Box::new(Greedy::peak_squared()),
        Box::new(Greedy::no_up()),
        Box::new(Greedy::orphan_penalty()),
        Box::new(TwoPly::new()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Board;
    use rand::{rngs::StdRng, SeedableRng};

    fn game(values: &[u8]) -> Game {
        Game::from_board(Board::from_exponents(4, values))
    }

    #[test]
    fn random_stays_inside_the_legal_set() {
        let g = game(&[1, 2, 3, 4, 1, 3, 4, 5, 3, 4, 5, 6, 4, 5, 6, 7]);
        let legal = g.possible_commands();
        assert_eq!(legal, vec![Direction::Up, Direction::Down]);
        for seed in 0..32 {
            let mut rng = StdRng::seed_from_u64(seed);
            let pick = Random.pick_move(&g, &mut rng);
            assert!(legal.contains(&pick.unwrap()));
        }
    }

    #[test]
    fn random_returns_none_when_stuck() {
        let g = game(&[1, 2, 3, 4, 2, 3, 4, 5, 3, 4, 5, 6, 4, 5, 6, 7]);
        let mut rng = StdRng::seed_from_u64(9);
        assert_eq!(Random.pick_move(&g, &mut rng), None);
    }

    #[test]
    fn roster_names_match_the_report_order() {
        let names: Vec<&str> = full_roster().iter().map(|s| s.name()).collect();
        assert_eq!(
            names,
            vec!["random", "sum", "space", "peak", "no-up", "orphan", "two-ply"]
        );
    }
}

//! Board state and move resolution for the sliding-tile merge game.
//!
//! Cells store exponents, not face values: `3` means a 2^3 = 8 tile and
//! `0` means empty. A move slides every tile toward one edge, merging
//! equal neighbors into `value + 1` at most once per tile per move.
//!
//! Quick start:
//!
//! ```
//! use lookahead_2048::engine::{Direction, Game};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let mut game = Game::new(&mut rng);
//! if game.is_legal(Direction::Left) {
//!     game.play_move(Direction::Left, &mut rng);
//! }
//! assert!(game.board().empty_count() >= 12);
//! ```

mod board;
mod direction;
mod game;

pub use board::{Board, Tile, DEFAULT_SIZE};
pub use direction::Direction;
pub use game::Game;

//! Sliding-tile merge game engine with look-ahead play strategies.
//!
//! What's in the box:
//!
//! - [`engine`]: the board, directions, and move resolution. Cells hold
//!   tile exponents; a move slides everything toward one edge and merges
//!   equal neighbors once per move.
//! - [`strategy`]: pluggable move pickers, from uniform random through
//!   greedy one-ply heuristics up to an optimistic two-ply search.
//! - [`runner`]: drives whole games, collects per-game outcomes, and
//!   renders per-strategy summaries, transcripts, and JSON reports.
//!
//! Quick start:
//!
//! ```
//! use lookahead_2048::engine::Game;
//! use lookahead_2048::runner::drive_to_end;
//! use lookahead_2048::strategy::TwoPly;
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let mut rng = StdRng::seed_from_u64(2048);
//! let mut game = Game::new(&mut rng);
//! let mut strategy = TwoPly::new();
//! let outcome = drive_to_end(&mut game, &mut strategy, &mut rng, None);
//! assert!(outcome.moves > 0);
//! ```
//!
//! Full loop, by hand (a pick can be a legal no-op, so route it
//! through [`runner::effective_direction`] before playing it):
//!
//! ```
//! use lookahead_2048::engine::Game;
//! use lookahead_2048::runner::effective_direction;
//! use lookahead_2048::strategy::{Random, Strategy};
//! use rand::thread_rng;
//!
//! let mut rng = thread_rng();
//! let mut game = Game::new(&mut rng);
//! while !game.is_over() {
//!     let picked = match Random.pick_move(&game, &mut rng) {
//!         Some(dir) => dir,
//!         None => break,
//!     };
//!     match effective_direction(&game, picked, &mut rng) {
//!         Some(dir) => {
//!             game.play_move(dir, &mut rng);
//!         }
//!         None => break,
//!     }
//! }
//! println!("{}", game.board());
//! ```

pub mod engine;
pub mod runner;
pub mod strategy;

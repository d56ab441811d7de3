//! Drives whole games and turns the results into reports.
//!
//! A batch run produces one [`GameOutcome`] per game, folds them into a
//! [`StrategySummary`] per strategy, and optionally writes per-game
//! transcripts (the board before every move, plus the move played) and a
//! JSON results file.

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;
use std::time::Instant;

use rand::{seq::SliceRandom, RngCore};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::engine::{Direction, Game};
use crate::strategy::Strategy;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// What one finished game looked like.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameOutcome {
    pub moves: u64,
    pub won: bool,
    /// Exponent of the largest tile on the final board.
    pub highest_exponent: u8,
    pub elapsed_s: f32,
}

/// Play `game` with `strategy` until it is won or no move is left.
///
/// A pick whose resolution would leave the board unchanged is swapped
/// through [`effective_direction`] before it is played, so every loop
/// iteration moves tiles and the game cannot replay one position
/// forever. When `transcript` is given, every move appends the board it
/// was played on plus the direction played; the final board goes in at
/// the end.
pub fn drive_to_end(
    game: &mut Game,
    strategy: &mut dyn Strategy,
    rng: &mut dyn RngCore,
    mut transcript: Option<&mut String>,
) -> GameOutcome {
    let start = Instant::now();
    let mut moves = 0u64;
    while !game.is_over() {
        let picked = match strategy.pick_move(game, rng) {
            Some(dir) => dir,
            None => break,
        };
        let dir = match effective_direction(game, picked, rng) {
            Some(dir) => dir,
            None => break,
        };
        if let Some(out) = transcript.as_mut() {
            out.push_str(&format!("{}{}\n\n", game.board(), dir));
        }
        game.play_move(dir, rng);
        moves += 1;
    }
    if let Some(out) = transcript {
        out.push_str(&game.board().to_string());
    }
    let outcome = GameOutcome {
        moves,
        won: game.is_won(),
        highest_exponent: game.board().max_exponent(),
        elapsed_s: start.elapsed().as_secs_f32(),
    };
    log::debug!(
        "{}: {} moves, won: {}, highest exponent: {}",
        strategy.name(),
        outcome.moves,
        outcome.won,
        outcome.highest_exponent
    );
    outcome
}

/// Return `picked` when resolving it changes the board, otherwise a
/// uniformly random legal direction whose resolution does; `None` when
/// every legal direction resolves to a no-op.
///
/// The one-step legality check can nominate directions that move
/// nothing (empty lanes, stale merge flags), and such a no-op keeps the
/// current board's score, so it can tie or beat every real move under a
/// strategy's heuristic. Since no tile spawns after a no-op, a drive
/// loop that replayed the pick would sit on the same position forever;
/// swapping it guarantees progress.
pub fn effective_direction(
    game: &Game,
    picked: Direction,
    rng: &mut dyn RngCore,
) -> Option<Direction> {
    let mut probe = game.clone();
    if probe.simulate_move(picked) {
        return Some(picked);
    }
    let mut rest: Vec<Direction> = game
        .possible_commands()
        .into_iter()
        .filter(|&dir| dir != picked)
        .collect();
    rest.shuffle(rng);
    rest.into_iter().find(|&dir| {
        let mut probe = game.clone();
        probe.simulate_move(dir)
    })
}

/// Aggregate results for one strategy across a batch of games.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategySummary {
    pub strategy: String,
    pub games: u32,
    pub wins: u32,
    pub losses: u32,
    /// Largest exponent any game in the batch reached.
    pub highest_exponent: u8,
    pub mean_highest_exponent: f32,
    pub total_moves: u64,
    pub elapsed_s: f32,
}

impl StrategySummary {
    pub fn from_outcomes(strategy: &str, outcomes: &[GameOutcome]) -> Self {
        let games = outcomes.len() as u32;
        let wins = outcomes.iter().filter(|o| o.won).count() as u32;
        let mean_highest_exponent = if games == 0 {
            0.0
        } else {
            outcomes.iter().map(|o| o.highest_exponent as f32).sum::<f32>() / games as f32
        };
        StrategySummary {
            strategy: strategy.to_owned(),
            games,
            wins,
            losses: games - wins,
            highest_exponent: outcomes.iter().map(|o| o.highest_exponent).max().unwrap_or(0),
            mean_highest_exponent,
            total_moves: outcomes.iter().map(|o| o.moves).sum(),
            elapsed_s: outcomes.iter().map(|o| o.elapsed_s).sum(),
        }
    }
}

impl fmt::Display for StrategySummary {
    // `{:?}` keeps the decimal point on whole-number means (9.0, not 9).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\nWON: {}\nLOST: {}\nHIGHEST TILE: {}\nAVERAGE HIGHEST TILE: {:?}",
            self.strategy,
            self.wins,
            self.losses,
            self.highest_exponent,
            self.mean_highest_exponent
        )
    }
}

/// Write one game's transcript to `path`.
pub fn write_transcript(path: &Path, transcript: &str) -> Result<(), ReportError> {
    fs::write(path, transcript)?;
    Ok(())
}

/// Write every strategy's summary to `path` as pretty-printed JSON.
pub fn write_summaries(path: &Path, summaries: &[StrategySummary]) -> Result<(), ReportError> {
    let json = serde_json::to_string_pretty(summaries)?;
    fs::write(path, json)?;
    Ok(())
}

/// Read back a summaries file written by [`write_summaries`].
pub fn read_summaries(path: &Path) -> Result<Vec<StrategySummary>, ReportError> {
    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

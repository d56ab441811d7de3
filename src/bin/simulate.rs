use std::fs;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use env_logger::Env;
use indicatif::{ProgressBar, ProgressStyle};
use log::{info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;

use lookahead_2048::engine::Game;
use lookahead_2048::runner::{self, drive_to_end, GameOutcome, StrategySummary};
use lookahead_2048::strategy::{Greedy, Random, Strategy, TwoPly};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    if let Some(dir) = &args.log_dir {
        fs::create_dir_all(dir)?;
    }
    let base_seed = args.seed.unwrap_or_else(rand::random);
    let kinds = args.strategies.clone().unwrap_or_else(|| StrategyKind::ALL.to_vec());
    info!("base seed: {}, games per strategy: {}", base_seed, args.games);

    let total = args.games as u64 * kinds.len() as u64;
    let progress = if args.quiet {
        ProgressBar::hidden()
    } else {
        let pb = ProgressBar::new(total);
        pb.set_style(ProgressStyle::with_template(
            "{bar:32} {pos}/{len} games | {elapsed_precise} | {msg}",
        )?);
        pb
    };

    let mut summaries = Vec::with_capacity(kinds.len());
    for (strategy_index, kind) in kinds.iter().copied().enumerate() {
        let name = kind.build().name();
        progress.set_message(name);

        let outcomes: Vec<GameOutcome> = (0..args.games)
            .into_par_iter()
            .map(|game_index| {
                let seed = game_seed(base_seed, strategy_index, game_index);
                let mut rng = StdRng::seed_from_u64(seed);
                let mut strategy = kind.build();
                let mut game = Game::new(&mut rng);
                let mut transcript = args.log_dir.as_ref().map(|_| String::new());
                let outcome =
                    drive_to_end(&mut game, strategy.as_mut(), &mut rng, transcript.as_mut());
                if let (Some(dir), Some(text)) = (&args.log_dir, transcript) {
                    let path = dir.join(format!("{}-{:03}.log", name, game_index));
                    if let Err(e) = runner::write_transcript(&path, &text) {
                        warn!("failed to write transcript {}: {}", path.display(), e);
                    }
                }
                progress.inc(1);
                outcome
            })
            .collect();

        summaries.push(StrategySummary::from_outcomes(name, &outcomes));
    }
    progress.finish_and_clear();

    for summary in &summaries {
        println!("{}\n", summary);
    }
    if let Some(path) = &args.results {
        runner::write_summaries(path, &summaries)?;
        info!("wrote summaries to {}", path.display());
    }
    Ok(())
}

/// Decorrelates games without sharing RNG state across rayon workers.
fn game_seed(base: u64, strategy_index: usize, game_index: u32) -> u64 {
    base ^ ((strategy_index as u64) << 32) ^ game_index as u64
}

#[derive(Debug, Parser)]
#[command(
    name = "simulate",
    about = "Play a batch of games with each strategy and summarize the results"
)]
struct Args {
    /// Games per strategy
    #[arg(long, default_value_t = 10)]
    games: u32,

    /// Strategies to run, comma separated (default: all of them)
    #[arg(long, value_enum, value_delimiter = ',')]
    strategies: Option<Vec<StrategyKind>>,

    /// Base RNG seed; omit for fresh entropy every run
    #[arg(long)]
    seed: Option<u64>,

    /// Write one transcript per game into this directory
    #[arg(long)]
    log_dir: Option<PathBuf>,

    /// Write per-strategy summaries to this JSON file
    #[arg(long)]
    results: Option<PathBuf>,

    /// Suppress the progress bar
    #[arg(long)]
    quiet: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum StrategyKind {
    Random,
    Sum,
    Space,
    Peak,
    NoUp,
    Orphan,
    TwoPly,
}

impl StrategyKind {
    const ALL: [StrategyKind; 7] = [
        StrategyKind::Random,
        StrategyKind::Sum,
        StrategyKind::Space,
        StrategyKind::Peak,
        StrategyKind::NoUp,
        StrategyKind::Orphan,
        StrategyKind::TwoPly,
    ];

    fn build(self) -> Box<dyn Strategy> {
        match self {
            StrategyKind::Random => Box::new(Random),
            StrategyKind::Sum => Box::new(Greedy::tile_sum()),
            StrategyKind::Space => Box::new(Greedy::open_space()),
            StrategyKind::Peak => Box::new(Greedy::peak_squared()),
            StrategyKind::NoUp => Box::new(Greedy::no_up()),
            StrategyKind::Orphan => Box::new(Greedy::orphan_penalty()),
            StrategyKind::TwoPly => Box::new(TwoPly::new()),
        }
    }
}

//! Benchmark command
//!
//! Times result computation and pair search over random four-sided puzzles.

use crate::core::WordStore;
use crate::solver::Solver;
use crate::state::PuzzleState;
use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use std::time::{Duration, Instant};

/// Letters on each side of a generated puzzle
pub const SIDE_LENGTH: usize = 3;
/// Sides of a generated puzzle
pub const SIDES: usize = 4;

/// Configuration for a benchmark run
#[derive(Debug, Clone)]
pub struct BenchmarkConfig {
    /// Number of puzzles to generate
    pub count: usize,
    /// Seed for reproducible puzzles; a random seed is drawn when `None`
    pub seed: Option<u64>,
    /// Show a progress bar while running
    pub progress: bool,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            count: 100,
            seed: None,
            progress: true,
        }
    }
}

/// Timing for a single puzzle
#[derive(Debug, Clone)]
pub struct PuzzleTiming {
    /// Sides joined by `,`
    pub puzzle: String,
    pub results: usize,
    pub pairs: usize,
    pub filter_time: Duration,
    pub pair_time: Duration,
}

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub seed: u64,
    pub dictionary_size: usize,
    pub puzzles: Vec<PuzzleTiming>,
    pub total_results: usize,
    pub total_pairs: usize,
    pub average_filter: Duration,
    pub average_pairs: Duration,
    pub max_filter: Duration,
    pub max_pairs: Duration,
    pub duration: Duration,
}

/// Generate the sides of a random puzzle: twelve distinct letters, three per
/// side
#[must_use]
pub fn random_puzzle(rng: &mut StdRng) -> Vec<String> {
    let mut letters: Vec<char> = ('a'..='z').collect();
    letters.shuffle(rng);
    letters
        .chunks(SIDE_LENGTH)
        .take(SIDES)
        .map(|side| side.iter().collect())
        .collect()
}

fn average(total: Duration, count: usize) -> Duration {
    u32::try_from(count)
        .ok()
        .filter(|&n| n > 0)
        .map_or(Duration::ZERO, |n| total / n)
}

fn progress_bar(len: usize) -> Result<ProgressBar> {
    let pb = ProgressBar::new(len as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .context("invalid progress bar template")?
            .progress_chars("█▓▒░"),
    );
    Ok(pb)
}

/// Run the benchmark over `config.count` random puzzles
///
/// # Errors
///
/// Returns an error if the progress bar cannot be set up.
pub fn run_benchmark(store: &WordStore, config: &BenchmarkConfig) -> Result<BenchmarkResult> {
    let seed = config.seed.unwrap_or_else(rand::random);
    let mut rng = StdRng::seed_from_u64(seed);
    let solver = Solver::new(store);

    log::info!(
        "benchmarking {} puzzles against {} words (seed {seed})",
        config.count,
        store.len()
    );

    let pb = if config.progress {
        progress_bar(config.count)?
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();
    let mut puzzles = Vec::with_capacity(config.count);

    for _ in 0..config.count {
        let sides = random_puzzle(&mut rng);
        let state = PuzzleState::from_sides(&sides);

        let filter_start = Instant::now();
        let results = solver.results(&state).len();
        let filter_time = filter_start.elapsed();

        let pair_start = Instant::now();
        let pairs = solver.cheat_pairs(&state).len();
        let pair_time = pair_start.elapsed();

        let puzzle = sides.join(",");
        pb.set_message(puzzle.clone());
        pb.inc(1);

        puzzles.push(PuzzleTiming {
            puzzle,
            results,
            pairs,
            filter_time,
            pair_time,
        });
    }

    pb.finish_with_message("Complete!");
    let duration = start.elapsed();

    let total_filter: Duration = puzzles.iter().map(|p| p.filter_time).sum();
    let total_pair: Duration = puzzles.iter().map(|p| p.pair_time).sum();

    Ok(BenchmarkResult {
        seed,
        dictionary_size: store.len(),
        total_results: puzzles.iter().map(|p| p.results).sum(),
        total_pairs: puzzles.iter().map(|p| p.pairs).sum(),
        average_filter: average(total_filter, puzzles.len()),
        average_pairs: average(total_pair, puzzles.len()),
        max_filter: puzzles
            .iter()
            .map(|p| p.filter_time)
            .max()
            .unwrap_or_default(),
        max_pairs: puzzles
            .iter()
            .map(|p| p.pair_time)
            .max()
            .unwrap_or_default(),
        puzzles,
        duration,
    })
}

//! Benchmark command
//!
//! Solves many random word pairs of one length and summarizes the results.

use crate::core::Ladder;
use crate::search::LadderGame;
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Benchmark settings
pub struct BenchmarkConfig {
    /// Number of random pairs to solve
    pub count: usize,
    /// Length of the words to pair up
    pub length: usize,
    /// Seed for pair selection, so runs are repeatable
    pub seed: u64,
    /// Draw a progress bar while solving
    pub show_progress: bool,
}

impl BenchmarkConfig {
    #[must_use]
    pub const fn new(count: usize, length: usize) -> Self {
        Self {
            count,
            length,
            seed: 0,
            show_progress: false,
        }
    }
}

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_pairs: usize,
    pub found: usize,
    pub no_ladder: usize,
    pub average_length: f64,
    pub longest: Option<Ladder>,
    /// Ladder length (in words) to number of pairs
    pub distribution: HashMap<usize, usize>,
    pub duration: Duration,
    pub pairs_per_second: f64,
}

/// Solve `config.count` random pairs of `config.length`-letter words
///
/// Pairs are solved in parallel; the lexicon is shared read-only.
///
/// # Errors
///
/// Returns an error if the lexicon has fewer than two words of the requested
/// length.
///
/// # Panics
///
/// Panics if the progress bar template is invalid.
pub fn run_benchmark(game: &LadderGame, config: &BenchmarkConfig) -> Result<BenchmarkResult, String> {
    let pairs = random_pairs(game, config)?;

    let pb = if config.show_progress {
        ProgressBar::new(pairs.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();
    let ladders: Vec<Ladder> = pairs
        .par_iter()
        .map(|(from, to)| {
            let ladder = game.min_ladder(from, to);
            pb.inc(1);
            ladder
        })
        .collect();
    pb.finish_with_message("Complete!");
    let duration = start.elapsed();

    let mut distribution: HashMap<usize, usize> = HashMap::new();
    let mut longest: Option<&Ladder> = None;
    let mut total_length = 0;

    for ladder in ladders.iter().filter(|l| !l.is_empty()) {
        *distribution.entry(ladder.len()).or_insert(0) += 1;
        total_length += ladder.len();
        if longest.is_none_or(|l| ladder.len() > l.len()) {
            longest = Some(ladder);
        }
    }

    let found: usize = distribution.values().sum();
    let total_pairs = pairs.len();

    Ok(BenchmarkResult {
        total_pairs,
        found,
        no_ladder: total_pairs - found,
        average_length: if found == 0 {
            0.0
        } else {
            total_length as f64 / found as f64
        },
        longest: longest.cloned(),
        distribution,
        duration,
        pairs_per_second: total_pairs as f64 / duration.as_secs_f64().max(f64::EPSILON),
    })
}

/// Draw distinct-word pairs of the configured length
fn random_pairs(game: &LadderGame, config: &BenchmarkConfig) -> Result<Vec<(String, String)>, String> {
    let words: Vec<&str> = game.lexicon().words_of_length(config.length).collect();
    if words.len() < 2 {
        return Err(format!(
            "Need at least two {}-letter words, found {}",
            config.length,
            words.len()
        ));
    }

    let mut rng = StdRng::seed_from_u64(config.seed);
    let pairs = (0..config.count)
        .map(|_| {
            let a = rng.random_range(0..words.len());
            // Skip over `a` so the pair is always two different words
            let mut b = rng.random_range(0..words.len() - 1);
            if b >= a {
                b += 1;
            }
            (words[a].to_owned(), words[b].to_owned())
        })
        .collect();

    Ok(pairs)
}

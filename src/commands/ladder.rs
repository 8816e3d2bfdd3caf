//! Ladder command
//!
//! Finds a shortest ladder between two words and records how the search went.

use crate::search::{LadderGame, SearchOutcome, SearchStats};
use std::time::{Duration, Instant};

/// Result of a single ladder search
pub struct LadderResult {
    pub start: String,
    pub end: String,
    pub outcome: SearchOutcome,
    pub stats: SearchStats,
    pub duration: Duration,
}

impl LadderResult {
    /// Words of the ladder, or an empty slice if none was found
    #[must_use]
    pub fn words(&self) -> &[String] {
        match &self.outcome {
            SearchOutcome::Found(ladder) => ladder.words(),
            _ => &[],
        }
    }
}

/// Search for a ladder from `start` to `end`
///
/// # Errors
///
/// Returns an error if either word is blank. Every other input is a valid
/// query; an impossible ladder is reported through `LadderResult::outcome`.
pub fn find_ladder(game: &LadderGame, start: &str, end: &str) -> Result<LadderResult, String> {
    let start = start.trim();
    let end = end.trim();
    if start.is_empty() || end.is_empty() {
        return Err("Start and end words must not be empty".to_string());
    }

    let timer = Instant::now();
    let report = game.search(start, end);

    Ok(LadderResult {
        start: start.to_lowercase(),
        end: end.to_lowercase(),
        outcome: report.outcome,
        stats: report.stats,
        duration: timer.elapsed(),
    })
}

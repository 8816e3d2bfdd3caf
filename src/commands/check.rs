//! Check and distance commands
//!
//! Validate a user-supplied ladder and measure the distance between words.

use crate::search::LadderGame;
use crate::search::validate::{LadderDefect, first_defect};

/// Result of checking a candidate ladder
pub struct CheckResult {
    pub words: Vec<String>,
    pub valid: bool,
    pub defect: Option<LadderDefect>,
}

/// Check whether `words` form a word ladder
#[must_use]
pub fn check_ladder<S: AsRef<str>>(game: &LadderGame, words: &[S]) -> CheckResult {
    let defect = first_defect(game.lexicon(), words);

    CheckResult {
        words: words.iter().map(|w| w.as_ref().to_lowercase()).collect(),
        valid: game.is_word_ladder(words),
        defect,
    }
}

/// Result of measuring the distance between two words
pub struct DistanceResult {
    pub first: String,
    pub second: String,
    /// `None` when the words differ in length
    pub distance: Option<usize>,
}

/// Measure the Hamming distance between `first` and `second`
#[must_use]
pub fn measure_distance(game: &LadderGame, first: &str, second: &str) -> DistanceResult {
    DistanceResult {
        first: first.to_lowercase(),
        second: second.to_lowercase(),
        distance: game.hamming_distance(first, second),
    }
}

//! Main word ladder interface

use super::bfs::{SearchOutcome, SearchReport, shortest_ladder};
use super::neighbors::{IndexedNeighbors, NeighborMode, NeighborSource, Neighbors, ScanNeighbors};
use super::validate;
use crate::core::{Ladder, hamming_distance, normalize};
use crate::lexicon::{Lexicon, WildcardIndex};
use log::debug;
use rayon::prelude::*;
use std::time::{Duration, Instant};

/// Search settings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchConfig {
    /// Neighbor discovery strategy
    pub mode: NeighborMode,
    /// Give up on a single search after this long
    pub deadline: Option<Duration>,
}

impl SearchConfig {
    #[must_use]
    pub const fn new(mode: NeighborMode) -> Self {
        Self {
            mode,
            deadline: None,
        }
    }

    #[must_use]
    pub const fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = Some(deadline);
        self
    }
}

/// Word ladder queries over one lexicon
///
/// Owns the lexicon (and the wildcard index, when configured) and answers
/// membership, distance, neighbor, shortest-ladder and validation queries.
/// All inputs are accepted in any case; all returned words are lowercase.
/// Nothing is mutated after construction, so one game can serve concurrent
/// searches.
///
/// # Examples
/// ```
/// use word_ladder::lexicon::Lexicon;
/// use word_ladder::search::LadderGame;
///
/// let game = LadderGame::new(Lexicon::from_words(["cat", "cot", "cog", "dog"]));
/// let ladder = game.min_ladder("CAT", "dog");
/// assert_eq!(ladder.words(), ["cat", "cot", "cog", "dog"]);
/// assert!(game.is_word_ladder(ladder.words()));
/// ```
#[derive(Debug, Clone)]
pub struct LadderGame {
    lexicon: Lexicon,
    index: Option<WildcardIndex>,
    config: SearchConfig,
}

impl LadderGame {
    /// Create a game that scans the lexicon for neighbors
    #[must_use]
    pub fn new(lexicon: Lexicon) -> Self {
        Self::with_config(lexicon, SearchConfig::default())
    }

    /// Create a game with explicit search settings
    ///
    /// Builds the wildcard index up front when `config.mode` asks for it.
    #[must_use]
    pub fn with_config(lexicon: Lexicon, config: SearchConfig) -> Self {
        let index = match config.mode {
            NeighborMode::Scan => None,
            NeighborMode::Indexed => {
                let index = WildcardIndex::build(&lexicon);
                debug!(
                    "Built wildcard index: {} buckets over {} words",
                    index.bucket_count(),
                    lexicon.len()
                );
                Some(index)
            }
        };

        Self {
            lexicon,
            index,
            config,
        }
    }

    #[must_use]
    pub const fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    #[must_use]
    pub const fn config(&self) -> SearchConfig {
        self.config
    }

    /// Case-insensitive lexicon membership
    #[must_use]
    pub fn is_word(&self, word: &str) -> bool {
        self.lexicon.contains(word)
    }

    /// Number of distinct words in the lexicon
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.lexicon.len()
    }

    /// Hamming distance, or `None` when the lengths differ
    #[must_use]
    pub fn hamming_distance(&self, a: &str, b: &str) -> Option<usize> {
        hamming_distance(a, b)
    }

    /// Lexicon words one letter away from `word`, in lexicon order
    #[must_use]
    pub fn neighbors(&self, word: &str) -> Vec<String> {
        self.neighbor_source()
            .neighbors_of(word)
            .into_iter()
            .map(str::to_owned)
            .collect()
    }

    /// A minimum-length ladder from `start` to `end`
    ///
    /// Returns the empty ladder when there is none: the words differ in
    /// length, either is not in the lexicon, no chain connects them, or the
    /// configured deadline passed.
    ///
    /// When `start` and `end` are the same word (ignoring case) the result
    /// is that one word, even if it is not in the lexicon.
    #[must_use]
    pub fn min_ladder(&self, start: &str, end: &str) -> Ladder {
        self.search(start, end).outcome.into_ladder()
    }

    /// Run a search and report how it ended
    ///
    /// Same semantics as `min_ladder`, but keeps the reason for an empty
    /// result and the search counters.
    #[must_use]
    pub fn search(&self, start: &str, end: &str) -> SearchReport {
        let start = normalize(start);
        let end = normalize(end);

        if start == end {
            return SearchReport::immediate(SearchOutcome::Found(Ladder::single(start)));
        }

        if hamming_distance(&start, &end).is_none() {
            debug!("'{start}' and '{end}' differ in length");
            return SearchReport::immediate(SearchOutcome::InvalidEndpoints);
        }

        if !(self.is_word(&start) && self.is_word(&end)) {
            debug!("'{start}' or '{end}' is not in the lexicon");
            return SearchReport::immediate(SearchOutcome::InvalidEndpoints);
        }

        let deadline = self.config.deadline.map(|d| Instant::now() + d);
        let source = self.neighbor_source();
        let report = shortest_ladder(&source, &start, &end, deadline);

        debug!(
            "Search '{start}' -> '{end}': {:?} after expanding {} words",
            report.outcome, report.stats.expanded
        );
        report
    }

    /// Solve independent pairs in parallel
    ///
    /// Results are in the same order as `pairs`.
    #[must_use]
    pub fn min_ladders<S>(&self, pairs: &[(S, S)]) -> Vec<Ladder>
    where
        S: AsRef<str> + Sync,
    {
        pairs
            .par_iter()
            .map(|(start, end)| self.min_ladder(start.as_ref(), end.as_ref()))
            .collect()
    }

    /// Check whether `sequence` is a word ladder over this lexicon
    #[must_use]
    pub fn is_word_ladder<S: AsRef<str>>(&self, sequence: &[S]) -> bool {
        validate::is_word_ladder(&self.lexicon, sequence)
    }

    fn neighbor_source(&self) -> Neighbors<'_> {
        match &self.index {
            Some(index) => Neighbors::Indexed(IndexedNeighbors::new(&self.lexicon, index)),
            None => Neighbors::Scan(ScanNeighbors::new(&self.lexicon)),
        }
    }
}

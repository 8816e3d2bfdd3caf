//! Breadth-first ladder search
//!
//! The graph is never materialized: nodes are words and edges are computed
//! on demand by a `NeighborSource`. Discovered words are stored in an arena
//! where each entry records the arena index of the word it was reached
//! from, so the search tree has no back-references and is trivially
//! inspectable.

use super::neighbors::NeighborSource;
use crate::core::Ladder;
use log::trace;
use rustc_hash::FxHashSet;
use std::collections::VecDeque;
use std::time::Instant;

/// How a search ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// A minimum-length ladder
    Found(Ladder),
    /// Both endpoints are words but no ladder connects them
    NoPath,
    /// Endpoints differ in length, or are not both lexicon words
    InvalidEndpoints,
    /// The deadline passed before the search finished
    Cancelled,
}

impl SearchOutcome {
    /// Collapse the outcome to a ladder; anything but `Found` is empty
    #[must_use]
    pub fn into_ladder(self) -> Ladder {
        match self {
            Self::Found(ladder) => ladder,
            Self::NoPath | Self::InvalidEndpoints | Self::Cancelled => Ladder::empty(),
        }
    }

    #[must_use]
    pub const fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }
}

/// Counters collected while searching
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Words taken off the queue and expanded
    pub expanded: usize,
    /// Words newly reached (excluding the start word)
    pub discovered: usize,
}

/// Outcome of a search together with its counters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReport {
    pub outcome: SearchOutcome,
    pub stats: SearchStats,
}

impl SearchReport {
    /// A report for a search that never touched the graph
    #[must_use]
    pub fn immediate(outcome: SearchOutcome) -> Self {
        Self {
            outcome,
            stats: SearchStats::default(),
        }
    }
}

/// A discovered word and the arena slot of its predecessor
#[derive(Debug, Clone, Copy)]
struct Node<'w> {
    word: &'w str,
    parent: Option<usize>,
}

/// Find a minimum-length ladder from `start` to `end`
///
/// Both words must already be normalized and distinct. The first time `end`
/// is discovered the search stops: nodes are expanded in order of distance
/// from `start`, so that discovery is at minimum distance. Among several
/// shortest ladders, the one returned follows the neighbor order of
/// `source`.
///
/// If `deadline` is given it is checked once per expanded word; passing it
/// ends the search with `SearchOutcome::Cancelled`.
pub fn shortest_ladder<'w, N>(
    source: &'w N,
    start: &'w str,
    end: &str,
    deadline: Option<Instant>,
) -> SearchReport
where
    N: NeighborSource + ?Sized,
{
    let mut arena: Vec<Node<'w>> = vec![Node {
        word: start,
        parent: None,
    }];
    let mut visited: FxHashSet<&'w str> = FxHashSet::default();
    visited.insert(start);
    let mut queue: VecDeque<usize> = VecDeque::from([0]);
    let mut stats = SearchStats::default();

    while let Some(current) = queue.pop_front() {
        if deadline.is_some_and(|d| Instant::now() >= d) {
            return SearchReport {
                outcome: SearchOutcome::Cancelled,
                stats,
            };
        }

        stats.expanded += 1;
        let word = arena[current].word;
        trace!("Expanding '{word}' ({} queued)", queue.len());

        for neighbor in source.neighbors_of(word) {
            if !visited.insert(neighbor) {
                continue;
            }

            stats.discovered += 1;
            arena.push(Node {
                word: neighbor,
                parent: Some(current),
            });
            let slot = arena.len() - 1;

            if neighbor == end {
                return SearchReport {
                    outcome: SearchOutcome::Found(reconstruct(&arena, slot)),
                    stats,
                };
            }
            queue.push_back(slot);
        }
    }

    SearchReport {
        outcome: SearchOutcome::NoPath,
        stats,
    }
}

/// Walk parent links from `slot` back to the root, then reverse
fn reconstruct(arena: &[Node<'_>], slot: usize) -> Ladder {
    let mut words = Vec::new();
    let mut cursor = Some(slot);

    while let Some(idx) = cursor {
        let node = arena[idx];
        words.push(node.word.to_owned());
        cursor = node.parent;
    }

    words.reverse();
    Ladder::from(words)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::Lexicon;
    use crate::search::neighbors::ScanNeighbors;
    use std::time::Duration;

    fn sample() -> Lexicon {
        Lexicon::from_words(["cat", "cot", "cog", "dog", "dot", "dig", "big"])
    }

    #[test]
    fn finds_four_word_ladder() {
        let lexicon = sample();
        let source = ScanNeighbors::new(&lexicon);

        let report = shortest_ladder(&source, "cat", "dog", None);
        let SearchOutcome::Found(ladder) = report.outcome else {
            panic!("expected a ladder, got {:?}", report.outcome);
        };

        assert_eq!(ladder.len(), 4);
        assert_eq!(ladder.first(), Some("cat"));
        assert_eq!(ladder.last(), Some("dog"));
        assert_eq!(ladder.words()[1], "cot");
    }

    #[test]
    fn disconnected_words_have_no_path() {
        let lexicon = Lexicon::from_words(["cat", "cot", "cog", "dog", "dot", "big"]);
        let source = ScanNeighbors::new(&lexicon);

        let report = shortest_ladder(&source, "cat", "big", None);
        assert_eq!(report.outcome, SearchOutcome::NoPath);
        // Every word in cat's component gets expanded
        assert_eq!(report.stats.expanded, 5);
    }

    #[test]
    fn adjacent_words_give_two_word_ladder() {
        let lexicon = sample();
        let source = ScanNeighbors::new(&lexicon);

        let report = shortest_ladder(&source, "dig", "big", None);
        assert_eq!(
            report.outcome.into_ladder().words(),
            ["dig".to_string(), "big".to_string()]
        );
    }

    #[test]
    fn stops_at_first_discovery() {
        let lexicon = sample();
        let source = ScanNeighbors::new(&lexicon);

        let report = shortest_ladder(&source, "cat", "cot", None);
        assert!(report.outcome.is_found());
        assert_eq!(report.stats.expanded, 1);
        assert_eq!(report.stats.discovered, 1);
    }

    #[test]
    fn expired_deadline_cancels() {
        let lexicon = sample();
        let source = ScanNeighbors::new(&lexicon);
        let past = Instant::now().checked_sub(Duration::from_millis(1));

        let report = shortest_ladder(&source, "cat", "dog", past.or(Some(Instant::now())));
        assert_eq!(report.outcome, SearchOutcome::Cancelled);
        assert_eq!(report.stats.expanded, 0);
    }

    #[test]
    fn generous_deadline_does_not_interfere() {
        let lexicon = sample();
        let source = ScanNeighbors::new(&lexicon);
        let deadline = Instant::now() + Duration::from_secs(60);

        let report = shortest_ladder(&source, "cat", "dog", Some(deadline));
        assert_eq!(report.outcome.into_ladder().len(), 4);
    }

    #[test]
    fn reconstruct_follows_parents() {
        let arena = [
            Node {
                word: "cat",
                parent: None,
            },
            Node {
                word: "cot",
                parent: Some(0),
            },
            Node {
                word: "cab",
                parent: Some(0),
            },
            Node {
                word: "dot",
                parent: Some(1),
            },
        ];
        let ladder = reconstruct(&arena, 3);
        assert_eq!(ladder.words(), ["cat", "cot", "dot"]);
    }

    #[test]
    fn outcome_into_ladder() {
        assert!(SearchOutcome::NoPath.into_ladder().is_empty());
        assert!(SearchOutcome::InvalidEndpoints.into_ladder().is_empty());
        assert!(SearchOutcome::Cancelled.into_ladder().is_empty());
        let found = SearchOutcome::Found(Ladder::single("cat"));
        assert_eq!(found.into_ladder().len(), 1);
    }
}

//! Neighbor discovery strategies
//!
//! Defines the `NeighborSource` trait and its implementations. All of them
//! return the same words in the same order for a given lexicon; they differ
//! only in cost.

use crate::core::{is_one_apart, normalize};
use crate::lexicon::{Lexicon, WildcardIndex};

/// A way of finding the lexicon words one letter away from a word
pub trait NeighborSource {
    /// Lexicon words at Hamming distance exactly 1 from `word`
    ///
    /// `word` itself is never included. Returns an empty vector when there
    /// are no neighbors.
    fn neighbors_of(&self, word: &str) -> Vec<&str>;
}

/// Full lexicon scan, O(lexicon size × word length) per call
#[derive(Debug, Clone, Copy)]
pub struct ScanNeighbors<'a> {
    lexicon: &'a Lexicon,
}

impl<'a> ScanNeighbors<'a> {
    #[must_use]
    pub const fn new(lexicon: &'a Lexicon) -> Self {
        Self { lexicon }
    }
}

impl NeighborSource for ScanNeighbors<'_> {
    fn neighbors_of(&self, word: &str) -> Vec<&str> {
        let word = normalize(word);
        self.lexicon
            .iter()
            .filter(|candidate| is_one_apart(&word, candidate))
            .collect()
    }
}

/// Wildcard bucket lookup, roughly O(word length) per call
#[derive(Debug, Clone, Copy)]
pub struct IndexedNeighbors<'a> {
    lexicon: &'a Lexicon,
    index: &'a WildcardIndex,
}

impl<'a> IndexedNeighbors<'a> {
    /// Pair a lexicon with an index built from it
    #[must_use]
    pub fn new(lexicon: &'a Lexicon, index: &'a WildcardIndex) -> Self {
        debug_assert!(index.matches(lexicon), "index built from another lexicon");
        Self { lexicon, index }
    }
}

impl NeighborSource for IndexedNeighbors<'_> {
    fn neighbors_of(&self, word: &str) -> Vec<&str> {
        self.index.neighbors(self.lexicon, word)
    }
}

/// Runtime-selected neighbor source
///
/// Allows choosing a strategy from configuration while keeping static
/// dispatch inside the search loop.
#[derive(Debug, Clone, Copy)]
pub enum Neighbors<'a> {
    Scan(ScanNeighbors<'a>),
    Indexed(IndexedNeighbors<'a>),
}

impl NeighborSource for Neighbors<'_> {
    fn neighbors_of(&self, word: &str) -> Vec<&str> {
        match self {
            Self::Scan(s) => s.neighbors_of(word),
            Self::Indexed(s) => s.neighbors_of(word),
        }
    }
}

/// Which neighbor strategy a search should use
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NeighborMode {
    /// Scan the whole lexicon for every expanded word (default)
    #[default]
    Scan,
    /// Precompute a wildcard index once and look neighbors up in it
    Indexed,
}

impl NeighborMode {
    /// Parse a mode name
    ///
    /// Supported names: "scan", "indexed" (or "index"). Defaults to scan if
    /// the name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match &*normalize(name) {
            "indexed" | "index" => Self::Indexed,
            _ => Self::Scan,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Scan => "scan",
            Self::Indexed => "indexed",
        }
    }
}

//! Word ladder search result

use std::fmt;

/// An ordered chain of words from a start word to an end word
///
/// Adjacent words differ in exactly one position. An empty ladder means no
/// ladder exists; a single-word ladder is the degenerate result of searching
/// from a word to itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ladder(Vec<String>);

impl Ladder {
    /// The empty ladder, meaning "no ladder exists"
    #[must_use]
    pub const fn empty() -> Self {
        Self(Vec::new())
    }

    /// A one-word ladder
    #[must_use]
    pub fn single(word: impl Into<String>) -> Self {
        Self(vec![word.into()])
    }

    /// Words in start-to-end order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.0
    }

    /// Number of words in the ladder
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when no ladder exists
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of one-letter changes (edges) in the ladder
    #[must_use]
    pub fn steps(&self) -> usize {
        self.0.len().saturating_sub(1)
    }

    #[must_use]
    pub fn first(&self) -> Option<&str> {
        self.0.first().map(String::as_str)
    }

    #[must_use]
    pub fn last(&self) -> Option<&str> {
        self.0.last().map(String::as_str)
    }

    /// Consume the ladder, returning its words
    #[must_use]
    pub fn into_words(self) -> Vec<String> {
        self.0
    }
}

impl From<Vec<String>> for Ladder {
    fn from(words: Vec<String>) -> Self {
        Self(words)
    }
}

impl From<Ladder> for Vec<String> {
    fn from(ladder: Ladder) -> Self {
        ladder.0
    }
}

impl AsRef<[String]> for Ladder {
    fn as_ref(&self) -> &[String] {
        &self.0
    }
}

impl<'a> IntoIterator for &'a Ladder {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Ladder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join(" → "))
    }
}

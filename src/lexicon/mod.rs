//! The lexicon of valid words
//!
//! An immutable, case-normalized, deduplicated word set. It is built once
//! from a word source and only read afterwards, so a single lexicon can be
//! shared across any number of concurrent searches.

mod index;
pub mod loader;

pub use index::WildcardIndex;

use crate::core::normalize;
use std::io::{self, BufRead};
use std::path::PathBuf;
use thiserror::Error;

/// Failure to build a lexicon from its source
///
/// Construction never yields a partially populated lexicon: any read error
/// aborts the whole load.
#[derive(Debug, Error)]
pub enum LexiconError {
    #[error("failed to open word list {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read word list: {0}")]
    Read(#[from] io::Error),
}

/// An immutable set of lowercase words
///
/// Words are kept sorted, so iteration order is alphabetical (by `char`
/// ordering) and stable between runs. Callers should treat that order as an
/// implementation detail of this type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lexicon {
    words: Vec<String>,
}

impl Lexicon {
    /// Build a lexicon from in-memory words
    ///
    /// Each word is lowercased; duplicates collapse and empty strings are
    /// dropped.
    ///
    /// # Examples
    /// ```
    /// use word_ladder::lexicon::Lexicon;
    ///
    /// let lexicon = Lexicon::from_words(["Cat", "cat", "COT"]);
    /// assert_eq!(lexicon.len(), 2);
    /// assert!(lexicon.contains("cot"));
    /// ```
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut words: Vec<String> = words
            .into_iter()
            .filter(|w| !w.as_ref().is_empty())
            .map(|w| normalize(w.as_ref()).into_owned())
            .collect();
        words.sort_unstable();
        words.dedup();

        Self { words }
    }

    /// Build a lexicon from a line-oriented reader
    ///
    /// The first whitespace-separated token of each line is the word; the
    /// rest of the line is ignored, as are blank lines.
    ///
    /// # Errors
    ///
    /// Returns `LexiconError::Read` if the reader fails or yields bytes that
    /// are not valid UTF-8.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, LexiconError> {
        let mut words = Vec::new();
        for line in reader.lines() {
            let line = line?;
            if let Some(token) = line.split_whitespace().next() {
                words.push(token.to_owned());
            }
        }

        Ok(Self::from_words(words))
    }

    /// Case-insensitive membership test
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.position(&normalize(word)).is_some()
    }

    /// Number of distinct words
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over all words
    ///
    /// The iterator is lazy and can be restarted by calling `iter` again.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &str> + Clone + '_ {
        self.words.iter().map(String::as_str)
    }

    /// Iterate over the words with exactly `length` characters
    pub fn words_of_length(&self, length: usize) -> impl Iterator<Item = &str> + '_ {
        self.iter().filter(move |w| w.chars().count() == length)
    }

    /// Word stored at `index` in iteration order
    #[inline]
    pub(crate) fn word_at(&self, index: usize) -> &str {
        &self.words[index]
    }

    /// Index of an already-normalized word
    fn position(&self, normalized: &str) -> Option<usize> {
        self.words
            .binary_search_by(|w| w.as_str().cmp(normalized))
            .ok()
    }
}

impl<'a> IntoIterator for &'a Lexicon {
    type Item = &'a str;
    type IntoIter = std::iter::Map<std::slice::Iter<'a, String>, fn(&'a String) -> &'a str>;

    fn into_iter(self) -> Self::IntoIter {
        let as_str: fn(&'a String) -> &'a str = String::as_str;
        self.words.iter().map(as_str)
    }
}

impl<S: AsRef<str>> FromIterator<S> for Lexicon {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self::from_words(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Read};

    fn sample() -> Lexicon {
        Lexicon::from_words(["cat", "cot", "cog", "dog", "dot", "dig", "big"])
    }

    #[test]
    fn contains_is_case_insensitive() {
        let lexicon = sample();
        assert!(lexicon.contains("cat"));
        assert!(lexicon.contains("CAT"));
        assert!(lexicon.contains("DoG"));
        assert!(!lexicon.contains("cats"));
        assert!(!lexicon.contains(""));
    }

    #[test]
    fn words_are_normalized_and_deduplicated() {
        let lexicon = Lexicon::from_words(["Cat", "CAT", "cat", "Dog"]);
        assert_eq!(lexicon.len(), 2);
        assert!(lexicon.iter().all(|w| w.chars().all(char::is_lowercase)));
    }

    #[test]
    fn iteration_is_sorted_and_restartable() {
        let lexicon = sample();
        let first: Vec<&str> = lexicon.iter().collect();
        let second: Vec<&str> = lexicon.iter().collect();
        assert_eq!(first, second);
        assert_eq!(first, ["big", "cat", "cog", "cot", "dig", "dog", "dot"]);
    }

    #[test]
    fn empty_words_dropped() {
        let lexicon = Lexicon::from_words(["", "a", ""]);
        assert_eq!(lexicon.len(), 1);
    }

    #[test]
    fn reader_takes_first_token_per_line() {
        let input = "Cat noun feline\n  cot\tbed\n\ndog\nCAT duplicate\n";
        let lexicon = Lexicon::from_reader(Cursor::new(input)).unwrap();
        assert_eq!(lexicon.iter().collect::<Vec<_>>(), ["cat", "cot", "dog"]);
    }

    #[test]
    fn reader_rejects_invalid_utf8() {
        let input: &[u8] = &[b'c', b'a', b't', b'\n', 0xff, 0xfe, b'\n'];
        let result = Lexicon::from_reader(Cursor::new(input));
        assert!(matches!(result, Err(LexiconError::Read(_))));
    }

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::other("device unplugged"))
        }
    }

    #[test]
    fn reader_failure_is_fatal() {
        let result = Lexicon::from_reader(io::BufReader::new(FailingReader));
        let err = result.unwrap_err();
        assert!(err.to_string().contains("device unplugged"));
    }

    #[test]
    fn words_of_length_filters() {
        let lexicon = Lexicon::from_words(["a", "at", "cat", "dog", "cold"]);
        let three: Vec<&str> = lexicon.words_of_length(3).collect();
        assert_eq!(three, ["cat", "dog"]);
        assert_eq!(lexicon.words_of_length(5).count(), 0);
    }

    #[test]
    fn collect_into_lexicon() {
        let lexicon: Lexicon = ["b", "a"].into_iter().collect();
        assert_eq!((&lexicon).into_iter().collect::<Vec<_>>(), ["a", "b"]);
    }
}

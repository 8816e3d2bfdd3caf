//! Default word list for ladder searches
//!
//! Provides a word list compiled into the binary so the tool works without
//! any external files.

mod embedded;

pub use embedded::{WORDS, WORDS_COUNT};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn words_are_lowercase_letters() {
        for &word in WORDS {
            assert!(!word.is_empty());
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn words_are_unique() {
        let unique: std::collections::HashSet<_> = WORDS.iter().collect();
        assert_eq!(unique.len(), WORDS.len());
    }

    #[test]
    fn classic_puzzle_words_present() {
        for word in ["cold", "cord", "card", "ward", "warm", "head", "tail"] {
            assert!(WORDS.contains(&word), "missing '{word}'");
        }
    }
}

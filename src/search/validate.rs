//! Word ladder validation

use crate::core::hamming_distance;
use crate::lexicon::Lexicon;
use std::fmt;

/// The first reason a sequence fails to be a word ladder
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LadderDefect {
    /// The sequence has no words
    Empty,
    /// The word at `index` is not in the lexicon
    NotAWord { index: usize, word: String },
    /// Words at `index` and `index + 1` are not exactly one letter apart
    NotOneApart { index: usize },
}

impl fmt::Display for LadderDefect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "a ladder needs at least one word"),
            Self::NotAWord { index, word } => {
                write!(f, "word {} ('{word}') is not in the lexicon", index + 1)
            }
            Self::NotOneApart { index } => write!(
                f,
                "words {} and {} do not differ by exactly one letter",
                index + 1,
                index + 2
            ),
        }
    }
}

/// Find the first defect in `sequence`, if any
///
/// Pairs are checked left to right. A single word has no pairs, so it is
/// accepted without a lexicon lookup, matching the degenerate one-word
/// ladder a search returns when start and end coincide.
pub fn first_defect<S: AsRef<str>>(lexicon: &Lexicon, sequence: &[S]) -> Option<LadderDefect> {
    if sequence.is_empty() {
        return Some(LadderDefect::Empty);
    }

    for (index, pair) in sequence.windows(2).enumerate() {
        let (a, b) = (pair[0].as_ref(), pair[1].as_ref());

        for (offset, word) in [(0, a), (1, b)] {
            if !lexicon.contains(word) {
                return Some(LadderDefect::NotAWord {
                    index: index + offset,
                    word: word.to_owned(),
                });
            }
        }

        if hamming_distance(a, b) != Some(1) {
            return Some(LadderDefect::NotOneApart { index });
        }
    }

    None
}

/// Check whether `sequence` is a word ladder over `lexicon`
///
/// Case-insensitive. Empty sequences are never ladders.
///
/// # Examples
/// ```
/// use word_ladder::lexicon::Lexicon;
/// use word_ladder::search::is_word_ladder;
///
/// let lexicon = Lexicon::from_words(["cat", "cot", "cog", "dog"]);
/// assert!(is_word_ladder(&lexicon, &["cat", "cot", "cog", "dog"]));
/// assert!(!is_word_ladder(&lexicon, &["cat", "dog"]));
/// ```
#[must_use]
pub fn is_word_ladder<S: AsRef<str>>(lexicon: &Lexicon, sequence: &[S]) -> bool {
    first_defect(lexicon, sequence).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Lexicon {
        Lexicon::from_words(["cat", "cot", "cog", "dog", "dot", "dig", "big"])
    }

    #[test]
    fn valid_ladder() {
        let lexicon = sample();
        assert!(is_word_ladder(&lexicon, &["cat", "cot", "cog", "dog"]));
        assert!(is_word_ladder(&lexicon, &["CAT", "Cot", "dOT"]));
    }

    #[test]
    fn empty_is_not_a_ladder() {
        let lexicon = sample();
        let empty: [&str; 0] = [];
        assert!(!is_word_ladder(&lexicon, &empty));
        assert_eq!(first_defect(&lexicon, &empty), Some(LadderDefect::Empty));
    }

    #[test]
    fn single_word_is_a_ladder() {
        let lexicon = sample();
        assert!(is_word_ladder(&lexicon, &["cat"]));
        // No pairs to check, so membership is not consulted
        assert!(is_word_ladder(&lexicon, &["zebra"]));
    }

    #[test]
    fn jump_of_more_than_one_letter() {
        let lexicon = sample();
        assert!(!is_word_ladder(&lexicon, &["cat", "dog"]));
        assert_eq!(
            first_defect(&lexicon, &["cat", "cot", "dog"]),
            Some(LadderDefect::NotOneApart { index: 1 })
        );
    }

    #[test]
    fn repeated_word_is_not_a_step() {
        let lexicon = sample();
        assert!(!is_word_ladder(&lexicon, &["cat", "cat"]));
    }

    #[test]
    fn unknown_word_rejected() {
        let lexicon = sample();
        assert_eq!(
            first_defect(&lexicon, &["cat", "bat"]),
            Some(LadderDefect::NotAWord {
                index: 1,
                word: "bat".to_string()
            })
        );
        assert!(!is_word_ladder(&lexicon, &["bat", "cat"]));
    }

    #[test]
    fn length_change_rejected() {
        let lexicon = Lexicon::from_words(["cat", "cats"]);
        assert!(!is_word_ladder(&lexicon, &["cat", "cats"]));
    }

    #[test]
    fn defect_messages() {
        assert_eq!(
            LadderDefect::NotOneApart { index: 0 }.to_string(),
            "words 1 and 2 do not differ by exactly one letter"
        );
        assert_eq!(
            LadderDefect::NotAWord {
                index: 2,
                word: "xyz".to_string()
            }
            .to_string(),
            "word 3 ('xyz') is not in the lexicon"
        );
    }
}

//! Hamming distance between words
//!
//! The distance is the number of character positions at which two words of
//! equal length differ. It is undefined for words of different lengths.

use super::normalize;

/// Compute the case-insensitive Hamming distance between `a` and `b`
///
/// Returns `None` when the words have different lengths (after
/// normalization), which callers use to reject cross-length pairs without
/// any error handling. Identical words have distance `0`.
///
/// # Examples
/// ```
/// use word_ladder::core::hamming_distance;
///
/// assert_eq!(hamming_distance("cat", "cot"), Some(1));
/// assert_eq!(hamming_distance("CAT", "cat"), Some(0));
/// assert_eq!(hamming_distance("cat", "cats"), None);
/// ```
#[must_use]
pub fn hamming_distance(a: &str, b: &str) -> Option<usize> {
    let a = normalize(a);
    let b = normalize(b);

    if a.chars().count() != b.chars().count() {
        return None;
    }

    Some(a.chars().zip(b.chars()).filter(|(x, y)| x != y).count())
}

/// Check whether two already-normalized words differ in exactly one position
///
/// Equivalent to `hamming_distance(a, b) == Some(1)` for lowercase input, but
/// stops scanning at the second mismatch. This is the hot path of a lexicon
/// scan, so it skips normalization.
#[must_use]
pub fn is_one_apart(a: &str, b: &str) -> bool {
    let mut a_chars = a.chars();
    let mut b_chars = b.chars();
    let mut mismatches = 0;

    loop {
        match (a_chars.next(), b_chars.next()) {
            (Some(x), Some(y)) => {
                if x != y {
                    mismatches += 1;
                    if mismatches > 1 {
                        return false;
                    }
                }
            }
            (None, None) => return mismatches == 1,
            // Unequal lengths
            _ => return false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_counts_differing_positions() {
        assert_eq!(hamming_distance("cat", "cot"), Some(1));
        assert_eq!(hamming_distance("cat", "dog"), Some(3));
        assert_eq!(hamming_distance("cold", "warm"), Some(4));
    }

    #[test]
    fn distance_identity() {
        for word in ["", "a", "cat", "doublets"] {
            assert_eq!(hamming_distance(word, word), Some(0));
        }
    }

    #[test]
    fn distance_is_case_insensitive() {
        assert_eq!(hamming_distance("CAT", "cot"), Some(1));
        assert_eq!(hamming_distance("Dog", "dOG"), Some(0));
    }

    #[test]
    fn distance_undefined_for_unequal_lengths() {
        assert_eq!(hamming_distance("cat", "cats"), None);
        assert_eq!(hamming_distance("", "a"), None);
    }

    #[test]
    fn distance_is_symmetric() {
        let words = ["cat", "cot", "cog", "dog", "big", "cats", ""];
        for a in words {
            for b in words {
                assert_eq!(hamming_distance(a, b), hamming_distance(b, a), "{a} vs {b}");
            }
        }
    }

    #[test]
    fn distance_counts_characters_not_bytes() {
        assert_eq!(hamming_distance("été", "ete"), Some(2));
        assert_eq!(hamming_distance("été", "et"), None);
    }

    #[test]
    fn one_apart_matches_distance() {
        let words = ["cat", "cot", "cog", "dog", "dot", "cats", "ca", ""];
        for a in words {
            for b in words {
                assert_eq!(
                    is_one_apart(a, b),
                    hamming_distance(a, b) == Some(1),
                    "{a} vs {b}"
                );
            }
        }
    }
}

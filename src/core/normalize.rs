//! Case normalization shared by every public entry point

use std::borrow::Cow;

/// Lowercase a word for storage or lookup
///
/// Every lexicon insertion and every query runs its input through this
/// function, so stored words and probes always agree on case. Input that is
/// already lowercase is borrowed rather than copied.
///
/// # Examples
/// ```
/// use word_ladder::core::normalize;
///
/// assert_eq!(normalize("CoLd"), "cold");
/// assert_eq!(normalize("warm"), "warm");
/// ```
#[must_use]
pub fn normalize(word: &str) -> Cow<'_, str> {
    if word.chars().all(is_lowercase_fixed_point) {
        Cow::Borrowed(word)
    } else {
        Cow::Owned(word.to_lowercase())
    }
}

/// True when lowercasing `c` yields `c` itself
fn is_lowercase_fixed_point(c: char) -> bool {
    let mut lower = c.to_lowercase();
    lower.next() == Some(c) && lower.next().is_none()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercase_input_is_borrowed() {
        assert!(matches!(normalize("dog"), Cow::Borrowed("dog")));
    }

    #[test]
    fn mixed_case_is_lowered() {
        assert_eq!(normalize("DoG"), "dog");
        assert_eq!(normalize("CAT"), "cat");
    }

    #[test]
    fn non_letters_pass_through() {
        assert_eq!(normalize("a-1'b"), "a-1'b");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn non_ascii_is_lowered() {
        assert_eq!(normalize("ÉTÉ"), "été");
    }
}

//! Formatting utilities for terminal output

/// Render a ladder as one line, marking the changed letter of each step
///
/// Each word after the first has the character that differs from its
/// predecessor wrapped in brackets: `cat → c[o]t → [d]ot`.
#[must_use]
pub fn highlight_ladder(words: &[String]) -> String {
    let mut parts = Vec::with_capacity(words.len());
    let mut previous: Option<&str> = None;

    for word in words {
        parts.push(match previous {
            Some(prev) => highlight_change(prev, word),
            None => word.clone(),
        });
        previous = Some(word);
    }

    parts.join(" → ")
}

/// Wrap the characters of `word` that differ from `prev` in brackets
fn highlight_change(prev: &str, word: &str) -> String {
    let mut out = String::with_capacity(word.len() + 2);
    let mut prev_chars = prev.chars();

    for c in word.chars() {
        if prev_chars.next() == Some(c) {
            out.push(c);
        } else {
            out.push('[');
            out.push(c);
            out.push(']');
        }
    }

    out
}

/// Create a bar string of `value` out of `max`
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn highlight_marks_changed_letters() {
        let ladder = words(&["cat", "cot", "dot"]);
        assert_eq!(highlight_ladder(&ladder), "cat → c[o]t → [d]ot");
    }

    #[test]
    fn highlight_single_and_empty() {
        assert_eq!(highlight_ladder(&words(&["cat"])), "cat");
        assert_eq!(highlight_ladder(&[]), "");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(5.0, 0.0, 4), "░░░░");
    }
}

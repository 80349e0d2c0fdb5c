// Utility functions
use regex::Regex;
use std::sync::LazyLock;

static SENTENCE_BREAK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[.!?]+").expect("sentence break pattern is valid")
});

/// Parses a cell as a plain floating-point literal. No locale handling,
/// thousands separators or currency stripping.
pub fn parse_number(cell: &str) -> Option<f64> {
    cell.trim().parse::<f64>().ok()
}

/// Splits text on runs of `.`, `!` and `?`. Keeps empty pieces,
/// including the one after a trailing terminator.
pub fn split_sentences(text: &str) -> Vec<&str> {
    SENTENCE_BREAK.split(text).collect()
}

/// Returns at most `max_chars` characters of `text`.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_number_accepts_float_literals_only() {
        assert_eq!(parse_number("30"), Some(30.0));
        assert_eq!(parse_number(" 2.5 "), Some(2.5));
        assert_eq!(parse_number("1e3"), Some(1000.0));
        assert_eq!(parse_number("1,000"), None);
        assert_eq!(parse_number("$5"), None);
        assert_eq!(parse_number(""), None);
    }

    #[test]
    fn split_sentences_keeps_trailing_piece() {
        assert_eq!(
            split_sentences("The cat sat. The cat ran."),
            vec!["The cat sat", " The cat ran", ""]
        );
        assert_eq!(split_sentences("Wow!?! ok"), vec!["Wow", " ok"]);
    }

    #[test]
    fn truncate_counts_characters_not_bytes() {
        assert_eq!(truncate_chars("héllo", 2), "hé");
        assert_eq!(truncate_chars("abc", 10), "abc");
    }
}

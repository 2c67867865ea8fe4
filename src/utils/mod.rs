//! Common utilities and helper functions
//!
//! Text normalization shared by the extractors, plus display helpers for the CLI.

pub mod error;

use regex::Regex;
use std::sync::OnceLock;

/// Replace every newline form (`\r\n`, `\n`, `\r`) with a single space
///
/// Other whitespace is left untouched so token boundaries stay exactly where
/// the source text put them.
pub fn normalize_newlines(text: &str) -> String {
    static NEWLINE_RE: OnceLock<Regex> = OnceLock::new();

    let re = NEWLINE_RE.get_or_init(|| Regex::new(r"\r\n|\n|\r").expect("Invalid regex pattern"));

    re.replace_all(text, " ").into_owned()
}

/// Truncate text to at most `max_chars` characters, appending `...` when cut
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{truncated}...")
    }
}

/// Format a won amount with thousands separators, e.g. `50,000원`
pub fn format_won(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    out.push('원');
    out
}

/// Parse a user-entered won amount, tolerating `,` separators and a trailing `원`
pub fn parse_won(input: &str) -> Option<u64> {
    let cleaned: String = input
        .trim()
        .trim_end_matches('원')
        .chars()
        .filter(|c| *c != ',')
        .collect();

    cleaned.trim().parse::<u64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_newlines() {
        assert_eq!(normalize_newlines("a\nb\r\nc\rd"), "a b c d");
        assert_eq!(normalize_newlines("no newline"), "no newline");
    }

    #[test]
    fn test_truncate_text_is_char_safe() {
        assert_eq!(truncate_text("short", 10), "short");
        assert_eq!(truncate_text("very long text here", 10), "very lo...");
        assert_eq!(truncate_text("가나다라마바사아자차", 6), "가나다...");
    }

    #[test]
    fn test_format_won() {
        assert_eq!(format_won(0), "0원");
        assert_eq!(format_won(500), "500원");
        assert_eq!(format_won(50_000), "50,000원");
        assert_eq!(format_won(5_000_000), "5,000,000원");
    }

    #[test]
    fn test_parse_won() {
        assert_eq!(parse_won("10,000"), Some(10_000));
        assert_eq!(parse_won(" 500000 "), Some(500_000));
        assert_eq!(parse_won("30,000원"), Some(30_000));
        assert_eq!(parse_won("abc"), None);
        assert_eq!(parse_won(""), None);
    }
}

//! Keyword extraction and frequency ranking for one narrative element
//!
//! Tokens come from whitespace splitting of the element's concatenated text.
//! A fixed punctuation set is stripped from token boundaries only, and tokens
//! shorter than two characters are dropped. No case folding or stemming.

use serde::{Serialize, Serializer};
use std::collections::HashMap;

use crate::models::SentenceRecord;
use crate::utils::normalize_newlines;

/// Characters stripped from both ends of every token
pub const BOUNDARY_PUNCTUATION: &[char] = &['.', ',', '!', '"', '\'', '(', ')', '[', ']'];

/// Minimum token length in characters, measured after stripping
pub const MIN_TOKEN_CHARS: usize = 2;

/// Concatenated text of every sentence tagged with `element`
///
/// Sentences are joined with a single space and newlines become spaces.
pub fn element_text(records: &[SentenceRecord], element: &str) -> String {
    let joined = records
        .iter()
        .filter(|r| r.element == element)
        .map(|r| r.sentence.as_str())
        .collect::<Vec<_>>()
        .join(" ");

    normalize_newlines(&joined)
}

/// Strip boundary punctuation from a raw token
pub fn clean_token(token: &str) -> &str {
    token.trim_matches(BOUNDARY_PUNCTUATION)
}

/// Cleaned tokens for `element`, in text order with duplicates kept
pub fn keywords(records: &[SentenceRecord], element: &str) -> Vec<String> {
    element_text(records, element)
        .split_whitespace()
        .map(clean_token)
        .filter(|token| token.chars().count() >= MIN_TOKEN_CHARS)
        .map(str::to_string)
        .collect()
}

/// Token counts for one element, iterated in first-occurrence order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordFrequency {
    entries: Vec<(String, u64)>,
    index: HashMap<String, usize>,
}

impl KeywordFrequency {
    /// Count an ordered token stream
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut freq = Self::default();
        for token in tokens {
            freq.add(token.into());
        }
        freq
    }

    fn add(&mut self, token: String) {
        match self.index.get(&token) {
            Some(&pos) => self.entries[pos].1 += 1,
            None => {
                self.index.insert(token.clone(), self.entries.len());
                self.entries.push((token, 1));
            }
        }
    }

    /// Count for a token, zero if absent
    pub fn get(&self, token: &str) -> u64 {
        self.index
            .get(token)
            .map(|&pos| self.entries[pos].1)
            .unwrap_or(0)
    }

    /// Number of distinct tokens
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total token occurrences
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    /// Entries in first-occurrence order
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.entries.iter().map(|(token, count)| (token.as_str(), *count))
    }

    /// The `n` most frequent tokens, count descending, ties by first occurrence
    pub fn top(&self, n: usize) -> Vec<(String, u64)> {
        let mut ranked = self.entries.clone();
        // stable sort keeps first-occurrence order among equal counts
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(n);
        ranked
    }
}

impl Serialize for KeywordFrequency {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.entries.iter().map(|(token, count)| (token, count)))
    }
}

/// Keyword frequencies for `element`
pub fn keyword_frequency(records: &[SentenceRecord], element: &str) -> KeywordFrequency {
    let freq = KeywordFrequency::from_tokens(keywords(records, element));
    tracing::debug!(
        element = %element,
        distinct = freq.len(),
        total = freq.total(),
        "Counted keywords"
    );
    freq
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(rows: &[(&str, &str, &str)]) -> Vec<SentenceRecord> {
        rows.iter()
            .map(|(id, element, sentence)| SentenceRecord::new(*id, *element, *sentence))
            .collect()
    }

    #[test]
    fn test_element_text_joins_and_normalizes() {
        let rows = records(&[("1", "A", "line one\nline two"), ("1", "B", "skip"), ("2", "A", "three")]);
        assert_eq!(element_text(&rows, "A"), "line one line two three");
    }

    #[test]
    fn test_keywords_strip_boundary_punctuation() {
        let rows = records(&[("1", "A", "\"Hello,\" (world)! it's [fine]. a b.")]);
        assert_eq!(keywords(&rows, "A"), vec!["Hello", "world", "it's", "fine"]);
    }

    #[test]
    fn test_keywords_filter_after_stripping() {
        // "x." shrinks to "x" and must be dropped
        let rows = records(&[("1", "A", "x. ok ..")]);
        assert_eq!(keywords(&rows, "A"), vec!["ok"]);
    }

    #[test]
    fn test_keywords_keep_mid_token_punctuation() {
        let rows = records(&[("1", "A", "e.g. co-op a,b")]);
        assert_eq!(keywords(&rows, "A"), vec!["e.g", "co-op", "a,b"]);
    }

    #[test]
    fn test_keywords_count_korean_chars() {
        let rows = records(&[("1", "A", "착용감 좋은 옷 입니다.")]);
        assert_eq!(keywords(&rows, "A"), vec!["착용감", "좋은", "입니다"]);
    }

    #[test]
    fn test_keywords_case_sensitive() {
        let rows = records(&[("1", "A", "Soft soft SOFT")]);
        let freq = keyword_frequency(&rows, "A");
        assert_eq!(freq.len(), 3);
        assert_eq!(freq.get("soft"), 1);
    }

    #[test]
    fn test_keyword_frequency_counts() {
        let rows = records(&[("1", "A", "hello hello world")]);
        let freq = keyword_frequency(&rows, "A");
        assert_eq!(freq.get("hello"), 2);
        assert_eq!(freq.get("world"), 1);
        assert_eq!(freq.get("missing"), 0);
        assert_eq!(freq.total(), 3);
    }

    #[test]
    fn test_top_ties_keep_first_occurrence() {
        let freq = KeywordFrequency::from_tokens(["beta", "alpha", "gamma", "alpha", "beta", "delta"]);
        let top = freq.top(3);
        assert_eq!(
            top,
            vec![
                ("beta".to_string(), 2),
                ("alpha".to_string(), 2),
                ("gamma".to_string(), 1)
            ]
        );
    }

    #[test]
    fn test_missing_element_is_empty() {
        let rows = records(&[("1", "A", "hello")]);
        assert!(keywords(&rows, "Z").is_empty());
        assert!(keyword_frequency(&rows, "Z").is_empty());
        assert!(keyword_frequency(&[], "A").top(5).is_empty());
    }

    #[test]
    fn test_serializes_as_ordered_map() {
        let freq = KeywordFrequency::from_tokens(["b", "a", "b"]);
        let json = serde_json::to_string(&freq).unwrap();
        assert_eq!(json, r#"{"b":2,"a":1}"#);
    }
}

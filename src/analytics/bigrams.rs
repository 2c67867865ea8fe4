//! Bigram association for top keywords
//!
//! Bigrams are contiguous whitespace-token windows over an element's
//! concatenated text. Tokens here are raw: boundary punctuation is not
//! stripped, so `world` and `world.` are different bigram constituents.

use serde::{Serialize, Serializer};
use std::collections::HashMap;

use super::keywords::{element_text, keyword_frequency};
use crate::models::SentenceRecord;

/// Default number of top words to associate
pub const DEFAULT_TOP_N_WORDS: usize = 5;

/// Default number of bigrams kept per word
pub const DEFAULT_TOP_N_BIGRAMS: usize = 3;

/// A two-token window and its occurrence count
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Bigram {
    pub first: String,
    pub second: String,
    pub count: u64,
}

impl Bigram {
    /// Whether `word` is one of the two constituents
    pub fn contains(&self, word: &str) -> bool {
        self.first == word || self.second == word
    }

    /// The bigram as display text, tokens joined by a space
    pub fn text(&self) -> String {
        format!("{} {}", self.first, self.second)
    }
}

/// Counts of every distinct bigram in a document, first-occurrence order
#[derive(Debug, Clone, Default)]
pub struct BigramCounts {
    bigrams: Vec<Bigram>,
}

impl BigramCounts {
    /// Count all contiguous whitespace-token pairs in `text`
    pub fn from_text(text: &str) -> Self {
        let tokens: Vec<&str> = text.split_whitespace().collect();
        let mut index: HashMap<(&str, &str), usize> = HashMap::new();
        let mut bigrams: Vec<Bigram> = Vec::new();

        for pair in tokens.windows(2) {
            let key = (pair[0], pair[1]);
            match index.get(&key) {
                Some(&pos) => bigrams[pos].count += 1,
                None => {
                    index.insert(key, bigrams.len());
                    bigrams.push(Bigram {
                        first: pair[0].to_string(),
                        second: pair[1].to_string(),
                        count: 1,
                    });
                }
            }
        }

        Self { bigrams }
    }

    pub fn len(&self) -> usize {
        self.bigrams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bigrams.is_empty()
    }

    /// Count for an exact pair, zero if never seen
    pub fn count(&self, first: &str, second: &str) -> u64 {
        self.bigrams
            .iter()
            .find(|b| b.first == first && b.second == second)
            .map(|b| b.count)
            .unwrap_or(0)
    }

    /// Up to `limit` bigrams containing `word`, count descending, ties by first occurrence
    pub fn related(&self, word: &str, limit: usize) -> Vec<&Bigram> {
        let mut matches: Vec<&Bigram> = self.bigrams.iter().filter(|b| b.contains(word)).collect();
        matches.sort_by(|a, b| b.count.cmp(&a.count));
        matches.truncate(limit);
        matches
    }
}

/// Tuning for [`top_bigrams`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BigramOptions {
    pub top_n_words: usize,
    pub top_n_bigrams: usize,
}

impl Default for BigramOptions {
    fn default() -> Self {
        Self {
            top_n_words: DEFAULT_TOP_N_WORDS,
            top_n_bigrams: DEFAULT_TOP_N_BIGRAMS,
        }
    }
}

/// Top words mapped to their related bigrams, in word rank order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BigramAssociation {
    entries: Vec<(String, Vec<String>)>,
}

impl BigramAssociation {
    /// Bigrams for a word, if it is one of the top words
    pub fn get(&self, word: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(w, _)| w == word)
            .map(|(_, bigrams)| bigrams.as_slice())
    }

    /// Number of top words
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Top words with their bigrams, in rank order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(word, bigrams)| (word.as_str(), bigrams.as_slice()))
    }
}

impl Serialize for BigramAssociation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.entries.iter().map(|(word, bigrams)| (word, bigrams)))
    }
}

/// Associate the element's top keywords with their most frequent bigrams
pub fn top_bigrams(
    records: &[SentenceRecord],
    element: &str,
    options: BigramOptions,
) -> BigramAssociation {
    let counts = BigramCounts::from_text(&element_text(records, element));
    let top_words = keyword_frequency(records, element).top(options.top_n_words);

    let entries: Vec<(String, Vec<String>)> = top_words
        .into_iter()
        .map(|(word, _)| {
            let related = counts
                .related(&word, options.top_n_bigrams)
                .into_iter()
                .map(Bigram::text)
                .collect();
            (word, related)
        })
        .collect();

    tracing::debug!(
        element = %element,
        bigrams = counts.len(),
        words = entries.len(),
        "Associated bigrams"
    );

    BigramAssociation { entries }
}

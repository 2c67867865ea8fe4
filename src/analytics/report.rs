//! Combined per-element statistics for one filtered record set

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::Serialize;

use super::bigrams::{top_bigrams, BigramAssociation, BigramOptions};
use super::element_order::{element_order, ElementOrder};
use super::keywords::keyword_frequency;
use super::sampler::{example_sentences_with_rng, DEFAULT_EXAMPLE_COUNT};
use crate::models::SentenceRecord;

/// Knobs for building a report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportOptions {
    pub bigrams: BigramOptions,
    /// Keyword entries listed per element
    pub top_keywords: usize,
    pub example_count: usize,
    /// Report every distinct element instead of only those in the dominant order
    pub all_elements: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            bigrams: BigramOptions::default(),
            top_keywords: 20,
            example_count: DEFAULT_EXAMPLE_COUNT,
            all_elements: false,
        }
    }
}

/// A ranked keyword entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeywordCount {
    pub word: String,
    pub count: u64,
}

/// Statistics for one element
#[derive(Debug, Clone, Serialize)]
pub struct ElementReport {
    pub element: String,
    pub sentence_count: usize,
    pub keywords: Vec<KeywordCount>,
    pub examples: Vec<String>,
    pub bigrams: BigramAssociation,
}

/// Statistics for a whole record set
#[derive(Debug, Clone, Serialize)]
pub struct StoryReport {
    pub generated_at: DateTime<Utc>,
    pub campaign_count: usize,
    pub sentence_count: usize,
    pub element_order: ElementOrder,
    pub elements: Vec<ElementReport>,
}

/// Statistics for a single element
pub fn element_report<R: Rng + ?Sized>(
    records: &[SentenceRecord],
    element: &str,
    options: &ReportOptions,
    rng: &mut R,
) -> ElementReport {
    let keywords = keyword_frequency(records, element)
        .top(options.top_keywords)
        .into_iter()
        .map(|(word, count)| KeywordCount { word, count })
        .collect();

    ElementReport {
        element: element.to_string(),
        sentence_count: records.iter().filter(|r| r.element == element).count(),
        keywords,
        examples: example_sentences_with_rng(records, element, options.example_count, rng),
        bigrams: top_bigrams(records, element, options.bigrams),
    }
}

/// Build the full report; elements follow the dominant order, then any extras
pub fn build_report<R: Rng + ?Sized>(
    records: &[SentenceRecord],
    options: &ReportOptions,
    rng: &mut R,
) -> StoryReport {
    let order = element_order(records);

    let mut elements: Vec<String> = Vec::new();
    for element in order.iter() {
        if !elements.contains(element) {
            elements.push(element.clone());
        }
    }
    if options.all_elements {
        for record in records {
            if !record.element.trim().is_empty() && !elements.contains(&record.element) {
                elements.push(record.element.clone());
            }
        }
    }

    let mut campaigns: Vec<&str> = records.iter().map(|r| r.campaign_id.as_str()).collect();
    campaigns.sort_unstable();
    campaigns.dedup();

    tracing::info!(
        campaigns = campaigns.len(),
        sentences = records.len(),
        elements = elements.len(),
        "Building story report"
    );

    StoryReport {
        generated_at: Utc::now(),
        campaign_count: campaigns.len(),
        sentence_count: records.len(),
        elements: elements
            .iter()
            .map(|element| element_report(records, element, options, rng))
            .collect(),
        element_order: order,
    }
}

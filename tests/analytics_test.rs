//! Extractor behaviour over realistic records

mod common;

use common::records;
use fundstory::analytics::{
    build_report, element_order, example_sentences, example_sentences_with_rng, keyword_frequency,
    keywords, rng_from_seed, top_bigrams, BigramOptions, ReportOptions, MIN_TOKEN_CHARS,
};
use fundstory::demo::sample_dataset;
use proptest::prelude::*;
use std::collections::HashSet;

#[test]
fn test_majority_order_wins() {
    let records = records(&[
        ("1", "A", "a1"),
        ("1", "B", "b1"),
        ("2", "B", "b2"),
        ("2", "A", "a2"),
        ("3", "A", "a3"),
        ("3", "B", "b3"),
    ]);

    assert_eq!(element_order(&records).into_inner(), vec!["A", "B"]);
}

#[test]
fn test_order_tie_prefers_lowest_campaign_id() {
    let records = records(&[
        ("2", "B", "b2"),
        ("2", "A", "a2"),
        ("1", "A", "a1"),
        ("1", "B", "b1"),
    ]);

    assert_eq!(element_order(&records).into_inner(), vec!["A", "B"]);
}

#[test]
fn test_order_tie_compares_ids_numerically() {
    let records = records(&[("9", "C", "c9"), ("10", "D", "d10"), ("1", "A", "a1"), ("1", "B", "b1")]);

    assert_eq!(element_order(&records).into_inner(), vec!["A", "B"]);
}

#[test]
fn test_order_of_empty_input_is_empty() {
    assert!(element_order(&[]).is_empty());
}

#[test]
fn test_keyword_punctuation_and_length() {
    let records = records(&[
        ("1", "제품 소개", "\"편안한\" 착용감, 그리고 (가벼운) 무게!"),
        ("2", "제품 소개", "a 편안한 [착용감]."),
    ]);

    let freq = keyword_frequency(&records, "제품 소개");
    assert_eq!(freq.get("편안한"), 2);
    assert_eq!(freq.get("착용감"), 2);
    assert_eq!(freq.get("가벼운"), 1);
    assert_eq!(freq.get("a"), 0);
    assert_eq!(freq.total(), 7);
}

#[test]
fn test_keywords_only_from_requested_element() {
    let records = records(&[
        ("1", "문제 제기", "불편함 가득"),
        ("1", "브랜드 소개", "브랜드 철학"),
    ]);

    let tokens = keywords(&records, "문제 제기");
    assert_eq!(tokens, vec!["불편함", "가득"]);
    assert!(keywords(&records, "없는 요소").is_empty());
}

#[test]
fn test_sampler_returns_distinct_sentences() {
    let records = records(&[
        ("1", "A", "s1"),
        ("2", "A", "s1"),
        ("3", "A", "s2"),
        ("4", "A", "s3"),
        ("5", "B", "other"),
    ]);

    let sample = example_sentences(&records, "A", 10);
    assert_eq!(sample.len(), 3);
    let unique: HashSet<_> = sample.iter().collect();
    assert_eq!(unique.len(), 3);
    assert!(!sample.contains(&"other".to_string()));
}

#[test]
fn test_sampler_is_reproducible_with_seed() {
    let records = records(&[
        ("1", "A", "s1"),
        ("2", "A", "s2"),
        ("3", "A", "s3"),
        ("4", "A", "s4"),
        ("5", "A", "s5"),
    ]);

    let first = example_sentences_with_rng(&records, "A", 3, &mut rng_from_seed(Some(7)));
    let second = example_sentences_with_rng(&records, "A", 3, &mut rng_from_seed(Some(7)));
    assert_eq!(first, second);
}

#[test]
fn test_bigram_association_ranks_by_count() {
    let records = records(&[
        ("1", "A", "hello world hello world"),
        ("2", "A", "hello there"),
    ]);

    let assoc = top_bigrams(&records, "A", BigramOptions::default());
    let related = assoc.get("hello").expect("hello is a top keyword");
    assert_eq!(related[0], "hello world");
    assert!(related.len() <= 3);
}

#[test]
fn test_bigrams_are_case_sensitive() {
    let records = records(&[("1", "A", "Great fit great fit")]);

    let assoc = top_bigrams(&records, "A", BigramOptions::default());
    let related = assoc.get("great").expect("great is counted");
    assert!(related.iter().all(|b| !b.contains("Great")));
}

#[test]
fn test_report_over_sample_dataset() {
    let dataset = sample_dataset();
    let options = ReportOptions::default();
    let report = build_report(&dataset.sentences, &options, &mut rng_from_seed(Some(1)));

    assert_eq!(report.sentence_count, dataset.sentences.len());
    assert!(!report.elements.is_empty());
    assert!(report.elements.len() <= report.element_order.len());
    for element in &report.elements {
        assert!(element.examples.len() <= options.example_count);
        assert!(element.keywords.len() <= options.top_keywords);
    }
}

proptest! {
    #[test]
    fn prop_keywords_have_min_length(text in "[a-z.,!()\\[\\] ]{0,80}") {
        let records = records(&[("1", "A", text.as_str())]);
        for token in keywords(&records, "A") {
            prop_assert!(token.chars().count() >= MIN_TOKEN_CHARS);
        }
    }

    #[test]
    fn prop_bigram_association_respects_limits(
        text in "[a-c]{2,3}( [a-c]{2,3}){0,30}",
        top_words in 0usize..6,
        top_bigrams_per_word in 0usize..4,
    ) {
        let records = records(&[("1", "A", text.as_str())]);
        let options = BigramOptions { top_n_words: top_words, top_n_bigrams: top_bigrams_per_word };
        let assoc = top_bigrams(&records, "A", options);

        prop_assert!(assoc.len() <= top_words);
        for (word, related) in assoc.iter() {
            prop_assert!(related.len() <= top_bigrams_per_word);
            for bigram in related {
                prop_assert!(bigram.split(' ').any(|w| w == word));
            }
        }
    }

    #[test]
    fn prop_sample_size_is_bounded(n in 0usize..8, count in 0usize..6) {
        let rows: Vec<(String, String)> = (0..count)
            .map(|i| (i.to_string(), format!("sentence {i}")))
            .collect();
        let borrowed: Vec<(&str, &str, &str)> = rows
            .iter()
            .map(|(id, s)| (id.as_str(), "A", s.as_str()))
            .collect();
        let records = records(&borrowed);

        let sample = example_sentences_with_rng(&records, "A", n, &mut rng_from_seed(Some(3)));
        prop_assert_eq!(sample.len(), n.min(count));
    }
}

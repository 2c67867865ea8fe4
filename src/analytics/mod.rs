//! Text statistics over campaign storytelling sentences
//!
//! Every operation is a pure function of the record slice it is given:
//! no caching, no I/O, and empty input yields empty output rather than an
//! error. Only the example sampler draws randomness, and it takes the RNG
//! as a parameter.

pub mod bigrams;
pub mod element_order;
pub mod keywords;
pub mod report;
pub mod sampler;

pub use bigrams::{
    top_bigrams, Bigram, BigramAssociation, BigramCounts, BigramOptions, DEFAULT_TOP_N_BIGRAMS,
    DEFAULT_TOP_N_WORDS,
};
pub use element_order::{campaign_sequences, element_order, ElementOrder};
pub use keywords::{
    clean_token, element_text, keyword_frequency, keywords, KeywordFrequency, BOUNDARY_PUNCTUATION,
    MIN_TOKEN_CHARS,
};
pub use report::{build_report, element_report, ElementReport, KeywordCount, ReportOptions, StoryReport};
pub use sampler::{
    distinct_sentences, example_sentences, example_sentences_with_rng, rng_from_seed,
    DEFAULT_EXAMPLE_COUNT,
};

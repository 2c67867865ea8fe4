//! fundstory - storytelling statistics for fashion crowdfunding campaigns
//!
//! Turns (campaign, narrative element, sentence) records into the numbers
//! behind a storytelling dashboard: the dominant element order, per-element
//! keyword rankings, example sentences and keyword bigrams.
//!
//! # Architecture
//!
//! - [`analytics`] - Element order, keyword, sampler and bigram extractors
//! - [`models`] - Records, campaign metadata and dataset loading
//! - [`filter`] - Category, season and price filters
//! - [`success_cases`] - Memoized lookup of showcased campaigns
//! - [`demo`] - Demonstration chart weights and a sample dataset
//! - [`config`] - Configuration management and settings
//! - [`utils`] - Text normalization and display helpers
//!
//! # Example
//!
//! ```
//! use fundstory::analytics::{element_order, keyword_frequency, top_bigrams, BigramOptions};
//! use fundstory::models::SentenceRecord;
//!
//! let records = vec![
//!     SentenceRecord::new("1", "A", "hello world"),
//!     SentenceRecord::new("1", "B", "x"),
//!     SentenceRecord::new("2", "A", "hello world"),
//!     SentenceRecord::new("2", "B", "x"),
//! ];
//!
//! assert_eq!(element_order(&records).into_inner(), vec!["A", "B"]);
//! assert_eq!(keyword_frequency(&records, "A").get("hello"), 2);
//!
//! let bigrams = top_bigrams(&records, "A", BigramOptions::default());
//! assert_eq!(bigrams.get("hello").unwrap()[0], "hello world");
//! ```

pub mod analytics;
pub mod config;
pub mod demo;
pub mod error;
pub mod filter;
pub mod models;
pub mod success_cases;
pub mod utils;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::analytics::{
        BigramAssociation, BigramOptions, ElementOrder, KeywordFrequency, ReportOptions,
        StoryReport,
    };
    pub use crate::config::Config;
    pub use crate::error::{Error, ErrorCategory, FundstoryErrorTrait, Result};
    pub use crate::filter::{CampaignFilter, FilterArgs, PricePreset, PriceRange};
    pub use crate::models::{Campaign, Dataset, Season, SentenceRecord};
    pub use crate::success_cases::SuccessCase;
}

// Direct re-exports for convenience
pub use error::{Error, Result};
pub use models::{Dataset, SentenceRecord};

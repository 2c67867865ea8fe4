//! Configuration management for fundstory
//!
//! Settings come from defaults, `FUNDSTORY_*` environment variables or a TOML
//! file. Command-line flags override whatever was loaded.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::analytics::{BigramOptions, ReportOptions, DEFAULT_EXAMPLE_COUNT};
use crate::error::Error;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Extraction parameters
    pub analysis: AnalysisConfig,

    /// Input locations
    pub data: DataConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Extraction parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Top keywords to associate with bigrams
    pub top_n_words: usize,

    /// Bigrams kept per keyword
    pub top_n_bigrams: usize,

    /// Example sentences sampled per element
    pub example_sentences: usize,

    /// Keyword entries listed per element in reports
    pub report_keywords: usize,

    /// Fixed RNG seed; unset means fresh randomness on every run
    pub seed: Option<u64>,
}

/// Input locations
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Sentence records (JSON or JSON Lines)
    pub records_path: Option<PathBuf>,

    /// Optional success-case lookup file
    pub success_cases_path: PathBuf,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Log format (text, json)
    pub format: String,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            top_n_words: 5,
            top_n_bigrams: 3,
            example_sentences: DEFAULT_EXAMPLE_COUNT,
            report_keywords: 20,
            seed: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: String::from("info"),
            format: String::from("text"),
        }
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            records_path: None,
            success_cases_path: PathBuf::from("data/success_cases.json"),
        }
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|v| v.trim().parse::<T>().ok())
}

impl Config {
    /// Load configuration from environment variables, defaulting anything unset
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let analysis = AnalysisConfig {
            top_n_words: env_parse("FUNDSTORY_TOP_N_WORDS")
                .unwrap_or(defaults.analysis.top_n_words),
            top_n_bigrams: env_parse("FUNDSTORY_TOP_N_BIGRAMS")
                .unwrap_or(defaults.analysis.top_n_bigrams),
            example_sentences: env_parse("FUNDSTORY_EXAMPLE_SENTENCES")
                .unwrap_or(defaults.analysis.example_sentences),
            report_keywords: env_parse("FUNDSTORY_REPORT_KEYWORDS")
                .unwrap_or(defaults.analysis.report_keywords),
            seed: env_parse("FUNDSTORY_SEED"),
        };

        let data = DataConfig {
            records_path: std::env::var("FUNDSTORY_RECORDS_PATH").ok().map(PathBuf::from),
            success_cases_path: std::env::var("FUNDSTORY_SUCCESS_CASES_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.data.success_cases_path),
        };

        let logging = LoggingConfig {
            level: std::env::var("FUNDSTORY_LOG_LEVEL").unwrap_or(defaults.logging.level),
            format: std::env::var("FUNDSTORY_LOG_FORMAT").unwrap_or(defaults.logging.format),
        };

        Ok(Self {
            analysis,
            data,
            logging,
        })
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse TOML config file: {}", path.display()))?;

        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> crate::Result<()> {
        if self.analysis.top_n_words == 0 {
            return Err(Error::config("top_n_words must be greater than 0"));
        }

        if self.analysis.top_n_bigrams == 0 {
            return Err(Error::config("top_n_bigrams must be greater than 0"));
        }

        if self.analysis.example_sentences == 0 {
            return Err(Error::config("example_sentences must be greater than 0"));
        }

        if !matches!(self.logging.format.as_str(), "text" | "json") {
            return Err(Error::config(format!(
                "logging.format must be \"text\" or \"json\", got {:?}",
                self.logging.format
            )));
        }

        Ok(())
    }

    #[must_use]
    pub fn bigram_options(&self) -> BigramOptions {
        BigramOptions {
            top_n_words: self.analysis.top_n_words,
            top_n_bigrams: self.analysis.top_n_bigrams,
        }
    }

    #[must_use]
    pub fn report_options(&self, all_elements: bool) -> ReportOptions {
        ReportOptions {
            bigrams: self.bigram_options(),
            top_keywords: self.analysis.report_keywords,
            example_count: self.analysis.example_sentences,
            all_elements,
        }
    }
}

//! Category, season and price filtering of a dataset
//!
//! Mirrors the dashboard sidebar. Price presets carry the dashboard's won
//! ranges; custom bounds are validated and fall back to the default range.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::models::{Campaign, Dataset, Season, SentenceRecord, PRODUCT_CATEGORIES};
use crate::utils::{format_won, parse_won};

/// Errors from user-supplied filter values
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FilterError {
    #[error("Price must be a whole number of won, got {0:?}")]
    InvalidPrice(String),

    #[error("Minimum price {min} is greater than maximum price {max}")]
    InvertedRange { min: u64, max: u64 },

    #[error("Custom price range needs both a minimum and a maximum")]
    IncompleteRange,

    #[error("Unknown price preset: {0}")]
    UnknownPreset(String),

    #[error("Unknown season: {0}")]
    UnknownSeason(String),

    #[error("Unknown product category: {0}")]
    UnknownCategory(String),
}

/// Inclusive won range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: u64,
    pub max: u64,
}

impl PriceRange {
    /// Range used when custom input is unusable
    pub const DEFAULT: PriceRange = PriceRange {
        min: 10_000,
        max: 500_000,
    };

    pub fn new(min: u64, max: u64) -> Result<Self, FilterError> {
        if min > max {
            return Err(FilterError::InvertedRange { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn contains(&self, price: u64) -> bool {
        (self.min..=self.max).contains(&price)
    }

    /// Parse text-box input such as `"10,000"` and `"500000"`
    pub fn from_inputs(min: &str, max: &str) -> Result<Self, FilterError> {
        let min = parse_won(min).ok_or_else(|| FilterError::InvalidPrice(min.to_string()))?;
        let max = parse_won(max).ok_or_else(|| FilterError::InvalidPrice(max.to_string()))?;
        Self::new(min, max)
    }

    /// Parse custom input, substituting [`PriceRange::DEFAULT`] on failure
    ///
    /// The error is handed back so the caller can show a validation message.
    pub fn from_inputs_or_default(min: &str, max: &str) -> (Self, Option<FilterError>) {
        match Self::from_inputs(min, max) {
            Ok(range) => (range, None),
            Err(err) => {
                tracing::warn!(error = %err, "Invalid custom price range, using default");
                (Self::DEFAULT, Some(err))
            }
        }
    }
}

impl fmt::Display for PriceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ~ {}", format_won(self.min), format_won(self.max))
    }
}

/// Dashboard price choices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PricePreset {
    All,
    Under50k,
    From50kTo100k,
    From100kTo200k,
    From200kTo300k,
    Over300k,
}

impl PricePreset {
    pub fn all() -> [PricePreset; 6] {
        [
            Self::All,
            Self::Under50k,
            Self::From50kTo100k,
            Self::From100kTo200k,
            Self::From200kTo300k,
            Self::Over300k,
        ]
    }

    pub fn range(&self) -> PriceRange {
        let (min, max) = match self {
            Self::All => (10_000, 500_000),
            Self::Under50k => (10_000, 50_000),
            Self::From50kTo100k => (50_000, 100_000),
            Self::From100kTo200k => (100_000, 200_000),
            Self::From200kTo300k => (200_000, 300_000),
            Self::Over300k => (300_000, 5_000_000),
        };
        PriceRange { min, max }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Under50k => "under-50k",
            Self::From50kTo100k => "50k-100k",
            Self::From100kTo200k => "100k-200k",
            Self::From200kTo300k => "200k-300k",
            Self::Over300k => "over-300k",
        }
    }

    pub fn korean_label(&self) -> &'static str {
        match self {
            Self::All => "전체",
            Self::Under50k => "5만원 이하",
            Self::From50kTo100k => "5만원 ~ 10만원",
            Self::From100kTo200k => "10만원 ~ 20만원",
            Self::From200kTo300k => "20만원 ~ 30만원",
            Self::Over300k => "30만원 이상",
        }
    }

    /// Parse the CLI name or the Korean dashboard label
    pub fn parse(s: &str) -> Result<Self, FilterError> {
        let trimmed = s.trim();
        Self::all()
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(trimmed) || p.korean_label() == trimmed)
            .ok_or_else(|| FilterError::UnknownPreset(s.to_string()))
    }
}

fn is_all(s: &str) -> bool {
    s.eq_ignore_ascii_case("all") || s == "전체"
}

/// Parse a season filter value; `All`/`전체` means no restriction
pub fn parse_season_filter(s: &str) -> Result<Option<Season>, FilterError> {
    let trimmed = s.trim();
    if is_all(trimmed) {
        return Ok(None);
    }
    Season::parse(trimmed)
        .map(Some)
        .ok_or_else(|| FilterError::UnknownSeason(s.to_string()))
}

/// Parse a category filter value against [`PRODUCT_CATEGORIES`]
///
/// Matching is case-insensitive and yields the canonical name. `All`/`전체`
/// means no restriction.
pub fn parse_category_filter(s: &str) -> Result<Option<String>, FilterError> {
    let trimmed = s.trim();
    if is_all(trimmed) {
        return Ok(None);
    }
    PRODUCT_CATEGORIES
        .iter()
        .find(|c| c.eq_ignore_ascii_case(trimmed))
        .map(|c| Some((*c).to_string()))
        .ok_or_else(|| FilterError::UnknownCategory(s.to_string()))
}

/// Raw sidebar filter values as typed by the user
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterArgs {
    pub category: Option<String>,
    pub season: Option<String>,
    pub price: Option<String>,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
}

/// Campaign-level filter; `None` fields do not restrict
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CampaignFilter {
    pub category: Option<String>,
    pub season: Option<Season>,
    pub price: Option<PriceRange>,
}

impl CampaignFilter {
    /// Resolve raw sidebar values
    ///
    /// Custom bounds take precedence over the preset and fall back to
    /// [`PriceRange::DEFAULT`] when unusable. Giving only one bound is an error.
    pub fn from_args(args: &FilterArgs) -> Result<Self, FilterError> {
        let category = match args.category.as_deref() {
            Some(category) => parse_category_filter(category)?,
            None => None,
        };
        let season = match args.season.as_deref() {
            Some(season) => parse_season_filter(season)?,
            None => None,
        };

        let price = match (&args.min_price, &args.max_price) {
            (Some(min), Some(max)) => Some(PriceRange::from_inputs_or_default(min, max).0),
            (None, None) => match args.price.as_deref().map(PricePreset::parse).transpose()? {
                None | Some(PricePreset::All) => None,
                Some(preset) => Some(preset.range()),
            },
            _ => return Err(FilterError::IncompleteRange),
        };

        Ok(Self {
            category,
            season,
            price,
        })
    }

    pub fn is_unrestricted(&self) -> bool {
        self.category.is_none() && self.season.is_none() && self.price.is_none()
    }

    /// Whether a campaign passes; campaigns without metadata only pass an unrestricted filter
    pub fn matches(&self, campaign: Option<&Campaign>) -> bool {
        if self.is_unrestricted() {
            return true;
        }
        let Some(campaign) = campaign else {
            return false;
        };

        let category_ok = self
            .category
            .as_deref()
            .map_or(true, |c| campaign.category.eq_ignore_ascii_case(c));
        let season_ok = self.season.map_or(true, |s| campaign.season == Some(s));
        let price_ok = self
            .price
            .map_or(true, |range| campaign.price.is_some_and(|p| range.contains(p)));

        category_ok && season_ok && price_ok
    }

    /// Records of matching campaigns, original order preserved
    pub fn apply(&self, dataset: &Dataset) -> Vec<SentenceRecord> {
        let records: Vec<SentenceRecord> = dataset
            .sentences
            .iter()
            .filter(|r| self.matches(dataset.campaign(&r.campaign_id)))
            .cloned()
            .collect();

        tracing::debug!(
            category = ?self.category,
            season = ?self.season,
            price = ?self.price,
            kept = records.len(),
            total = dataset.sentences.len(),
            "Applied campaign filter"
        );

        records
    }
}

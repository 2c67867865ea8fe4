pub mod analyze;
pub mod cases;

use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use std::path::PathBuf;

use fundstory::analytics::rng_from_seed;
use fundstory::config::Config;
use fundstory::demo::sample_dataset;
use fundstory::error::DatasetError;
use fundstory::filter::{CampaignFilter, FilterArgs};
use fundstory::models::{Dataset, SentenceRecord};

// Re-export command functions for convenience
pub use analyze::{bigrams, elements, examples, keywords, order, report};
pub use cases::{demo_weights, success_cases};

/// State shared by every command
pub struct Context {
    pub config: Config,
    pub input: Option<PathBuf>,
    pub demo: bool,
    pub filter: FilterArgs,
    pub json: bool,
}

impl Context {
    /// Load the dataset and apply the sidebar filters
    pub fn load_records(&self) -> fundstory::Result<Vec<SentenceRecord>> {
        let dataset = if self.demo {
            sample_dataset()
        } else {
            let path = self.input.as_deref().ok_or(DatasetError::NoInput)?;
            Dataset::load(path)?
        };

        let filter = CampaignFilter::from_args(&self.filter)?;
        Ok(filter.apply(&dataset))
    }

    pub fn rng(&self) -> ChaCha8Rng {
        rng_from_seed(self.config.analysis.seed)
    }

    pub fn print_json<T: Serialize + ?Sized>(&self, value: &T) -> anyhow::Result<()> {
        println!("{}", serde_json::to_string_pretty(value)?);
        Ok(())
    }
}

//! Random example sentences for one element
//!
//! [`example_sentences`] is intentionally non-deterministic: every call draws
//! a fresh sample from an entropy-seeded RNG, so the dashboard shows different
//! examples on each refresh. Use [`example_sentences_with_rng`] with a seeded
//! RNG when reproducible output is needed.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::models::SentenceRecord;

/// Default sample size
pub const DEFAULT_EXAMPLE_COUNT: usize = 3;

/// Distinct sentences tagged with `element`, first-occurrence order
pub fn distinct_sentences<'a>(records: &'a [SentenceRecord], element: &str) -> Vec<&'a str> {
    let mut seen: Vec<&str> = Vec::new();
    for record in records.iter().filter(|r| r.element == element) {
        if !seen.contains(&record.sentence.as_str()) {
            seen.push(&record.sentence);
        }
    }
    seen
}

/// Sample `min(n, distinct)` sentences without replacement using `rng`
pub fn example_sentences_with_rng<R: Rng + ?Sized>(
    records: &[SentenceRecord],
    element: &str,
    n: usize,
    rng: &mut R,
) -> Vec<String> {
    let pool = distinct_sentences(records, element);
    let take = n.min(pool.len());

    pool.choose_multiple(rng, take)
        .map(|s| (*s).to_string())
        .collect()
}

/// Sample example sentences with a fresh entropy-seeded RNG
pub fn example_sentences(records: &[SentenceRecord], element: &str, n: usize) -> Vec<String> {
    example_sentences_with_rng(records, element, n, &mut rand::thread_rng())
}

/// Seeded RNG when `seed` is given, entropy-seeded otherwise
pub fn rng_from_seed(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    }
}

//! Dominant narrative element ordering across campaigns

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::ops::Deref;

use crate::models::SentenceRecord;

/// The most common element sequence among campaigns
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementOrder(Vec<String>);

impl ElementOrder {
    pub fn into_inner(self) -> Vec<String> {
        self.0
    }

    /// Arrow-joined display form, e.g. `A → B → C`
    pub fn display(&self) -> String {
        self.0.join(" → ")
    }
}

impl Deref for ElementOrder {
    type Target = [String];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Sort key for campaign ids: integer ids numerically, then other ids lexically
fn campaign_key(campaign_id: &str) -> (bool, i64, &str) {
    match campaign_id.trim().parse::<i64>() {
        Ok(n) => (false, n, ""),
        Err(_) => (true, 0, campaign_id),
    }
}

/// Per-campaign element sequences, campaigns sorted by id
///
/// Elements keep record order within a campaign. Records with a blank
/// element are skipped; campaigns left empty are omitted.
pub fn campaign_sequences(records: &[SentenceRecord]) -> Vec<(String, Vec<String>)> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut sequences: Vec<(String, Vec<String>)> = Vec::new();

    for record in records {
        if record.element.trim().is_empty() {
            continue;
        }
        let pos = *index.entry(record.campaign_id.as_str()).or_insert_with(|| {
            sequences.push((record.campaign_id.clone(), Vec::new()));
            sequences.len() - 1
        });
        sequences[pos].1.push(record.element.clone());
    }

    sequences.sort_by(|(a, _), (b, _)| campaign_key(a).cmp(&campaign_key(b)));
    sequences
}

/// Majority vote over exact per-campaign sequences
///
/// On a tie the sequence of the lowest campaign id wins.
pub fn element_order(records: &[SentenceRecord]) -> ElementOrder {
    let sequences = campaign_sequences(records);

    let mut counts: Vec<(&[String], usize)> = Vec::new();
    for (_, sequence) in &sequences {
        match counts.iter_mut().find(|(seen, _)| *seen == sequence.as_slice()) {
            Some((_, count)) => *count += 1,
            None => counts.push((sequence.as_slice(), 1)),
        }
    }

    // strict comparison keeps the lowest campaign's sequence on ties
    let mut best: Option<(&[String], usize)> = None;
    for &(sequence, count) in &counts {
        if best.map_or(true, |(_, best_count)| count > best_count) {
            best = Some((sequence, count));
        }
    }

    tracing::debug!(
        campaigns = sequences.len(),
        distinct_orders = counts.len(),
        votes = best.map(|(_, c)| c).unwrap_or(0),
        "Computed element order"
    );

    ElementOrder(best.map(|(s, _)| s.to_vec()).unwrap_or_default())
}

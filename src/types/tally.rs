//! Per-category counts and the derived-vs-stated reconciliation outcome.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::section::CategoryTag;

/// Per-category vote counts. Always carries at least the mandatory
/// `yes`/`no`/`other` tags (zero-filled when absent from the source).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct VoteTally {
    counts: BTreeMap<CategoryTag, u32>,
}

impl Default for VoteTally {
    fn default() -> Self {
        Self::new()
    }
}

impl VoteTally {
    /// An all-zero tally with the mandatory three tags present.
    pub fn new() -> Self {
        let mut counts = BTreeMap::new();
        counts.insert(CategoryTag::Yes, 0);
        counts.insert(CategoryTag::No, 0);
        counts.insert(CategoryTag::Other, 0);
        VoteTally { counts }
    }

    /// Count for `tag`, zero if the tag never appeared.
    pub fn get(&self, tag: CategoryTag) -> u32 {
        self.counts.get(&tag).copied().unwrap_or(0)
    }

    /// Sets the count for `tag`.
    pub fn set(&mut self, tag: CategoryTag, count: u32) {
        self.counts.insert(tag, count);
    }

    /// Adds `count` to the running count for `tag`.
    pub fn add(&mut self, tag: CategoryTag, count: u32) {
        *self.counts.entry(tag).or_insert(0) += count;
    }

    /// Count of yes votes.
    pub fn yes(&self) -> u32 {
        self.get(CategoryTag::Yes)
    }

    /// Count of no votes.
    pub fn no(&self) -> u32 {
        self.get(CategoryTag::No)
    }

    /// Count of other votes (refinements included once collapsed).
    pub fn other(&self) -> u32 {
        self.get(CategoryTag::Other)
    }

    /// Sum over every tag present.
    pub fn total(&self) -> u32 {
        self.counts.values().sum()
    }

    /// Whether every count is zero.
    pub fn is_empty(&self) -> bool {
        self.counts.values().all(|&n| n == 0)
    }

    /// Iterates `(tag, count)` pairs in tag order.
    pub fn iter(&self) -> impl Iterator<Item = (CategoryTag, u32)> + '_ {
        self.counts.iter().map(|(&tag, &n)| (tag, n))
    }
}

/// Outcome of comparing derived counts against stated counts.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReconcileStatus {
    /// Every category with a stated count matched exactly.
    #[serde(rename = "ok")]
    Ok,

    /// At least one category disagreed; see the mismatch list.
    #[serde(rename = "mismatch")]
    Mismatch,

    /// The document stated no counts at all, so there is no ground
    /// truth to check against. An expected outcome, not an error.
    #[serde(rename = "unverifiable")]
    Unverifiable,
}

impl std::fmt::Display for ReconcileStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                ReconcileStatus::Ok => "ok",
                ReconcileStatus::Mismatch => "mismatch",
                ReconcileStatus::Unverifiable => "unverifiable",
            }
        )
    }
}

/// A single derived-vs-stated disagreement.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Mismatch {
    /// Category that disagreed.
    pub tag: CategoryTag,
    /// How many names were actually extracted.
    pub derived: u32,
    /// What the document claimed.
    pub stated: u32,
}

/// Derived and stated counts side by side, with the comparison verdict.
///
/// A `Mismatch` status is surfaced data, never an error; the caller
/// decides whether it disqualifies the record.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ReconciliationResult {
    /// Counts derived by counting extracted names.
    pub derived_counts: VoteTally,

    /// Counts the document printed, zero-filled where absent.
    pub stated_counts: VoteTally,

    /// Comparison verdict.
    pub status: ReconcileStatus,

    /// The offending categories when `status` is `Mismatch`.
    pub mismatches: Vec<Mismatch>,
}

impl ReconciliationResult {
    /// The tally downstream consumers should trust: the derived counts,
    /// unless reconciliation failed. A mismatch means the extracted
    /// names undercount or overcount, so the printed record wins.
    pub fn preferred_counts(&self) -> &VoteTally {
        match self.status {
            ReconcileStatus::Mismatch => &self.stated_counts,
            _ => &self.derived_counts,
        }
    }
}

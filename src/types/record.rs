//! The assembled output record.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::document::Chamber;
use super::section::{CategorySection, CategoryTag};
use super::tally::{ReconciliationResult, VoteTally};

/// What kind of motion was being voted on.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum MotionClass {
    /// Passage of the bill or resolution.
    #[serde(rename = "passage")]
    Passage,

    /// Adoption or rejection of an amendment.
    #[serde(rename = "amendment")]
    Amendment,

    /// First reading.
    #[serde(rename = "reading-1")]
    Reading1,

    /// Second reading.
    #[serde(rename = "reading-2")]
    Reading2,

    /// Third reading.
    #[serde(rename = "reading-3")]
    Reading3,

    /// A committee's passage recommendation.
    #[serde(rename = "committee-passage")]
    CommitteePassage,

    /// Passage notwithstanding a gubernatorial veto.
    #[serde(rename = "veto-override")]
    VetoOverride,

    /// Anything else.
    #[serde(rename = "other")]
    Other,
}

/// Whether the motion carried.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum VoteResult {
    /// The motion carried.
    #[serde(rename = "pass")]
    Pass,

    /// The motion was defeated.
    #[serde(rename = "fail")]
    Fail,

    /// Neither stated nor derivable from the counts.
    #[serde(rename = "unknown")]
    Unknown,
}

impl std::fmt::Display for VoteResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                VoteResult::Pass => "pass",
                VoteResult::Fail => "fail",
                VoteResult::Unknown => "unknown",
            }
        )
    }
}

/// The motion under vote: cleaned description, classification, outcome.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Motion {
    /// Cleaned motion description from the preamble.
    pub text: String,

    /// Classification from the first matching rule.
    pub classification: MotionClass,

    /// Stated outcome, or the `yes > no` fallback when the source never
    /// states one.
    pub result: VoteResult,
}

/// A canonical, internally consistent roll-call vote record.
///
/// Constructed once per document by the assembler and never mutated
/// afterward. Ownership passes entirely to the caller, which is
/// responsible for bill/legislator linkage and persistence.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct VoteRecord {
    /// Chamber hint, passed through unmodified.
    pub chamber: Chamber,

    /// Date hint, passed through unmodified.
    pub date: Option<NaiveDate>,

    /// The motion under vote.
    pub motion: Motion,

    /// Canonical per-category counts.
    pub tally: VoteTally,

    /// The segmented category blocks, in document order.
    pub sections: Vec<CategorySection>,

    /// Derived-vs-stated count comparison.
    pub reconciliation: ReconciliationResult,

    /// Provenance string from the input document.
    pub source_locator: String,
}

impl VoteRecord {
    /// Names that voted yes, in document order.
    pub fn yes_voters(&self) -> Vec<&str> {
        self.voters(CategoryTag::Yes)
    }

    /// Names that voted no, in document order.
    pub fn no_voters(&self) -> Vec<&str> {
        self.voters(CategoryTag::No)
    }

    /// Names in every non-yes/non-no bucket (excused, absent, not
    /// voting, paired, and plain other), in document order.
    pub fn other_voters(&self) -> Vec<&str> {
        self.voters(CategoryTag::Other)
    }

    /// Names in sections carrying exactly `tag`, no collapsing. Lets
    /// extended-taxonomy callers pull a single refined bucket.
    pub fn voters_tagged(&self, tag: CategoryTag) -> Vec<&str> {
        self.sections
            .iter()
            .filter(|s| s.tag == tag)
            .flat_map(|s| s.extracted_names.iter().map(String::as_str))
            .collect()
    }

    /// Count of yes votes in the canonical tally.
    pub fn yes_count(&self) -> u32 {
        self.tally.yes()
    }

    /// Count of no votes in the canonical tally.
    pub fn no_count(&self) -> u32 {
        self.tally.no()
    }

    /// Count of other votes in the canonical tally.
    pub fn other_count(&self) -> u32 {
        self.tally.other()
    }

    fn voters(&self, collapsed: CategoryTag) -> Vec<&str> {
        self.sections
            .iter()
            .filter(|s| s.tag.collapse() == collapsed)
            .flat_map(|s| s.extracted_names.iter().map(String::as_str))
            .collect()
    }
}

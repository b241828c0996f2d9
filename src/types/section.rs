//! Vote-category taxonomy and segmented document blocks.

use serde::{Deserialize, Serialize};

/// Classification of a single voter's position.
///
/// `Yes`, `No`, and `Other` are mandatory; the remaining variants are
/// optional refinements that collapse into `Other` for the three-way
/// tally unless the caller opts into the extended taxonomy.
#[derive(
    Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
pub enum CategoryTag {
    /// Voted in favor.
    #[serde(rename = "yes")]
    Yes,

    /// Voted against.
    #[serde(rename = "no")]
    No,

    /// Any recorded non-yes/non-no position.
    #[serde(rename = "other")]
    Other,

    /// Excused from voting.
    #[serde(rename = "excused")]
    Excused,

    /// Absent from the chamber.
    #[serde(rename = "absent")]
    Absent,

    /// Present but not voting.
    #[serde(rename = "not_voting")]
    NotVoting,

    /// Paired with an opposing absent member; neither vote counts.
    #[serde(rename = "paired")]
    Paired,
}

impl CategoryTag {
    /// Collapses refinements into the mandatory three-way taxonomy.
    pub fn collapse(self) -> CategoryTag {
        match self {
            CategoryTag::Yes => CategoryTag::Yes,
            CategoryTag::No => CategoryTag::No,
            _ => CategoryTag::Other,
        }
    }

    /// Whether this tag is one of the mandatory three.
    pub fn is_mandatory(self) -> bool {
        matches!(self, CategoryTag::Yes | CategoryTag::No | CategoryTag::Other)
    }
}

impl std::fmt::Display for CategoryTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                CategoryTag::Yes => "yes",
                CategoryTag::No => "no",
                CategoryTag::Other => "other",
                CategoryTag::Excused => "excused",
                CategoryTag::Absent => "absent",
                CategoryTag::NotVoting => "not_voting",
                CategoryTag::Paired => "paired",
            }
        )
    }
}

/// One contiguous block of the document belonging to a single vote
/// category: the raw text between a category header and the next
/// header/terminator, plus what was extracted from it.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CategorySection {
    /// Category this block was filed under.
    pub tag: CategoryTag,

    /// The block's text as it appeared, headers and footers excluded.
    pub raw_text: String,

    /// Member names in document order. Repeats are preserved: some
    /// sources legitimately list a name twice, and deduplication policy
    /// belongs to the caller.
    pub extracted_names: Vec<String>,

    /// A count explicitly printed in the document for this category
    /// (inline on the header, or in a `Total --` footer), independent of
    /// how many names were actually tokenized.
    pub stated_count: Option<u32>,
}

//! Roll-call vote extraction and reconciliation engine.
//!
//! Takes a [`VoteDocument`], plain text lines a site-specific scraper
//! already pulled out of a PDF, HTML table, or fixed-width export, and
//! produces an immutable [`VoteRecord`]: chamber, date, motion,
//! pass/fail result, per-category tallies, and the literal lists of
//! legislators who cast each kind of vote, cross-checked against any
//! counts the source printed.
//!
//! The pipeline is a pure, synchronous transformation driven by
//! [`extract_vote`]; which phrases open and close vote-category blocks
//! is supplied as data through [`SegmenterConfig`], so a new source
//! format is a configuration change rather than new parsing code.

mod assemble;
mod config;
mod errors;
mod motion;
mod reconcile;
mod segment;
mod tokenize;
pub mod types;

pub use self::assemble::extract_vote;
pub use self::config::SegmenterConfig;
pub use self::errors::ExtractError;
pub use self::types::{
    CategorySection, CategoryTag, Chamber, FormatHint, Mismatch, Motion, MotionClass,
    ReconcileStatus, ReconciliationResult, VoteDocument, VoteDocumentBuilder, VoteRecord,
    VoteResult, VoteTally,
};

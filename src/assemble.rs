//! Record assembly: the engine entry point and final composition.

use crate::config::SegmenterConfig;
use crate::errors::ExtractError;
use crate::motion::classify_motion;
use crate::reconcile::reconcile;
use crate::segment::segment;
use crate::tokenize::tokenize_names;
use crate::types::{VoteDocument, VoteRecord};

/// Runs the full extraction pipeline over one document: segment,
/// tokenize, reconcile, classify, assemble.
///
/// Fails fast only on caller contract violations (an empty document or
/// an unusable config), before any parsing begins. Everything else
/// (malformed text, zero headers, disagreeing counts) comes back as
/// data on the record, never as an error.
///
/// The call is a pure function of its inputs: no I/O, no shared state,
/// safe to run concurrently across documents.
pub fn extract_vote(
    document: &VoteDocument,
    config: &SegmenterConfig,
) -> Result<VoteRecord, ExtractError> {
    if document.lines.is_empty() {
        return Err(ExtractError::EmptyDocument);
    }
    config.validate()?;

    let outcome = segment(document, config);
    let mut sections = outcome.sections;
    let mut implied_counts = Vec::with_capacity(sections.len());
    for section in &mut sections {
        let tokens = tokenize_names(&section.raw_text, config);
        section.extracted_names = tokens.names;
        implied_counts.push(tokens.glued_counts.iter().copied().max());
    }

    let reconciliation = reconcile(
        &document.lines,
        &sections,
        &implied_counts,
        config.extended_taxonomy(),
    );
    let motion = classify_motion(&outcome.preamble, &document.lines, &reconciliation);

    // The canonical tally carries the mandatory three tags by
    // construction; missing categories read as zero.
    let tally = reconciliation.preferred_counts().clone();

    tracing::debug!(
        "extracted vote from {}: {} section(s), reconciliation {}",
        document.source_locator,
        sections.len(),
        reconciliation.status
    );

    Ok(VoteRecord {
        chamber: document.chamber_hint,
        date: document.date_hint,
        motion,
        tally,
        sections,
        reconciliation,
        source_locator: document.source_locator.clone(),
    })
}

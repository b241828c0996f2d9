//! Tally reconciler: compares counts derived from the extracted name
//! lists against counts the document itself stated.
//!
//! Disagreement is surfaced, never thrown: these documents are
//! frequently slightly malformed, and the caller decides whether a
//! mismatch disqualifies the record.

use std::collections::BTreeMap;

use regex::Regex;

use crate::types::{
    CategorySection, CategoryTag, Mismatch, ReconcileStatus, ReconciliationResult, VoteTally,
};

/// Reconciles `sections` against whatever counts the document printed.
///
/// `implied_counts` runs parallel to `sections` and carries the largest
/// glued `-<digits>` artifact the tokenizer split off in each section;
/// it stands in for a stated count only when the section printed none.
pub(crate) fn reconcile(
    doc_lines: &[String],
    sections: &[CategorySection],
    implied_counts: &[Option<u32>],
    extended: bool,
) -> ReconciliationResult {
    let mut derived = VoteTally::new();
    for section in sections {
        derived.add(
            effective(section.tag, extended),
            section.extracted_names.len() as u32,
        );
    }

    let mut stated_map: BTreeMap<CategoryTag, u32> = BTreeMap::new();
    for (section, implied) in sections.iter().zip(implied_counts) {
        if let Some(n) = section.stated_count.or(*implied) {
            *stated_map.entry(effective(section.tag, extended)).or_insert(0) += n;
        }
    }

    // No section carried a count of its own: look for a document-level
    // summary line. A document with zero sections stays unverifiable;
    // there is nothing a summary could be checked against.
    if stated_map.is_empty() && !sections.is_empty() {
        for (tag, n) in summary_counts(doc_lines) {
            *stated_map.entry(effective(tag, extended)).or_insert(0) += n;
        }
    }

    // Only categories with an explicit stated count have ground truth;
    // a bare header with no printed count contributes no mismatch.
    let mut mismatches = Vec::new();
    for (&tag, &stated) in &stated_map {
        let derived_count = derived.get(tag);
        if derived_count != stated {
            mismatches.push(Mismatch {
                tag,
                derived: derived_count,
                stated,
            });
        }
    }

    let status = if stated_map.is_empty() {
        ReconcileStatus::Unverifiable
    } else if mismatches.is_empty() {
        ReconcileStatus::Ok
    } else {
        tracing::warn!(
            "derived name counts disagree with stated counts in {} category(ies)",
            mismatches.len()
        );
        ReconcileStatus::Mismatch
    };

    let mut stated_counts = VoteTally::new();
    for (tag, n) in stated_map {
        stated_counts.set(tag, n);
    }

    ReconciliationResult {
        derived_counts: derived,
        stated_counts,
        status,
        mismatches,
    }
}

fn effective(tag: CategoryTag, extended: bool) -> CategoryTag {
    if extended {
        tag
    } else {
        tag.collapse()
    }
}

/// Parses a document-level summary of counts, in both orientations the
/// sources use: label-first (`YEAS: 37 ... NAYS: 2`) and count-first
/// (`37 Yeas 2 Nays 1 Not Voting 0 Excused 2 Absent`).
fn summary_counts(lines: &[String]) -> Vec<(CategoryTag, u32)> {
    let text = lines.join(" ");
    let mut out = Vec::new();

    // Count-first quintuple, tried whole so "Yeas 2 Nays" inside it
    // cannot be misread as a label-first "Yeas 2".
    if let Ok(re) = Regex::new(
        r"(?i)(\d+)\s*yeas\s+(\d+)\s*nays\s+(\d+)\s*not voting\s+(\d+)\s*excused\s+(\d+)\s*absent",
    ) {
        if let Some(cap) = re.captures(&text) {
            let tags = [
                CategoryTag::Yes,
                CategoryTag::No,
                CategoryTag::NotVoting,
                CategoryTag::Excused,
                CategoryTag::Absent,
            ];
            for (i, tag) in tags.iter().enumerate() {
                if let Ok(n) = cap[i + 1].parse() {
                    out.push((*tag, n));
                }
            }
            if !out.is_empty() {
                return out;
            }
        }
    }

    let per_tag: [(CategoryTag, &str, &str); 5] = [
        (
            CategoryTag::Yes,
            r"(?i)\b(?:yeas|ayes)\b[\s.:;,–—-]*(\d+)",
            r"(?i)(\d+)\s+(?:yeas|ayes)\b",
        ),
        (
            CategoryTag::No,
            r"(?i)\b(?:nays|noes)\b[\s.:;,–—-]*(\d+)",
            r"(?i)(\d+)\s+(?:nays|noes)\b",
        ),
        (
            CategoryTag::NotVoting,
            r"(?i)\bnot\s+voting\b[\s.:;,–—-]*(\d+)",
            r"(?i)(\d+)\s+not\s+voting\b",
        ),
        (
            CategoryTag::Excused,
            r"(?i)\bexcused\b[\s.:;,–—-]*(\d+)",
            r"(?i)(\d+)\s+excused\b",
        ),
        (
            CategoryTag::Absent,
            r"(?i)\babsent\b[\s.:;,–—-]*(\d+)",
            r"(?i)(\d+)\s+absent\b",
        ),
    ];
    for (tag, label_first, count_first) in per_tag {
        for pattern in [label_first, count_first] {
            if let Ok(re) = Regex::new(pattern) {
                if let Some(cap) = re.captures(&text) {
                    if let Ok(n) = cap[1].parse() {
                        out.push((tag, n));
                        break;
                    }
                }
            }
        }
    }
    out
}

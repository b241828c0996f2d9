//! Section segmenter: one pass over the document's lines, producing the
//! preamble and the ordered category sections.
//!
//! An explicit little state machine replaces the mutate-while-scanning
//! style these documents are usually parsed with: at most one section is
//! open at a time, and a line either opens a section (header), closes
//! one (terminator), extends the open one, or belongs to the preamble.

use crate::config::{SegmenterConfig, TerminatorMatch};
use crate::types::{CategorySection, CategoryTag, FormatHint, VoteDocument};

/// Segmenter output: the lines before the first header, and the
/// category blocks with raw text populated (names not yet extracted).
pub(crate) struct SegmentOutcome {
    pub preamble: Vec<String>,
    pub sections: Vec<CategorySection>,
}

struct OpenSection {
    tag: CategoryTag,
    lines: Vec<String>,
    stated_count: Option<u32>,
}

impl OpenSection {
    fn close(self) -> CategorySection {
        CategorySection {
            tag: self.tag,
            raw_text: self.lines.join("\n"),
            extracted_names: Vec::new(),
            stated_count: self.stated_count,
        }
    }
}

pub(crate) fn segment(document: &VoteDocument, config: &SegmenterConfig) -> SegmentOutcome {
    let mut preamble: Vec<String> = Vec::new();
    let mut sections: Vec<CategorySection> = Vec::new();
    let mut open: Option<OpenSection> = None;
    let mut seen_header = false;

    // HTML table cells routinely print whole name lists in capitals, so
    // the all-caps heuristic only applies to pdf/fixed-width text.
    let all_caps_terminates = document.format_hint != FormatHint::HtmlTable;

    for line in &document.lines {
        if let Some(header) = config.match_header(line) {
            seen_header = true;
            if let Some(section) = open.take() {
                sections.push(section.close());
            }
            let mut lines = Vec::new();
            if !header.rest.is_empty() {
                // some layouts start the name list on the header line
                lines.push(header.rest);
            }
            open = Some(OpenSection {
                tag: header.tag,
                lines,
                stated_count: header.stated_count,
            });
            continue;
        }

        if open.is_some() {
            if let Some(terminator) = config.match_terminator(line) {
                if let Some(mut section) = open.take() {
                    if let TerminatorMatch::Footer { count: Some(n) } = terminator {
                        if section.stated_count.is_none() {
                            section.stated_count = Some(n);
                        } else {
                            tracing::debug!(
                                "ignoring footer count {} for '{}' section that already stated one",
                                n,
                                section.tag
                            );
                        }
                    }
                    sections.push(section.close());
                }
                continue;
            }
            if all_caps_terminates && is_all_caps(line) {
                if let Some(section) = open.take() {
                    sections.push(section.close());
                }
                continue;
            }
            if let Some(section) = open.as_mut() {
                section.lines.push(line.clone());
            }
            continue;
        }

        if !seen_header {
            preamble.push(line.clone());
        }
        // Lines after a closed section and before the next header belong
        // to neither bucket.
    }

    if let Some(section) = open.take() {
        sections.push(section.close());
    }

    SegmentOutcome { preamble, sections }
}

/// An entirely upper-case line signals a new unrelated record.
fn is_all_caps(line: &str) -> bool {
    let mut has_alpha = false;
    for c in line.chars() {
        if c.is_lowercase() {
            return false;
        }
        if c.is_alphabetic() {
            has_alpha = true;
        }
    }
    has_alpha
}

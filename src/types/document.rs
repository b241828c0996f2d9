//! Input document types supplied by site-specific scrapers.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Legislative chamber a vote took place in.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Chamber {
    /// State senate (or equivalent).
    #[serde(rename = "upper")]
    Upper,

    /// State house/assembly (or equivalent).
    #[serde(rename = "lower")]
    Lower,

    /// A joint session of both chambers.
    #[serde(rename = "joint")]
    Joint,

    /// The source did not say.
    #[serde(rename = "unknown")]
    #[default]
    Unknown,
}
impl std::fmt::Display for Chamber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Chamber::Upper => "upper",
                Chamber::Lower => "lower",
                Chamber::Joint => "joint",
                Chamber::Unknown => "unknown",
            }
        )
    }
}

/// How the document text was produced upstream. Informs which
/// segmentation heuristics apply (e.g. the all-caps terminator rule is
/// meaningless for HTML table cells, which routinely shout entire name
/// lists in capitals).
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormatHint {
    /// Text lines extracted from a PDF.
    #[serde(rename = "pdf-text")]
    #[default]
    PdfText,

    /// Cell text flattened out of an HTML table.
    #[serde(rename = "html-table")]
    HtmlTable,

    /// A fixed-width text export.
    #[serde(rename = "fixed-width")]
    FixedWidth,
}

/// A roll-call vote document, already converted to plain text lines by
/// the acquisition collaborator (PDF/HTML conversion happens upstream).
///
/// Immutable input to [`extract_vote`](crate::extract_vote). The hints
/// are passed through to the output record unmodified; disambiguating
/// them (e.g. inferring chamber from a bill-id prefix) is the caller's
/// job.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct VoteDocument {
    /// One logical line per entry, UTF-8, page-break artifacts already
    /// neutralized.
    pub lines: Vec<String>,

    /// Chamber the caller believes the vote belongs to.
    pub chamber_hint: Chamber,

    /// Date the caller believes the vote took place on.
    pub date_hint: Option<NaiveDate>,

    /// Opaque provenance string (typically the source URL).
    pub source_locator: String,

    /// How the line text was produced.
    pub format_hint: FormatHint,
}

impl VoteDocument {
    /// Starts a builder for a document sourced from `source_locator`.
    pub fn builder(source_locator: impl Into<String>) -> VoteDocumentBuilder {
        VoteDocumentBuilder {
            lines: Vec::new(),
            chamber_hint: Chamber::Unknown,
            date_hint: None,
            source_locator: source_locator.into(),
            format_hint: FormatHint::PdfText,
        }
    }
}

/// Builder for [`VoteDocument`]. Used by callers assembling documents
/// from scraped pages and by tests constructing synthetic journals.
#[derive(Clone, Debug)]
pub struct VoteDocumentBuilder {
    lines: Vec<String>,
    chamber_hint: Chamber,
    date_hint: Option<NaiveDate>,
    source_locator: String,
    format_hint: FormatHint,
}

impl VoteDocumentBuilder {
    /// Appends a single line.
    pub fn with_line(mut self, line: impl Into<String>) -> Self {
        self.lines.push(line.into());
        self
    }

    /// Appends every line from an iterator.
    pub fn with_lines<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.lines.extend(lines.into_iter().map(Into::into));
        self
    }

    /// Sets the chamber hint.
    pub fn with_chamber(mut self, chamber: Chamber) -> Self {
        self.chamber_hint = chamber;
        self
    }

    /// Sets the date hint.
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date_hint = Some(date);
        self
    }

    /// Sets the format hint.
    pub fn with_format(mut self, format: FormatHint) -> Self {
        self.format_hint = format;
        self
    }

    /// Finishes the document.
    pub fn build(self) -> VoteDocument {
        VoteDocument {
            lines: self.lines,
            chamber_hint: self.chamber_hint,
            date_hint: self.date_hint,
            source_locator: self.source_locator,
            format_hint: self.format_hint,
        }
    }
}

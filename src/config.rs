//! Data-driven segmentation patterns.
//!
//! Everything the segmenter and tokenizer match against (category
//! header phrases, terminator phrases, junk tokens) is supplied as
//! data, so a new source format is a configuration change, not a code
//! change. [`SegmenterConfig::default`] carries the catalog of phrases
//! observed across state journals (Maryland's "Voting Yea", Iowa's
//! "The ayes were", Louisiana's "Total --" footers, and so on).

use crate::errors::ExtractError;
use crate::types::CategoryTag;

/// Characters that pad a header phrase from its inline count and a
/// count from whatever trails it: `YEAS: 37`, `YEAS--37`, `Yeas 3`.
const SEPARATORS: &[char] = &[':', ';', ',', '.', '-', '\u{2013}', '\u{2014}'];

/// A matched category header line.
pub(crate) struct HeaderMatch {
    pub tag: CategoryTag,
    /// Inline count carried on the header line itself, if any.
    pub stated_count: Option<u32>,
    /// Text remaining on the header line after phrase and count;
    /// some layouts start the name list on the header line.
    pub rest: String,
}

/// A matched terminator line.
pub(crate) enum TerminatorMatch {
    /// A `Total -- 27` style footer; the count, when present, belongs
    /// to the section the footer closes.
    Footer { count: Option<u32> },
    /// A boilerplate lead-in signalling the record is over.
    Boilerplate,
}

/// Pattern configuration for one source format.
///
/// Phrases are matched case-insensitively at the start of a trimmed
/// line and must end at a word boundary, so a header token buried in
/// ordinary prose never opens a section.
#[derive(Clone, Debug)]
pub struct SegmenterConfig {
    headers: Vec<(CategoryTag, String)>,
    footers: Vec<String>,
    terminators: Vec<String>,
    junk_tokens: Vec<String>,
    extended_taxonomy: bool,
}

impl Default for SegmenterConfig {
    fn default() -> Self {
        let mut config = SegmenterConfig::empty();
        for phrase in ["voting yea", "the yeas were", "the ayes were", "yeas", "ayes"] {
            config = config.with_header(CategoryTag::Yes, phrase);
        }
        for phrase in ["voting nay", "the nays were", "the noes were", "nays", "noes"] {
            config = config.with_header(CategoryTag::No, phrase);
        }
        config = config.with_header(CategoryTag::Other, "absent or not voting");
        for phrase in ["present and not voting", "not voting", "present"] {
            config = config.with_header(CategoryTag::NotVoting, phrase);
        }
        for phrase in ["excused from voting", "excused", "abstain"] {
            config = config.with_header(CategoryTag::Excused, phrase);
        }
        for phrase in ["excused (absent)", "absent"] {
            config = config.with_header(CategoryTag::Absent, phrase);
        }
        config = config.with_header(CategoryTag::Paired, "paired");

        config = config.with_footer("total");
        for phrase in [
            "the bill",
            "the committee",
            "the resolution",
            "the motion",
            "the joint resolution",
            "under the",
        ] {
            config = config.with_terminator(phrase);
        }

        for token in [
            "none",
            "total",
            "copy",
            "indicates vote change",
            "presiding",
            "mr. speaker",
            "spkr.",
            "vacant",
            "vacancy",
        ] {
            config = config.with_junk_token(token);
        }
        config
    }
}

impl SegmenterConfig {
    /// A config with no patterns at all. A base for sources whose
    /// vocabulary shares nothing with the default catalog; `validate`
    /// rejects it until the mandatory categories get header phrases.
    pub fn empty() -> Self {
        SegmenterConfig {
            headers: Vec::new(),
            footers: Vec::new(),
            terminators: Vec::new(),
            junk_tokens: Vec::new(),
            extended_taxonomy: false,
        }
    }

    /// Adds a header phrase for `tag`.
    pub fn with_header(mut self, tag: CategoryTag, phrase: impl Into<String>) -> Self {
        self.headers.push((tag, phrase.into().to_lowercase()));
        self
    }

    /// Adds a count-carrying footer phrase (a `Total --` variant).
    pub fn with_footer(mut self, phrase: impl Into<String>) -> Self {
        self.footers.push(phrase.into().to_lowercase());
        self
    }

    /// Adds a boilerplate terminator phrase.
    pub fn with_terminator(mut self, phrase: impl Into<String>) -> Self {
        self.terminators.push(phrase.into().to_lowercase());
        self
    }

    /// Adds a token the tokenizer should discard rather than count as a
    /// name.
    pub fn with_junk_token(mut self, token: impl Into<String>) -> Self {
        self.junk_tokens.push(token.into().to_lowercase());
        self
    }

    /// Keeps refined category tags (excused/absent/not voting/paired)
    /// distinct in the tallies instead of collapsing them into `other`.
    pub fn with_extended_taxonomy(mut self, extended: bool) -> Self {
        self.extended_taxonomy = extended;
        self
    }

    /// Whether the extended taxonomy was requested.
    pub fn extended_taxonomy(&self) -> bool {
        self.extended_taxonomy
    }

    /// Fails fast when the config cannot express a three-way tally.
    pub fn validate(&self) -> Result<(), ExtractError> {
        for tag in [CategoryTag::Yes, CategoryTag::No, CategoryTag::Other] {
            if !self.headers.iter().any(|(t, _)| *t == tag) {
                return Err(ExtractError::InvalidConfig(format!(
                    "no header phrases for mandatory category '{}'",
                    tag
                )));
            }
        }
        Ok(())
    }

    /// Tries to read `line` as a category header. Longest matching
    /// phrase wins, so "absent or not voting" beats "absent".
    pub(crate) fn match_header(&self, line: &str) -> Option<HeaderMatch> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return None;
        }
        let mut best: Option<(CategoryTag, usize)> = None;
        for (tag, phrase) in &self.headers {
            if starts_with_ci(trimmed, phrase)
                && boundary_ok(trimmed, phrase.len())
                && best.map_or(true, |(_, len)| phrase.len() > len)
            {
                best = Some((*tag, phrase.len()));
            }
        }
        let (tag, len) = best?;

        let after = strip_separators(&trimmed[len..]);
        let (stated_count, rest) = if let Some((n, used)) = leading_int(after) {
            (Some(n), strip_separators(&after[used..]))
        } else if starts_with_ci(after, "none") && boundary_ok(after, 4) {
            // "NAYS--None." prints zero in words
            (Some(0), strip_separators(&after[4..]))
        } else {
            (None, after)
        };
        Some(HeaderMatch {
            tag,
            stated_count,
            rest: rest.trim().to_string(),
        })
    }

    /// Tries to read `line` as a terminator.
    pub(crate) fn match_terminator(&self, line: &str) -> Option<TerminatorMatch> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return None;
        }
        for phrase in &self.footers {
            if starts_with_ci(trimmed, phrase) && boundary_ok(trimmed, phrase.len()) {
                let count =
                    leading_int(strip_separators(&trimmed[phrase.len()..])).map(|(n, _)| n);
                return Some(TerminatorMatch::Footer { count });
            }
        }
        for phrase in &self.terminators {
            if starts_with_ci(trimmed, phrase) && boundary_ok(trimmed, phrase.len()) {
                return Some(TerminatorMatch::Boilerplate);
            }
        }
        None
    }

    /// Whether an already-lowercased, punctuation-trimmed token is
    /// boilerplate rather than a name.
    pub(crate) fn is_junk(&self, probe: &str) -> bool {
        self.junk_tokens
            .iter()
            .any(|junk| probe == junk || probe == junk.trim_end_matches('.'))
    }
}

fn starts_with_ci(s: &str, prefix: &str) -> bool {
    s.len() >= prefix.len()
        && s.is_char_boundary(prefix.len())
        && s[..prefix.len()].eq_ignore_ascii_case(prefix)
}

fn boundary_ok(s: &str, len: usize) -> bool {
    match s[len..].chars().next() {
        None => true,
        Some(c) => !c.is_alphanumeric(),
    }
}

fn strip_separators(s: &str) -> &str {
    s.trim_start_matches(|c: char| c.is_whitespace() || SEPARATORS.contains(&c))
}

fn leading_int(s: &str) -> Option<(u32, usize)> {
    let end = s
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(s.len());
    if end == 0 {
        return None;
    }
    s[..end].parse().ok().map(|n| (n, end))
}

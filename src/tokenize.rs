//! Name tokenizer: turns a section's raw text into member names.
//!
//! Journals lay names out in columns separated by runs of whitespace,
//! comma lists, or prose joined with "and", frequently with honorifics,
//! footnote markers, and fixed-width extraction artifacts glued on.
//! The tokenizer never fails on a bad token; it drops it into a
//! per-section diagnostics list and keeps going.

use crate::config::SegmenterConfig;

/// Honorific prefixes stripped from the front of a candidate name.
const HONORIFICS: &[&str] = &[
    "senator ",
    "representative ",
    "sen. ",
    "rep. ",
    "mr. ",
    "ms. ",
    "mrs. ",
];

/// Names and side data extracted from one section's raw text.
#[derive(Debug, Default)]
pub(crate) struct TokenizedSection {
    /// Member names in encounter order, duplicates preserved.
    pub names: Vec<String>,
    /// Numeric suffixes split off glued `Name-12` artifacts; the
    /// reconciler treats the largest as the block's implied count.
    pub glued_counts: Vec<u32>,
    /// Tokens discarded as boilerplate, for later inspection.
    pub dropped: Vec<String>,
}

/// Tokenizes a section's raw text. Worst case on malformed input is an
/// empty name list, never a panic.
pub(crate) fn tokenize_names(raw_text: &str, config: &SegmenterConfig) -> TokenizedSection {
    let mut out = TokenizedSection::default();

    for line in raw_text.lines() {
        for chunk in column_chunks(line) {
            for piece in chunk.split([',', ';']) {
                for candidate in split_standalone_and(piece) {
                    accept(&candidate, config, &mut out);
                }
            }
        }
    }

    if !out.dropped.is_empty() {
        tracing::debug!(
            "discarded {} non-name token(s): {:?}",
            out.dropped.len(),
            out.dropped
        );
    }
    out
}

fn accept(candidate: &str, config: &SegmenterConfig, out: &mut TokenizedSection) {
    let token = candidate.trim();
    if token.is_empty() {
        return;
    }

    // Junk check on the raw form first: "Mr. Speaker" has to match
    // before honorific stripping turns it into "Speaker".
    let raw_probe = trim_punct(token).to_lowercase();
    if raw_probe.is_empty() {
        return;
    }
    if config.is_junk(&raw_probe) {
        out.dropped.push(token.to_string());
        return;
    }

    let mut name = strip_paired_annotation(token);

    // A lone initial split off by a column boundary belongs to the
    // previous name, period and all.
    if is_initial_fragment(name.trim()) {
        match out.names.last_mut() {
            Some(last) => {
                last.push(' ');
                last.push_str(name.trim());
            }
            None => out.dropped.push(token.to_string()),
        }
        return;
    }

    name = trim_punct(name);

    if let Some((head, n)) = split_glued_count(name) {
        out.glued_counts.push(n);
        name = trim_punct(head);
    }

    let name = strip_honorifics(name);

    let cleaned = trim_punct(name).trim();
    if cleaned.is_empty()
        || cleaned.chars().all(|c| c.is_ascii_digit())
        || is_page_footer(cleaned)
        || config.is_junk(&cleaned.to_lowercase())
    {
        out.dropped.push(token.to_string());
        return;
    }

    out.names.push(cleaned.to_string());
}

/// Splits a line into columnar chunks at tabs or runs of two or more
/// spaces. Single spaces stay inside a chunk; they separate the parts
/// of one name, not two names.
fn column_chunks(line: &str) -> Vec<String> {
    line.replace('\t', "  ")
        .split("  ")
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Splits a piece at the word "and" standing alone between names,
/// normalizing internal whitespace as it goes.
fn split_standalone_and(piece: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    for word in piece.split_whitespace() {
        if word.eq_ignore_ascii_case("and") {
            if !current.is_empty() {
                out.push(current.join(" "));
                current.clear();
            }
        } else {
            current.push(word);
        }
    }
    if !current.is_empty() {
        out.push(current.join(" "));
    }
    out
}

fn trim_punct(s: &str) -> &str {
    s.trim_matches(|c: char| {
        c.is_whitespace()
            || matches!(
                c,
                '.' | ','
                    | ';'
                    | ':'
                    | '*'
                    | '"'
                    | '\''
                    | '('
                    | ')'
                    | '['
                    | ']'
                    | '-'
                    | '\u{2013}'
                    | '\u{2014}'
                    | '\u{2018}'
                    | '\u{2019}'
                    | '\u{201c}'
                    | '\u{201d}'
                    | '\u{2020}'
                    | '\u{2021}'
            )
    })
}

/// Strips a trailing `(yea)`/`(nay)` annotation from a paired-vote
/// listing; the name stays in its section, the annotation goes.
fn strip_paired_annotation(name: &str) -> &str {
    let trimmed = name.trim_end();
    if let Some(open) = trimmed.rfind('(') {
        if trimmed.ends_with(')') {
            let inner = trimmed[open + 1..trimmed.len() - 1].trim().to_lowercase();
            if matches!(inner.as_str(), "yea" | "nay" | "yes" | "no" | "y" | "n") {
                return trimmed[..open].trim_end();
            }
        }
    }
    trimmed
}

/// Splits a `-<digits>` running-tally suffix glued onto a name by
/// fixed-width extraction (`Garcia-12`). Hyphenated surnames survive
/// because the tail has to be all digits.
fn split_glued_count(name: &str) -> Option<(&str, u32)> {
    let idx = name.rfind('-')?;
    let (head, tail) = (&name[..idx], &name[idx + 1..]);
    if head.is_empty() || tail.is_empty() || !tail.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    tail.parse().ok().map(|n| (head, n))
}

fn strip_honorifics(name: &str) -> &str {
    let mut out = name.trim_start();
    loop {
        let mut stripped = false;
        for h in HONORIFICS {
            if out.len() >= h.len()
                && out.is_char_boundary(h.len())
                && out[..h.len()].eq_ignore_ascii_case(h)
            {
                out = out[h.len()..].trim_start();
                stripped = true;
                break;
            }
        }
        if !stripped {
            return out;
        }
    }
}

/// Matches a lone uppercase initial, with or without its period.
fn is_initial_fragment(token: &str) -> bool {
    let mut chars = token.chars();
    match (chars.next(), chars.next(), chars.next()) {
        (Some(c), None, None) => c.is_ascii_uppercase(),
        (Some(c), Some('.'), None) => c.is_ascii_uppercase(),
        _ => false,
    }
}

fn is_page_footer(token: &str) -> bool {
    match token.to_lowercase().strip_prefix("page") {
        Some(rest) => {
            let rest = rest.trim();
            !rest.is_empty() && rest.chars().all(|c| c.is_ascii_digit())
        }
        None => false,
    }
}

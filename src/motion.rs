//! Motion/result classifier.
//!
//! Works on the preamble, everything before the first category header.
//! Classification is an ordered rule table, most specific first, first
//! match wins. The pass/fail result comes from an explicit statement
//! when the source prints one, and otherwise falls back to comparing
//! yes/no counts; the `yes > no` heuristic is knowingly wrong for
//! supermajority motions, but the true threshold is not recoverable
//! from the text, so the fallback stays.

use regex::Regex;

use crate::types::{Motion, MotionClass, ReconciliationResult, VoteResult};

const RULES: &[(&str, MotionClass)] = &[
    (
        r"(?i)notwithstanding the objections",
        MotionClass::VetoOverride,
    ),
    (
        r"(?i)veto.{0,40}overrid|overrid.{0,40}veto",
        MotionClass::VetoOverride,
    ),
    (
        r"(?i)\bcommittee\b.{0,60}\b(?:report|recommend|passage|passed|adopt)",
        MotionClass::CommitteePassage,
    ),
    (r"(?i)\bdo pass\b", MotionClass::CommitteePassage),
    (r"(?i)\bamendment\b", MotionClass::Amendment),
    (
        r"(?i)\bthird reading\b|\bread (?:a )?third time\b",
        MotionClass::Reading3,
    ),
    (
        r"(?i)\bsecond reading\b|\bread (?:a )?second time\b",
        MotionClass::Reading2,
    ),
    (
        r"(?i)\bfirst reading\b|\bread (?:a )?first time\b",
        MotionClass::Reading1,
    ),
    (
        r"(?i)\bpassage\b|\bpass(?:ed)?\b|\badopt(?:ed|ion)?\b|\bconcurr(?:ed|ence)?\b",
        MotionClass::Passage,
    ),
];

/// Builds the [`Motion`] for a document from its preamble and, for the
/// result, the reconciled counts.
pub(crate) fn classify_motion(
    preamble: &[String],
    doc_lines: &[String],
    reconciliation: &ReconciliationResult,
) -> Motion {
    let text = clean_motion_text(preamble);
    let classification = classify(&text);
    let result = determine_result(&text, doc_lines, reconciliation);
    Motion {
        text,
        classification,
        result,
    }
}

/// Joins the preamble, collapses whitespace, drops stray quotes, and
/// removes question-framing prefixes.
fn clean_motion_text(preamble: &[String]) -> String {
    let joined = preamble.join(" ");
    let collapsed = joined.split_whitespace().collect::<Vec<_>>().join(" ");
    let unquoted: String = collapsed
        .chars()
        .filter(|c| !matches!(c, '"' | '\u{201c}' | '\u{201d}'))
        .collect();
    let mut text = unquoted.trim().to_string();
    if let Ok(re) = Regex::new(r"(?i)^(?:on the question|motion)[\s:,;–—-]*") {
        text = re.replace(&text, "").into_owned();
    }
    text.trim().to_string()
}

fn classify(text: &str) -> MotionClass {
    for (pattern, class) in RULES {
        if let Ok(re) = Regex::new(pattern) {
            if re.is_match(text) {
                return *class;
            }
        }
    }
    MotionClass::Other
}

fn determine_result(
    motion_text: &str,
    doc_lines: &[String],
    reconciliation: &ReconciliationResult,
) -> VoteResult {
    let doc_text = doc_lines.join(" ");
    if let Some(result) = explicit_result(motion_text).or_else(|| explicit_result(&doc_text)) {
        return result;
    }
    let tally = reconciliation.preferred_counts();
    if tally.yes() == 0 && tally.no() == 0 {
        VoteResult::Unknown
    } else if tally.yes() > tally.no() {
        VoteResult::Pass
    } else {
        VoteResult::Fail
    }
}

/// Finds an explicit outcome statement. "Shall the bill be passed?"
/// poses the question; it does not answer it, so a result word preceded
/// by be/being/shall/not is skipped.
fn explicit_result(text: &str) -> Option<VoteResult> {
    let re =
        Regex::new(r"(?i)\b(passed|adopted|prevailed|failed|rejected|lost|defeated)\b").ok()?;
    for m in re.find_iter(text) {
        let before = text[..m.start()].trim_end();
        let prev = before
            .rsplit(|c: char| !c.is_alphanumeric())
            .next()
            .unwrap_or("");
        if prev.eq_ignore_ascii_case("be")
            || prev.eq_ignore_ascii_case("being")
            || prev.eq_ignore_ascii_case("shall")
            || prev.eq_ignore_ascii_case("not")
        {
            continue;
        }
        return Some(match m.as_str().to_lowercase().as_str() {
            "passed" | "adopted" | "prevailed" => VoteResult::Pass,
            _ => VoteResult::Fail,
        });
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CategoryTag, ReconcileStatus, VoteTally};

    fn recon(yes: u32, no: u32, status: ReconcileStatus) -> ReconciliationResult {
        let mut derived = VoteTally::new();
        derived.set(CategoryTag::Yes, yes);
        derived.set(CategoryTag::No, no);
        ReconciliationResult {
            derived_counts: derived,
            stated_counts: VoteTally::new(),
            status,
            mismatches: vec![],
        }
    }

    fn classify_text(text: &str) -> MotionClass {
        classify(text)
    }

    // -- cleaning --

    #[test]
    fn motion_prefix_and_quotes_stripped() {
        let text = clean_motion_text(&["MOTION:  \"Final   Passage\"".to_string()]);
        assert_eq!(text, "Final Passage");
    }

    #[test]
    fn on_the_question_prefix_stripped() {
        let text =
            clean_motion_text(&["On the question Shall the bill pass?".to_string()]);
        assert_eq!(text, "Shall the bill pass?");
    }

    #[test]
    fn preamble_lines_join_with_collapsed_whitespace() {
        let lines = vec!["Shall the bill".to_string(), "  pass?".to_string()];
        assert_eq!(clean_motion_text(&lines), "Shall the bill pass?");
    }

    // -- classification --

    #[test]
    fn veto_override_beats_passage() {
        assert_eq!(
            classify_text("Shall the bill pass notwithstanding the objections of the Governor?"),
            MotionClass::VetoOverride
        );
    }

    #[test]
    fn committee_report_classifies_as_committee_passage() {
        assert_eq!(
            classify_text("Committee report: passage recommended"),
            MotionClass::CommitteePassage
        );
        assert_eq!(classify_text("Do pass as amended?"), MotionClass::CommitteePassage);
    }

    #[test]
    fn amendment_beats_passage() {
        assert_eq!(
            classify_text("Senate Amendment 2 adopted"),
            MotionClass::Amendment
        );
    }

    #[test]
    fn readings_classify_by_number() {
        assert_eq!(classify_text("Read a third time and passed"), MotionClass::Reading3);
        assert_eq!(classify_text("Second Reading of the bill"), MotionClass::Reading2);
        assert_eq!(classify_text("Read first time"), MotionClass::Reading1);
    }

    #[test]
    fn plain_passage() {
        assert_eq!(classify_text("Final Passage"), MotionClass::Passage);
        assert_eq!(classify_text("Shall the bill pass?"), MotionClass::Passage);
    }

    #[test]
    fn unmatched_text_is_other() {
        assert_eq!(
            classify_text("Motion to adjourn until Tuesday"),
            MotionClass::Other
        );
    }

    // -- result --

    #[test]
    fn explicit_passed_wins_over_counts() {
        let lines = vec!["The motion PASSED".to_string()];
        let result = determine_result("The motion PASSED", &lines, &recon(0, 5, ReconcileStatus::Unverifiable));
        assert_eq!(result, VoteResult::Pass);
    }

    #[test]
    fn explicit_rejected_wins_over_counts() {
        let lines = vec!["Amendment rejected".to_string()];
        let result =
            determine_result("Amendment rejected", &lines, &recon(9, 1, ReconcileStatus::Ok));
        assert_eq!(result, VoteResult::Fail);
    }

    #[test]
    fn question_form_is_not_an_explicit_result() {
        assert_eq!(explicit_result("Shall the bill be passed?"), None);
        assert_eq!(explicit_result("Shall the amendment be adopted?"), None);
    }

    #[test]
    fn counts_decide_when_nothing_is_stated() {
        let result = determine_result("Final Passage", &[], &recon(5, 2, ReconcileStatus::Unverifiable));
        assert_eq!(result, VoteResult::Pass);
        let result = determine_result("Final Passage", &[], &recon(2, 5, ReconcileStatus::Ok));
        assert_eq!(result, VoteResult::Fail);
    }

    #[test]
    fn tie_does_not_pass() {
        let result = determine_result("Final Passage", &[], &recon(3, 3, ReconcileStatus::Ok));
        assert_eq!(result, VoteResult::Fail);
    }

    #[test]
    fn zero_counts_and_no_statement_is_unknown() {
        let result = determine_result("", &[], &recon(0, 0, ReconcileStatus::Unverifiable));
        assert_eq!(result, VoteResult::Unknown);
    }

    #[test]
    fn stated_counts_preferred_on_mismatch() {
        let mut derived = VoteTally::new();
        derived.set(CategoryTag::Yes, 1);
        derived.set(CategoryTag::No, 3);
        let mut stated = VoteTally::new();
        stated.set(CategoryTag::Yes, 5);
        stated.set(CategoryTag::No, 3);
        let reconciliation = ReconciliationResult {
            derived_counts: derived,
            stated_counts: stated,
            status: ReconcileStatus::Mismatch,
            mismatches: vec![],
        };
        assert_eq!(
            determine_result("Final Passage", &[], &reconciliation),
            VoteResult::Pass
        );
    }
}

//! End-to-end tests driving the public `extract_vote` API over
//! synthetic journal documents.

use chrono::NaiveDate;
use rollcall_engine::{
    extract_vote, CategoryTag, Chamber, ExtractError, MotionClass, ReconcileStatus,
    SegmenterConfig, VoteDocument, VoteResult,
};

fn config() -> SegmenterConfig {
    SegmenterConfig::default()
}

/// Builds a journal document from known name lists, printing a count on
/// each header the way well-formed journals do.
fn journal(yes: &[&str], no: &[&str], other: &[&str]) -> VoteDocument {
    let mut builder = VoteDocument::builder("synthetic://journal")
        .with_line("MOTION: Final Passage")
        .with_line(format!("YEAS: {}", yes.len()))
        .with_line(yes.join("  "))
        .with_line(format!("NAYS: {}", no.len()))
        .with_line(no.join("  "));
    if !other.is_empty() {
        builder = builder
            .with_line(format!("Absent or not voting: {}", other.len()))
            .with_line(other.join("  "));
    }
    builder.build()
}

// -- Scenario A: inline counts, Total footer --

#[test]
fn scenario_a_inline_counts() {
    let doc = VoteDocument::builder("https://example.gov/vote.pdf")
        .with_lines([
            "MOTION: Final Passage",
            "YEAS: 3",
            "Smith  Jones  Lee",
            "NAYS: 1",
            "Brown",
            "Total -- 4",
        ])
        .build();
    let record = extract_vote(&doc, &config()).unwrap();

    assert_eq!(record.tally.yes(), 3);
    assert_eq!(record.tally.no(), 1);
    assert_eq!(record.tally.other(), 0);
    assert_eq!(record.reconciliation.status, ReconcileStatus::Ok);
    assert_eq!(record.motion.classification, MotionClass::Passage);
    assert_eq!(record.motion.result, VoteResult::Pass);
    assert_eq!(record.motion.text, "Final Passage");
    assert_eq!(record.yes_voters(), vec!["Smith", "Jones", "Lee"]);
    assert_eq!(record.no_voters(), vec!["Brown"]);
}

// -- Scenario B: glued count artifact --

#[test]
fn scenario_b_glued_count_preserved_as_side_counter() {
    let doc = VoteDocument::builder("https://example.gov/vote.pdf")
        .with_lines(["On passage of the bill", "Voting Yea", "Garcia-12"])
        .build();
    let record = extract_vote(&doc, &config()).unwrap();

    // The 12 is excluded from the name...
    assert_eq!(record.yes_voters(), vec!["Garcia"]);
    // ...and not silently lost: it surfaces as the section's implied
    // stated count, and the disagreement with the single extracted name
    // is flagged.
    assert_eq!(record.reconciliation.stated_counts.yes(), 12);
    assert_eq!(record.reconciliation.status, ReconcileStatus::Mismatch);
    assert_eq!(record.reconciliation.derived_counts.yes(), 1);
}

// -- Scenario C: no stated counts anywhere --

#[test]
fn scenario_c_unverifiable_result_from_counts() {
    let doc = VoteDocument::builder("https://example.gov/vote.pdf")
        .with_lines([
            "Shall the bill pass?",
            "YEAS",
            "Smith  Jones  Lee  Brown  Davis",
            "NAYS",
            "Wilson  Clark",
        ])
        .build();
    let record = extract_vote(&doc, &config()).unwrap();

    assert_eq!(record.reconciliation.status, ReconcileStatus::Unverifiable);
    assert_eq!(record.tally.yes(), 5);
    assert_eq!(record.tally.no(), 2);
    assert_eq!(record.motion.result, VoteResult::Pass);
}

// -- structural outcomes --

#[test]
fn zero_headers_yields_empty_unverifiable_record() {
    let doc = VoteDocument::builder("https://example.gov/page.html")
        .with_lines(["Journal of the Senate", "Ordered that the bill be read."])
        .build();
    let record = extract_vote(&doc, &config()).unwrap();

    assert!(record.sections.is_empty());
    assert_eq!(record.reconciliation.status, ReconcileStatus::Unverifiable);
    assert!(record.tally.is_empty());
    assert_eq!(record.motion.result, VoteResult::Unknown);
}

#[test]
fn empty_section_with_stated_count_mismatches() {
    let doc = VoteDocument::builder("src")
        .with_lines(["YEAS: 37", "NAYS: 1", "Brown"])
        .build();
    let record = extract_vote(&doc, &config()).unwrap();

    assert_eq!(record.reconciliation.status, ReconcileStatus::Mismatch);
    assert_eq!(record.reconciliation.mismatches.len(), 1);
    assert_eq!(record.reconciliation.mismatches[0].tag, CategoryTag::Yes);
    assert_eq!(record.reconciliation.mismatches[0].derived, 0);
    assert_eq!(record.reconciliation.mismatches[0].stated, 37);
}

// -- fatal boundary errors --

#[test]
fn empty_document_fails_fast() {
    let doc = VoteDocument::builder("src").build();
    assert!(matches!(
        extract_vote(&doc, &config()),
        Err(ExtractError::EmptyDocument)
    ));
}

#[test]
fn config_without_mandatory_tags_fails_fast() {
    let doc = VoteDocument::builder("src").with_line("YEAS: 1").build();
    let bare = SegmenterConfig::empty();
    assert!(matches!(
        extract_vote(&doc, &bare),
        Err(ExtractError::InvalidConfig(_))
    ));
}

// -- properties --

#[test]
fn extraction_is_idempotent() {
    let doc = journal(&["Smith", "Jones", "Lee"], &["Brown"], &["Davis"]);
    let first = extract_vote(&doc, &config()).unwrap();
    let second = extract_vote(&doc, &config()).unwrap();
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn synthetic_round_trip_reconciles_ok() {
    let yes = ["Abraham", "Bagley", "Carter", "Davis"];
    let no = ["Edmonds", "Foster"];
    let other = ["Garcia"];
    let doc = journal(&yes, &no, &other);
    let record = extract_vote(&doc, &config()).unwrap();

    assert_eq!(record.reconciliation.status, ReconcileStatus::Ok);
    assert_eq!(record.yes_voters(), yes);
    assert_eq!(record.no_voters(), no);
    assert_eq!(record.other_voters(), other);
    assert_eq!(
        record.tally.yes() + record.tally.no() + record.tally.other(),
        7
    );
}

#[test]
fn record_survives_serde_round_trip() {
    let doc = journal(&["Smith", "Jones"], &["Brown"], &[]);
    let record = extract_vote(&doc, &config()).unwrap();
    let json = serde_json::to_string(&record).unwrap();
    let back: rollcall_engine::VoteRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(record, back);
}

#[test]
fn hints_pass_through_unmodified() {
    let date = NaiveDate::from_ymd_opt(2010, 3, 4).unwrap();
    let doc = VoteDocument::builder("ftp://example.gov/votes/371.txt")
        .with_chamber(Chamber::Upper)
        .with_date(date)
        .with_lines(["YEAS: 1", "Smith", "NAYS: 0"])
        .build();
    let record = extract_vote(&doc, &config()).unwrap();

    assert_eq!(record.chamber, Chamber::Upper);
    assert_eq!(record.date, Some(date));
    assert_eq!(record.source_locator, "ftp://example.gov/votes/371.txt");
}

#[test]
fn duplicate_names_are_preserved() {
    let doc = VoteDocument::builder("src")
        .with_lines(["YEAS", "Smith  Jones  Smith"])
        .build();
    let record = extract_vote(&doc, &config()).unwrap();
    assert_eq!(record.yes_voters(), vec!["Smith", "Jones", "Smith"]);
}

// -- layouts from the wild --

#[test]
fn louisiana_style_total_footers() {
    let doc = VoteDocument::builder("src")
        .with_lines([
            "Final Passage of House Bill 371",
            "YEAS",
            "Abraham  Adams  Bagley",
            "Total -- 3",
            "NAYS",
            "Brown",
            "Total -- 1",
            "ABSENT",
            "Carter",
            "Total -- 1",
        ])
        .build();
    let record = extract_vote(&doc, &config()).unwrap();

    assert_eq!(record.reconciliation.status, ReconcileStatus::Ok);
    assert_eq!(record.tally.yes(), 3);
    assert_eq!(record.tally.no(), 1);
    assert_eq!(record.tally.other(), 1);
    assert_eq!(record.motion.result, VoteResult::Pass);
}

#[test]
fn maryland_style_count_first_summary() {
    let doc = VoteDocument::builder("src")
        .with_lines([
            "2 Yeas  1 Nays  0 Not Voting  1 Excused  0 Absent",
            "Voting Yea",
            "Smith  Jones",
            "Voting Nay",
            "Brown",
            "Excused from Voting",
            "Lee",
        ])
        .build();
    let record = extract_vote(&doc, &config()).unwrap();

    assert_eq!(record.reconciliation.status, ReconcileStatus::Ok);
    assert_eq!(record.tally.yes(), 2);
    assert_eq!(record.tally.no(), 1);
    assert_eq!(record.tally.other(), 1);
}

#[test]
fn paired_votes_collapse_into_other() {
    let doc = VoteDocument::builder("src")
        .with_lines([
            "YEAS: 1",
            "Smith",
            "PAIRED: 2",
            "Jones (Yea)  Brown (Nay)",
        ])
        .build();
    let record = extract_vote(&doc, &config()).unwrap();

    assert_eq!(record.reconciliation.status, ReconcileStatus::Ok);
    assert_eq!(record.other_voters(), vec!["Jones", "Brown"]);
    assert_eq!(record.tally.other(), 2);
}

#[test]
fn extended_taxonomy_keeps_refined_buckets() {
    let doc = VoteDocument::builder("src")
        .with_lines([
            "YEAS: 2",
            "Smith  Jones",
            "NAYS: 0",
            "Excused from Voting: 1",
            "Lee",
        ])
        .build();
    let extended = config().with_extended_taxonomy(true);
    let record = extract_vote(&doc, &extended).unwrap();

    assert_eq!(record.reconciliation.status, ReconcileStatus::Ok);
    assert_eq!(record.tally.get(CategoryTag::Excused), 1);
    assert_eq!(record.tally.other(), 0);
    assert_eq!(record.voters_tagged(CategoryTag::Excused), vec!["Lee"]);
    // collapsed accessor still reaches the refined bucket
    assert_eq!(record.other_voters(), vec!["Lee"]);
}

#[test]
fn veto_override_classification_and_explicit_result() {
    let doc = VoteDocument::builder("src")
        .with_lines([
            "Shall the bill pass notwithstanding the objections of the Governor?",
            "The motion prevailed.",
            "YEAS: 2",
            "Smith  Jones",
            "NAYS: 1",
            "Brown",
        ])
        .build();
    let record = extract_vote(&doc, &config()).unwrap();

    assert_eq!(record.motion.classification, MotionClass::VetoOverride);
    assert_eq!(record.motion.result, VoteResult::Pass);
}

#[test]
fn explicit_failure_overrides_count_heuristic() {
    // A supermajority motion can fail with yes > no; the printed result
    // wins over the heuristic.
    let doc = VoteDocument::builder("src")
        .with_lines([
            "Shall the bill pass notwithstanding the objections of the Governor?",
            "The motion was rejected.",
            "YEAS: 3",
            "Smith  Jones  Lee",
            "NAYS: 2",
            "Brown  Davis",
        ])
        .build();
    let record = extract_vote(&doc, &config()).unwrap();

    assert_eq!(record.motion.result, VoteResult::Fail);
    assert_eq!(record.reconciliation.status, ReconcileStatus::Ok);
}

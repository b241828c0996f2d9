//! Error types for the extraction engine.

/// Fatal errors, raised at the [`extract_vote`](crate::extract_vote)
/// boundary before any parsing begins.
///
/// These are reserved for caller contract violations. A malformed or
/// unparseable document is never fatal; it produces a record whose
/// reconciliation status says so instead.
#[derive(thiserror::Error, Debug)]
pub enum ExtractError {
    /// The document carries no lines at all.
    #[error("document has no lines")]
    EmptyDocument,
    /// The segmenter configuration is unusable (e.g. a mandatory
    /// category has no header phrases).
    #[error("invalid segmenter config: {0}")]
    InvalidConfig(String),
}

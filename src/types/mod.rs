mod document;
pub use self::document::{Chamber, FormatHint, VoteDocument, VoteDocumentBuilder};

mod section;
pub use self::section::{CategorySection, CategoryTag};

mod tally;
pub use self::tally::{Mismatch, ReconcileStatus, ReconciliationResult, VoteTally};

mod record;
pub use self::record::{Motion, MotionClass, VoteRecord, VoteResult};

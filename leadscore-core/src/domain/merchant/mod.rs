pub mod dedup;
pub mod record;

pub use dedup::{DedupOutcome, MergePolicy, deduplicate, deduplicate_at};
pub use record::RawMerchantRecord;

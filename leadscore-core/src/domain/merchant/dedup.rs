// leadscore-core/src/domain/merchant/dedup.rs

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::domain::error::RecordDataError;
use crate::domain::merchant::RawMerchantRecord;

/// How records sharing an identifier collapse into one.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum MergePolicy {
    /// Keep the first occurrence, drop later ones.
    #[default]
    FirstSeen,
    /// Keep the last occurrence's attributes.
    LastSeen,
    /// Keep the first occurrence and fill its absent fields from later ones.
    Merge,
}

#[derive(Debug, Clone, Default)]
pub struct DedupOutcome {
    /// Unique records, in order of first appearance.
    pub records: Vec<RawMerchantRecord>,
    pub skipped: Vec<RecordDataError>,
    pub duplicates_collapsed: usize,
}

/// Drops records without identifier and collapses duplicates.
///
/// Output order is the position of each identifier's first appearance,
/// whatever the policy, so the result is stable for a given input.
pub fn deduplicate(records: Vec<RawMerchantRecord>, policy: MergePolicy) -> DedupOutcome {
    deduplicate_at(records.into_iter().enumerate(), policy)
}

/// Same as [`deduplicate`] for records that carry their own source
/// position, so skipped entries point back at the input.
pub fn deduplicate_at<I>(records: I, policy: MergePolicy) -> DedupOutcome
where
    I: IntoIterator<Item = (usize, RawMerchantRecord)>,
{
    let mut outcome = DedupOutcome::default();
    let mut slots: HashMap<String, usize> = HashMap::new();

    for (position, record) in records {
        let Some(id) = record.identifier().map(str::to_owned) else {
            outcome.skipped.push(RecordDataError::MissingIdentifier {
                position,
                name: record.name.clone(),
            });
            continue;
        };

        match slots.get(&id) {
            None => {
                slots.insert(id, outcome.records.len());
                outcome.records.push(record);
            }
            Some(&slot) => {
                outcome.duplicates_collapsed += 1;
                let kept = &mut outcome.records[slot];
                match policy {
                    MergePolicy::FirstSeen => {}
                    MergePolicy::LastSeen => *kept = record,
                    MergePolicy::Merge => kept.fill_from(&record),
                }
            }
        }
    }

    outcome
}

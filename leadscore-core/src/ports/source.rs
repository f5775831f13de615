// leadscore-core/src/ports/source.rs

// The discovery client lives outside this crate. Whatever produces merchant
// records (a places API, a CSV dump, a fixture) plugs in here.

use crate::domain::error::RecordDataError;
use crate::domain::merchant::RawMerchantRecord;
use crate::error::LeadScoreError;

/// What a source hands over: the records it could parse, each tagged with
/// its position in the source, and the ones it had to reject.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SourceBatch {
    pub records: Vec<(usize, RawMerchantRecord)>,
    pub rejected: Vec<RecordDataError>,
}

impl SourceBatch {
    /// Records read from the source, parsed or not.
    pub fn len(&self) -> usize {
        self.records.len() + self.rejected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<Vec<RawMerchantRecord>> for SourceBatch {
    fn from(records: Vec<RawMerchantRecord>) -> Self {
        Self {
            records: records.into_iter().enumerate().collect(),
            rejected: Vec::new(),
        }
    }
}

pub trait RecordSource: Send + Sync {
    /// Only a source-level failure (unreadable file, not an array) is an
    /// error. A bad individual record lands in `rejected`.
    fn load(&self) -> Result<SourceBatch, LeadScoreError>;
}

/// In-memory source, handy for tests and for callers that already hold a batch.
impl RecordSource for Vec<RawMerchantRecord> {
    fn load(&self) -> Result<SourceBatch, LeadScoreError> {
        Ok(SourceBatch::from(self.clone()))
    }
}

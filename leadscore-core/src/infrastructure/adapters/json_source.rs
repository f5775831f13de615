// leadscore-core/src/infrastructure/adapters/json_source.rs

use std::fs;
use std::path::PathBuf;
use tracing::{info, instrument, warn};

use crate::domain::error::RecordDataError;
use crate::domain::merchant::RawMerchantRecord;
use crate::error::LeadScoreError;
use crate::infrastructure::error::InfrastructureError;
use crate::ports::{RecordSource, SourceBatch};

/// Reads a JSON array of merchant records, as dumped by the discovery job.
///
/// The array is parsed element by element: a record with a bad field is
/// rejected on its own and the rest of the batch still loads.
#[derive(Debug, Clone)]
pub struct JsonRecordSource {
    path: PathBuf,
}

impl JsonRecordSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RecordSource for JsonRecordSource {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn load(&self) -> Result<SourceBatch, LeadScoreError> {
        let content = fs::read_to_string(&self.path)?;
        let values: Vec<serde_json::Value> =
            serde_json::from_str(&content).map_err(|source| InfrastructureError::JsonError {
                path: self.path.display().to_string(),
                source,
            })?;

        let mut batch = SourceBatch::default();
        for (position, value) in values.into_iter().enumerate() {
            match serde_json::from_value::<RawMerchantRecord>(value) {
                Ok(record) => batch.records.push((position, record)),
                Err(e) => {
                    warn!(position, error = %e, "Rejecting malformed record");
                    batch.rejected.push(RecordDataError::Malformed {
                        position,
                        reason: e.to_string(),
                    });
                }
            }
        }

        info!(
            count = batch.records.len(),
            rejected = batch.rejected.len(),
            "Merchant records loaded"
        );
        Ok(batch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use tempfile::tempdir;

    #[test]
    fn test_loads_array_with_missing_fields() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("merchants.json");
        fs::write(
            &path,
            r#"[{"id": "m1", "name": "Golden Wok", "types": "restaurant"}, {"name": "No Id"}]"#,
        )?;

        let batch = JsonRecordSource::new(&path).load()?;
        assert_eq!(batch.len(), 2);
        assert!(batch.rejected.is_empty());
        assert_eq!(batch.records[0].1.identifier(), Some("m1"));
        assert_eq!(batch.records[1].1.identifier(), None);
        assert_eq!(batch.records[1].1.rating, None);
        Ok(())
    }

    #[test]
    fn test_bad_records_do_not_sink_the_batch() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("merchants.json");
        let mut rows: Vec<serde_json::Value> = (0..1000)
            .map(|i| serde_json::json!({"id": format!("m{i}"), "name": "Ok", "review_count": i}))
            .collect();
        rows.insert(10, serde_json::json!({"id": "bad", "review_count": -1}));
        rows.push(serde_json::json!({"id": 42}));
        rows.push(serde_json::json!("not an object"));
        fs::write(&path, serde_json::to_string(&rows)?)?;

        let batch = JsonRecordSource::new(&path).load()?;
        assert_eq!(batch.len(), 1003);
        assert_eq!(batch.records.len(), 1000);
        let positions: Vec<usize> = batch.rejected.iter().map(RecordDataError::position).collect();
        assert_eq!(positions, vec![10, 1001, 1002]);
        assert!(matches!(
            &batch.rejected[0],
            RecordDataError::Malformed { reason, .. } if reason.contains("-1")
        ));
        // Positions of accepted records still point into the file.
        assert_eq!(batch.records[10].0, 11);
        Ok(())
    }

    #[test]
    fn test_rejects_non_array() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("merchants.json");
        fs::write(&path, r#"{"id": "m1"}"#)?;

        let err = JsonRecordSource::new(&path).load();
        assert!(matches!(
            err,
            Err(LeadScoreError::Infrastructure(InfrastructureError::JsonError { .. }))
        ));
        Ok(())
    }
}

// leadscore-core/src/application/ports.rs

use crate::application::pipeline::RunResult;
use crate::error::LeadScoreError;

/// Export collaborator (flat files, spreadsheet, vector index...).
/// Only reads fields of the run; never feeds back into scoring.
pub trait LeadSink: Send + Sync {
    /// Returns a human-readable location for each artifact written.
    fn write(&self, result: &RunResult) -> Result<Vec<String>, LeadScoreError>;
}

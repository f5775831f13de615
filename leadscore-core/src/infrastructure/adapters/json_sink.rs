// leadscore-core/src/infrastructure/adapters/json_sink.rs

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, instrument};

use crate::application::pipeline::RunResult;
use crate::application::ports::LeadSink;
use crate::domain::routing::CombinedLead;
use crate::domain::vertical::Vertical;
use crate::error::LeadScoreError;
use crate::infrastructure::error::InfrastructureError;
use crate::infrastructure::fs::{atomic_write, write_json};

pub const COMBINED_FILE: &str = "all_leads_combined.json";
pub const SUMMARY_FILE: &str = "run_summary.json";
pub const SALES_SUMMARY_FILE: &str = "sales_summary.txt";

pub fn vertical_file(vertical: Vertical) -> String {
    format!("{}_leads.json", vertical.as_str())
}

/// Flat-file export: one JSON array per vertical, the combined set, the
/// run summary and the plain-text sales summary.
#[derive(Debug, Clone)]
pub struct JsonLeadSink {
    output_dir: PathBuf,
}

impl JsonLeadSink {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    fn path_of(&self, file: &str) -> (PathBuf, String) {
        let path = self.output_dir.join(file);
        let display = path.display().to_string();
        (path, display)
    }
}

impl LeadSink for JsonLeadSink {
    #[instrument(skip_all, fields(dir = %self.output_dir.display()))]
    fn write(&self, result: &RunResult) -> Result<Vec<String>, LeadScoreError> {
        fs::create_dir_all(&self.output_dir)?;
        let mut written = Vec::new();

        // Every known vertical gets a file, even an empty one.
        for vertical in Vertical::KNOWN {
            let (path, display) = self.path_of(&vertical_file(vertical));
            write_json(&path, result.routed.vertical(vertical))?;
            written.push(display);
        }

        let (path, display) = self.path_of(COMBINED_FILE);
        write_json(&path, &result.routed.combined)?;
        written.push(display);

        let (path, display) = self.path_of(SUMMARY_FILE);
        write_json(&path, &result.summary)?;
        written.push(display);

        let (path, display) = self.path_of(SALES_SUMMARY_FILE);
        let mut text = result.sales_summary().render_text();
        text.push('\n');
        atomic_write(&path, text)?;
        written.push(display);

        info!(files = written.len(), "Exports written");
        Ok(written)
    }
}

/// Reads back a combined export written by [`JsonLeadSink`].
pub fn read_combined(output_dir: &Path) -> Result<Vec<CombinedLead>, LeadScoreError> {
    let path = output_dir.join(COMBINED_FILE);
    let content = fs::read_to_string(&path)?;
    let leads = serde_json::from_str(&content).map_err(|source| InfrastructureError::JsonError {
        path: path.display().to_string(),
        source,
    })?;
    Ok(leads)
}

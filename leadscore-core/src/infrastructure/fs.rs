// leadscore-core/src/infrastructure/fs.rs

use crate::infrastructure::error::InfrastructureError;
use serde::Serialize;
use std::io::Write;
use std::path::Path;

/// Write content to a file atomically using a temporary file in the same
/// directory, then rename it over the target.
///
/// An export consumer never observes a half-written lead file.
pub fn atomic_write<P: AsRef<Path>, C: AsRef<[u8]>>(
    path: P,
    content: C,
) -> Result<(), InfrastructureError> {
    let path = path.as_ref();
    let parent = path.parent().unwrap_or_else(|| Path::new("."));

    let mut temp_file = tempfile::NamedTempFile::new_in(parent)?;
    temp_file.write_all(content.as_ref())?;
    temp_file
        .persist(path)
        .map_err(|e| InfrastructureError::Io(e.error))?;

    Ok(())
}

/// Pretty-printed JSON, written atomically.
pub fn write_json<P: AsRef<Path>, T: Serialize + ?Sized>(
    path: P,
    value: &T,
) -> Result<(), InfrastructureError> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(value).map_err(|source| InfrastructureError::JsonError {
        path: path.display().to_string(),
        source,
    })?;
    atomic_write(path, json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_atomic_write_overwrites_previous_export() -> Result<()> {
        let dir = tempdir()?;
        let file_path = dir.path().join("grocery_leads.json");

        atomic_write(&file_path, "[]")?;
        atomic_write(&file_path, "[{\"score\": 72}]")?;

        assert_eq!(fs::read_to_string(&file_path)?, "[{\"score\": 72}]");
        // No stray temp files left next to the export.
        assert_eq!(fs::read_dir(dir.path())?.count(), 1);
        Ok(())
    }

    #[test]
    fn test_write_json_round_trips() -> Result<()> {
        let dir = tempdir()?;
        let file_path = dir.path().join("summary.json");

        write_json(&file_path, &serde_json::json!({ "total_leads": 3 }))?;

        let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(file_path)?)?;
        assert_eq!(value["total_leads"], 3);
        Ok(())
    }
}

// leadscore-core/src/application/clean.rs

use crate::error::LeadScoreError;
use crate::infrastructure::config::load_pipeline_config;
use std::fs;
use std::path::{Component, Path};

/// Removes the export directory. Returns the removed path, if anything
/// was there.
pub fn clean_project(project_dir: &Path) -> Result<Option<String>, LeadScoreError> {
    tracing::info!("🧹 Initializing leadscore cleanup sequence...");

    let config = load_pipeline_config(project_dir)?;
    let target_rel_path = config.output_path;

    // Path traversal guard: the output directory must stay inside the project.
    let relative = Path::new(&target_rel_path);
    let escapes = relative.components().any(|c| {
        matches!(
            c,
            Component::ParentDir | Component::RootDir | Component::Prefix(_)
        )
    });
    if escapes || relative.as_os_str().is_empty() {
        return Err(LeadScoreError::UnsafePath(target_rel_path));
    }

    let full_path = project_dir.join(relative);
    if !full_path.exists() {
        return Ok(None);
    }

    if full_path.is_dir() {
        fs::remove_dir_all(&full_path)?;
    } else {
        fs::remove_file(&full_path)?;
    }
    tracing::info!(path = %full_path.display(), "Artifact removed");
    Ok(Some(target_rel_path))
}

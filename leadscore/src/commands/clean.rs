// leadscore/src/commands/clean.rs
//
// USE CASE: Remove the export directory.

use std::path::PathBuf;

use leadscore_core::application::clean_project;

pub fn execute(project_dir: PathBuf) -> anyhow::Result<()> {
    match clean_project(&project_dir) {
        Ok(Some(target)) => println!("   🗑️  Artifact removed: {}", target),
        Ok(None) => println!("   Nothing to clean."),
        Err(e) => {
            eprintln!("❌ Clean failed: {}", e);
            std::process::exit(1);
        }
    }
    Ok(())
}

// leadscore/src/commands/inspect.rs
//
// USE CASE: Show the top of the last combined export.

use std::path::PathBuf;

use anyhow::Context;
use comfy_table::Table;
use leadscore_core::domain::vertical::Vertical;
use leadscore_core::infrastructure::adapters::read_combined;
use leadscore_core::infrastructure::adapters::json_sink::COMBINED_FILE;
use leadscore_core::infrastructure::config::load_pipeline_config;

pub fn execute(project_dir: PathBuf, vertical: Option<String>, limit: usize) -> anyhow::Result<()> {
    let filter = vertical
        .as_deref()
        .map(str::parse::<Vertical>)
        .transpose()?;

    let config = load_pipeline_config(&project_dir)?;
    let output_dir = project_dir.join(&config.output_path);
    if !output_dir.join(COMBINED_FILE).exists() {
        anyhow::bail!(
            "❌ No export found in: {}\n👉 Have you run 'leadscore run'?",
            output_dir.display()
        );
    }

    let combined = read_combined(&output_dir)
        .with_context(|| format!("Failed to read {}", COMBINED_FILE))?;

    println!(
        "\n🔍 Top {} leads{}",
        limit,
        filter.map(|v| format!(" ({v})")).unwrap_or_default()
    );

    let mut table = Table::new();
    table.set_header(vec![
        "Vertical", "Rank", "Exported", "Id", "Name", "Score", "Priority", "Contact by",
    ]);
    for row in combined
        .iter()
        .filter(|c| filter.is_none_or(|v| c.lead.vertical() == v))
        .take(limit)
    {
        table.add_row(vec![
            row.lead.vertical().to_string(),
            row.rank.to_string(),
            if row.exported { "yes" } else { "no" }.to_string(),
            row.lead.id().to_string(),
            row.lead.merchant.name.clone(),
            row.lead.score.to_string(),
            row.lead.priority.as_str().to_string(),
            row.lead.contact_by_date.to_string(),
        ]);
    }
    println!("{table}");

    Ok(())
}

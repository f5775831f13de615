// leadscore/src/commands/validate.rs
//
// USE CASE: Check the configuration without reading any record.

use std::path::PathBuf;

use anyhow::Context;
use leadscore_core::domain::vertical::Vertical;
use leadscore_core::infrastructure::config::load_pipeline_config;

pub fn execute(project_dir: PathBuf) -> anyhow::Result<()> {
    println!("⚙️  Validating configuration...");
    let config = load_pipeline_config(&project_dir).with_context(|| {
        format!(
            "Failed to load project configuration from {:?}",
            project_dir
        )
    })?;

    if let Err(e) = config.ensure_valid() {
        eprintln!("{:?}", miette::Report::new(e));
        std::process::exit(1);
    }

    println!("   Project: {} (v{})", config.name, config.version);
    let weights = &config.scoring.weights;
    println!(
        "   Weights (max {}): competitor {} | reviews {} | demand {} | urban {} | rating {} | price {}",
        weights.max_total(),
        weights.competitor_platform,
        weights.review_volume.max(),
        weights.high_demand_category,
        weights.urban_location,
        weights.high_rating,
        weights.price_accessible
    );
    for vertical in Vertical::KNOWN {
        if let Some(rule) = config.verticals.get(vertical) {
            println!(
                "   {:<12} min {:>3} | top {:>4} | SLA {} days",
                vertical.as_str(), rule.min_score, rule.target_count, rule.sla_days
            );
        }
    }
    println!("✅ Configuration is valid.");
    Ok(())
}

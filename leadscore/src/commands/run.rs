// leadscore/src/commands/run.rs
//
// USE CASE: Score the weekly batch, route it per vertical and export.

use std::path::PathBuf;

use anyhow::Context;
use chrono::NaiveDate;
use comfy_table::Table;
use leadscore_core::application::{LeadSink, RunResult, run_pipeline};
use leadscore_core::domain::vertical::Vertical;
use leadscore_core::infrastructure::adapters::{
    JsonLeadSink, JsonRecordSource, SimulatedCompetitorSignal,
};
use leadscore_core::infrastructure::config::load_pipeline_config;

pub fn execute(
    project_dir: PathBuf,
    run_date: Option<NaiveDate>,
    seed: Option<u64>,
    sequential: bool,
) -> anyhow::Result<()> {
    let start = std::time::Instant::now();

    // A. Load the Config (Infra)
    println!("⚙️  Loading configuration...");
    let mut config = load_pipeline_config(&project_dir).with_context(|| {
        format!(
            "Failed to load project configuration from {:?}",
            project_dir
        )
    })?;
    if let Some(seed) = seed {
        config.competitor.seed = seed;
    }
    if sequential {
        config.execution.parallel = false;
    }

    // The clock is read once, here, and never inside the core.
    let run_date = run_date.unwrap_or_else(|| chrono::Local::now().date_naive());
    tracing::debug!(%run_date, parallel = config.execution.parallel, "Run parameters resolved");
    println!("   Project: {} (v{})", config.name, config.version);
    println!(
        "   Run date: {} | Seed: {}",
        run_date, config.competitor.seed
    );

    // B. Wire the adapters
    let source = JsonRecordSource::new(project_dir.join(&config.input_path));
    let mut signal = SimulatedCompetitorSignal::new(&config.competitor);
    let sink = JsonLeadSink::new(project_dir.join(&config.output_path));

    // C. Run the Pipeline (Application Layer)
    let result = match run_pipeline(&source, &mut signal, &config, run_date) {
        Ok(result) => result,
        Err(e) if e.is_configuration() => {
            eprintln!("\n💥 CONFIGURATION ERROR: {}", e);
            std::process::exit(1);
        }
        Err(e) => return Err(e).context("Lead pipeline failed"),
    };

    // D. Export
    let written = sink
        .write(&result)
        .with_context(|| format!("Failed to write exports to {:?}", sink.output_dir()))?;

    print_report(&result);
    for path in &written {
        println!("   📄 {}", path);
    }
    println!("\n✨ SUCCESS! {} leads scored in {:.2?}", result.summary.scored, start.elapsed());

    Ok(())
}

fn print_report(result: &RunResult) {
    let summary = &result.summary;
    println!(
        "\n📥 {} records read, {} skipped, {} duplicates collapsed",
        summary.input_records, summary.skipped_records, summary.duplicates_collapsed
    );
    for skipped in &summary.skipped {
        println!("   ⚠️  {}", skipped);
    }

    let mut table = Table::new();
    table.set_header(vec![
        "Vertical",
        "Matched",
        "Qualifying",
        "Exported",
        "Overflow",
        "Avg score",
    ]);

    let sales = result.sales_summary();
    for v in &sales.verticals {
        let counts = summary
            .routing
            .per_vertical
            .get(&v.vertical)
            .copied()
            .unwrap_or_default();
        table.add_row(vec![
            v.vertical.to_string(),
            counts.matched.to_string(),
            counts.qualifying.to_string(),
            counts.exported.to_string(),
            counts.overflow.to_string(),
            v.average_score
                .map(|s| format!("{s:.1}"))
                .unwrap_or_else(|| "-".to_string()),
        ]);
    }
    table.add_row(vec![
        Vertical::Unknown.to_string(),
        summary.routing.unknown_vertical.to_string(),
        "-".to_string(),
        "0".to_string(),
        "-".to_string(),
        "-".to_string(),
    ]);
    println!("{table}");

    for vertical in &summary.routing.zero_qualifying {
        println!("   ⚠️  No {} lead met the minimum score this week", vertical);
    }
}

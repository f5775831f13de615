// leadscore-core/src/application/pipeline.rs

use chrono::NaiveDate;
use serde::Serialize;
use tracing::{info, instrument, warn};

use crate::application::engine::ScoringEngine;
use crate::application::report::{SalesSummary, ScoreDistribution};
use crate::domain::error::RecordDataError;
use crate::domain::lead::ScoredLead;
use crate::domain::merchant::{RawMerchantRecord, deduplicate_at};
use crate::domain::project::PipelineConfig;
use crate::domain::routing::{RouteSummary, RoutedLeads, VerticalRouter};
use crate::error::LeadScoreError;
use crate::ports::{CompetitorSignal, RecordSource};

/// Everything a human needs to tell "pipeline broken" from "nothing met the
/// bar this week".
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunSummary {
    pub project: String,
    pub run_date: NaiveDate,
    pub competitor_seed: u64,
    pub input_records: usize,
    pub skipped_records: usize,
    pub skipped: Vec<RecordDataError>,
    pub duplicates_collapsed: usize,
    pub scored: usize,
    pub routing: RouteSummary,
    pub distribution: ScoreDistribution,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunResult {
    /// Scored leads, in order of first appearance in the input.
    pub leads: Vec<ScoredLead>,
    pub routed: RoutedLeads,
    pub summary: RunSummary,
}

impl RunResult {
    pub fn sales_summary(&self) -> SalesSummary {
        SalesSummary::from_routed(&self.routed, self.summary.run_date)
    }
}

/// Collect -> deduplicate -> resolve competitor signals -> score -> route.
///
/// Configuration is validated before the source is even read. Malformed
/// records and records without identifier are skipped and reported, never
/// fatal.
#[instrument(skip_all, fields(project = %config.name, run_date = %run_date))]
pub fn run_pipeline(
    source: &dyn RecordSource,
    signal: &mut dyn CompetitorSignal,
    config: &PipelineConfig,
    run_date: NaiveDate,
) -> Result<RunResult, LeadScoreError> {
    // 1. STARTUP GATE (fail fast, no partial output)
    let engine = ScoringEngine::new(config, run_date)?;

    // 2. COLLECT
    let batch = source.load()?;
    let input_records = batch.len();
    info!(input_records, "Records collected");

    // 3. DEDUPLICATE
    let dedup = deduplicate_at(batch.records, config.dedup);
    let mut skipped = batch.rejected;
    skipped.extend(dedup.skipped);
    skipped.sort_by_key(RecordDataError::position);
    for record in &skipped {
        warn!(%record, "Skipping record");
    }
    if dedup.duplicates_collapsed > 0 {
        info!(
            collapsed = dedup.duplicates_collapsed,
            policy = ?config.dedup,
            "Duplicate identifiers collapsed"
        );
    }

    // 4. COMPETITOR SIGNALS (sequential, input order)
    let batch = resolve_competitor_signals(dedup.records, signal);

    // 5. SCORE (per-record, optionally parallel)
    let leads = engine.score_batch(batch, config.execution.parallel);
    info!(scored = leads.len(), "Leads scored");

    // 6. ROUTE (barrier: needs the whole batch)
    let routed = VerticalRouter::route(&leads, &config.verticals);
    for vertical in &routed.summary.zero_qualifying {
        warn!(%vertical, "No lead met the vertical's minimum score");
    }

    let summary = RunSummary {
        project: config.name.clone(),
        run_date,
        competitor_seed: config.competitor.seed,
        input_records,
        skipped_records: skipped.len(),
        skipped,
        duplicates_collapsed: dedup.duplicates_collapsed,
        scored: leads.len(),
        routing: routed.summary.clone(),
        distribution: ScoreDistribution::from_leads(&leads),
    };

    Ok(RunResult {
        leads,
        routed,
        summary,
    })
}

/// Supplied values win; only records without one consult the signal.
fn resolve_competitor_signals(
    records: Vec<RawMerchantRecord>,
    signal: &mut dyn CompetitorSignal,
) -> Vec<(RawMerchantRecord, bool)> {
    records
        .into_iter()
        .map(|record| {
            let present = match record.competitor_platform {
                Some(present) => present,
                None => signal.detect(&record),
            };
            (record, present)
        })
        .collect()
}

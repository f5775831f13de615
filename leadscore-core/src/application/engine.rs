// leadscore-core/src/application/engine.rs

use chrono::NaiveDate;
use rayon::prelude::*;
use tracing::debug;

use crate::domain::error::ConfigurationError;
use crate::domain::features::FeatureDeriver;
use crate::domain::lead::ScoredLead;
use crate::domain::merchant::RawMerchantRecord;
use crate::domain::priority::Prioritizer;
use crate::domain::project::PipelineConfig;
use crate::domain::scoring::Scorer;
use crate::domain::vertical::VerticalClassifier;

/// Classifier -> Deriver -> Scorer -> Prioritizer, frozen for one run.
///
/// Building the engine is the startup validation gate: an invalid
/// configuration never produces an engine, so no record is ever scored
/// under one.
#[derive(Debug, Clone)]
pub struct ScoringEngine {
    deriver: FeatureDeriver,
    scorer: Scorer,
    prioritizer: Prioritizer,
}

impl ScoringEngine {
    pub fn new(config: &PipelineConfig, run_date: NaiveDate) -> Result<Self, ConfigurationError> {
        config.ensure_valid()?;

        let scoring = &config.scoring;
        let classifier = VerticalClassifier::new(&scoring.keywords);

        Ok(Self {
            deriver: FeatureDeriver::new(
                &scoring.high_demand_categories,
                &scoring.target_cities,
                classifier,
            ),
            scorer: Scorer::new(scoring.weights),
            prioritizer: Prioritizer::new(&config.verticals, run_date)?,
        })
    }

    pub fn run_date(&self) -> NaiveDate {
        self.prioritizer.run_date()
    }

    /// Pure per-record transformation.
    pub fn score_record(&self, merchant: RawMerchantRecord, competitor_platform: bool) -> ScoredLead {
        let features = self.deriver.derive(&merchant, competitor_platform);
        let score_breakdown = self.scorer.breakdown(&features);
        let score = self.scorer.score(&features);
        let (priority, contact_by_date) = self.prioritizer.prioritize(score, features.vertical);

        ScoredLead {
            merchant,
            features,
            score,
            priority,
            contact_by_date,
            score_breakdown,
        }
    }

    /// Scores a batch whose competitor signals are already resolved.
    /// Parallel and sequential execution return the same vector.
    pub fn score_batch(&self, batch: Vec<(RawMerchantRecord, bool)>, parallel: bool) -> Vec<ScoredLead> {
        debug!(records = batch.len(), parallel, "Scoring batch");
        if parallel {
            batch
                .into_par_iter()
                .map(|(merchant, competitor)| self.score_record(merchant, competitor))
                .collect()
        } else {
            batch
                .into_iter()
                .map(|(merchant, competitor)| self.score_record(merchant, competitor))
                .collect()
        }
    }
}

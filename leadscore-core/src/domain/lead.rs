// leadscore-core/src/domain/lead.rs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::domain::features::EngineeredFeatures;
use crate::domain::merchant::RawMerchantRecord;
use crate::domain::priority::Priority;
use crate::domain::scoring::ScoreBreakdown;
use crate::domain::vertical::Vertical;

/// A merchant enriched with its features, score, tier and deadline.
/// Immutable once produced; a new run rescores from scratch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredLead {
    pub merchant: RawMerchantRecord,
    pub features: EngineeredFeatures,
    pub score: u8,
    pub priority: Priority,
    pub contact_by_date: NaiveDate,
    pub score_breakdown: ScoreBreakdown,
}

impl ScoredLead {
    pub fn id(&self) -> &str {
        self.merchant.identifier().unwrap_or_default()
    }

    pub fn vertical(&self) -> Vertical {
        self.features.vertical
    }

    pub fn review_count(&self) -> u32 {
        self.merchant.review_count.unwrap_or(0)
    }

    /// Ranking order: score desc, review count desc, identifier asc.
    pub fn rank_cmp(&self, other: &Self) -> Ordering {
        other
            .score
            .cmp(&self.score)
            .then_with(|| other.review_count().cmp(&self.review_count()))
            .then_with(|| self.id().cmp(other.id()))
    }
}

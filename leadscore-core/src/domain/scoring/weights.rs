// leadscore-core/src/domain/scoring/weights.rs

use serde::{Deserialize, Serialize};

use crate::domain::features::ReviewVolumeBucket;

/// Total of all per-feature maxima. Validated at startup.
pub const SCORE_SCALE: u32 = 100;

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ScoringWeights {
    #[serde(default = "default_competitor_platform")]
    pub competitor_platform: u32,
    #[serde(default)]
    pub review_volume: ReviewVolumeWeights,
    #[serde(default = "default_high_demand_category")]
    pub high_demand_category: u32,
    #[serde(default = "default_urban_location")]
    pub urban_location: u32,
    #[serde(default = "default_high_rating")]
    pub high_rating: u32,
    #[serde(default = "default_price_accessible")]
    pub price_accessible: u32,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ReviewVolumeWeights {
    #[serde(default)]
    pub none: u32,
    #[serde(default = "default_review_low")]
    pub low: u32,
    #[serde(default = "default_review_medium")]
    pub medium: u32,
    #[serde(default = "default_review_high")]
    pub high: u32,
    #[serde(default = "default_review_very_high")]
    pub very_high: u32,
}

impl ReviewVolumeWeights {
    pub fn points(&self, bucket: ReviewVolumeBucket) -> u32 {
        match bucket {
            ReviewVolumeBucket::None => self.none,
            ReviewVolumeBucket::Low => self.low,
            ReviewVolumeBucket::Medium => self.medium,
            ReviewVolumeBucket::High => self.high,
            ReviewVolumeBucket::VeryHigh => self.very_high,
        }
    }

    pub fn max(&self) -> u32 {
        [self.none, self.low, self.medium, self.high, self.very_high]
            .into_iter()
            .max()
            .unwrap_or(0)
    }
}

impl ScoringWeights {
    /// The best score a record can reach under this table.
    pub fn max_total(&self) -> u32 {
        self.competitor_platform
            .saturating_add(self.review_volume.max())
            .saturating_add(self.high_demand_category)
            .saturating_add(self.urban_location)
            .saturating_add(self.high_rating)
            .saturating_add(self.price_accessible)
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            competitor_platform: default_competitor_platform(),
            review_volume: ReviewVolumeWeights::default(),
            high_demand_category: default_high_demand_category(),
            urban_location: default_urban_location(),
            high_rating: default_high_rating(),
            price_accessible: default_price_accessible(),
        }
    }
}

impl Default for ReviewVolumeWeights {
    fn default() -> Self {
        Self {
            none: 0,
            low: default_review_low(),
            medium: default_review_medium(),
            high: default_review_high(),
            very_high: default_review_very_high(),
        }
    }
}

fn default_competitor_platform() -> u32 {
    25
}
fn default_high_demand_category() -> u32 {
    20
}
fn default_urban_location() -> u32 {
    15
}
fn default_high_rating() -> u32 {
    10
}
fn default_price_accessible() -> u32 {
    10
}
fn default_review_low() -> u32 {
    5
}
fn default_review_medium() -> u32 {
    10
}
fn default_review_high() -> u32 {
    15
}
fn default_review_very_high() -> u32 {
    20
}

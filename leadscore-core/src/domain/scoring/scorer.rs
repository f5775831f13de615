// leadscore-core/src/domain/scoring/scorer.rs

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::domain::features::EngineeredFeatures;
use crate::domain::scoring::weights::{SCORE_SCALE, ScoringWeights};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreFactor {
    CompetitorPlatform,
    ReviewVolume,
    HighDemandCategory,
    UrbanLocation,
    HighRating,
    PriceAccessible,
}

impl ScoreFactor {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CompetitorPlatform => "competitor_platform",
            Self::ReviewVolume => "review_volume",
            Self::HighDemandCategory => "high_demand_category",
            Self::UrbanLocation => "urban_location",
            Self::HighRating => "high_rating",
            Self::PriceAccessible => "price_accessible",
        }
    }
}

impl fmt::Display for ScoreFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Points contributed by each factor that fired. Zero contributions are omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct ScoreBreakdown(BTreeMap<ScoreFactor, u32>);

impl ScoreBreakdown {
    fn add(&mut self, factor: ScoreFactor, points: u32) {
        if points > 0 {
            self.0.insert(factor, points);
        }
    }

    pub fn points(&self, factor: ScoreFactor) -> u32 {
        self.0.get(&factor).copied().unwrap_or(0)
    }

    pub fn total(&self) -> u32 {
        self.0.values().fold(0u32, |acc, p| acc.saturating_add(*p))
    }

    pub fn iter(&self) -> impl Iterator<Item = (ScoreFactor, u32)> + '_ {
        self.0.iter().map(|(f, p)| (*f, *p))
    }
}

/// Independent weighted sum over the engineered features. No interaction terms.
#[derive(Debug, Clone)]
pub struct Scorer {
    weights: ScoringWeights,
}

impl Scorer {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn breakdown(&self, features: &EngineeredFeatures) -> ScoreBreakdown {
        let w = &self.weights;
        let mut breakdown = ScoreBreakdown::default();

        if features.competitor_platform {
            breakdown.add(ScoreFactor::CompetitorPlatform, w.competitor_platform);
        }
        breakdown.add(
            ScoreFactor::ReviewVolume,
            w.review_volume.points(features.review_volume_bucket),
        );
        if features.high_demand_category {
            breakdown.add(ScoreFactor::HighDemandCategory, w.high_demand_category);
        }
        if features.urban_location {
            breakdown.add(ScoreFactor::UrbanLocation, w.urban_location);
        }
        if features.high_rating {
            breakdown.add(ScoreFactor::HighRating, w.high_rating);
        }
        if features.price_accessible {
            breakdown.add(ScoreFactor::PriceAccessible, w.price_accessible);
        }

        breakdown
    }

    /// Score in [0, 100]. Clamped even though a validated table cannot overflow.
    pub fn score(&self, features: &EngineeredFeatures) -> u8 {
        clamp_score(self.breakdown(features).total())
    }
}

pub(crate) fn clamp_score(total: u32) -> u8 {
    // SCORE_SCALE fits in u8, so the conversion cannot fail after the clamp.
    u8::try_from(total.min(SCORE_SCALE)).unwrap_or(u8::MAX)
}

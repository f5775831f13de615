// leadscore-core/src/domain/features/deriver.rs

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::domain::features::ReviewVolumeBucket;
use crate::domain::merchant::RawMerchantRecord;
use crate::domain::vertical::{Vertical, VerticalClassifier};

pub const HIGH_RATING_THRESHOLD: f64 = 4.0;
const MAX_RATING: f64 = 5.0;

/// Engineered attributes of one merchant. Every field is defined for every
/// record: absent raw inputs map to the "false"/`none` side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct EngineeredFeatures {
    pub high_demand_category: bool,
    pub review_volume_bucket: ReviewVolumeBucket,
    pub price_accessible: bool,
    pub high_rating: bool,
    pub urban_location: bool,
    pub competitor_platform: bool,
    pub vertical: Vertical,
}

#[derive(Debug, Clone)]
pub struct FeatureDeriver {
    high_demand_terms: Vec<String>,
    target_cities: HashSet<String>,
    classifier: VerticalClassifier,
}

impl FeatureDeriver {
    pub fn new(
        high_demand_categories: &[String],
        target_cities: &[String],
        classifier: VerticalClassifier,
    ) -> Self {
        Self {
            high_demand_terms: high_demand_categories
                .iter()
                .map(|c| c.trim().to_lowercase())
                .filter(|c| !c.is_empty())
                .collect(),
            target_cities: target_cities.iter().map(|c| normalize_city(c)).collect(),
            classifier,
        }
    }

    /// `competitor_platform` is an input, never computed here.
    pub fn derive(&self, raw: &RawMerchantRecord, competitor_platform: bool) -> EngineeredFeatures {
        let category = raw.category.as_deref();

        EngineeredFeatures {
            high_demand_category: self.is_high_demand(category),
            review_volume_bucket: ReviewVolumeBucket::from_count(raw.review_count),
            price_accessible: matches!(raw.price_level, Some(0..=2)),
            high_rating: valid_rating(raw.rating).is_some_and(|r| r >= HIGH_RATING_THRESHOLD),
            urban_location: raw
                .effective_city()
                .is_some_and(|city| self.target_cities.contains(&normalize_city(city))),
            competitor_platform,
            vertical: self.classifier.classify(category),
        }
    }

    fn is_high_demand(&self, category: Option<&str>) -> bool {
        let Some(label) = category else {
            return false;
        };
        let label = label.to_lowercase();
        self.high_demand_terms
            .iter()
            .any(|term| label.contains(term.as_str()))
    }
}

fn normalize_city(city: &str) -> String {
    city.trim().to_lowercase()
}

// NaN or out-of-scale ratings are treated as absent.
fn valid_rating(rating: Option<f64>) -> Option<f64> {
    rating.filter(|r| (0.0..=MAX_RATING).contains(r))
}

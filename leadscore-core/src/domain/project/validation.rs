// leadscore-core/src/domain/project/validation.rs

use std::collections::HashMap;
use tracing::{debug, instrument};
use validator::Validate;

use crate::domain::error::ConfigurationError;
use crate::domain::project::PipelineConfig;
use crate::domain::scoring::{SCORE_SCALE, ScoringWeights};
use crate::domain::vertical::{Vertical, VerticalKeywords};

impl PipelineConfig {
    /// Full startup validation. Nothing is scored unless this passes.
    #[instrument(skip(self), fields(project = %self.name))]
    pub fn ensure_valid(&self) -> Result<(), ConfigurationError> {
        // 1. Field-level ranges (validator derive)
        self.validate()?;

        // 2. Cross-field rules
        check_weights(&self.scoring.weights)?;
        self.verticals.ensure_complete()?;
        check_keywords(&self.scoring.keywords)?;

        if self
            .scoring
            .high_demand_categories
            .iter()
            .any(|c| c.trim().is_empty())
        {
            return Err(ConfigurationError::Invalid(
                "high_demand_categories contains an empty entry".to_string(),
            ));
        }

        debug!("Configuration validated");
        Ok(())
    }
}

pub fn check_weights(weights: &ScoringWeights) -> Result<(), ConfigurationError> {
    let actual = weights.max_total();
    if actual != SCORE_SCALE {
        return Err(ConfigurationError::WeightsSum {
            expected: SCORE_SCALE,
            actual,
        });
    }
    Ok(())
}

/// Keyword sets must be disjoint and free of empty terms.
pub fn check_keywords(keywords: &VerticalKeywords) -> Result<(), ConfigurationError> {
    let mut owners: HashMap<String, Vertical> = HashMap::new();

    for (vertical, terms) in keywords.by_precedence() {
        for term in terms {
            let normalized = term.trim().to_lowercase();
            if normalized.is_empty() {
                return Err(ConfigurationError::EmptyKeyword(vertical));
            }
            match owners.get(&normalized) {
                Some(&first) if first != vertical => {
                    return Err(ConfigurationError::OverlappingKeywords {
                        keyword: normalized,
                        first,
                        second: vertical,
                    });
                }
                Some(_) => {}
                None => {
                    owners.insert(normalized, vertical);
                }
            }
        }
    }
    Ok(())
}

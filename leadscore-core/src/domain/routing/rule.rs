// leadscore-core/src/domain/routing/rule.rs

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::error::ConfigurationError;
use crate::domain::vertical::Vertical;

#[derive(Debug, Deserialize, Serialize, Validate, Clone, Copy, PartialEq, Eq)]
pub struct VerticalRule {
    #[validate(range(max = 100, message = "min_score must be within the 0-100 score scale"))]
    pub min_score: u8,
    pub target_count: usize,
    pub sla_days: u32,
}

impl VerticalRule {
    pub const fn new(min_score: u8, target_count: usize, sla_days: u32) -> Self {
        Self {
            min_score,
            target_count,
            sla_days,
        }
    }
}

/// One optional rule per known vertical. `unknown` cannot carry a rule.
#[derive(Debug, Deserialize, Serialize, Validate, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct VerticalRules {
    #[validate(nested)]
    pub restaurants: Option<VerticalRule>,
    #[validate(nested)]
    pub grocery: Option<VerticalRule>,
    #[validate(nested)]
    pub retail: Option<VerticalRule>,
}

impl Default for VerticalRules {
    fn default() -> Self {
        Self {
            restaurants: Some(VerticalRule::new(50, 200, 7)),
            grocery: Some(VerticalRule::new(60, 100, 14)),
            retail: Some(VerticalRule::new(55, 150, 10)),
        }
    }
}

impl VerticalRules {
    pub fn get(&self, vertical: Vertical) -> Option<&VerticalRule> {
        match vertical {
            Vertical::Restaurants => self.restaurants.as_ref(),
            Vertical::Grocery => self.grocery.as_ref(),
            Vertical::Retail => self.retail.as_ref(),
            Vertical::Unknown => None,
        }
    }

    pub fn require(&self, vertical: Vertical) -> Result<&VerticalRule, ConfigurationError> {
        self.get(vertical)
            .ok_or(ConfigurationError::MissingVerticalRule(vertical))
    }

    /// Fails on the first known vertical without a rule.
    pub fn ensure_complete(&self) -> Result<(), ConfigurationError> {
        Vertical::KNOWN
            .into_iter()
            .try_for_each(|v| self.require(v).map(|_| ()))
    }

    /// Longest configured SLA; the conservative deadline for `unknown` leads.
    pub fn longest_sla_days(&self) -> u32 {
        Vertical::KNOWN
            .into_iter()
            .filter_map(|v| self.get(v))
            .map(|r| r.sla_days)
            .max()
            .unwrap_or(0)
    }
}

// leadscore-core/src/domain/priority/prioritizer.rs

use chrono::{Days, NaiveDate};
use std::collections::BTreeMap;

use crate::domain::error::ConfigurationError;
use crate::domain::priority::Priority;
use crate::domain::routing::VerticalRules;
use crate::domain::vertical::Vertical;

/// Assigns a priority tier and a contact-by deadline.
///
/// The execution date is fixed at construction, never read from the clock,
/// so a run is reproducible for any date.
#[derive(Debug, Clone)]
pub struct Prioritizer {
    run_date: NaiveDate,
    sla_days: BTreeMap<Vertical, u32>,
    fallback_sla_days: u32,
}

impl Prioritizer {
    pub fn new(rules: &VerticalRules, run_date: NaiveDate) -> Result<Self, ConfigurationError> {
        let mut sla_days = BTreeMap::new();
        for vertical in Vertical::KNOWN {
            sla_days.insert(vertical, rules.require(vertical)?.sla_days);
        }

        Ok(Self {
            run_date,
            sla_days,
            fallback_sla_days: rules.longest_sla_days(),
        })
    }

    pub fn run_date(&self) -> NaiveDate {
        self.run_date
    }

    pub fn sla_days(&self, vertical: Vertical) -> u32 {
        self.sla_days
            .get(&vertical)
            .copied()
            .unwrap_or(self.fallback_sla_days)
    }

    pub fn prioritize(&self, score: u8, vertical: Vertical) -> (Priority, NaiveDate) {
        let days = Days::new(u64::from(self.sla_days(vertical)));
        // Saturate at the calendar's end rather than wrap below the run date.
        let contact_by = self
            .run_date
            .checked_add_days(days)
            .unwrap_or(NaiveDate::MAX);
        (Priority::from_score(score), contact_by)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::routing::VerticalRule;
    use anyhow::{Context, Result};

    fn run_date() -> Result<NaiveDate> {
        NaiveDate::from_ymd_opt(2024, 3, 4).context("valid date")
    }

    #[test]
    fn test_contact_date_uses_vertical_sla() -> Result<()> {
        let prioritizer = Prioritizer::new(&VerticalRules::default(), run_date()?)?;

        let (priority, date) = prioritizer.prioritize(82, Vertical::Restaurants);
        assert_eq!(priority, Priority::Critical);
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 3, 11).context("date")?);

        let (priority, date) = prioritizer.prioritize(61, Vertical::Grocery);
        assert_eq!(priority, Priority::Medium);
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 3, 18).context("date")?);
        Ok(())
    }

    #[test]
    fn test_unknown_vertical_uses_longest_sla() -> Result<()> {
        let prioritizer = Prioritizer::new(&VerticalRules::default(), run_date()?)?;
        assert_eq!(prioritizer.sla_days(Vertical::Unknown), 14);
        let (_, date) = prioritizer.prioritize(10, Vertical::Unknown);
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 3, 18).context("date")?);
        Ok(())
    }

    #[test]
    fn test_zero_sla_is_same_day() -> Result<()> {
        let rules = VerticalRules {
            retail: Some(VerticalRule::new(55, 150, 0)),
            ..Default::default()
        };
        let prioritizer = Prioritizer::new(&rules, run_date()?)?;
        let (_, date) = prioritizer.prioritize(70, Vertical::Retail);
        assert_eq!(date, run_date()?);
        Ok(())
    }

    #[test]
    fn test_missing_rule_fails_at_construction() -> Result<()> {
        let rules = VerticalRules {
            restaurants: None,
            ..Default::default()
        };
        let err = Prioritizer::new(&rules, run_date()?).err();
        assert_eq!(
            err,
            Some(ConfigurationError::MissingVerticalRule(Vertical::Restaurants))
        );
        Ok(())
    }

    #[test]
    fn test_contact_date_never_precedes_run_date() -> Result<()> {
        let prioritizer = Prioritizer::new(&VerticalRules::default(), NaiveDate::MAX)?;
        for vertical in [Vertical::Restaurants, Vertical::Unknown] {
            let (_, date) = prioritizer.prioritize(50, vertical);
            assert!(date >= prioritizer.run_date());
        }
        Ok(())
    }
}

// leadscore-core/src/domain/routing/router.rs

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::lead::ScoredLead;
use crate::domain::routing::VerticalRules;
use crate::domain::vertical::Vertical;

/// One row of the combined export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombinedLead {
    /// 1-based position inside the lead's own vertical ranking.
    pub rank: usize,
    /// `false` for overflow beyond the vertical's target count and for
    /// `unknown`-vertical leads.
    pub exported: bool,
    #[serde(flatten)]
    pub lead: ScoredLead,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
pub struct VerticalCounts {
    /// Leads classified into the vertical.
    pub matched: usize,
    /// Matched leads at or above the minimum score.
    pub qualifying: usize,
    /// Qualifying leads kept after the target-count cap.
    pub exported: usize,
    /// Qualifying leads cut by the cap (still present in the combined set).
    pub overflow: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct RouteSummary {
    pub per_vertical: BTreeMap<Vertical, VerticalCounts>,
    pub total_leads: usize,
    pub total_qualifying: usize,
    pub total_exported: usize,
    pub unknown_vertical: usize,
    pub combined: usize,
    /// Verticals where nothing met the bar. A data-quality signal, not an error.
    pub zero_qualifying: Vec<Vertical>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct RoutedLeads {
    pub per_vertical: BTreeMap<Vertical, Vec<ScoredLead>>,
    pub combined: Vec<CombinedLead>,
    pub summary: RouteSummary,
}

impl RoutedLeads {
    pub fn vertical(&self, vertical: Vertical) -> &[ScoredLead] {
        self.per_vertical
            .get(&vertical)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

pub struct VerticalRouter;

impl VerticalRouter {
    /// Partitions a fully scored batch. Must run after every lead is scored.
    ///
    /// Verticals without a rule are skipped here; a validated configuration
    /// always has one for each known vertical.
    pub fn route(leads: &[ScoredLead], rules: &VerticalRules) -> RoutedLeads {
        let mut routed = RoutedLeads::default();

        for vertical in Vertical::KNOWN {
            let Some(rule) = rules.get(vertical) else {
                continue;
            };

            let matched: Vec<&ScoredLead> =
                leads.iter().filter(|l| l.vertical() == vertical).collect();
            let mut qualifying: Vec<&ScoredLead> = matched
                .iter()
                .copied()
                .filter(|l| l.score >= rule.min_score)
                .collect();
            qualifying.sort_by(|a, b| a.rank_cmp(b));

            let exported_len = qualifying.len().min(rule.target_count);
            let exported: Vec<ScoredLead> = qualifying
                .iter()
                .take(exported_len)
                .map(|l| (*l).clone())
                .collect();

            routed.combined.extend(qualifying.iter().enumerate().map(|(i, l)| CombinedLead {
                rank: i + 1,
                exported: i < exported_len,
                lead: (*l).clone(),
            }));

            let counts = VerticalCounts {
                matched: matched.len(),
                qualifying: qualifying.len(),
                exported: exported.len(),
                overflow: qualifying.len() - exported_len,
            };
            if counts.qualifying == 0 {
                routed.summary.zero_qualifying.push(vertical);
            }
            routed.summary.total_qualifying += counts.qualifying;
            routed.summary.total_exported += counts.exported;
            routed.summary.per_vertical.insert(vertical, counts);
            routed.per_vertical.insert(vertical, exported);
        }

        let mut unknown: Vec<&ScoredLead> = leads
            .iter()
            .filter(|l| l.vertical() == Vertical::Unknown)
            .collect();
        unknown.sort_by(|a, b| a.rank_cmp(b));
        routed.summary.unknown_vertical = unknown.len();
        routed.combined.extend(unknown.into_iter().enumerate().map(|(i, l)| CombinedLead {
            rank: i + 1,
            exported: false,
            lead: l.clone(),
        }));

        routed.summary.total_leads = leads.len();
        routed.summary.combined = routed.combined.len();
        routed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::features::EngineeredFeatures;
    use crate::domain::merchant::RawMerchantRecord;
    use crate::domain::priority::Priority;
    use crate::domain::routing::VerticalRule;
    use crate::domain::scoring::ScoreBreakdown;
    use chrono::NaiveDate;

    fn lead(id: &str, vertical: Vertical, score: u8, reviews: u32) -> ScoredLead {
        ScoredLead {
            merchant: RawMerchantRecord {
                id: Some(id.to_string()),
                name: format!("Merchant {id}"),
                review_count: Some(reviews),
                ..Default::default()
            },
            features: EngineeredFeatures {
                vertical,
                ..Default::default()
            },
            score,
            priority: Priority::from_score(score),
            contact_by_date: NaiveDate::MIN,
            score_breakdown: ScoreBreakdown::default(),
        }
    }

    fn rules(target_count: usize) -> VerticalRules {
        VerticalRules {
            restaurants: Some(VerticalRule::new(50, target_count, 7)),
            grocery: Some(VerticalRule::new(60, target_count, 14)),
            retail: Some(VerticalRule::new(55, target_count, 10)),
        }
    }

    #[test]
    fn test_truncation_keeps_top_and_combined_keeps_all() {
        // 150 qualifying restaurants with scores spread over 50..=100.
        let leads: Vec<ScoredLead> = (0..150u32)
            .map(|i| {
                let score = 50 + u8::try_from(i % 51).unwrap_or(0);
                lead(&format!("r{i:03}"), Vertical::Restaurants, score, i % 7)
            })
            .collect();

        let routed = VerticalRouter::route(&leads, &rules(100));
        let exported = routed.vertical(Vertical::Restaurants);
        assert_eq!(exported.len(), 100);

        for pair in exported.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            assert!(a.score >= b.score);
            if a.score == b.score {
                assert!(a.review_count() >= b.review_count());
                if a.review_count() == b.review_count() {
                    assert!(a.id() < b.id());
                }
            }
        }

        let combined_restaurants: Vec<&CombinedLead> = routed
            .combined
            .iter()
            .filter(|c| c.lead.vertical() == Vertical::Restaurants)
            .collect();
        assert_eq!(combined_restaurants.len(), 150);
        assert_eq!(combined_restaurants.iter().filter(|c| c.exported).count(), 100);

        let counts = routed.summary.per_vertical[&Vertical::Restaurants];
        assert_eq!(counts.matched, 150);
        assert_eq!(counts.qualifying, 150);
        assert_eq!(counts.exported, 100);
        assert_eq!(counts.overflow, 50);
    }

    #[test]
    fn test_tie_breaks_on_reviews_then_identifier() {
        let leads = vec![
            lead("b", Vertical::Retail, 70, 10),
            lead("a", Vertical::Retail, 70, 10),
            lead("c", Vertical::Retail, 70, 99),
            lead("d", Vertical::Retail, 90, 0),
        ];
        let routed = VerticalRouter::route(&leads, &rules(10));
        let ids: Vec<&str> = routed.vertical(Vertical::Retail).iter().map(|l| l.id()).collect();
        assert_eq!(ids, vec!["d", "c", "a", "b"]);
    }

    #[test]
    fn test_zero_qualifying_vertical_is_reported() {
        let leads = vec![
            lead("g1", Vertical::Grocery, 59, 100),
            lead("r1", Vertical::Restaurants, 75, 100),
        ];
        let routed = VerticalRouter::route(&leads, &rules(10));
        assert!(routed.vertical(Vertical::Grocery).is_empty());
        assert_eq!(routed.summary.per_vertical[&Vertical::Grocery].matched, 1);
        assert_eq!(
            routed.summary.zero_qualifying,
            vec![Vertical::Grocery, Vertical::Retail]
        );
    }

    #[test]
    fn test_unknown_leads_only_in_combined() {
        let leads = vec![
            lead("u1", Vertical::Unknown, 20, 0),
            lead("r1", Vertical::Restaurants, 75, 10),
            lead("u2", Vertical::Unknown, 90, 0),
        ];
        let routed = VerticalRouter::route(&leads, &rules(10));
        assert!(!routed.per_vertical.contains_key(&Vertical::Unknown));

        let order: Vec<(&str, bool)> = routed
            .combined
            .iter()
            .map(|c| (c.lead.id(), c.exported))
            .collect();
        assert_eq!(order, vec![("r1", true), ("u2", false), ("u1", false)]);
        assert_eq!(routed.summary.unknown_vertical, 2);
        assert_eq!(routed.summary.combined, 3);
    }

    #[test]
    fn test_combined_is_vertical_then_rank_ordered() {
        let leads = vec![
            lead("t1", Vertical::Retail, 99, 0),
            lead("g1", Vertical::Grocery, 61, 0),
            lead("r1", Vertical::Restaurants, 51, 0),
            lead("r2", Vertical::Restaurants, 80, 0),
        ];
        let routed = VerticalRouter::route(&leads, &rules(10));
        let ids: Vec<&str> = routed.combined.iter().map(|c| c.lead.id()).collect();
        assert_eq!(ids, vec!["r2", "r1", "g1", "t1"]);
        assert_eq!(routed.summary.total_exported, 4);
    }

    #[test]
    fn test_empty_batch() {
        let routed = VerticalRouter::route(&[], &rules(10));
        assert!(routed.combined.is_empty());
        assert_eq!(routed.summary.zero_qualifying.len(), 3);
    }
}

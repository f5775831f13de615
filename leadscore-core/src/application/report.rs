// leadscore-core/src/application/report.rs

use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

use crate::domain::lead::ScoredLead;
use crate::domain::priority::Priority;
use crate::domain::routing::RoutedLeads;
use crate::domain::vertical::Vertical;

// --- SCORE DISTRIBUTION ---
// Whole-batch statistics, the sanity check a human reads before trusting
// the exports.

#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct ScoreDistribution {
    pub count: usize,
    pub mean: Option<f64>,
    pub median: Option<f64>,
    pub min: Option<u8>,
    pub max: Option<u8>,
    pub by_priority: BTreeMap<Priority, usize>,
}

impl ScoreDistribution {
    pub fn from_leads(leads: &[ScoredLead]) -> Self {
        let mut scores: Vec<u8> = leads.iter().map(|l| l.score).collect();
        scores.sort_unstable();

        let mut by_priority: BTreeMap<Priority, usize> =
            Priority::ALL.into_iter().map(|p| (p, 0)).collect();
        for lead in leads {
            *by_priority.entry(lead.priority).or_default() += 1;
        }

        let count = scores.len();
        let median = match count {
            0 => None,
            n if n % 2 == 1 => Some(f64::from(scores[n / 2])),
            n => Some((f64::from(scores[n / 2 - 1]) + f64::from(scores[n / 2])) / 2.0),
        };

        Self {
            count,
            mean: average(scores.iter().map(|s| f64::from(*s))),
            median,
            min: scores.first().copied(),
            max: scores.last().copied(),
            by_priority,
        }
    }
}

// --- SALES SUMMARY ---

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VerticalSales {
    pub vertical: Vertical,
    pub leads: usize,
    pub average_score: Option<f64>,
    /// High or Critical priority.
    pub urgent: usize,
    pub on_competitor: usize,
    pub average_rating: Option<f64>,
    pub total_reviews: u64,
}

impl VerticalSales {
    fn from_leads(vertical: Vertical, leads: &[ScoredLead]) -> Self {
        Self {
            vertical,
            leads: leads.len(),
            average_score: average(leads.iter().map(|l| f64::from(l.score))),
            urgent: leads.iter().filter(|l| l.priority.is_urgent()).count(),
            on_competitor: leads.iter().filter(|l| l.features.competitor_platform).count(),
            average_rating: average(leads.iter().filter_map(|l| l.merchant.rating)),
            total_reviews: leads.iter().map(|l| u64::from(l.review_count())).sum(),
        }
    }
}

/// What the sales team reads: exported leads per vertical.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SalesSummary {
    pub run_date: NaiveDate,
    pub total_leads: usize,
    pub verticals: Vec<VerticalSales>,
}

impl SalesSummary {
    pub fn from_routed(routed: &RoutedLeads, run_date: NaiveDate) -> Self {
        let verticals: Vec<VerticalSales> = Vertical::KNOWN
            .into_iter()
            .map(|v| VerticalSales::from_leads(v, routed.vertical(v)))
            .collect();

        Self {
            run_date,
            total_leads: verticals.iter().map(|v| v.leads).sum(),
            verticals,
        }
    }

    /// Plain-text report, without the trailing newline.
    pub fn render_text(&self) -> String {
        self.to_string().trim_end().to_string()
    }
}

impl fmt::Display for SalesSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "WEEKLY LEADS SUMMARY")?;
        writeln!(f, "Run date: {}", self.run_date)?;
        writeln!(f, "Total leads: {}", self.total_leads)?;

        for v in &self.verticals {
            writeln!(f)?;
            writeln!(f, "{}", v.vertical.as_str().to_uppercase())?;
            writeln!(f, "  Leads: {}", v.leads)?;
            writeln!(f, "  Avg score: {}", fmt_avg(v.average_score, 1))?;
            writeln!(f, "  High/Critical: {}", v.urgent)?;
            writeln!(f, "  On competitor platform: {}", v.on_competitor)?;
            writeln!(f, "  Avg rating: {}", fmt_avg(v.average_rating, 2))?;
            writeln!(f, "  Total reviews: {}", v.total_reviews)?;
        }
        Ok(())
    }
}

fn fmt_avg(value: Option<f64>, decimals: usize) -> String {
    match value {
        Some(v) => format!("{v:.decimals$}"),
        None => "n/a".to_string(),
    }
}

fn average(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, n) = values.fold((0.0, 0usize), |(s, n), v| (s + v, n + 1));
    (n > 0).then(|| sum / n as f64)
}

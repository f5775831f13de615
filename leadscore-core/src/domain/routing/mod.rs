pub mod router;
pub mod rule;

pub use router::{CombinedLead, RouteSummary, RoutedLeads, VerticalCounts, VerticalRouter};
pub use rule::{VerticalRule, VerticalRules};

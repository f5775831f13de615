// leadscore-core/src/domain/priority/tier.rs

use serde::{Deserialize, Serialize};
use std::fmt;

// Discriminant order gives Low < Medium < High < Critical, so tiers can be
// compared directly.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub enum Priority {
    #[default]
    Low,
    Medium,
    High,
    Critical,
}

impl Priority {
    pub const ALL: [Priority; 4] = [
        Priority::Low,
        Priority::Medium,
        Priority::High,
        Priority::Critical,
    ];

    /// Global thresholds, identical for every vertical.
    pub fn from_score(score: u8) -> Self {
        match score {
            80.. => Self::Critical,
            65.. => Self::High,
            50.. => Self::Medium,
            _ => Self::Low,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Critical => "Critical",
        }
    }

    pub fn is_urgent(&self) -> bool {
        *self >= Self::High
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

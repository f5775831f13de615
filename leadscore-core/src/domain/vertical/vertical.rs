// leadscore-core/src/domain/vertical/vertical.rs

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

// Declaration order is the routing order: restaurants are exported first,
// `Unknown` always last. Sorting a BTreeMap<Vertical, _> follows it for free.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Vertical {
    Restaurants,
    Grocery,
    Retail,
    #[default]
    Unknown,
}

impl Vertical {
    /// Verticals that carry a routing rule, in export order.
    pub const KNOWN: [Vertical; 3] = [Vertical::Restaurants, Vertical::Grocery, Vertical::Retail];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Restaurants => "restaurants",
            Self::Grocery => "grocery",
            Self::Retail => "retail",
            Self::Unknown => "unknown",
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown)
    }
}

impl fmt::Display for Vertical {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Error, Debug, Diagnostic, Clone, PartialEq, Eq)]
#[error("Unknown vertical: '{0}'")]
#[diagnostic(
    code(leadscore::vertical::unknown),
    help("Expected one of: restaurants, grocery, retail, unknown")
)]
pub struct ParseVerticalError(pub String);

impl std::str::FromStr for Vertical {
    type Err = ParseVerticalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "restaurants" => Ok(Self::Restaurants),
            "grocery" => Ok(Self::Grocery),
            "retail" => Ok(Self::Retail),
            "unknown" => Ok(Self::Unknown),
            _ => Err(ParseVerticalError(s.to_string())),
        }
    }
}

// leadscore-core/src/domain/error.rs

use miette::Diagnostic;
use serde::Serialize;
use thiserror::Error;

use crate::domain::vertical::Vertical;

/// Fatal: raised before any record is processed.
#[derive(Error, Debug, Diagnostic, Clone, PartialEq)]
pub enum ConfigurationError {
    #[error("Scoring weights must sum to {expected}, got {actual}")]
    #[diagnostic(
        code(leadscore::config::weights),
        help("Adjust the per-feature maxima under `scoring.weights` so they add up to {expected}.")
    )]
    WeightsSum { expected: u32, actual: u32 },

    #[error("No routing rule configured for vertical '{0}'")]
    #[diagnostic(
        code(leadscore::config::missing_rule),
        help("Every known vertical needs `min_score`, `target_count` and `sla_days` under `verticals`.")
    )]
    MissingVerticalRule(Vertical),

    #[error("Keyword '{keyword}' is listed for both '{first}' and '{second}'")]
    #[diagnostic(
        code(leadscore::config::overlapping_keywords),
        help("Vertical keyword sets must be disjoint.")
    )]
    OverlappingKeywords {
        keyword: String,
        first: Vertical,
        second: Vertical,
    },

    #[error("Empty keyword in the '{0}' keyword set")]
    #[diagnostic(
        code(leadscore::config::empty_keyword),
        help("An empty keyword would match every category label.")
    )]
    EmptyKeyword(Vertical),

    #[error("Invalid configuration: {0}")]
    #[diagnostic(code(leadscore::config::invalid))]
    Invalid(String),
}

impl From<validator::ValidationErrors> for ConfigurationError {
    fn from(errors: validator::ValidationErrors) -> Self {
        ConfigurationError::Invalid(errors.to_string())
    }
}

/// Recoverable: the record is skipped and counted, the batch goes on.
#[derive(Error, Debug, Diagnostic, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RecordDataError {
    #[error("Record #{position} ('{name}') has no identifier")]
    #[diagnostic(code(leadscore::record::missing_identifier))]
    MissingIdentifier { position: usize, name: String },

    #[error("Record #{position} is malformed: {reason}")]
    #[diagnostic(code(leadscore::record::malformed))]
    Malformed { position: usize, reason: String },
}

impl RecordDataError {
    /// Position of the offending record in the source batch.
    pub fn position(&self) -> usize {
        match self {
            Self::MissingIdentifier { position, .. } | Self::Malformed { position, .. } => *position,
        }
    }
}

#[derive(Error, Debug, Diagnostic)]
pub enum DomainError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    RecordData(#[from] RecordDataError),
}

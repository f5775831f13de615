// leadscore-core/src/error.rs

use crate::domain::error::{ConfigurationError, DomainError};
use crate::infrastructure::error::InfrastructureError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LeadScoreError {
    // --- DOMAIN (configuration, record data) ---
    #[error(transparent)]
    Domain(#[from] DomainError),

    // --- INFRASTRUCTURE (IO, parsing) ---
    #[error(transparent)]
    Infrastructure(#[from] InfrastructureError),

    #[error("Internal Error: {0}")]
    InternalError(String),

    #[error("Unsafe path traversal detected: {0}")]
    UnsafePath(String),
}

impl LeadScoreError {
    /// True for errors that must abort a run before any record is scored.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            LeadScoreError::Domain(DomainError::Configuration(_))
                | LeadScoreError::Infrastructure(
                    InfrastructureError::ConfigNotFound(_)
                        | InfrastructureError::ConfigError(_)
                        | InfrastructureError::YamlError { .. }
                )
        )
    }
}

impl From<ConfigurationError> for LeadScoreError {
    fn from(err: ConfigurationError) -> Self {
        LeadScoreError::Domain(DomainError::Configuration(err))
    }
}

impl From<std::io::Error> for LeadScoreError {
    fn from(err: std::io::Error) -> Self {
        LeadScoreError::Infrastructure(InfrastructureError::Io(err))
    }
}

pub mod error;
pub mod features;
pub mod lead;
pub mod merchant;
pub mod priority;
pub mod project;
pub mod routing;
pub mod scoring;
pub mod vertical;

// Re-exports pratiques pour simplifier les imports ailleurs
pub use error::{ConfigurationError, DomainError, RecordDataError};
pub use lead::ScoredLead;

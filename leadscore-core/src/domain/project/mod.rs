pub mod configuration;
pub mod validation;

pub use configuration::{CompetitorConfig, ExecutionConfig, PipelineConfig, PlatformOdds, ScoringConfig};

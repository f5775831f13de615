pub mod project;

pub use crate::domain::project::PipelineConfig;
pub use project::{apply_overrides, load_pipeline_config};

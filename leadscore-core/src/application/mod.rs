// leadscore-core/src/application/mod.rs

pub mod clean;
pub mod engine;
pub mod pipeline;
pub mod ports;
pub mod report;

// --- RE-EXPORTS (FACADE PATTERN) ---
// The CLI imports use cases from here without knowing the file layout.

pub use clean::clean_project;
pub use engine::ScoringEngine;
pub use pipeline::{RunResult, RunSummary, run_pipeline};
pub use ports::LeadSink;
pub use report::{SalesSummary, ScoreDistribution, VerticalSales};

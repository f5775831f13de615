// leadscore-core/src/infrastructure/adapters/mod.rs

pub mod json_sink;
pub mod json_source;
pub mod simulated_competitor;

pub use json_sink::{JsonLeadSink, read_combined};
pub use json_source::JsonRecordSource;
pub use simulated_competitor::SimulatedCompetitorSignal;

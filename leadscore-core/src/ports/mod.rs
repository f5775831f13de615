pub mod competitor;
pub mod source;

pub use competitor::{CompetitorSignal, NoCompetitorSignal};
pub use source::{RecordSource, SourceBatch};

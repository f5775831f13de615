pub mod prioritizer;
pub mod tier;

pub use prioritizer::Prioritizer;
pub use tier::Priority;

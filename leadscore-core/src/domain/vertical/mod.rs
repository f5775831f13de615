// leadscore-core/src/domain/vertical/mod.rs

pub mod classifier;
#[allow(clippy::module_inception)]
pub mod vertical;

pub use classifier::{VerticalClassifier, VerticalKeywords};
pub use vertical::{ParseVerticalError, Vertical};

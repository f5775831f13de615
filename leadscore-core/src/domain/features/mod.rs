pub mod bucket;
pub mod deriver;

pub use bucket::ReviewVolumeBucket;
pub use deriver::{EngineeredFeatures, FeatureDeriver};

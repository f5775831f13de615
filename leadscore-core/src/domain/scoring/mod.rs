pub mod scorer;
pub mod weights;

pub use scorer::{ScoreBreakdown, ScoreFactor, Scorer};
pub use weights::{ReviewVolumeWeights, SCORE_SCALE, ScoringWeights};

// leadscore-core/src/domain/project/configuration.rs

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::merchant::MergePolicy;
use crate::domain::routing::VerticalRules;
use crate::domain::scoring::ScoringWeights;
use crate::domain::vertical::VerticalKeywords;

#[derive(Debug, Deserialize, Serialize, Validate, Clone)]
#[serde(deny_unknown_fields)]
pub struct PipelineConfig {
    pub name: String,
    #[serde(default = "default_version")]
    pub version: String,

    #[serde(rename = "config-paths", default)]
    pub config_paths: Vec<String>,

    #[serde(rename = "input-path", default = "default_input_path")]
    pub input_path: String,

    #[serde(rename = "output-path", default = "default_output_path")]
    pub output_path: String,

    #[serde(default)]
    pub dedup: MergePolicy,

    #[serde(default)]
    pub execution: ExecutionConfig,

    #[validate(nested)]
    #[serde(default)]
    pub scoring: ScoringConfig,

    #[validate(nested)]
    #[serde(default)]
    pub verticals: VerticalRules,

    #[validate(nested)]
    #[serde(default)]
    pub competitor: CompetitorConfig,
}

impl PipelineConfig {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: default_version(),
            config_paths: Vec::new(),
            input_path: default_input_path(),
            output_path: default_output_path(),
            dedup: MergePolicy::default(),
            execution: ExecutionConfig::default(),
            scoring: ScoringConfig::default(),
            verticals: VerticalRules::default(),
            competitor: CompetitorConfig::default(),
        }
    }
}

/// Everything the feature deriver and the scorer read.
#[derive(Debug, Deserialize, Serialize, Validate, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ScoringConfig {
    #[serde(default = "default_high_demand_categories")]
    pub high_demand_categories: Vec<String>,
    #[serde(default = "default_target_cities")]
    pub target_cities: Vec<String>,
    #[serde(default)]
    pub keywords: VerticalKeywords,
    #[serde(default)]
    pub weights: ScoringWeights,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            high_demand_categories: default_high_demand_categories(),
            target_cities: default_target_cities(),
            keywords: VerticalKeywords::default(),
            weights: ScoringWeights::default(),
        }
    }
}

/// Simulated competitor presence, used only for records that arrive without
/// a detected `competitor_platform` value.
#[derive(Debug, Deserialize, Serialize, Validate, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CompetitorConfig {
    #[serde(default = "default_seed")]
    pub seed: u64,
    #[validate(nested)]
    #[serde(default = "default_platforms")]
    pub platforms: Vec<PlatformOdds>,
}

impl Default for CompetitorConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            platforms: default_platforms(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Validate, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct PlatformOdds {
    pub name: String,
    #[validate(range(min = 0.0, max = 1.0, message = "probability must be within [0, 1]"))]
    pub probability: f64,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ExecutionConfig {
    /// Score records on the rayon pool. Output is identical either way.
    #[serde(default = "default_parallel")]
    pub parallel: bool,
}

impl Default for ExecutionConfig {
    fn default() -> Self {
        Self {
            parallel: default_parallel(),
        }
    }
}

fn default_version() -> String {
    "0.1.0".to_string()
}
fn default_input_path() -> String {
    "data/merchants.json".to_string()
}
fn default_output_path() -> String {
    "target".to_string()
}
fn default_parallel() -> bool {
    true
}
fn default_seed() -> u64 {
    42
}

fn default_platforms() -> Vec<PlatformOdds> {
    vec![
        PlatformOdds {
            name: "ubereats".to_string(),
            probability: 0.60,
        },
        PlatformOdds {
            name: "grubhub".to_string(),
            probability: 0.50,
        },
    ]
}

fn default_high_demand_categories() -> Vec<String> {
    [
        "pizza",
        "chinese",
        "mexican",
        "sushi",
        "thai",
        "indian",
        "italian",
        "japanese",
        "korean",
        "vietnamese",
        "grocery",
        "supermarket",
        "convenience",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

fn default_target_cities() -> Vec<String> {
    [
        "San Francisco",
        "New York",
        "Chicago",
        "Los Angeles",
        "Seattle",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

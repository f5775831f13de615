// leadscore-core/src/infrastructure/config/project.rs

use serde::{Deserialize, de::DeserializeOwned};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, instrument, warn};

use crate::domain::project::{CompetitorConfig, PipelineConfig, ScoringConfig};
use crate::domain::routing::VerticalRules;
use crate::infrastructure::error::InfrastructureError;

pub const CONFIG_CANDIDATES: [&str; 2] = ["leadscore.yaml", "leadscore_project.yaml"];

// --- LOADER ---

/// Loads the project configuration in layers: main file, satellite
/// fragments, then environment overrides. Validation is left to the
/// scoring engine so that every entry point fails the same way.
#[instrument(skip(project_dir))]
pub fn load_pipeline_config(project_dir: &Path) -> Result<PipelineConfig, InfrastructureError> {
    // 1. Main file
    let config_path = find_main_config(project_dir)?;
    info!(path = ?config_path, "Loading project configuration");
    let mut config: PipelineConfig = load_fragment(&config_path)?;

    // 2. Satellites (fail-secure: a corrupt fragment stops the load)
    if let Some(config_folder) = config.config_paths.first() {
        let config_dir = project_dir.join(config_folder);
        if config_dir.exists() {
            load_satellite_configs(&mut config, &config_dir)?;
        } else {
            warn!(dir = ?config_dir, "Configured config-path does not exist");
        }
    }

    // 3. Environment layering
    apply_overrides(&mut config, |key| std::env::var(key).ok())?;

    Ok(config)
}

fn find_main_config(root: &Path) -> Result<PathBuf, InfrastructureError> {
    CONFIG_CANDIDATES
        .iter()
        .map(|filename| root.join(filename))
        .find(|p| p.exists())
        .ok_or_else(|| {
            InfrastructureError::ConfigNotFound(format!(
                "No configuration file found in {:?}. Checked: {:?}",
                root, CONFIG_CANDIDATES
            ))
        })
}

/// Reads one typed YAML document.
fn load_fragment<T: DeserializeOwned>(path: &Path) -> Result<T, InfrastructureError> {
    let content = fs::read_to_string(path)?;
    serde_yaml::from_str(&content).map_err(|source| InfrastructureError::YamlError {
        path: path.display().to_string(),
        source,
    })
}

fn load_satellite_configs(
    config: &mut PipelineConfig,
    config_dir: &Path,
) -> Result<(), InfrastructureError> {
    // A. Scoring tables (keywords, weights, cities)
    let scoring_path = config_dir.join("scoring.yml");
    if scoring_path.exists() {
        #[derive(Deserialize)]
        #[serde(deny_unknown_fields)]
        struct ScoringWrapper {
            scoring: ScoringConfig,
        }
        let wrapper: ScoringWrapper = load_fragment(&scoring_path)?;
        config.scoring = wrapper.scoring;
        info!("  ⚖️  Scoring tables loaded");
    }

    // B. Vertical routing rules
    let verticals_path = config_dir.join("verticals.yml");
    if verticals_path.exists() {
        #[derive(Deserialize)]
        #[serde(deny_unknown_fields)]
        struct VerticalsWrapper {
            verticals: VerticalRules,
        }
        let wrapper: VerticalsWrapper = load_fragment(&verticals_path)?;
        config.verticals = wrapper.verticals;
        info!("  🧭 Vertical rules loaded");
    }

    // C. Competitor simulation
    let competitor_path = config_dir.join("competitor.yml");
    if competitor_path.exists() {
        #[derive(Deserialize)]
        #[serde(deny_unknown_fields)]
        struct CompetitorWrapper {
            competitor: CompetitorConfig,
        }
        let wrapper: CompetitorWrapper = load_fragment(&competitor_path)?;
        config.competitor = wrapper.competitor;
        info!("  🎲 Competitor simulation loaded");
    }

    Ok(())
}

/// Applies `LEADSCORE_*` overrides read through `lookup`.
pub fn apply_overrides<F>(config: &mut PipelineConfig, lookup: F) -> Result<(), InfrastructureError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(val) = lookup("LEADSCORE_OUTPUT_PATH") {
        info!(old = ?config.output_path, new = ?val, "Overriding output path via ENV");
        config.output_path = val;
    }
    if let Some(val) = lookup("LEADSCORE_INPUT_PATH") {
        info!(old = ?config.input_path, new = ?val, "Overriding input path via ENV");
        config.input_path = val;
    }
    if let Some(val) = lookup("LEADSCORE_SEED") {
        let seed = val.trim().parse::<u64>().map_err(|e| {
            InfrastructureError::ConfigError(format!("LEADSCORE_SEED '{}' is not a u64: {}", val, e))
        })?;
        info!(old = config.competitor.seed, new = seed, "Overriding competitor seed via ENV");
        config.competitor.seed = seed;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::merchant::MergePolicy;
    use anyhow::Result;
    use tempfile::tempdir;

    const MAIN: &str = r#"
name: weekly_leads
version: "2.1"
config-paths: ["config"]
input-path: data/places.json
dedup: merge
"#;

    #[test]
    fn test_loads_main_file_with_defaults() -> Result<()> {
        let dir = tempdir()?;
        fs::write(dir.path().join("leadscore.yaml"), MAIN)?;

        let config = load_pipeline_config(dir.path())?;
        assert_eq!(config.name, "weekly_leads");
        assert_eq!(config.input_path, "data/places.json");
        assert_eq!(config.output_path, "target");
        assert_eq!(config.dedup, MergePolicy::Merge);
        assert_eq!(config.scoring, ScoringConfig::default());
        assert_eq!(config.competitor.seed, 42);
        Ok(())
    }

    #[test]
    fn test_satellites_replace_sections() -> Result<()> {
        let dir = tempdir()?;
        fs::write(dir.path().join("leadscore.yaml"), MAIN)?;
        let config_dir = dir.path().join("config");
        fs::create_dir(&config_dir)?;
        fs::write(
            config_dir.join("verticals.yml"),
            "verticals:\n  restaurants: { min_score: 40, target_count: 5, sla_days: 3 }\n  grocery: { min_score: 60, target_count: 5, sla_days: 14 }\n  retail: { min_score: 55, target_count: 5, sla_days: 10 }\n",
        )?;
        fs::write(
            config_dir.join("competitor.yml"),
            "competitor:\n  seed: 7\n  platforms:\n    - { name: ubereats, probability: 1.0 }\n",
        )?;

        let config = load_pipeline_config(dir.path())?;
        let restaurants = config.verticals.restaurants.as_ref().map(|r| r.min_score);
        assert_eq!(restaurants, Some(40));
        assert_eq!(config.competitor.seed, 7);
        assert_eq!(config.competitor.platforms.len(), 1);
        Ok(())
    }

    #[test]
    fn test_corrupt_satellite_aborts() -> Result<()> {
        let dir = tempdir()?;
        fs::write(dir.path().join("leadscore.yaml"), MAIN)?;
        let config_dir = dir.path().join("config");
        fs::create_dir(&config_dir)?;
        fs::write(config_dir.join("scoring.yml"), "scoring: [not, a, map")?;

        let err = load_pipeline_config(dir.path());
        assert!(matches!(err, Err(InfrastructureError::YamlError { .. })));
        Ok(())
    }

    #[test]
    fn test_misspelled_keyword_set_is_rejected() -> Result<()> {
        let dir = tempdir()?;
        fs::write(dir.path().join("leadscore.yaml"), MAIN)?;
        let config_dir = dir.path().join("config");
        fs::create_dir(&config_dir)?;
        fs::write(
            config_dir.join("scoring.yml"),
            "scoring:\n  keywords:\n    restaurant: [diner]\n",
        )?;

        let err = load_pipeline_config(dir.path());
        match err {
            Err(InfrastructureError::YamlError { source, .. }) => {
                assert!(source.to_string().contains("restaurant"));
            }
            other => anyhow::bail!("expected a YAML error, got {:?}", other.map(|c| c.name)),
        }
        Ok(())
    }

    #[test]
    fn test_unknown_main_file_key_is_rejected() -> Result<()> {
        let dir = tempdir()?;
        fs::write(
            dir.path().join("leadscore.yaml"),
            "name: weekly\nouput-path: out\n",
        )?;
        let err = load_pipeline_config(dir.path());
        assert!(matches!(err, Err(InfrastructureError::YamlError { .. })));
        Ok(())
    }

    #[test]
    fn test_missing_config_file() -> Result<()> {
        let dir = tempdir()?;
        let err = load_pipeline_config(dir.path());
        assert!(matches!(err, Err(InfrastructureError::ConfigNotFound(_))));
        Ok(())
    }

    #[test]
    fn test_env_overrides() -> Result<()> {
        let mut config = PipelineConfig::named("demo");
        apply_overrides(&mut config, |key| match key {
            "LEADSCORE_OUTPUT_PATH" => Some("/tmp/out".to_string()),
            "LEADSCORE_SEED" => Some("1234".to_string()),
            _ => None,
        })?;
        assert_eq!(config.output_path, "/tmp/out");
        assert_eq!(config.competitor.seed, 1234);
        assert_eq!(config.input_path, "data/merchants.json");

        let bad = apply_overrides(&mut config, |key| {
            (key == "LEADSCORE_SEED").then(|| "forty-two".to_string())
        });
        assert!(matches!(bad, Err(InfrastructureError::ConfigError(_))));
        Ok(())
    }
}

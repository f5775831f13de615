// leadscore-core/src/infrastructure/error.rs

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum InfrastructureError {
    // --- FILESYSTEM (IO) ---
    #[error("File System Error: {0}")]
    #[diagnostic(
        code(leadscore::infra::io),
        help("Check file permissions or path validity.")
    )]
    Io(#[from] std::io::Error),

    // --- CONFIG / YAML ---
    #[error("YAML Parsing Error in '{path}': {source}")]
    #[diagnostic(
        code(leadscore::infra::yaml),
        help("Check your YAML syntax (indentation, types).")
    )]
    YamlError {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Configuration Error: {0}")]
    #[diagnostic(code(leadscore::infra::config))]
    ConfigError(String),

    #[error("Project configuration not found: {0}")]
    #[diagnostic(code(leadscore::infra::config_missing))]
    ConfigNotFound(String),

    // --- RECORDS / EXPORTS (JSON) ---
    #[error("JSON Error in '{path}': {source}")]
    #[diagnostic(
        code(leadscore::infra::json),
        help("Merchant files must hold a JSON array of records.")
    )]
    JsonError {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

//! # Cryptan Config
//!
//! Layered configuration for the cryptanalysis pipeline:
//!
//! ```text
//! defaults ──▶ config file (yaml | json) ──▶ CRYPTAN_* environment ──▶ validate()
//! ```

pub mod loader;
pub mod settings;

pub use settings::{AnalysisConfig, CryptanConfig, Estimator, OutputConfig, KEY_LENGTH_LIMIT};

/// Result type for cryptan-config operations
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors that can occur while loading or validating configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: String, value: String },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

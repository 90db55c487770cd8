//! Error types for registry loading and resolver configuration.
//!
//! Resolution itself never fails; these errors only surface while building a
//! registry or reading configuration.

use thiserror::Error;

/// Errors raised while building an asset registry.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("failed to parse registry TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to parse registry JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid descriptor '{key}': {reason}")]
    InvalidDescriptor { key: String, reason: String },

    #[error("duplicate asset key '{0}'")]
    DuplicateKey(String),

    #[error("registry has no default asset '{0}'")]
    MissingDefault(String),

    #[error("asset key must not be empty")]
    EmptyKey,
}

/// Errors raised while reading resolver configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid resolver config: {0}")]
    Toml(#[from] toml::de::Error),
}

pub type Result<T, E = RegistryError> = std::result::Result<T, E>;

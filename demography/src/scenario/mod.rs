//! Scenario configuration: the per-setting defaults normalization depends on.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::categories::Ethnicity;

/// Ethnicity assumed for entities that do not state one.
pub const DEFAULT_ETHNICITY: Ethnicity = Ethnicity::Mestizo;

/// Errors raised while loading a scenario.
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("invalid scenario config: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Settings that vary between narrative scenarios.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioConfig {
    /// Human-readable scenario name.
    pub name: String,

    /// Category substituted for missing or unrecognized ethnicity.
    pub default_ethnicity: Ethnicity,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            name: "Mexico City, 1680".to_string(),
            default_ethnicity: DEFAULT_ETHNICITY,
        }
    }
}

impl ScenarioConfig {
    /// Parse a scenario from a TOML document. Missing keys keep their defaults.
    pub fn from_toml_str(source: &str) -> Result<Self, ScenarioError> {
        Ok(toml::from_str(source)?)
    }
}

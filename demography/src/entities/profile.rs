//! Raw demographic fields as supplied by entity collaborators.

use serde::{Deserialize, Serialize};

/// Age as supplied by the caller: a number of years or free text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AgeInput {
    Years(f64),
    Text(String),
}

impl From<u32> for AgeInput {
    fn from(years: u32) -> Self {
        AgeInput::Years(f64::from(years))
    }
}

impl From<i32> for AgeInput {
    fn from(years: i32) -> Self {
        AgeInput::Years(f64::from(years))
    }
}

impl From<f64> for AgeInput {
    fn from(years: f64) -> Self {
        AgeInput::Years(years)
    }
}

impl From<&str> for AgeInput {
    fn from(text: &str) -> Self {
        AgeInput::Text(text.to_string())
    }
}

impl From<String> for AgeInput {
    fn from(text: String) -> Self {
        AgeInput::Text(text)
    }
}

/// Loosely-specified demographic traits of an entity.
///
/// Every field is optional; normalization substitutes a default category for
/// anything missing or unrecognized.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemographicProfile {
    /// Name of a specific story character, if this entity is one.
    pub identity_name: Option<String>,
    pub gender: Option<String>,
    pub age: Option<AgeInput>,
    pub ethnicity: Option<String>,
    pub social_class: Option<String>,
    pub occupation: Option<String>,
}

impl DemographicProfile {
    /// Create an empty profile.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_identity_name(mut self, name: impl Into<String>) -> Self {
        self.identity_name = Some(name.into());
        self
    }

    pub fn with_gender(mut self, gender: impl Into<String>) -> Self {
        self.gender = Some(gender.into());
        self
    }

    pub fn with_age(mut self, age: impl Into<AgeInput>) -> Self {
        self.age = Some(age.into());
        self
    }

    pub fn with_ethnicity(mut self, ethnicity: impl Into<String>) -> Self {
        self.ethnicity = Some(ethnicity.into());
        self
    }

    pub fn with_social_class(mut self, social_class: impl Into<String>) -> Self {
        self.social_class = Some(social_class.into());
        self
    }

    pub fn with_occupation(mut self, occupation: impl Into<String>) -> Self {
        self.occupation = Some(occupation.into());
        self
    }
}

//! Normalization layer: total mappings from free-form demographic input onto
//! the closed category sets.
//!
//! Every function here is pure and total. Unrecognized or missing input maps
//! to a default category, never to an error.

mod age;
mod ethnicity;
mod social_class;

pub use age::*;
pub use ethnicity::*;
pub use social_class::*;

use serde::{Deserialize, Serialize};

use crate::categories::{AgeCategory, Ethnicity, Gender, SocialClass};
use crate::entities::DemographicProfile;
use crate::scenario::ScenarioConfig;

/// Occupation value used when none is given.
pub const UNKNOWN_OCCUPATION: &str = "unknown";

/// Lowercase, trim, treat underscores as spaces and collapse inner whitespace.
pub fn canonical_token(raw: &str) -> String {
    raw.to_lowercase()
        .replace('_', " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Gender is passed through; only a missing value becomes `unknown`.
pub fn normalize_gender(input: Option<&str>) -> Gender {
    input.map(Gender::parse).unwrap_or_default()
}

/// Trimmed, lowercased occupation text, `unknown` when absent or blank.
pub fn normalize_occupation(input: Option<&str>) -> String {
    let occupation = input.map(canonical_token).unwrap_or_default();
    if occupation.is_empty() {
        UNKNOWN_OCCUPATION.to_string()
    } else {
        occupation
    }
}

/// A demographic profile reduced to closed categories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedProfile {
    pub gender: Gender,
    pub age: AgeCategory,
    pub ethnicity: Ethnicity,
    pub social_class: SocialClass,
    pub occupation: String,
}

impl NormalizedProfile {
    /// Normalize every field of a raw profile.
    pub fn from_profile(profile: &DemographicProfile, scenario: &ScenarioConfig) -> Self {
        Self {
            gender: normalize_gender(profile.gender.as_deref()),
            age: normalize_age(profile.age.as_ref()),
            ethnicity: normalize_ethnicity(profile.ethnicity.as_deref(), scenario.default_ethnicity),
            social_class: normalize_social_class(profile.social_class.as_deref()),
            occupation: normalize_occupation(profile.occupation.as_deref()),
        }
    }

    /// Whether an occupation was actually given.
    pub fn has_occupation(&self) -> bool {
        self.occupation != UNKNOWN_OCCUPATION
    }
}

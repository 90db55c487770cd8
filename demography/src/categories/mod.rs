//! Closed category vocabularies: gender, age, ethnicity, social class.
//!
//! Every raw demographic input is eventually mapped onto one of these sets by
//! the normalization layer. Asset descriptors are written against the same
//! canonical names.

mod clusters;

pub use clusters::*;

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Error returned when a canonical category name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CategoryError {
    #[error("unknown {kind} category: '{value}'")]
    Unknown { kind: &'static str, value: String },
}

impl CategoryError {
    fn unknown(kind: &'static str, value: &str) -> Self {
        CategoryError::Unknown {
            kind,
            value: value.to_string(),
        }
    }
}

/// Gender of an entity or asset.
///
/// Gender has no synonym table. Values other than the well-known ones are
/// kept verbatim (lowercased) in [`Gender::Other`] and compared literally.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Gender {
    Male,
    Female,
    /// Asset depicts several people.
    Group,
    #[default]
    Unknown,
    Other(String),
}

impl Gender {
    /// Parse a raw gender string. Empty input is `Unknown`.
    pub fn parse(raw: &str) -> Self {
        let value = raw.trim().to_lowercase();
        match value.as_str() {
            "" | "unknown" => Gender::Unknown,
            "male" => Gender::Male,
            "female" => Gender::Female,
            "group" => Gender::Group,
            _ => Gender::Other(value),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Group => "group",
            Gender::Unknown => "unknown",
            Gender::Other(s) => s,
        }
    }

    /// Whether this is a concrete individual gender (not unknown, not a group).
    pub fn is_known(&self) -> bool {
        matches!(self, Gender::Male | Gender::Female | Gender::Other(_))
    }
}

impl From<String> for Gender {
    fn from(raw: String) -> Self {
        Gender::parse(&raw)
    }
}

impl From<Gender> for String {
    fn from(gender: Gender) -> Self {
        gender.as_str().to_string()
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Age bracket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AgeCategory {
    /// Under 13.
    Child,
    /// 13-24.
    Young,
    /// 25-44.
    #[default]
    Adult,
    /// 45-59.
    MiddleAged,
    /// 60 and over.
    Elderly,
}

impl AgeCategory {
    pub const ALL: [AgeCategory; 5] = [
        AgeCategory::Child,
        AgeCategory::Young,
        AgeCategory::Adult,
        AgeCategory::MiddleAged,
        AgeCategory::Elderly,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AgeCategory::Child => "child",
            AgeCategory::Young => "young",
            AgeCategory::Adult => "adult",
            AgeCategory::MiddleAged => "middle-aged",
            AgeCategory::Elderly => "elderly",
        }
    }
}

impl FromStr for AgeCategory {
    type Err = CategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim().to_lowercase();
        AgeCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == value)
            .ok_or_else(|| CategoryError::unknown("age", s))
    }
}

impl std::fmt::Display for AgeCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Ethnic categories of the colonial New Spain scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Ethnicity {
    #[serde(rename = "español", alias = "espanol")]
    Espanol,
    Criollo,
    Mestizo,
    Castizo,
    Mulato,
    Africano,
    Indio,
    Chino,
}

impl Ethnicity {
    pub const ALL: [Ethnicity; 8] = [
        Ethnicity::Espanol,
        Ethnicity::Criollo,
        Ethnicity::Mestizo,
        Ethnicity::Castizo,
        Ethnicity::Mulato,
        Ethnicity::Africano,
        Ethnicity::Indio,
        Ethnicity::Chino,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Ethnicity::Espanol => "español",
            Ethnicity::Criollo => "criollo",
            Ethnicity::Mestizo => "mestizo",
            Ethnicity::Castizo => "castizo",
            Ethnicity::Mulato => "mulato",
            Ethnicity::Africano => "africano",
            Ethnicity::Indio => "indio",
            Ethnicity::Chino => "chino",
        }
    }
}

impl FromStr for Ethnicity {
    type Err = CategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim().to_lowercase();
        if value == "espanol" {
            return Ok(Ethnicity::Espanol);
        }
        Ethnicity::ALL
            .into_iter()
            .find(|e| e.as_str() == value)
            .ok_or_else(|| CategoryError::unknown("ethnicity", s))
    }
}

impl std::fmt::Display for Ethnicity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Social standing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialClass {
    Elite,
    /// Artisans, merchants and other middling trades.
    Middling,
    #[default]
    Common,
    Enslaved,
    /// Clergy and members of religious orders.
    Religious,
}

impl SocialClass {
    pub const ALL: [SocialClass; 5] = [
        SocialClass::Elite,
        SocialClass::Middling,
        SocialClass::Common,
        SocialClass::Enslaved,
        SocialClass::Religious,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SocialClass::Elite => "elite",
            SocialClass::Middling => "middling",
            SocialClass::Common => "common",
            SocialClass::Enslaved => "enslaved",
            SocialClass::Religious => "religious",
        }
    }
}

impl FromStr for SocialClass {
    type Err = CategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim().to_lowercase();
        SocialClass::ALL
            .into_iter()
            .find(|c| c.as_str() == value)
            .ok_or_else(|| CategoryError::unknown("social class", s))
    }
}

impl std::fmt::Display for SocialClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

//! Asset descriptors - entries in the portrait registry.

use demography::{AgeCategory, Ethnicity, Gender, SocialClass};
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;

use super::CategorySet;

/// Unique key of an asset in the registry (typically an image filename).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssetKey(String);

impl AssetKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for AssetKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for AssetKey {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl From<String> for AssetKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}

impl PartialEq<str> for AssetKey {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for AssetKey {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl std::fmt::Display for AssetKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Age an asset depicts: one category, or several people of mixed ages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AssetAge {
    Child,
    Young,
    Adult,
    MiddleAged,
    Elderly,
    #[default]
    Mixed,
}

impl AssetAge {
    /// The single age category depicted, if any.
    pub fn category(self) -> Option<AgeCategory> {
        match self {
            AssetAge::Child => Some(AgeCategory::Child),
            AssetAge::Young => Some(AgeCategory::Young),
            AssetAge::Adult => Some(AgeCategory::Adult),
            AssetAge::MiddleAged => Some(AgeCategory::MiddleAged),
            AssetAge::Elderly => Some(AgeCategory::Elderly),
            AssetAge::Mixed => None,
        }
    }
}

impl From<AgeCategory> for AssetAge {
    fn from(age: AgeCategory) -> Self {
        match age {
            AgeCategory::Child => AssetAge::Child,
            AgeCategory::Young => AssetAge::Young,
            AgeCategory::Adult => AssetAge::Adult,
            AgeCategory::MiddleAged => AssetAge::MiddleAged,
            AgeCategory::Elderly => AssetAge::Elderly,
        }
    }
}

/// Demographic applicability of a single portrait asset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssetDescriptor {
    pub key: AssetKey,

    /// Set only for portraits of one specific story character.
    pub identity_name: Option<String>,

    pub gender: Gender,
    pub age: AssetAge,
    pub ethnicities: CategorySet<Ethnicity>,
    pub social_classes: CategorySet<SocialClass>,

    /// Occupation tags, matched by substring against the entity's occupation.
    pub occupations: Vec<String>,

    /// Loose descriptive tags, matched the same way for a smaller bonus.
    pub tags: Vec<String>,
}

impl AssetDescriptor {
    /// Create a descriptor that applies to anyone: unknown gender, mixed age,
    /// any ethnicity and any class.
    pub fn new(key: impl Into<AssetKey>) -> Self {
        Self {
            key: key.into(),
            identity_name: None,
            gender: Gender::Unknown,
            age: AssetAge::Mixed,
            ethnicities: CategorySet::any(),
            social_classes: CategorySet::any(),
            occupations: Vec::new(),
            tags: Vec::new(),
        }
    }

    /// Bind this asset to a named story character.
    pub fn with_identity_name(mut self, name: impl Into<String>) -> Self {
        self.identity_name = Some(name.into());
        self
    }

    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = gender;
        self
    }

    pub fn with_age(mut self, age: impl Into<AssetAge>) -> Self {
        self.age = age.into();
        self
    }

    /// Restrict to explicit ethnicities (drops the wildcard).
    pub fn with_ethnicities(mut self, ethnicities: impl IntoIterator<Item = Ethnicity>) -> Self {
        self.ethnicities = ethnicities.into_iter().collect();
        self
    }

    /// Restrict to explicit social classes (drops the wildcard).
    pub fn with_social_classes(mut self, classes: impl IntoIterator<Item = SocialClass>) -> Self {
        self.social_classes = classes.into_iter().collect();
        self
    }

    pub fn with_occupation(mut self, occupation: impl Into<String>) -> Self {
        self.occupations.push(occupation.into());
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Whether this asset is reserved for a named identity.
    pub fn is_named(&self) -> bool {
        self.identity_name.is_some()
    }
}

/// On-disk form of a descriptor; the key comes from the enclosing mapping.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(crate) struct DescriptorRecord {
    identity_name: Option<String>,
    gender: Gender,
    age: AssetAge,
    ethnicities: CategorySet<Ethnicity>,
    social_classes: CategorySet<SocialClass>,
    occupations: Vec<String>,
    tags: Vec<String>,
}

impl DescriptorRecord {
    pub(crate) fn into_descriptor(self, key: impl Into<AssetKey>) -> AssetDescriptor {
        AssetDescriptor {
            key: key.into(),
            identity_name: self.identity_name.filter(|n| !n.trim().is_empty()),
            gender: self.gender,
            age: self.age,
            ethnicities: self.ethnicities,
            social_classes: self.social_classes,
            occupations: self.occupations,
            tags: self.tags,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_defaults() {
        let descriptor = AssetDescriptor::new("default");
        assert_eq!(descriptor.key, "default");
        assert_eq!(descriptor.gender, Gender::Unknown);
        assert_eq!(descriptor.age, AssetAge::Mixed);
        assert!(descriptor.ethnicities.is_any());
        assert!(descriptor.social_classes.is_any());
        assert!(!descriptor.is_named());
    }

    #[test]
    fn test_descriptor_builder() {
        let descriptor = AssetDescriptor::new("merchant.png")
            .with_gender(Gender::Male)
            .with_age(AgeCategory::MiddleAged)
            .with_ethnicities([Ethnicity::Espanol, Ethnicity::Criollo])
            .with_social_classes([SocialClass::Middling])
            .with_occupation("merchant")
            .with_tag("ledger");

        assert_eq!(descriptor.age.category(), Some(AgeCategory::MiddleAged));
        assert!(!descriptor.ethnicities.is_any());
        assert!(descriptor.ethnicities.contains(&Ethnicity::Criollo));
        assert_eq!(descriptor.occupations, vec!["merchant"]);
        assert_eq!(descriptor.tags, vec!["ledger"]);
    }

    #[test]
    fn test_record_from_toml() {
        let record: DescriptorRecord = toml::from_str(
            r#"
            identity_name = "Antonius Philalethes"
            gender = "male"
            age = "elderly"
            ethnicities = ["español"]
            occupations = ["alchemist"]
            "#,
        )
        .unwrap();

        let descriptor = record.into_descriptor("antonius.png");
        assert!(descriptor.is_named());
        assert_eq!(descriptor.gender, Gender::Male);
        assert_eq!(descriptor.age, AssetAge::Elderly);
        assert!(descriptor.social_classes.is_any());
        assert!(descriptor.tags.is_empty());
    }

    #[test]
    fn test_blank_identity_is_generic() {
        let record: DescriptorRecord = toml::from_str(r#"identity_name = "  ""#).unwrap();
        assert!(!record.into_descriptor("x.png").is_named());
    }

    #[test]
    fn test_mixed_age_has_no_category() {
        assert_eq!(AssetAge::Mixed.category(), None);
        assert_eq!(AssetAge::from(AgeCategory::Child).category(), Some(AgeCategory::Child));
    }
}

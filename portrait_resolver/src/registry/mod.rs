//! Asset registry - the immutable, ordered table of portrait descriptors.
//!
//! The registry is built once at startup and handed to the resolver. It holds:
//! - **Descriptors** in declaration order (the tie-break order for scoring)
//! - **A key index** for direct lookups
//! - **The default key**, which is guaranteed to exist
//!
//! Descriptors with an identity name form the named partition; all others
//! form the generic pool.

mod category_set;
mod descriptor;

pub use category_set::*;
pub use descriptor::*;

use serde::Deserialize;
use std::collections::HashMap;

use crate::error::{RegistryError, Result};

/// Reserved key of the fallback portrait.
pub const DEFAULT_ASSET_KEY: &str = "default";

const BUILTIN_REGISTRY: &str = include_str!("../../assets/portraits.toml");

fn default_asset_key() -> String {
    DEFAULT_ASSET_KEY.to_string()
}

/// Top-level shape of a registry document in TOML or JSON.
#[derive(Debug, Deserialize)]
struct RegistryDocument<M> {
    #[serde(default = "default_asset_key")]
    default_key: String,
    portraits: M,
}

/// The portrait registry.
#[derive(Debug, Clone)]
pub struct AssetRegistry {
    /// All descriptors, in declaration order.
    descriptors: Vec<AssetDescriptor>,

    /// Index: key -> position in `descriptors`.
    by_key: HashMap<AssetKey, usize>,

    default_key: AssetKey,
}

impl AssetRegistry {
    /// Build a registry whose fallback asset is [`DEFAULT_ASSET_KEY`].
    pub fn new(descriptors: Vec<AssetDescriptor>) -> Result<Self> {
        Self::with_default_key(DEFAULT_ASSET_KEY, descriptors)
    }

    /// Build a registry with a custom fallback key.
    ///
    /// Fails if a key is empty or repeated, or if the fallback key is absent.
    pub fn with_default_key(
        default_key: impl Into<AssetKey>,
        descriptors: Vec<AssetDescriptor>,
    ) -> Result<Self> {
        let default_key = default_key.into();
        let mut by_key = HashMap::with_capacity(descriptors.len());

        for (position, descriptor) in descriptors.iter().enumerate() {
            if descriptor.key.as_str().trim().is_empty() {
                return Err(RegistryError::EmptyKey);
            }
            if by_key.insert(descriptor.key.clone(), position).is_some() {
                return Err(RegistryError::DuplicateKey(descriptor.key.to_string()));
            }
        }

        if !by_key.contains_key(default_key.as_str()) {
            return Err(RegistryError::MissingDefault(default_key.to_string()));
        }

        Ok(Self {
            descriptors,
            by_key,
            default_key,
        })
    }

    /// Load a registry from a TOML document:
    ///
    /// ```toml
    /// default_key = "default"
    ///
    /// [portraits.default]
    ///
    /// [portraits."merchant.png"]
    /// gender = "male"
    /// age = "middle-aged"
    /// ethnicities = ["español", "criollo"]
    /// occupations = ["merchant"]
    /// ```
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let document: RegistryDocument<toml::Table> = toml::from_str(source)?;
        let descriptors = document
            .portraits
            .into_iter()
            .map(|(key, value)| {
                value
                    .try_into::<DescriptorRecord>()
                    .map(|record| record.into_descriptor(key.as_str()))
                    .map_err(|e| RegistryError::InvalidDescriptor {
                        key,
                        reason: e.to_string(),
                    })
            })
            .collect::<Result<Vec<_>>>()?;

        Self::with_default_key(document.default_key, descriptors)
    }

    /// Load a registry from a JSON document with the same shape as the TOML form.
    pub fn from_json_str(source: &str) -> Result<Self> {
        let document: RegistryDocument<serde_json::Map<String, serde_json::Value>> =
            serde_json::from_str(source)?;
        let descriptors = document
            .portraits
            .into_iter()
            .map(|(key, value)| {
                serde_json::from_value::<DescriptorRecord>(value)
                    .map(|record| record.into_descriptor(key.as_str()))
                    .map_err(|e| RegistryError::InvalidDescriptor {
                        key,
                        reason: e.to_string(),
                    })
            })
            .collect::<Result<Vec<_>>>()?;

        Self::with_default_key(document.default_key, descriptors)
    }

    /// The portrait table bundled with the crate.
    pub fn builtin() -> Result<Self> {
        Self::from_toml_str(BUILTIN_REGISTRY)
    }

    /// Get a descriptor by key.
    pub fn get(&self, key: &str) -> Option<&AssetDescriptor> {
        self.by_key.get(key).map(|&i| &self.descriptors[i])
    }

    /// Check if a key exists.
    pub fn contains(&self, key: &str) -> bool {
        self.by_key.contains_key(key)
    }

    /// Key of the fallback portrait.
    pub fn default_key(&self) -> &AssetKey {
        &self.default_key
    }

    /// All descriptors in declaration order.
    pub fn descriptors(&self) -> &[AssetDescriptor] {
        &self.descriptors
    }

    /// Descriptors bound to a named identity, in declaration order.
    pub fn named(&self) -> impl Iterator<Item = &AssetDescriptor> {
        self.descriptors.iter().filter(|d| d.is_named())
    }

    /// Descriptors eligible for scored matching, in declaration order.
    pub fn generic_pool(&self) -> impl Iterator<Item = &AssetDescriptor> {
        self.descriptors.iter().filter(|d| !d.is_named())
    }

    /// Get the total number of descriptors.
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use demography::{Ethnicity, Gender};

    fn fixture() -> Vec<AssetDescriptor> {
        vec![
            AssetDescriptor::new("default"),
            AssetDescriptor::new("alchemist.png").with_identity_name("Antonius Philalethes"),
            AssetDescriptor::new("farmer.png")
                .with_gender(Gender::Male)
                .with_ethnicities([Ethnicity::Indio]),
        ]
    }

    #[test]
    fn test_new_registry() {
        let registry = AssetRegistry::new(fixture()).unwrap();

        assert_eq!(registry.len(), 3);
        assert_eq!(registry.default_key(), &AssetKey::from("default"));
        assert!(registry.contains("farmer.png"));
        assert_eq!(registry.get("farmer.png").unwrap().gender, Gender::Male);
        assert!(registry.get("missing.png").is_none());
    }

    #[test]
    fn test_partition() {
        let registry = AssetRegistry::new(fixture()).unwrap();

        let named: Vec<_> = registry.named().map(|d| d.key.as_str()).collect();
        let generic: Vec<_> = registry.generic_pool().map(|d| d.key.as_str()).collect();

        assert_eq!(named, vec!["alchemist.png"]);
        assert_eq!(generic, vec!["default", "farmer.png"]);
    }

    #[test]
    fn test_duplicate_key_rejected() {
        let mut descriptors = fixture();
        descriptors.push(AssetDescriptor::new("farmer.png"));

        let err = AssetRegistry::new(descriptors).unwrap_err();
        assert!(matches!(err, RegistryError::DuplicateKey(k) if k == "farmer.png"));
    }

    #[test]
    fn test_missing_default_rejected() {
        let err = AssetRegistry::new(vec![AssetDescriptor::new("farmer.png")]).unwrap_err();
        assert!(matches!(err, RegistryError::MissingDefault(k) if k == "default"));
    }

    #[test]
    fn test_empty_key_rejected() {
        let mut descriptors = fixture();
        descriptors.push(AssetDescriptor::new(""));
        assert!(matches!(
            AssetRegistry::new(descriptors),
            Err(RegistryError::EmptyKey)
        ));
    }

    #[test]
    fn test_custom_default_key() {
        let registry = AssetRegistry::with_default_key(
            "silhouette.png",
            vec![AssetDescriptor::new("silhouette.png")],
        )
        .unwrap();
        assert_eq!(registry.default_key().as_str(), "silhouette.png");
    }

    #[test]
    fn test_from_toml_preserves_order() {
        let registry = AssetRegistry::from_toml_str(
            r#"
            [portraits."zeta.png"]
            gender = "female"

            [portraits.default]

            [portraits."alpha.png"]
            identity_name = "Sor Juana"
            "#,
        )
        .unwrap();

        let keys: Vec<_> = registry.descriptors().iter().map(|d| d.key.as_str()).collect();
        assert_eq!(keys, vec!["zeta.png", "default", "alpha.png"]);
        assert!(registry.get("alpha.png").unwrap().is_named());
    }

    #[test]
    fn test_from_json() {
        let registry = AssetRegistry::from_json_str(
            r#"{
                "default_key": "fallback.png",
                "portraits": {
                    "nun.png": {"gender": "female", "social_classes": ["religious"]},
                    "fallback.png": {}
                }
            }"#,
        )
        .unwrap();

        assert_eq!(registry.default_key().as_str(), "fallback.png");
        assert_eq!(registry.descriptors()[0].key.as_str(), "nun.png");
    }

    #[test]
    fn test_invalid_category_names_descriptor() {
        let err = AssetRegistry::from_toml_str(
            r#"
            [portraits.default]
            [portraits."bad.png"]
            ethnicities = ["martian"]
            "#,
        )
        .unwrap_err();

        assert!(matches!(err, RegistryError::InvalidDescriptor { ref key, .. } if key == "bad.png"));
    }

    #[test]
    fn test_builtin_registry_loads() {
        let registry = AssetRegistry::builtin().unwrap();
        assert!(registry.contains(DEFAULT_ASSET_KEY));
        assert!(registry.named().count() > 0);
        assert!(registry.generic_pool().count() > 1);
    }
}

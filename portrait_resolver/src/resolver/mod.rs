//! Portrait resolution - picks one asset key for an entity.
//!
//! Resolution works as follows:
//! 1. **Cache**: Return the memoized key if this entity was resolved before
//! 2. **Normalization**: Reduce the entity's raw demographics to categories
//! 3. **Named identity**: Exact name match against named descriptors
//! 4. **Generic scoring**: Weighted comparison against the generic pool
//! 5. **Fallback**: The registry default when no candidate reaches the threshold
//! 6. **Memoization**: Store the key until the caller clears it

mod cache;
mod named;
mod scoring;

pub use cache::*;
pub use named::*;
pub use scoring::*;

use demography::{major_clusters, EthnicCluster, NormalizedProfile, Portrayable, ScenarioConfig};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, trace, warn};

use crate::error::ConfigError;
use crate::registry::{AssetKey, AssetRegistry};

/// Points awarded per matching criterion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    /// Gender matches exactly and both sides are known.
    pub gender_exact: i32,
    /// Asset gender is `unknown` or `group`.
    pub gender_generic_asset: i32,
    /// Entity gender is unknown.
    pub gender_unknown_profile: i32,
    pub age_exact: i32,
    pub age_mixed: i32,
    pub ethnicity_exact: i32,
    pub ethnicity_any: i32,
    pub social_class_exact: i32,
    pub social_class_any: i32,
    /// Occupation text matches an occupation tag.
    pub occupation: i32,
    /// Occupation text matches a descriptive tag.
    pub tag: i32,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            gender_exact: 50,
            gender_generic_asset: 10,
            gender_unknown_profile: 5,
            age_exact: 30,
            age_mixed: 5,
            ethnicity_exact: 20,
            ethnicity_any: 5,
            social_class_exact: 15,
            social_class_any: 3,
            occupation: 50,
            tag: 10,
        }
    }
}

/// Configuration for generic scoring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub weights: ScoringWeights,

    /// Minimum composite score for a generic match to be accepted.
    pub acceptance_threshold: i32,

    /// Subtracted when the entity's ethnic cluster and the asset share no member.
    pub cluster_penalty: i32,

    pub clusters: Vec<EthnicCluster>,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            weights: ScoringWeights::default(),
            acceptance_threshold: 30,
            cluster_penalty: 30,
            clusters: major_clusters(),
        }
    }
}

/// Complete resolver configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    pub scenario: ScenarioConfig,
    pub scoring: ScoringConfig,
}

impl ResolverConfig {
    /// Parse configuration from TOML. Missing sections and keys keep their defaults.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }
}

/// How a resolution was reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResolutionSource {
    /// Returned from the cache without rescoring.
    Cached,
    /// Exact identity name match.
    Named,
    /// Best generic candidate at or above the threshold.
    Generic { score: i32 },
    /// No candidate reached the threshold; `best_score` is `None` for an
    /// empty generic pool.
    Fallback { best_score: Option<i32> },
}

/// A resolved asset key and its provenance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub key: AssetKey,
    pub source: ResolutionSource,
}

/// The single entry point for portrait resolution.
///
/// Owns the per-entity cache. Calls for the same entity must be serialized by
/// the caller; `&mut self` enforces that within one resolver.
pub struct PortraitResolver {
    registry: Arc<AssetRegistry>,
    config: ResolverConfig,
    cache: ResolutionCache,
}

impl PortraitResolver {
    /// Create a resolver over the given registry with default configuration.
    pub fn new(registry: Arc<AssetRegistry>) -> Self {
        Self::with_config(registry, ResolverConfig::default())
    }

    /// Create a resolver with explicit configuration.
    pub fn with_config(registry: Arc<AssetRegistry>, config: ResolverConfig) -> Self {
        Self {
            registry,
            config,
            cache: ResolutionCache::new(),
        }
    }

    pub fn registry(&self) -> &AssetRegistry {
        &self.registry
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Resolve an entity to an asset key.
    ///
    /// Returns `None` only when no entity is given.
    pub fn resolve<E: Portrayable + ?Sized>(&mut self, entity: Option<&E>) -> Option<AssetKey> {
        self.resolve_detailed(entity).map(|resolution| resolution.key)
    }

    /// Resolve an entity and report how the key was chosen.
    pub fn resolve_detailed<E: Portrayable + ?Sized>(
        &mut self,
        entity: Option<&E>,
    ) -> Option<Resolution> {
        let Some(entity) = entity else {
            warn!("portrait requested for a missing entity");
            return None;
        };
        let id = entity.entity_id();

        if let Some(key) = self.cache.lookup(id) {
            debug!(entity = %id, key = %key, "portrait cache hit");
            return Some(Resolution {
                key: key.clone(),
                source: ResolutionSource::Cached,
            });
        }

        let resolution = self.compute(entity);
        self.cache.insert(id, resolution.key.clone());
        Some(resolution)
    }

    /// Forget the cached key for an entity so the next `resolve` recomputes it
    /// from the entity's current fields.
    pub fn clear_cache<E: Portrayable + ?Sized>(&mut self, entity: &E) {
        let id = entity.entity_id();
        if self.cache.remove(id).is_some() {
            trace!(entity = %id, "portrait cache entry cleared");
        }
    }

    /// Forget every cached key.
    pub fn clear_all(&mut self) {
        self.cache.clear();
    }

    /// Cached key for an entity, if any. Does not affect cache statistics.
    pub fn cached_key<E: Portrayable + ?Sized>(&self, entity: &E) -> Option<&AssetKey> {
        self.cache.peek(entity.entity_id())
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// Rank every generic candidate for an entity, best first.
    ///
    /// Bypasses the cache and ignores identity names.
    pub fn explain<E: Portrayable + ?Sized>(&self, entity: &E) -> Vec<ScoredCandidate<'_>> {
        let profile = NormalizedProfile::from_profile(&entity.demographics(), &self.config.scenario);
        rank(&self.registry, &profile, &self.config.scoring)
    }

    fn compute<E: Portrayable + ?Sized>(&self, entity: &E) -> Resolution {
        let id = entity.entity_id();
        let demographics = entity.demographics();

        if let Some(key) = resolve_named(&self.registry, demographics.identity_name.as_deref()) {
            debug!(entity = %id, key = %key, "portrait resolved by identity");
            return Resolution {
                key: key.clone(),
                source: ResolutionSource::Named,
            };
        }

        let profile = NormalizedProfile::from_profile(&demographics, &self.config.scenario);
        let scoring = &self.config.scoring;

        match best_generic_match(&self.registry, &profile, scoring) {
            Some(best) if best.score() >= scoring.acceptance_threshold => {
                debug!(entity = %id, key = %best.key(), score = best.score(), "portrait resolved by score");
                Resolution {
                    key: best.key().clone(),
                    source: ResolutionSource::Generic {
                        score: best.score(),
                    },
                }
            }
            best => {
                let best_score = best.map(|b| b.score());
                debug!(entity = %id, ?best_score, "no portrait reached the threshold, using default");
                Resolution {
                    key: self.registry.default_key().clone(),
                    source: ResolutionSource::Fallback { best_score },
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::AssetDescriptor;
    use demography::{AgeCategory, Character, Ethnicity, Gender, SocialClass};

    fn registry() -> Arc<AssetRegistry> {
        Arc::new(
            AssetRegistry::new(vec![
                AssetDescriptor::new("default"),
                AssetDescriptor::new("alchemist.png")
                    .with_identity_name("Antonius Philalethes")
                    .with_gender(Gender::Male)
                    .with_age(AgeCategory::Elderly),
                AssetDescriptor::new("laborer.png")
                    .with_gender(Gender::Male)
                    .with_age(AgeCategory::Adult)
                    .with_ethnicities([Ethnicity::Mestizo])
                    .with_social_classes([SocialClass::Common]),
                AssetDescriptor::new("noble.png")
                    .with_gender(Gender::Male)
                    .with_age(AgeCategory::Adult)
                    .with_ethnicities([Ethnicity::Mestizo, Ethnicity::Espanol])
                    .with_social_classes([SocialClass::Elite])
                    .with_tag("hidalgo"),
            ])
            .unwrap(),
        )
    }

    #[test]
    fn test_scoring_defaults() {
        let config = ScoringConfig::default();
        assert_eq!(config.weights.gender_exact, 50);
        assert_eq!(config.weights.social_class_any, 3);
        assert_eq!(config.acceptance_threshold, 30);
        assert_eq!(config.cluster_penalty, 30);
        assert_eq!(config.clusters.len(), 3);
    }

    #[test]
    fn test_config_from_toml() {
        let config = ResolverConfig::from_toml_str(
            r#"
            [scenario]
            default_ethnicity = "indio"

            [scoring]
            acceptance_threshold = 40

            [scoring.weights]
            occupation = 60
            "#,
        )
        .unwrap();

        assert_eq!(config.scenario.default_ethnicity, Ethnicity::Indio);
        assert_eq!(config.scoring.acceptance_threshold, 40);
        assert_eq!(config.scoring.cluster_penalty, 30);
        assert_eq!(config.scoring.weights.occupation, 60);
        assert_eq!(config.scoring.weights.tag, 10);
    }

    #[test]
    fn test_config_rejects_malformed_toml() {
        let err = ResolverConfig::from_toml_str("[scoring\n").unwrap_err();
        assert!(err.to_string().starts_with("invalid resolver config"));
    }

    #[test]
    fn test_missing_entity_returns_none() {
        let mut resolver = PortraitResolver::new(registry());
        assert_eq!(resolver.resolve::<Character>(None), None);
        assert_eq!(resolver.cache_stats(), CacheStats::default());
    }

    #[test]
    fn test_named_resolution_ignores_demographics() {
        let mut resolver = PortraitResolver::new(registry());
        let antonius = Character::new("antonius philalethes")
            .with_gender("female")
            .with_age(5);

        let resolution = resolver.resolve_detailed(Some(&antonius)).unwrap();
        assert_eq!(resolution.key.as_str(), "alchemist.png");
        assert_eq!(resolution.source, ResolutionSource::Named);
    }

    #[test]
    fn test_cached_key_survives_field_changes() {
        let mut resolver = PortraitResolver::new(registry());
        let mut entity = Character::new("Juan")
            .with_gender("male")
            .with_age(30)
            .with_ethnicity("mestizo")
            .with_social_class("common");

        let first = resolver.resolve(Some(&entity)).unwrap();
        assert_eq!(first.as_str(), "laborer.png");

        entity.social_class = Some("elite".to_string());
        let second = resolver.resolve_detailed(Some(&entity)).unwrap();
        assert_eq!(second.key, first);
        assert_eq!(second.source, ResolutionSource::Cached);

        resolver.clear_cache(&entity);
        assert!(resolver.cached_key(&entity).is_none());
        let third = resolver.resolve(Some(&entity)).unwrap();
        assert_eq!(third.as_str(), "noble.png");
    }

    #[test]
    fn test_fallback_reports_best_score() {
        let mut resolver = PortraitResolver::new(registry());
        let child = Character::new("Ana")
            .with_gender("female")
            .with_age(8)
            .with_ethnicity("indio");

        let resolution = resolver.resolve_detailed(Some(&child)).unwrap();
        assert_eq!(resolution.key.as_str(), "default");
        assert!(matches!(
            resolution.source,
            ResolutionSource::Fallback { best_score: Some(s) } if s < 30
        ));
    }

    #[test]
    fn test_clear_all_and_stats() {
        let mut resolver = PortraitResolver::new(registry());
        let a = Character::new("A").with_gender("male");
        let b = Character::new("B").with_gender("female");

        resolver.resolve(Some(&a));
        resolver.resolve(Some(&a));
        resolver.resolve(Some(&b));

        let stats = resolver.cache_stats();
        assert_eq!(stats.entries, 2);
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 2);

        resolver.clear_all();
        assert_eq!(resolver.cache_stats().entries, 0);
    }

    #[test]
    fn test_explain_excludes_named() {
        let resolver = PortraitResolver::new(registry());
        let entity = Character::new("Antonius Philalethes").with_gender("male");

        let ranked = resolver.explain(&entity);
        assert_eq!(ranked.len(), 3);
        assert!(ranked.iter().all(|c| !c.descriptor.is_named()));
        assert!(ranked.windows(2).all(|w| w[0].score() >= w[1].score()));
    }
}

//! Generic scoring: weighted multi-criterion comparison of a normalized
//! profile against every descriptor in the generic pool.

use demography::{canonical_token, NormalizedProfile};
use serde::Serialize;

use super::ScoringConfig;
use crate::registry::{AssetDescriptor, AssetKey, AssetRegistry};

/// Per-criterion contributions to a composite score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ScoreBreakdown {
    pub gender: i32,
    pub age: i32,
    pub ethnicity: i32,
    /// Zero, or the negated cluster penalty.
    pub cluster_penalty: i32,
    pub social_class: i32,
    pub occupation: i32,
    pub tag: i32,
}

impl ScoreBreakdown {
    /// The composite score.
    pub fn total(&self) -> i32 {
        self.gender
            + self.age
            + self.ethnicity
            + self.cluster_penalty
            + self.social_class
            + self.occupation
            + self.tag
    }
}

/// A generic descriptor together with how it scored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoredCandidate<'a> {
    pub descriptor: &'a AssetDescriptor,
    pub breakdown: ScoreBreakdown,
}

impl ScoredCandidate<'_> {
    pub fn key(&self) -> &AssetKey {
        &self.descriptor.key
    }

    pub fn score(&self) -> i32 {
        self.breakdown.total()
    }
}

/// Substring match in either direction, after both sides are reduced to the
/// same canonical token form. Blank tags never match.
fn text_matches(occupation: &str, tags: &[String]) -> bool {
    let occupation = canonical_token(occupation);
    let occupation = occupation.as_str();
    tags.iter().any(|tag| {
        let tag = canonical_token(tag);
        !tag.is_empty() && (tag.contains(occupation) || occupation.contains(tag.as_str()))
    })
}

/// Score one descriptor against a profile.
///
/// Each criterion contributes independently; within a criterion only the
/// strongest applicable rule counts.
pub fn score_descriptor(
    profile: &NormalizedProfile,
    descriptor: &AssetDescriptor,
    config: &ScoringConfig,
) -> ScoreBreakdown {
    let weights = &config.weights;
    let mut breakdown = ScoreBreakdown::default();

    breakdown.gender = if profile.gender.is_known() && descriptor.gender == profile.gender {
        weights.gender_exact
    } else if !descriptor.gender.is_known() {
        weights.gender_generic_asset
    } else if !profile.gender.is_known() {
        weights.gender_unknown_profile
    } else {
        0
    };

    breakdown.age = match descriptor.age.category() {
        Some(age) if age == profile.age => weights.age_exact,
        Some(_) => 0,
        None => weights.age_mixed,
    };

    breakdown.ethnicity = if descriptor.ethnicities.contains(&profile.ethnicity) {
        weights.ethnicity_exact
    } else if descriptor.ethnicities.is_any() {
        weights.ethnicity_any
    } else {
        0
    };

    // Wildcard portraits fit every cluster.
    if !descriptor.ethnicities.is_any() {
        let incongruent = config.clusters.iter().any(|cluster| {
            cluster.contains(profile.ethnicity)
                && !cluster.overlaps(descriptor.ethnicities.members())
        });
        if incongruent {
            breakdown.cluster_penalty = -config.cluster_penalty;
        }
    }

    breakdown.social_class = if descriptor.social_classes.contains(&profile.social_class) {
        weights.social_class_exact
    } else if descriptor.social_classes.is_any() {
        weights.social_class_any
    } else {
        0
    };

    if profile.has_occupation() {
        if text_matches(&profile.occupation, &descriptor.occupations) {
            breakdown.occupation = weights.occupation;
        }
        if text_matches(&profile.occupation, &descriptor.tags) {
            breakdown.tag = weights.tag;
        }
    }

    breakdown
}

/// Score every generic candidate, best first.
///
/// The sort is stable, so equal scores keep registry declaration order.
pub fn rank<'a>(
    registry: &'a AssetRegistry,
    profile: &NormalizedProfile,
    config: &ScoringConfig,
) -> Vec<ScoredCandidate<'a>> {
    let mut candidates: Vec<_> = registry
        .generic_pool()
        .map(|descriptor| ScoredCandidate {
            descriptor,
            breakdown: score_descriptor(profile, descriptor, config),
        })
        .collect();

    candidates.sort_by(|a, b| b.score().cmp(&a.score()));
    candidates
}

/// The highest-scoring generic candidate; the first declared wins ties.
///
/// Returns `None` only when the generic pool is empty.
pub fn best_generic_match<'a>(
    registry: &'a AssetRegistry,
    profile: &NormalizedProfile,
    config: &ScoringConfig,
) -> Option<ScoredCandidate<'a>> {
    rank(registry, profile, config).into_iter().next()
}

/// Resolve a profile to a generic portrait, or the registry default when no
/// candidate reaches the acceptance threshold. Never fails.
pub fn resolve_generic<'a>(
    registry: &'a AssetRegistry,
    profile: &NormalizedProfile,
    config: &ScoringConfig,
) -> &'a AssetKey {
    match best_generic_match(registry, profile, config) {
        Some(best) if best.score() >= config.acceptance_threshold => &best.descriptor.key,
        _ => registry.default_key(),
    }
}

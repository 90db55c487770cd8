//! Resolution cache - per-entity memo of the last resolved portrait.

use demography::EntityId;
use serde::Serialize;
use std::collections::HashMap;

use crate::registry::AssetKey;

/// Hit/miss counters and current size of a [`ResolutionCache`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct CacheStats {
    pub entries: usize,
    pub hits: u64,
    pub misses: u64,
}

/// Side table from entity identity to resolved asset key.
///
/// Entries never expire on their own; they are dropped only by an explicit
/// `remove` or `clear`.
#[derive(Debug, Clone, Default)]
pub struct ResolutionCache {
    entries: HashMap<EntityId, AssetKey>,
    hits: u64,
    misses: u64,
}

impl ResolutionCache {
    /// Create a new empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up an entity, counting the hit or miss.
    pub fn lookup(&mut self, id: EntityId) -> Option<&AssetKey> {
        match self.entries.get(&id) {
            Some(key) => {
                self.hits += 1;
                Some(key)
            }
            None => {
                self.misses += 1;
                None
            }
        }
    }

    /// Look up an entity without touching the counters.
    pub fn peek(&self, id: EntityId) -> Option<&AssetKey> {
        self.entries.get(&id)
    }

    /// Store the resolved key for an entity, replacing any previous entry.
    pub fn insert(&mut self, id: EntityId, key: AssetKey) {
        self.entries.insert(id, key);
    }

    /// Forget an entity. Returns the evicted key, if there was one.
    pub fn remove(&mut self, id: EntityId) -> Option<AssetKey> {
        self.entries.remove(&id)
    }

    /// Forget every entity. Counters are kept.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            entries: self.entries.len(),
            hits: self.hits,
            misses: self.misses,
        }
    }
}

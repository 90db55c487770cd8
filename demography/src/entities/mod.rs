//! Entities that can be portrayed: identifiers, raw demographics and the
//! `Portrayable` seam consumed by the resolver.

mod character;
mod patient;
mod profile;

pub use character::*;
pub use patient::*;
pub use profile::*;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for every portrayable entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityId(pub Uuid);

impl EntityId {
    /// Create a new random entity ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create an entity ID from a specific UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Create a nil/empty entity ID (useful for defaults).
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }
}

impl Default for EntityId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Anything the resolver can pick a portrait for.
///
/// Implementors expose a stable identity and their raw demographic fields,
/// either held directly or gathered from nested records.
pub trait Portrayable {
    fn entity_id(&self) -> EntityId;

    fn demographics(&self) -> DemographicProfile;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_ids_are_unique() {
        assert_ne!(EntityId::new(), EntityId::new());
    }

    #[test]
    fn test_entity_id_from_uuid() {
        let uuid = Uuid::new_v4();
        assert_eq!(EntityId::from_uuid(uuid).0, uuid);
        assert_eq!(EntityId::nil().to_string(), Uuid::nil().to_string());
    }
}

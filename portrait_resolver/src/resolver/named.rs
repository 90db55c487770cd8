//! Named-identity resolution: exact, case- and punctuation-insensitive
//! matching of an entity's name against descriptors that declare an identity.

use crate::registry::{AssetKey, AssetRegistry};

/// Reduce a name to its comparable form: punctuation dropped, lowercase
/// words separated by single spaces.
///
/// `"Antonius  Philalethes!"` and `"antonius philalethes"` compare equal, as
/// do `"Maria O'Brien"` and `"maria obrien"`.
pub fn identity_key(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace())
        .collect::<String>()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Find the first descriptor whose identity name matches `identity_name`.
///
/// Returns `None` when no name is given, the name is blank after
/// normalization, or no descriptor declares that identity.
pub fn resolve_named<'a>(
    registry: &'a AssetRegistry,
    identity_name: Option<&str>,
) -> Option<&'a AssetKey> {
    let wanted = identity_key(identity_name?);
    if wanted.is_empty() {
        return None;
    }

    registry
        .named()
        .find(|descriptor| {
            descriptor
                .identity_name
                .as_deref()
                .map(identity_key)
                .is_some_and(|name| name == wanted)
        })
        .map(|descriptor| &descriptor.key)
}

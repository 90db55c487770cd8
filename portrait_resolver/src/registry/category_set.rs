//! Category sets on asset descriptors.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::Display;
use std::str::FromStr;

/// Wildcard entry matching every category.
pub const ANY: &str = "any";

/// The categories an asset applies to, optionally including the `any` wildcard.
///
/// Written in data files as a list of canonical names, e.g.
/// `["español", "criollo"]` or `["any"]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySet<T> {
    any: bool,
    members: Vec<T>,
}

impl<T> Default for CategorySet<T> {
    fn default() -> Self {
        Self::any()
    }
}

impl<T> CategorySet<T> {
    /// A set holding only the wildcard.
    pub fn any() -> Self {
        Self {
            any: true,
            members: Vec::new(),
        }
    }

    /// Whether the set contains the `any` wildcard.
    pub fn is_any(&self) -> bool {
        self.any
    }

    /// Explicit (non-wildcard) members.
    pub fn members(&self) -> &[T] {
        &self.members
    }
}

impl<T: PartialEq> CategorySet<T> {
    /// A set of explicit members, without the wildcard.
    pub fn of(members: impl IntoIterator<Item = T>) -> Self {
        let mut set = Self {
            any: false,
            members: Vec::new(),
        };
        for member in members {
            set.insert(member);
        }
        set
    }

    /// Add a member; duplicates are ignored.
    pub fn insert(&mut self, member: T) {
        if !self.members.contains(&member) {
            self.members.push(member);
        }
    }

    /// Whether the category is an explicit member. The wildcard is not consulted.
    pub fn contains(&self, member: &T) -> bool {
        self.members.contains(member)
    }
}

impl<T> FromIterator<T> for CategorySet<T>
where
    T: PartialEq,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::of(iter)
    }
}

impl<T> CategorySet<T>
where
    T: FromStr + PartialEq,
    T::Err: Display,
{
    /// Parse a list of canonical names, where `any` sets the wildcard.
    pub fn parse<S: AsRef<str>>(names: &[S]) -> Result<Self, T::Err> {
        let mut set = Self::of(Vec::new());
        for name in names {
            let name = name.as_ref();
            if name.trim().eq_ignore_ascii_case(ANY) {
                set.any = true;
            } else {
                set.insert(name.parse()?);
            }
        }
        Ok(set)
    }
}

impl<'de, T> Deserialize<'de> for CategorySet<T>
where
    T: FromStr + PartialEq,
    T::Err: Display,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let names = Vec::<String>::deserialize(deserializer)?;
        Self::parse(&names).map_err(D::Error::custom)
    }
}

impl<T: Display> Serialize for CategorySet<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut names: Vec<String> = Vec::with_capacity(self.members.len() + 1);
        if self.any {
            names.push(ANY.to_string());
        }
        names.extend(self.members.iter().map(|m| m.to_string()));
        names.serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use demography::{Ethnicity, SocialClass};

    #[test]
    fn test_any_set() {
        let set = CategorySet::<Ethnicity>::any();
        assert!(set.is_any());
        assert!(!set.contains(&Ethnicity::Indio));
        assert!(set.members().is_empty());
    }

    #[test]
    fn test_explicit_set() {
        let set = CategorySet::of([Ethnicity::Espanol, Ethnicity::Criollo, Ethnicity::Espanol]);
        assert!(!set.is_any());
        assert!(set.contains(&Ethnicity::Criollo));
        assert!(!set.contains(&Ethnicity::Indio));
        assert_eq!(set.members().len(), 2);
    }

    #[test]
    fn test_parse_with_wildcard() {
        let set = CategorySet::<SocialClass>::parse(&["ANY", "elite"]).unwrap();
        assert!(set.is_any());
        assert!(set.contains(&SocialClass::Elite));
    }

    #[test]
    fn test_parse_rejects_unknown_names() {
        let err = CategorySet::<SocialClass>::parse(&["nobility"]).unwrap_err();
        assert!(err.to_string().contains("nobility"));
    }

    #[test]
    fn test_serde_shape() {
        let set: CategorySet<Ethnicity> = serde_json::from_str(r#"["español", "mestizo"]"#).unwrap();
        assert!(set.contains(&Ethnicity::Espanol));
        assert_eq!(serde_json::to_string(&set).unwrap(), r#"["español","mestizo"]"#);

        let any: CategorySet<Ethnicity> = serde_json::from_str(r#"["any"]"#).unwrap();
        assert_eq!(serde_json::to_string(&any).unwrap(), r#"["any"]"#);
    }
}

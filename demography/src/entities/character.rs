//! Character definitions.

use serde::{Deserialize, Serialize};

use super::{AgeInput, DemographicProfile, EntityId, Portrayable};

/// A narrative character whose demographic fields are held directly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Character {
    pub id: EntityId,
    pub name: String,
    pub title: Option<String>,

    pub gender: Option<String>,
    pub age: Option<AgeInput>,
    pub ethnicity: Option<String>,
    pub social_class: Option<String>,
    pub occupation: Option<String>,
}

impl Character {
    /// Create a new character with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: EntityId::new(),
            name: name.into(),
            title: None,
            gender: None,
            age: None,
            ethnicity: None,
            social_class: None,
            occupation: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_gender(mut self, gender: impl Into<String>) -> Self {
        self.gender = Some(gender.into());
        self
    }

    pub fn with_age(mut self, age: impl Into<AgeInput>) -> Self {
        self.age = Some(age.into());
        self
    }

    pub fn with_ethnicity(mut self, ethnicity: impl Into<String>) -> Self {
        self.ethnicity = Some(ethnicity.into());
        self
    }

    pub fn with_social_class(mut self, social_class: impl Into<String>) -> Self {
        self.social_class = Some(social_class.into());
        self
    }

    pub fn with_occupation(mut self, occupation: impl Into<String>) -> Self {
        self.occupation = Some(occupation.into());
        self
    }
}

impl Portrayable for Character {
    fn entity_id(&self) -> EntityId {
        self.id
    }

    fn demographics(&self) -> DemographicProfile {
        DemographicProfile {
            identity_name: Some(self.name.clone()).filter(|n| !n.trim().is_empty()),
            gender: self.gender.clone(),
            age: self.age.clone(),
            ethnicity: self.ethnicity.clone(),
            social_class: self.social_class.clone(),
            occupation: self.occupation.clone(),
        }
    }
}

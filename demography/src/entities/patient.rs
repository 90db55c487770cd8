//! Patient records, which keep their demographics in a nested record.

use serde::{Deserialize, Serialize};

use super::{DemographicProfile, EntityId, Portrayable};

/// A patient visiting the shop, as recorded in the case book.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Patient {
    #[serde(default)]
    pub id: EntityId,
    pub name: Option<String>,
    #[serde(default)]
    pub demographics: DemographicProfile,
    pub complaint: Option<String>,
}

impl Patient {
    /// Create an anonymous patient with the given demographics.
    pub fn new(demographics: DemographicProfile) -> Self {
        Self {
            id: EntityId::new(),
            name: None,
            demographics,
            complaint: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_complaint(mut self, complaint: impl Into<String>) -> Self {
        self.complaint = Some(complaint.into());
        self
    }
}

impl Portrayable for Patient {
    fn entity_id(&self) -> EntityId {
        self.id
    }

    /// The nested record wins; the top-level name fills a missing identity.
    fn demographics(&self) -> DemographicProfile {
        let mut profile = self.demographics.clone();
        if profile.identity_name.is_none() {
            profile.identity_name = self.name.clone();
        }
        profile
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_demographics() {
        let patient = Patient::new(DemographicProfile::new().with_gender("female").with_age(8))
            .with_complaint("fever");

        let profile = patient.demographics();
        assert_eq!(profile.gender.as_deref(), Some("female"));
        assert!(profile.identity_name.is_none());
        assert_eq!(patient.complaint.as_deref(), Some("fever"));
    }

    #[test]
    fn test_name_fills_missing_identity() {
        let patient = Patient::new(DemographicProfile::new()).with_name("Isabel de Arellano");
        assert_eq!(
            patient.demographics().identity_name.as_deref(),
            Some("Isabel de Arellano")
        );

        let explicit = Patient::new(DemographicProfile::new().with_identity_name("Sor Juana"))
            .with_name("Juana Inés");
        assert_eq!(explicit.demographics().identity_name.as_deref(), Some("Sor Juana"));
    }

    #[test]
    fn test_patient_from_json_record() {
        let patient: Patient = serde_json::from_str(
            r#"{
                "name": null,
                "demographics": {"gender": "male", "age": "old"},
                "complaint": "gout"
            }"#,
        )
        .unwrap();

        assert_eq!(patient.demographics.gender.as_deref(), Some("male"));
        assert_eq!(patient.complaint.as_deref(), Some("gout"));
    }
}

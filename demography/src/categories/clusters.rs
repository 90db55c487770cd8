//! Major ethnic clusters, used only to penalize visually incongruent matches.

use serde::{Deserialize, Serialize};

use super::Ethnicity;

/// A named group of ethnic categories that read as visually related.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EthnicCluster {
    pub name: String,
    pub members: Vec<Ethnicity>,
}

impl EthnicCluster {
    /// Create a new cluster.
    pub fn new(name: impl Into<String>, members: impl IntoIterator<Item = Ethnicity>) -> Self {
        Self {
            name: name.into(),
            members: members.into_iter().collect(),
        }
    }

    /// Check if an ethnicity belongs to this cluster.
    pub fn contains(&self, ethnicity: Ethnicity) -> bool {
        self.members.contains(&ethnicity)
    }

    /// Check if any of the given ethnicities belongs to this cluster.
    pub fn overlaps<'a>(&self, ethnicities: impl IntoIterator<Item = &'a Ethnicity>) -> bool {
        ethnicities.into_iter().any(|e| self.contains(*e))
    }
}

/// The three major clusters: Iberian-descent, African-descent and Indigenous.
///
/// Mestizo and chino belong to no cluster and are never penalized.
pub fn major_clusters() -> Vec<EthnicCluster> {
    vec![
        EthnicCluster::new(
            "iberian",
            [Ethnicity::Espanol, Ethnicity::Criollo, Ethnicity::Castizo],
        ),
        EthnicCluster::new("african", [Ethnicity::Africano, Ethnicity::Mulato]),
        EthnicCluster::new("indigenous", [Ethnicity::Indio]),
    ]
}

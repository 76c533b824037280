//! Plant-type enumeration.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::collate;

/// Type-safe enumeration of the plant types a garden project can grow.
///
/// The wire representation is the Portuguese label shown to users, accents
/// included (`"Pimentão"`, `"Ora-pró-nobis"`).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum PlantType {
    #[serde(rename = "Alface")]
    Alface,
    #[serde(rename = "Tomate")]
    Tomate,
    #[serde(rename = "Pimentão")]
    Pimentao,
    #[serde(rename = "Hortelã")]
    Hortela,
    #[serde(rename = "Ora-pró-nobis")]
    OraProNobis,
    #[serde(rename = "Cenoura")]
    Cenoura,
    #[serde(rename = "Brócolis")]
    Brocolis,
}

impl PlantType {
    /// Every plant type, in catalogue order.
    pub const ALL: [PlantType; 7] = [
        PlantType::Alface,
        PlantType::Tomate,
        PlantType::Pimentao,
        PlantType::Hortela,
        PlantType::OraProNobis,
        PlantType::Cenoura,
        PlantType::Brocolis,
    ];

    /// Display and wire label.
    pub fn as_str(&self) -> &'static str {
        match self {
            PlantType::Alface => "Alface",
            PlantType::Tomate => "Tomate",
            PlantType::Pimentao => "Pimentão",
            PlantType::Hortela => "Hortelã",
            PlantType::OraProNobis => "Ora-pró-nobis",
            PlantType::Cenoura => "Cenoura",
            PlantType::Brocolis => "Brócolis",
        }
    }
}

impl FromStr for PlantType {
    type Err = String;

    /// Parses a label leniently: case and accents are ignored, so both
    /// `"Pimentão"` and `"pimentao"` are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let folded = collate::fold(s.trim());
        PlantType::ALL
            .into_iter()
            .find(|plant| collate::fold(plant.as_str()) == folded)
            .ok_or_else(|| format!("Invalid plant type: {s}"))
    }
}

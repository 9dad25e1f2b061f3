//! Symptoms, age groups and per-disease symptom weights

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::OutbreakError;
use crate::models::Disease;

/// A self-reported symptom
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Symptom {
    Fever,
    #[serde(rename = "Severe Diarrhea")]
    SevereDiarrhea,
    #[serde(rename = "Watery Stool")]
    WateryStool,
    Vomiting,
    #[serde(rename = "Abdominal Pain")]
    AbdominalPain,
    Headache,
    Nausea,
    Dehydration,
    Weakness,
    #[serde(rename = "Rapid Heartbeat")]
    RapidHeartbeat,
    Constipation,
    #[serde(rename = "Loss of Appetite")]
    LossOfAppetite,
    #[serde(rename = "Muscle Aches")]
    MuscleAches,
    #[serde(rename = "Rose Spots (rash)")]
    RoseSpots,
}

impl Symptom {
    pub const ALL: [Self; 14] = [
        Self::Fever,
        Self::SevereDiarrhea,
        Self::WateryStool,
        Self::Vomiting,
        Self::AbdominalPain,
        Self::Headache,
        Self::Nausea,
        Self::Dehydration,
        Self::Weakness,
        Self::RapidHeartbeat,
        Self::Constipation,
        Self::LossOfAppetite,
        Self::MuscleAches,
        Self::RoseSpots,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Fever => "Fever",
            Self::SevereDiarrhea => "Severe Diarrhea",
            Self::WateryStool => "Watery Stool",
            Self::Vomiting => "Vomiting",
            Self::AbdominalPain => "Abdominal Pain",
            Self::Headache => "Headache",
            Self::Nausea => "Nausea",
            Self::Dehydration => "Dehydration",
            Self::Weakness => "Weakness",
            Self::RapidHeartbeat => "Rapid Heartbeat",
            Self::Constipation => "Constipation",
            Self::LossOfAppetite => "Loss of Appetite",
            Self::MuscleAches => "Muscle Aches",
            Self::RoseSpots => "Rose Spots (rash)",
        }
    }

    /// Weight of this symptom for the given disease
    #[must_use]
    pub fn weight(self, disease: Disease) -> u8 {
        symptom_weight(self, disease)
    }
}

impl fmt::Display for Symptom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Symptom {
    type Err = OutbreakError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|symptom| symptom.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| OutbreakError::UnknownSymptom(s.to_string()))
    }
}

/// Age band of the reporting person
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgeGroup {
    #[serde(rename = "0-5")]
    UpTo5,
    #[serde(rename = "6-12")]
    From6To12,
    #[serde(rename = "13-17")]
    From13To17,
    #[serde(rename = "18-35")]
    From18To35,
    #[serde(rename = "36-50")]
    From36To50,
    #[serde(rename = "51+")]
    Over50,
}

impl AgeGroup {
    pub const ALL: [Self; 6] = [
        Self::UpTo5,
        Self::From6To12,
        Self::From13To17,
        Self::From18To35,
        Self::From36To50,
        Self::Over50,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::UpTo5 => "0-5",
            Self::From6To12 => "6-12",
            Self::From13To17 => "13-17",
            Self::From18To35 => "18-35",
            Self::From36To50 => "36-50",
            Self::Over50 => "51+",
        }
    }
}

impl FromStr for AgeGroup {
    type Err = OutbreakError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|group| group.label() == trimmed)
            .ok_or_else(|| OutbreakError::UnknownAgeGroup(s.to_string()))
    }
}

/// Symptom weights for typhoid (0-3)
pub const TYPHOID_WEIGHTS: &[(Symptom, u8)] = &[
    (Symptom::Fever, 3),
    (Symptom::SevereDiarrhea, 0),
    (Symptom::WateryStool, 0),
    (Symptom::Vomiting, 1),
    (Symptom::AbdominalPain, 2),
    (Symptom::Headache, 2),
    (Symptom::Nausea, 1),
    (Symptom::Dehydration, 1),
    (Symptom::Weakness, 2),
    (Symptom::RapidHeartbeat, 0),
    (Symptom::Constipation, 2),
    (Symptom::LossOfAppetite, 1),
    (Symptom::MuscleAches, 1),
    (Symptom::RoseSpots, 3),
];

/// Symptom weights for cholera (0-3)
pub const CHOLERA_WEIGHTS: &[(Symptom, u8)] = &[
    (Symptom::Fever, 0),
    (Symptom::SevereDiarrhea, 3),
    (Symptom::WateryStool, 3),
    (Symptom::Vomiting, 2),
    (Symptom::AbdominalPain, 1),
    (Symptom::Headache, 0),
    (Symptom::Nausea, 1),
    (Symptom::Dehydration, 3),
    (Symptom::Weakness, 1),
    (Symptom::RapidHeartbeat, 2),
    (Symptom::Constipation, 0),
    (Symptom::LossOfAppetite, 1),
    (Symptom::MuscleAches, 0),
    (Symptom::RoseSpots, 0),
];

/// Look up the weight of a symptom for a disease.
///
/// Symptoms missing from the disease's table weigh 0.
#[must_use]
pub fn symptom_weight(symptom: Symptom, disease: Disease) -> u8 {
    let table = match disease {
        Disease::Typhoid => TYPHOID_WEIGHTS,
        Disease::Cholera => CHOLERA_WEIGHTS,
    };

    table
        .iter()
        .find(|(listed, _)| *listed == symptom)
        .map_or(0, |(_, weight)| *weight)
}

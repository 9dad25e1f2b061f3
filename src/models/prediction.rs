//! Prediction outputs and the cached snapshot

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::algorithm::prediction::risk_level::HIGH_RISK_THRESHOLD;
use crate::models::Disease;
use crate::reference::Region;

/// Outbreak probabilities for one region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionalPrediction {
    pub region: Region,
    /// Typhoid probability, 0-100
    #[serde(rename = "typhoid")]
    pub typhoid_probability: u8,
    /// Cholera probability, 0-100
    #[serde(rename = "cholera")]
    pub cholera_probability: u8,
}

impl RegionalPrediction {
    #[must_use]
    pub const fn probability(&self, disease: Disease) -> u8 {
        match disease {
            Disease::Typhoid => self.typhoid_probability,
            Disease::Cholera => self.cholera_probability,
        }
    }

    /// Whether either disease is at high risk
    #[must_use]
    pub const fn is_high_risk(&self) -> bool {
        self.typhoid_probability >= HIGH_RISK_THRESHOLD
            || self.cholera_probability >= HIGH_RISK_THRESHOLD
    }
}

/// The single persisted set of predictions, replaced wholesale on every recompute
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionSnapshot {
    pub last_updated: DateTime<Utc>,
    pub regions: Vec<RegionalPrediction>,
}

impl PredictionSnapshot {
    #[must_use]
    pub fn get(&self, region: Region) -> Option<&RegionalPrediction> {
        self.regions.iter().find(|p| p.region == region)
    }

    /// Number of regions where either disease is at high risk
    #[must_use]
    pub fn high_risk_region_count(&self) -> usize {
        self.regions.iter().filter(|p| p.is_high_risk()).count()
    }

    /// Whether every region appears exactly once
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.regions.len() == Region::ALL.len()
            && Region::ALL
                .iter()
                .all(|region| self.regions.iter().filter(|p| p.region == *region).count() == 1)
    }
}

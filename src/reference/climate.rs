//! Climate baselines

use serde::{Deserialize, Serialize};

/// Proximity of a region's population to open water bodies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WaterBodyProximity {
    #[serde(rename = "very high")]
    VeryHigh,
    #[serde(rename = "high")]
    High,
    #[serde(rename = "medium")]
    Medium,
    #[serde(rename = "low")]
    Low,
}

/// Static climate profile of a region
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClimateProfile {
    /// Annual rainfall in mm
    pub annual_rainfall: f64,
    /// Average temperature in degrees Celsius
    pub avg_temperature: f64,
    /// Proximity to water bodies
    pub water_bodies: WaterBodyProximity,
}

impl ClimateProfile {
    #[must_use]
    pub const fn new(
        annual_rainfall: f64,
        avg_temperature: f64,
        water_bodies: WaterBodyProximity,
    ) -> Self {
        Self {
            annual_rainfall,
            avg_temperature,
            water_bodies,
        }
    }
}

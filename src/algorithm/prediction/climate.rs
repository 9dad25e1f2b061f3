//! Climate factor
//!
//! Cholera tracks rainfall and open water; typhoid tracks heat. Both get a
//! bonus for proximity to water bodies.

use crate::models::Disease;
use crate::reference::{ClimateProfile, Region, WaterBodyProximity};

/// Rainfall (mm/year) that yields the full cholera rainfall contribution
const CHOLERA_RAINFALL_REFERENCE: f64 = 2000.0;
/// Cholera points at the reference rainfall
const CHOLERA_RAINFALL_POINTS: f64 = 20.0;
/// Temperature (°C) that yields the full typhoid temperature contribution
const TYPHOID_TEMPERATURE_REFERENCE: f64 = 30.0;
/// Typhoid points at the reference temperature
const TYPHOID_TEMPERATURE_POINTS: f64 = 15.0;

/// Water-proximity bonus for a disease
#[must_use]
pub const fn water_body_bonus(proximity: WaterBodyProximity, disease: Disease) -> f64 {
    match (disease, proximity) {
        (Disease::Cholera, WaterBodyProximity::VeryHigh) => 15.0,
        (Disease::Cholera, WaterBodyProximity::High) => 10.0,
        (Disease::Cholera, WaterBodyProximity::Medium) => 5.0,
        (Disease::Typhoid, WaterBodyProximity::VeryHigh | WaterBodyProximity::High) => 8.0,
        (Disease::Typhoid, WaterBodyProximity::Medium) => 4.0,
        (_, WaterBodyProximity::Low) => 0.0,
    }
}

/// Climate factor for a climate profile. Not clamped.
#[must_use]
pub fn climate_factor_for_profile(climate: &ClimateProfile, disease: Disease) -> f64 {
    let base = match disease {
        Disease::Cholera => {
            (climate.annual_rainfall / CHOLERA_RAINFALL_REFERENCE) * CHOLERA_RAINFALL_POINTS
        }
        Disease::Typhoid => {
            (climate.avg_temperature / TYPHOID_TEMPERATURE_REFERENCE) * TYPHOID_TEMPERATURE_POINTS
        }
    };

    base + water_body_bonus(climate.water_bodies, disease)
}

/// Climate factor for a region's static climate profile
#[must_use]
pub fn climate_factor(region: Region, disease: Disease) -> f64 {
    climate_factor_for_profile(&region.climate(), disease)
}

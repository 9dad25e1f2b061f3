//! Static reference data
//!
//! Per-region population and climate baselines, and the per-symptom disease
//! weights used by the symptom score. These tables never change at runtime.

pub mod climate;
pub mod regions;
pub mod symptoms;

pub use climate::{ClimateProfile, WaterBodyProximity};
pub use regions::Region;
pub use symptoms::{AgeGroup, CHOLERA_WEIGHTS, Symptom, TYPHOID_WEIGHTS, symptom_weight};

//! Outbreak prediction
//!
//! Converts raw symptom reports, climate baselines and historical case data
//! into a 0-100 outbreak probability per region and disease.
//!
//! The four factor calculators are independent pure functions:
//!
//! - [`symptom_score`]: severity-scaled sum of per-symptom disease weights
//! - [`climate_factor`]: static rainfall/temperature/water-proximity prior
//! - [`historical_risk`]: capped contribution from past confirmed cases
//! - [`trend`]: binary momentum from two consecutive report windows
//!
//! [`probability::PredictionEngine`] combines them into a bounded integer and
//! [`cache::PredictionCache`] recomputes and persists the snapshot of every
//! region. The scoring weights below are fixed design constants.

pub mod cache;
pub mod climate;
pub mod historical;
pub mod probability;
pub mod risk_level;
pub mod symptom_score;
pub mod trend;

pub use cache::PredictionCache;
pub use climate::{climate_factor, climate_factor_for_profile};
pub use historical::{historical_risk, historical_risk_from_records};
pub use probability::{PredictionEngine, RiskFactors, to_probability};
pub use risk_level::{RiskInfo, RiskLevel, risk_info, risk_level};
pub use symptom_score::symptom_score;
pub use trend::{Trend, trend_from_reports};

/// Weight of reports per 100k population
pub const SYMPTOM_DENSITY_WEIGHT: f64 = 0.35;
/// Weight of the mean disease-specific symptom score
pub const DISEASE_SCORE_WEIGHT: f64 = 0.25;
/// Weight of the climate factor
pub const CLIMATE_WEIGHT: f64 = 0.20;
/// Weight of the historical risk factor
pub const HISTORICAL_WEIGHT: f64 = 0.10;
/// Multiplier applied to the trend signal
pub const TREND_WEIGHT: f64 = 5.0;

/// Population unit for symptom density
pub const DENSITY_POPULATION_UNIT: f64 = 100_000.0;

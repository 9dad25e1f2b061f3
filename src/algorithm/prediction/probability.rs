//! Outbreak probability aggregation
//!
//! With no recent reports the probability is the climate and historical prior
//! alone. Otherwise the weighted sum
//!
//! ```text
//! density * 0.35 + mean score * 0.25 + climate * 0.20 + history * 0.10 + trend * 5
//! ```
//!
//! is clamped to 0-100 and rounded. Symptom density and the mean symptom score
//! are unbounded, so the final clamp is the only bound on the result.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::algorithm::prediction::climate::climate_factor;
use crate::algorithm::prediction::historical::historical_risk;
use crate::algorithm::prediction::symptom_score::symptom_score;
use crate::algorithm::prediction::trend::{Trend, trend_from_reports};
use crate::algorithm::prediction::{
    CLIMATE_WEIGHT, DENSITY_POPULATION_UNIT, DISEASE_SCORE_WEIGHT, HISTORICAL_WEIGHT,
    SYMPTOM_DENSITY_WEIGHT, TREND_WEIGHT,
};
use crate::common::traits::{HistoricalSource, ReportSource};
use crate::config::EngineConfig;
use crate::models::{Disease, RegionalPrediction, SymptomReport};
use crate::reference::Region;

/// Round a raw score to the nearest integer and clamp it to 0-100
#[must_use]
pub fn to_probability(raw: f64) -> u8 {
    if raw.is_nan() {
        return 0;
    }
    raw.round().clamp(0.0, 100.0) as u8
}

/// Intermediate factors behind one probability
#[derive(Debug, Clone, PartialEq)]
pub struct RiskFactors {
    pub region: Region,
    pub disease: Disease,
    /// Reports inside the report window
    pub report_count: usize,
    /// Reports per 100k population, absent on the no-data path
    pub symptom_density: Option<f64>,
    /// Mean per-report symptom score, absent on the no-data path
    pub avg_disease_score: Option<f64>,
    /// Trend signal, absent on the no-data path
    pub trend: Option<Trend>,
    pub climate_factor: f64,
    pub historical_risk: f64,
    /// Unclamped, unrounded combination of the factors
    pub raw_score: f64,
}

impl RiskFactors {
    /// Whether the probability came from the climate/history prior only
    #[must_use]
    pub const fn is_prior_only(&self) -> bool {
        self.report_count == 0
    }

    /// Final bounded probability
    #[must_use]
    pub fn probability(&self) -> u8 {
        to_probability(self.raw_score)
    }
}

/// Scores regions against a report source and a historical source
#[derive(Debug)]
pub struct PredictionEngine<'a, R: ?Sized, H: ?Sized> {
    reports: &'a R,
    historical: &'a H,
    config: EngineConfig,
}

impl<'a, R, H> PredictionEngine<'a, R, H>
where
    R: ReportSource + ?Sized,
    H: HistoricalSource + ?Sized,
{
    #[must_use]
    pub fn new(reports: &'a R, historical: &'a H, config: EngineConfig) -> Self {
        Self {
            reports,
            historical,
            config,
        }
    }

    /// Compute every factor for one region and disease
    #[must_use]
    pub fn risk_factors(&self, region: Region, disease: Disease, as_of: DateTime<Utc>) -> RiskFactors {
        let recent = self
            .reports
            .recent_reports(region, self.config.report_window_days, as_of);
        let climate = climate_factor(region, disease);
        let history = historical_risk(self.historical, region, disease);

        if recent.is_empty() {
            return RiskFactors {
                region,
                disease,
                report_count: 0,
                symptom_density: None,
                avg_disease_score: None,
                trend: None,
                climate_factor: climate,
                historical_risk: history,
                raw_score: climate + history,
            };
        }

        let density = symptom_density(recent.len(), region);
        let avg_score = mean_symptom_score(&recent, disease);
        let trend_reports =
            self.reports
                .recent_reports(region, self.config.trend_window_days * 2, as_of);
        let trend = trend_from_reports(&trend_reports, as_of, self.config.trend_window_days);

        let raw_score = density * SYMPTOM_DENSITY_WEIGHT
            + avg_score * DISEASE_SCORE_WEIGHT
            + climate * CLIMATE_WEIGHT
            + history * HISTORICAL_WEIGHT
            + trend.multiplier() * TREND_WEIGHT;

        RiskFactors {
            region,
            disease,
            report_count: recent.len(),
            symptom_density: Some(density),
            avg_disease_score: Some(avg_score),
            trend: Some(trend),
            climate_factor: climate,
            historical_risk: history,
            raw_score,
        }
    }

    /// Outbreak probability (0-100) for one region and disease
    #[must_use]
    pub fn outbreak_probability(&self, region: Region, disease: Disease, as_of: DateTime<Utc>) -> u8 {
        let factors = self.risk_factors(region, disease, as_of);
        log::debug!(
            "{region} {disease}: reports={} density={:?} score={:?} trend={:?} climate={:.2} history={:.2} raw={:.2}",
            factors.report_count,
            factors.symptom_density,
            factors.avg_disease_score,
            factors.trend,
            factors.climate_factor,
            factors.historical_risk,
            factors.raw_score
        );
        factors.probability()
    }

    /// Both disease probabilities for one region
    #[must_use]
    pub fn regional_prediction(&self, region: Region, as_of: DateTime<Utc>) -> RegionalPrediction {
        RegionalPrediction {
            region,
            typhoid_probability: self.outbreak_probability(region, Disease::Typhoid, as_of),
            cholera_probability: self.outbreak_probability(region, Disease::Cholera, as_of),
        }
    }

    /// Predictions for every region, in [`Region::ALL`] order
    #[must_use]
    pub fn all_predictions(&self, as_of: DateTime<Utc>) -> Vec<RegionalPrediction> {
        Region::ALL
            .iter()
            .map(|region| self.regional_prediction(*region, as_of))
            .collect()
    }
}

/// Reports per 100k population
fn symptom_density(report_count: usize, region: Region) -> f64 {
    (report_count as f64 / f64::from(region.population())) * DENSITY_POPULATION_UNIT
}

fn mean_symptom_score(reports: &[Arc<SymptomReport>], disease: Disease) -> f64 {
    let total: f64 = reports
        .iter()
        .map(|report| symptom_score(&report.symptoms, report.severity, disease))
        .sum();
    total / reports.len() as f64
}

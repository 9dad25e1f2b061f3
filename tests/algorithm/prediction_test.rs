//! Tests for regional outbreak probability

use outbreak_risk::algorithm::prediction::{
    PredictionEngine, RiskLevel, Trend, climate_factor, risk_level, trend_from_reports,
};
use outbreak_risk::collections::{HistoricalRecordCollection, SymptomReportCollection};
use outbreak_risk::common::traits::ReportSource;
use outbreak_risk::{Disease, EngineConfig, PredictionSnapshot, Region, Symptom};

use crate::utils::{as_of, historical, report};

#[test]
fn test_greater_accra_without_reports_uses_climate_prior() {
    let reports = SymptomReportCollection::new();
    let history = HistoricalRecordCollection::new();
    let engine = PredictionEngine::new(&reports, &history, EngineConfig::default());

    assert!((climate_factor(Region::GreaterAccra, Disease::Cholera) - 17.3).abs() < 1e-9);
    assert!((climate_factor(Region::GreaterAccra, Disease::Typhoid) - 21.5).abs() < 1e-9);

    let prediction = engine.regional_prediction(Region::GreaterAccra, as_of());
    assert_eq!(prediction.cholera_probability, 17);
    assert_eq!(prediction.typhoid_probability, 22);
    assert_eq!(risk_level(prediction.cholera_probability), RiskLevel::Low);
    assert_eq!(risk_level(prediction.typhoid_probability), RiskLevel::Low);
}

#[test]
fn test_history_adds_to_prior() {
    let reports = SymptomReportCollection::new();
    let history = HistoricalRecordCollection::from_records(vec![
        historical("h1", Region::Volta, "Cholera", 120),
        historical("h2", Region::Volta, "cholera", 80),
        historical("h3", Region::Volta, "Typhoid", 500),
    ]);
    let engine = PredictionEngine::new(&reports, &history, EngineConfig::default());

    // Volta cholera prior: 1100/2000*20 + 15 = 26, history mean 100 / 10 = 10
    assert_eq!(
        engine.outbreak_probability(Region::Volta, Disease::Cholera, as_of()),
        36
    );
    let factors = engine.risk_factors(Region::Volta, Disease::Typhoid, as_of());
    assert!((factors.historical_risk - 20.0).abs() < 1e-9);
    assert!(factors.is_prior_only());
}

#[test]
fn test_single_report_uses_weighted_formula() {
    let reports = SymptomReportCollection::from_reports(vec![report(
        "r1",
        Region::GreaterAccra,
        &[Symptom::Fever, Symptom::Headache],
        3,
        1,
    )]);
    let history = HistoricalRecordCollection::new();
    let engine = PredictionEngine::new(&reports, &history, EngineConfig::default());

    let factors = engine.risk_factors(Region::GreaterAccra, Disease::Typhoid, as_of());
    assert_eq!(factors.report_count, 1);
    assert_eq!(factors.trend, Some(Trend::Rising));
    assert_eq!(factors.avg_disease_score, Some(5.0));
    // 0.0064 density + 1.25 score + 4.3 climate + 6.0 trend
    assert_eq!(factors.probability(), 12);
}

#[test]
fn test_reports_outside_window_are_ignored() {
    let reports = SymptomReportCollection::from_reports(vec![report(
        "old",
        Region::Ashanti,
        &[Symptom::SevereDiarrhea],
        5,
        31,
    )]);
    let history = HistoricalRecordCollection::new();
    let engine = PredictionEngine::new(&reports, &history, EngineConfig::default());

    assert!(
        engine
            .risk_factors(Region::Ashanti, Disease::Cholera, as_of())
            .is_prior_only()
    );
}

#[test]
fn test_trend_rises_when_recent_week_is_busier() {
    let mut all = Vec::new();
    for i in 0..10 {
        all.push(report(&format!("recent{i}"), Region::Central, &[Symptom::Vomiting], 3, 1 + i % 6));
    }
    for i in 0..4 {
        all.push(report(&format!("prior{i}"), Region::Central, &[Symptom::Vomiting], 3, 8 + i));
    }
    let reports = SymptomReportCollection::from_reports(all);

    let window = reports.recent_reports(Region::Central, 14, as_of());
    assert_eq!(window.len(), 14);
    let trend = trend_from_reports(&window, as_of(), 7);
    assert_eq!(trend, Trend::Rising);
    assert!((trend.multiplier() - 1.2).abs() < 1e-9);
}

#[test]
fn test_trend_falls_on_equal_weeks() {
    let reports = SymptomReportCollection::from_reports(vec![
        report("a", Region::Northern, &[Symptom::Fever], 3, 2),
        report("b", Region::Northern, &[Symptom::Fever], 3, 9),
    ]);

    let window = reports.recent_reports(Region::Northern, 14, as_of());
    assert_eq!(trend_from_reports(&window, as_of(), 7), Trend::Falling);
}

#[test]
fn test_all_predictions_cover_every_region_once() {
    let reports = SymptomReportCollection::from_reports(vec![
        report("r1", Region::Volta, &[Symptom::WateryStool], 5, 2),
        report("r2", Region::Volta, &[Symptom::Dehydration], 4, 3),
    ]);
    let history = HistoricalRecordCollection::new();
    let engine = PredictionEngine::new(&reports, &history, EngineConfig::default());

    let snapshot = PredictionSnapshot {
        last_updated: as_of(),
        regions: engine.all_predictions(as_of()),
    };
    assert!(snapshot.is_complete());
    assert_eq!(snapshot.regions[0].region, Region::ALL[0]);
    assert!(snapshot.regions.iter().all(|p| p.typhoid_probability <= 100));
}

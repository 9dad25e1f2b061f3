//! Property tests for the scoring invariants

use std::sync::Arc;

use proptest::prelude::*;

use outbreak_risk::algorithm::prediction::{
    PredictionEngine, climate_factor, historical_risk, historical_risk_from_records, symptom_score,
    to_probability,
};
use outbreak_risk::collections::{HistoricalRecordCollection, SymptomReportCollection};
use outbreak_risk::{Disease, EngineConfig, Region, Symptom};

use crate::utils::{as_of, historical, report};

fn region_strategy() -> impl Strategy<Value = Region> {
    prop::sample::select(Region::ALL.to_vec())
}

fn symptoms_strategy() -> impl Strategy<Value = Vec<Symptom>> {
    prop::sample::subsequence(Symptom::ALL.to_vec(), 1..=Symptom::ALL.len())
}

proptest! {
    #[test]
    fn probability_is_always_bounded(raw in prop::num::f64::ANY) {
        prop_assert!(to_probability(raw) <= 100);
    }

    #[test]
    fn every_symptom_has_a_weight_for_both_diseases(symptoms in symptoms_strategy()) {
        for disease in Disease::ALL {
            let score = symptom_score(symptoms.iter(), 3, disease);
            prop_assert!(score >= 0.0);
            prop_assert!(score <= 3.0 * symptoms.len() as f64);
        }
    }

    #[test]
    fn historical_risk_never_exceeds_cap(cases in prop::collection::vec(0u32..100_000, 0..20)) {
        let records: Vec<_> = cases
            .iter()
            .enumerate()
            .map(|(i, c)| Arc::new(historical(&format!("h{i}"), Region::Western, "Cholera", *c)))
            .collect();
        let risk = historical_risk_from_records(&records);
        prop_assert!((0.0..=20.0).contains(&risk));
    }

    #[test]
    fn predictions_stay_in_range(
        entries in prop::collection::vec(
            (region_strategy(), symptoms_strategy(), 1u8..=5, 0i64..40),
            0..40,
        )
    ) {
        let reports = SymptomReportCollection::from_reports(
            entries
                .iter()
                .enumerate()
                .map(|(i, (region, symptoms, severity, days))| {
                    report(&format!("r{i}"), *region, symptoms, *severity, *days)
                })
                .collect(),
        );
        let history = HistoricalRecordCollection::new();
        let engine = PredictionEngine::new(&reports, &history, EngineConfig::default());

        let predictions = engine.all_predictions(as_of());
        prop_assert_eq!(predictions.len(), Region::ALL.len());
        for prediction in predictions {
            prop_assert!(prediction.typhoid_probability <= 100);
            prop_assert!(prediction.cholera_probability <= 100);
        }
    }

    #[test]
    fn no_recent_reports_scores_the_prior(
        region in region_strategy(),
        disease in prop::sample::select(Disease::ALL.to_vec()),
        cases in prop::collection::vec(
            (region_strategy(), prop::sample::select(vec!["Typhoid", "cholera", "CHOLERA"]), 0u32..5_000),
            0..12,
        ),
        stale in prop::collection::vec((symptoms_strategy(), 1u8..=5, 31i64..120), 0..10),
    ) {
        let history = HistoricalRecordCollection::from_records(
            cases
                .iter()
                .enumerate()
                .map(|(i, (r, label, c))| historical(&format!("h{i}"), *r, label, *c))
                .collect(),
        );
        let reports = SymptomReportCollection::from_reports(
            stale
                .iter()
                .enumerate()
                .map(|(i, (symptoms, severity, days))| {
                    report(&format!("old{i}"), region, symptoms, *severity, *days)
                })
                .collect(),
        );
        let engine = PredictionEngine::new(&reports, &history, EngineConfig::default());

        let expected = to_probability(
            climate_factor(region, disease) + historical_risk(&history, region, disease),
        );
        prop_assert_eq!(engine.outbreak_probability(region, disease, as_of()), expected);
    }
}

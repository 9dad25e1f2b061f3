//! End-to-end tests for submission, import and start-up

use std::collections::BTreeSet;

use chrono::{Duration, NaiveDate};

use outbreak_risk::common::traits::ModelCollection;
use outbreak_risk::import::import_historical_at;
use outbreak_risk::storage::{self, SYMPTOMS_KEY};
use outbreak_risk::submission::{decode_payload, submit_report_at};
use outbreak_risk::{
    AgeGroup, EngineConfig, MemoryStorage, OutbreakError, Region, ReportDraft, Storage, Symptom,
    SymptomReport, bootstrap_at, parse_historical_csv,
};

use crate::utils::{as_of, report};

fn cholera_draft(region: Region) -> ReportDraft {
    ReportDraft {
        region,
        district: Some("Keta".to_string()),
        symptoms: BTreeSet::from([
            Symptom::SevereDiarrhea,
            Symptom::WateryStool,
            Symptom::Dehydration,
        ]),
        onset_date: NaiveDate::from_ymd_opt(2025, 10, 18).unwrap(),
        age_group: AgeGroup::From36To50,
        severity: 5,
        user_id: Some("user-42".to_string()),
    }
}

#[test]
fn test_submission_refreshes_snapshot() {
    let mut store = MemoryStorage::new();
    let config = EngineConfig::default();

    let receipt = submit_report_at(&mut store, cholera_draft(Region::Volta), &config, as_of()).unwrap();

    assert!(receipt.report.anonymous_id.starts_with("ANO"));
    assert_eq!(receipt.report.anonymous_id.len(), 11);
    let payload = decode_payload(&receipt.report.encrypted_payload).unwrap();
    assert_eq!(payload.user_id.as_deref(), Some("user-42"));

    assert_eq!(receipt.snapshot.last_updated, as_of());
    assert!(receipt.snapshot.is_complete());
    assert_eq!(storage::load_reports(&store).count(), 1);
    assert_eq!(storage::load_snapshot(&store), Some(receipt.snapshot));
}

#[test]
fn test_invalid_submission_is_not_stored() {
    let mut store = MemoryStorage::new();
    let mut draft = cholera_draft(Region::Volta);
    draft.symptoms.clear();

    let result = submit_report_at(&mut store, draft, &EngineConfig::default(), as_of());
    assert!(matches!(result, Err(OutbreakError::InvalidReport(_))));
    assert!(storage::load_reports(&store).is_empty());
    assert!(storage::load_snapshot(&store).is_none());
}

#[test]
fn test_csv_import_updates_history_and_snapshot() {
    let csv = "\
Date,Region,District,Disease,Confirmed_Cases,Population,Deaths,Hospitalized
2024-03-01,Northern,Tamale,Cholera,200,400000,3,40
2024-04-01,Atlantis,,Cholera,10,1000,,
";
    let preview = parse_historical_csv(csv.as_bytes()).unwrap();
    assert_eq!(preview.rows.len(), 1);
    assert_eq!(preview.errors.len(), 1);

    let mut store = MemoryStorage::new();
    let receipt = import_historical_at(&mut store, preview, &EngineConfig::default(), as_of()).unwrap();

    assert_eq!(receipt.imported, 1);
    assert_eq!(storage::load_historical(&store).count(), 1);
    // Northern cholera: 1000/2000*20 + 0 = 10, history capped at 20
    assert_eq!(receipt.snapshot.get(Region::Northern).unwrap().cholera_probability, 30);
}

#[test]
fn test_bootstrap_with_samples() {
    let mut store = MemoryStorage::new();
    let config = EngineConfig {
        seed_sample_data: true,
        ..EngineConfig::default()
    };

    let snapshot = bootstrap_at(&mut store, &config, as_of()).unwrap();
    assert!(snapshot.is_complete());

    let reports = storage::load_reports(&store);
    assert_eq!(reports.count(), 10);
    assert!(
        reports
            .all()
            .iter()
            .all(|r| r.submitted_at >= as_of() - Duration::days(30))
    );

    // A region without sample reports keeps its climate prior
    let northern = snapshot.get(Region::Northern).unwrap();
    assert_eq!(northern.cholera_probability, 10);
}

#[test]
fn test_submission_keeps_reports_it_cannot_decode() {
    let mut store = MemoryStorage::new();
    let valid: Vec<SymptomReport> = (0..5)
        .map(|i| report(&format!("v{i}"), Region::Volta, &[Symptom::WateryStool], 4, 2))
        .collect();
    let mut entries: Vec<serde_json::Value> = valid
        .iter()
        .map(|r| serde_json::to_value(r).unwrap())
        .collect();
    let mut unknown = entries[0].clone();
    unknown["id"] = "foreign".into();
    unknown["symptoms"] = serde_json::json!(["Fever", "Cough"]);
    entries.push(unknown);
    store
        .write(SYMPTOMS_KEY, &serde_json::to_string(&entries).unwrap())
        .unwrap();

    assert_eq!(storage::load_reports(&store).count(), 5);

    let receipt =
        submit_report_at(&mut store, cholera_draft(Region::Volta), &EngineConfig::default(), as_of())
            .unwrap();

    let raw = store.read(SYMPTOMS_KEY).unwrap().unwrap();
    let stored: Vec<serde_json::Value> = serde_json::from_str(&raw).unwrap();
    assert_eq!(stored.len(), 7);
    assert_eq!(storage::load_reports(&store).count(), 6);

    // 0.09 density + 1.46 mean score + 5.2 climate + 6.0 trend, over all six decodable reports
    assert_eq!(receipt.snapshot.get(Region::Volta).unwrap().cholera_probability, 13);
}

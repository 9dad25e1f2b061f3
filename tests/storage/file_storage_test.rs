//! Tests for the JSON file storage backend

use chrono::Duration;
use tempfile::TempDir;

use outbreak_risk::common::traits::ModelCollection;
use outbreak_risk::storage::{self, PREDICTIONS_KEY, SYMPTOMS_KEY};
use outbreak_risk::{EngineConfig, JsonFileStorage, PredictionCache, Region, Storage, Symptom};

use crate::utils::{as_of, report};

#[test]
fn test_reports_survive_reopen() {
    let dir = TempDir::new().unwrap();
    {
        let mut store = JsonFileStorage::open(dir.path()).unwrap();
        storage::append_reports(
            &mut store,
            [report("r1", Region::Volta, &[Symptom::WateryStool], 4, 1)],
        )
        .unwrap();
    }

    let reopened = JsonFileStorage::open(dir.path()).unwrap();
    let reports = storage::load_reports(&reopened);
    assert_eq!(reports.count(), 1);
    assert!(dir.path().join(format!("{SYMPTOMS_KEY}.json")).exists());
}

#[test]
fn test_corrupt_file_falls_back_to_default() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join(format!("{SYMPTOMS_KEY}.json")), "{ not json").unwrap();

    let store = JsonFileStorage::open(dir.path()).unwrap();
    assert!(storage::load_reports(&store).is_empty());
}

#[test]
fn test_cache_persists_and_replaces_snapshot() {
    let dir = TempDir::new().unwrap();
    let mut store = JsonFileStorage::open(dir.path()).unwrap();

    let first = PredictionCache::new(&mut store, EngineConfig::default())
        .recompute_all_at(as_of())
        .unwrap();
    let later = as_of() + Duration::hours(1);
    let second = PredictionCache::new(&mut store, EngineConfig::default())
        .recompute_all_at(later)
        .unwrap();

    assert_eq!(first.regions, second.regions);
    let stored = storage::load_snapshot(&store).unwrap();
    assert_eq!(stored.last_updated, later);
    assert!(stored.is_complete());
    assert!(store.read(PREDICTIONS_KEY).unwrap().is_some());
}

#[test]
fn test_remove_clears_snapshot_and_tolerates_missing_key() {
    let dir = TempDir::new().unwrap();
    let mut store = JsonFileStorage::open(dir.path()).unwrap();

    PredictionCache::new(&mut store, EngineConfig::default())
        .recompute_all_at(as_of())
        .unwrap();
    store.remove(PREDICTIONS_KEY).unwrap();
    store.remove(PREDICTIONS_KEY).unwrap();

    assert!(storage::load_snapshot(&store).is_none());
    assert!(store.remove("../escape").is_err());
}

//! Engine start-up
//!
//! Opens the configured storage, optionally seeds sample data into a store
//! that has never held reports or historical records, and makes sure a
//! prediction snapshot exists.

use chrono::{DateTime, Utc};

use crate::algorithm::prediction::PredictionCache;
use crate::config::EngineConfig;
use crate::error::Result;
use crate::models::PredictionSnapshot;
use crate::sample::{sample_historical, sample_reports};
use crate::storage::{
    self, HISTORICAL_DATA_KEY, JsonFileStorage, MemoryStorage, SYMPTOMS_KEY, Storage,
};

/// Open the storage backend named by the configuration
pub fn open_storage(config: &EngineConfig) -> Result<Box<dyn Storage>> {
    match &config.data_dir {
        Some(dir) => {
            let storage = JsonFileStorage::open(dir)?;
            log::info!("Using JSON storage in {}", storage.dir().display());
            Ok(Box::new(storage))
        }
        None => {
            log::info!("Using in-memory storage");
            Ok(Box::new(MemoryStorage::new()))
        }
    }
}

/// Prepare storage and return the current snapshot
pub fn bootstrap<S: Storage + ?Sized>(
    storage: &mut S,
    config: &EngineConfig,
) -> Result<PredictionSnapshot> {
    bootstrap_at(storage, config, Utc::now())
}

pub fn bootstrap_at<S: Storage + ?Sized>(
    storage: &mut S,
    config: &EngineConfig,
    as_of: DateTime<Utc>,
) -> Result<PredictionSnapshot> {
    let mut seeded = false;
    if config.seed_sample_data && is_fresh(&*storage)? {
        log::info!("Seeding sample symptom reports and historical records");
        storage::append_reports(storage, sample_reports(as_of))?;
        storage::append_historical(storage, sample_historical())?;
        seeded = true;
    }

    let mut cache = PredictionCache::new(storage, config.clone());
    if seeded {
        cache.recompute_all_at(as_of)
    } else {
        cache.current_or_recompute_at(as_of)
    }
}

/// Whether neither reports nor historical records have ever been stored
fn is_fresh<S: Storage + ?Sized>(storage: &S) -> Result<bool> {
    Ok(storage.read(SYMPTOMS_KEY)?.is_none() && storage.read(HISTORICAL_DATA_KEY)?.is_none())
}

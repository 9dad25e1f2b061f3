//! Logical key/value storage for reports, historical records and predictions
//!
//! Values are JSON documents stored under the keys `symptoms`,
//! `historicalData` and `predictions`. Reads never fail: a missing or
//! unreadable value is logged and treated as "no data yet", and collection
//! entries that do not decode are skipped one by one. Writes report their
//! errors to the caller, and appends never replace a stored value they could
//! not parse.

pub mod file;
pub mod memory;

pub use file::JsonFileStorage;
pub use memory::MemoryStorage;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::collections::{HistoricalRecordCollection, SymptomReportCollection};
use crate::error::{OutbreakError, Result};
use crate::models::{HistoricalRecord, PredictionSnapshot, SymptomReport};
use crate::utils::log_warning;

/// Storage key for symptom reports
pub const SYMPTOMS_KEY: &str = "symptoms";
/// Storage key for historical outbreak records
pub const HISTORICAL_DATA_KEY: &str = "historicalData";
/// Storage key for the prediction snapshot
pub const PREDICTIONS_KEY: &str = "predictions";

/// A raw key/value backend holding serialized JSON
pub trait Storage: std::fmt::Debug {
    /// Read the raw value stored under `key`, `None` if absent
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn write(&mut self, key: &str, value: &str) -> Result<()>;

    /// Remove the value stored under `key`. Removing a missing key is not an error
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// Read and decode the value under `key`, falling back to `default` when the
/// value is missing or cannot be read or decoded
pub fn get_from_storage<S, T>(storage: &S, key: &str, default: T) -> T
where
    S: Storage + ?Sized,
    T: DeserializeOwned,
{
    match storage.read(key) {
        Ok(Some(raw)) => match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                log_warning(&format!("Failed to decode {key} from storage"), Some(&e));
                default
            }
        },
        Ok(None) => default,
        Err(e) => {
            log_warning(&format!("Failed to read {key} from storage"), Some(&e));
            default
        }
    }
}

/// Encode `value` as JSON and store it under `key`
pub fn save_to_storage<S, T>(storage: &mut S, key: &str, value: &T) -> Result<()>
where
    S: Storage + ?Sized,
    T: Serialize + ?Sized,
{
    let raw = serde_json::to_string(value)?;
    storage.write(key, &raw)
}

/// Read the array stored under `key` and decode it element by element.
///
/// Elements that do not decode are logged and skipped; the rest are kept.
/// A missing, unreadable or non-array value yields an empty list.
pub fn load_collection<S, T>(storage: &S, key: &str) -> Vec<T>
where
    S: Storage + ?Sized,
    T: DeserializeOwned,
{
    let entries: Vec<Value> = get_from_storage(storage, key, Vec::new());
    let total = entries.len();
    let items: Vec<T> = entries
        .into_iter()
        .enumerate()
        .filter_map(|(i, entry)| match serde_json::from_value(entry) {
            Ok(item) => Some(item),
            Err(e) => {
                log_warning(&format!("Skipping undecodable entry {i} in {key}"), Some(&e));
                None
            }
        })
        .collect();

    if items.len() < total {
        log::warn!("Loaded {} of {total} entries from {key}", items.len());
    }
    items
}

/// Append items to the array stored under `key`.
///
/// Stored entries are carried over verbatim, including ones this crate cannot
/// decode. Fails without writing if the stored value cannot be read or is not
/// a JSON array.
pub fn append_to_collection<S, T>(
    storage: &mut S,
    key: &str,
    items: impl IntoIterator<Item = T>,
) -> Result<()>
where
    S: Storage + ?Sized,
    T: Serialize,
{
    let mut stored: Vec<Value> = match storage.read(key)? {
        Some(raw) => serde_json::from_str(&raw).map_err(|e| {
            OutbreakError::Storage(format!("Refusing to overwrite undecodable {key}: {e}"))
        })?,
        None => Vec::new(),
    };
    for item in items {
        stored.push(serde_json::to_value(item)?);
    }
    save_to_storage(storage, key, &stored)
}

/// Load every stored symptom report
pub fn load_reports<S: Storage + ?Sized>(storage: &S) -> SymptomReportCollection {
    SymptomReportCollection::from_reports(load_collection(storage, SYMPTOMS_KEY))
}

/// Load every stored historical record
pub fn load_historical<S: Storage + ?Sized>(storage: &S) -> HistoricalRecordCollection {
    HistoricalRecordCollection::from_records(load_collection(storage, HISTORICAL_DATA_KEY))
}

/// Load the current prediction snapshot, if one exists
pub fn load_snapshot<S: Storage + ?Sized>(storage: &S) -> Option<PredictionSnapshot> {
    get_from_storage(storage, PREDICTIONS_KEY, None)
}

/// Replace the current prediction snapshot
pub fn save_snapshot<S: Storage + ?Sized>(
    storage: &mut S,
    snapshot: &PredictionSnapshot,
) -> Result<()> {
    save_to_storage(storage, PREDICTIONS_KEY, snapshot)
}

/// Append symptom reports to the stored collection
pub fn append_reports<S: Storage + ?Sized>(
    storage: &mut S,
    reports: impl IntoIterator<Item = SymptomReport>,
) -> Result<()> {
    append_to_collection(storage, SYMPTOMS_KEY, reports)
}

/// Append historical records to the stored collection
pub fn append_historical<S: Storage + ?Sized>(
    storage: &mut S,
    records: impl IntoIterator<Item = HistoricalRecord>,
) -> Result<()> {
    append_to_collection(storage, HISTORICAL_DATA_KEY, records)
}

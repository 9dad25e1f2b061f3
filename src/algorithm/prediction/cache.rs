//! Prediction snapshot cache
//!
//! Recomputes every region and disease from storage and replaces the single
//! stored snapshot. There is no incremental update. Callers trigger a
//! recompute after a report submission, after a historical import, and lazily
//! from the read side when no snapshot exists yet.
//!
//! Writes are last-writer-wins. The cache assumes a single writer.

use std::time::Instant;

use chrono::{DateTime, Utc};

use crate::algorithm::prediction::probability::PredictionEngine;
use crate::config::EngineConfig;
use crate::error::Result;
use crate::models::PredictionSnapshot;
use crate::reference::Region;
use crate::storage::{self, PREDICTIONS_KEY, Storage};
use crate::utils::{log_operation_complete, log_operation_start};

/// Owns the recompute lifecycle of the stored prediction snapshot
#[derive(Debug)]
pub struct PredictionCache<'a, S: Storage + ?Sized> {
    storage: &'a mut S,
    config: EngineConfig,
}

impl<'a, S: Storage + ?Sized> PredictionCache<'a, S> {
    #[must_use]
    pub fn new(storage: &'a mut S, config: EngineConfig) -> Self {
        Self { storage, config }
    }

    /// Recompute every region as of now and persist the snapshot
    pub fn recompute_all(&mut self) -> Result<PredictionSnapshot> {
        self.recompute_all_at(Utc::now())
    }

    /// Recompute every region as of `as_of` and persist the snapshot
    pub fn recompute_all_at(&mut self, as_of: DateTime<Utc>) -> Result<PredictionSnapshot> {
        let start = Instant::now();
        log_operation_start("Recomputing outbreak predictions for", PREDICTIONS_KEY);

        let reports = storage::load_reports(&*self.storage);
        let historical = storage::load_historical(&*self.storage);
        let engine = PredictionEngine::new(&reports, &historical, self.config.clone());

        let snapshot = PredictionSnapshot {
            last_updated: as_of,
            regions: engine.all_predictions(as_of),
        };
        storage::save_snapshot(&mut *self.storage, &snapshot)?;

        log_operation_complete(
            "scored",
            PREDICTIONS_KEY,
            Region::ALL.len(),
            Some(start.elapsed()),
        );
        Ok(snapshot)
    }

    /// The stored snapshot, if any
    #[must_use]
    pub fn current(&self) -> Option<PredictionSnapshot> {
        storage::load_snapshot(&*self.storage)
    }

    /// The stored snapshot, computing and persisting one first if none exists
    pub fn current_or_recompute(&mut self) -> Result<PredictionSnapshot> {
        self.current_or_recompute_at(Utc::now())
    }

    pub fn current_or_recompute_at(&mut self, as_of: DateTime<Utc>) -> Result<PredictionSnapshot> {
        match self.current() {
            Some(snapshot) => Ok(snapshot),
            None => {
                log::info!("No prediction snapshot stored, computing one");
                self.recompute_all_at(as_of)
            }
        }
    }
}

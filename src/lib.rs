//! A Rust library for scoring regional typhoid and cholera outbreak risk in
//! Ghana from anonymous symptom reports, climate baselines and historical
//! case data.

pub mod algorithm;
pub mod bootstrap;
pub mod collections;
pub mod common;
pub mod config;
pub mod error;
pub mod import;
pub mod models;
pub mod reference;
pub mod sample;
pub mod storage;
pub mod submission;
pub mod utils;

// Re-export the most common types for easier use
// Core types
pub use config::EngineConfig;
pub use error::{OutbreakError, Result};
pub use models::{Disease, HistoricalRecord, PredictionSnapshot, RegionalPrediction, SymptomReport};
pub use reference::{AgeGroup, ClimateProfile, Region, Symptom, WaterBodyProximity};

// Prediction
pub use algorithm::prediction::{
    PredictionCache, PredictionEngine, RiskInfo, RiskLevel, risk_info, risk_level,
};

// Storage
pub use storage::{JsonFileStorage, MemoryStorage, Storage};

// Workflows
pub use bootstrap::{bootstrap, bootstrap_at, open_storage};
pub use import::{ImportPreview, ImportReceipt, import_historical, parse_historical_csv};
pub use submission::{ReportDraft, SubmissionReceipt, submit_report};

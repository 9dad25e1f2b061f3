//! Error handling for the outbreak risk engine.

use std::io;

/// Errors produced while loading, storing or importing outbreak data
#[derive(Debug, thiserror::Error)]
pub enum OutbreakError {
    /// Error opening, reading or writing a storage file
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Error encoding or decoding stored JSON
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Error reading CSV input
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A region label that is not one of the sixteen regions
    #[error("Unknown region: {0}")]
    UnknownRegion(String),

    /// A disease label other than typhoid or cholera
    #[error("Unknown disease: {0}")]
    UnknownDisease(String),

    /// A symptom label outside the fixed symptom list
    #[error("Unknown symptom: {0}")]
    UnknownSymptom(String),

    /// An age group label outside the fixed age bands
    #[error("Unknown age group: {0}")]
    UnknownAgeGroup(String),

    /// A symptom report that violates its invariants
    #[error("Invalid symptom report: {0}")]
    InvalidReport(String),

    /// A historical data import that cannot proceed
    #[error("Import error: {0}")]
    Import(String),

    /// A storage backend failure that is not an IO error
    #[error("Storage error: {0}")]
    Storage(String),
}

/// Result type for outbreak engine operations
pub type Result<T> = std::result::Result<T, OutbreakError>;

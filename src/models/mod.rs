//! Domain models for the prediction engine
//!
//! Symptom reports and historical records are inputs supplied by external
//! collaborators. Regional predictions and the snapshot are the engine's output.

pub mod disease;
pub mod historical;
pub mod prediction;
pub mod report;

pub use disease::Disease;
pub use historical::HistoricalRecord;
pub use prediction::{PredictionSnapshot, RegionalPrediction};
pub use report::{MAX_SEVERITY, MIN_SEVERITY, NEUTRAL_SEVERITY, SymptomReport};

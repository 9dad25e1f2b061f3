//! Configuration for the prediction engine.
//!
//! Only the report windows and storage location are configurable. The scoring
//! weights are compile-time constants in [`crate::algorithm::prediction`].

use std::fmt;
use std::path::PathBuf;

/// Default lookback for symptom reports, in days
pub const DEFAULT_REPORT_WINDOW_DAYS: i64 = 30;

/// Default length of each trend comparison window, in days
pub const DEFAULT_TREND_WINDOW_DAYS: i64 = 7;

/// Environment variable naming the storage directory
pub const DATA_DIR_ENV: &str = "OUTBREAK_DATA_DIR";

/// Environment variable enabling sample data seeding
pub const SEED_SAMPLE_ENV: &str = "OUTBREAK_SEED_SAMPLE";

/// Configuration for the prediction engine
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Symptom reports submitted within this many days are considered recent
    pub report_window_days: i64,
    /// Length of the recent and prior windows compared by the trend signal
    pub trend_window_days: i64,
    /// Directory for JSON storage files. `None` keeps everything in memory
    pub data_dir: Option<PathBuf>,
    /// Whether to seed sample reports and historical records into empty storage
    pub seed_sample_data: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            report_window_days: DEFAULT_REPORT_WINDOW_DAYS,
            trend_window_days: DEFAULT_TREND_WINDOW_DAYS,
            data_dir: None,
            seed_sample_data: false,
        }
    }
}

impl EngineConfig {
    /// Build a configuration from `OUTBREAK_DATA_DIR` and `OUTBREAK_SEED_SAMPLE`
    #[must_use]
    pub fn from_env() -> Self {
        let data_dir = std::env::var(DATA_DIR_ENV)
            .ok()
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from);

        let seed_sample_data = std::env::var(SEED_SAMPLE_ENV)
            .map(|v| matches!(v.trim().to_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        Self {
            data_dir,
            seed_sample_data,
            ..Self::default()
        }
    }
}

impl fmt::Display for EngineConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Engine Configuration:")?;
        writeln!(f, "  Report Window: {} days", self.report_window_days)?;
        writeln!(f, "  Trend Window: {} days", self.trend_window_days)?;
        match &self.data_dir {
            Some(dir) => writeln!(f, "  Data Directory: {}", dir.display())?,
            None => writeln!(f, "  Data Directory: (in memory)")?,
        }
        writeln!(f, "  Seed Sample Data: {}", self.seed_sample_data)?;
        Ok(())
    }
}

//! Read-only data sources consumed by the prediction engine
//!
//! Both traits are pure queries. An empty backing collection yields an empty
//! result, never an error.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};

use crate::models::{Disease, HistoricalRecord, SymptomReport};
use crate::reference::Region;

/// Source of symptom reports
pub trait ReportSource {
    /// Reports for `region` submitted at or after `cutoff`, in no particular order
    fn reports_since(&self, region: Region, cutoff: DateTime<Utc>) -> Vec<Arc<SymptomReport>>;

    /// Reports for `region` submitted within the last `window_days` days of `as_of`
    fn recent_reports(
        &self,
        region: Region,
        window_days: i64,
        as_of: DateTime<Utc>,
    ) -> Vec<Arc<SymptomReport>> {
        self.reports_since(region, as_of - Duration::days(window_days))
    }
}

/// Source of historical outbreak records
pub trait HistoricalSource {
    /// Records for `region` whose disease label matches `disease` case-insensitively
    fn records_for(&self, region: Region, disease: Disease) -> Vec<Arc<HistoricalRecord>>;
}

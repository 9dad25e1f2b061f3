//! Historical risk factor

use std::sync::Arc;

use crate::common::traits::HistoricalSource;
use crate::models::{Disease, HistoricalRecord};
use crate::reference::Region;

/// Upper bound on the historical contribution
pub const HISTORICAL_RISK_CAP: f64 = 20.0;
/// Mean confirmed cases per point of historical risk
const CASES_PER_POINT: f64 = 10.0;

/// Historical risk from a set of matching records: `min(20, mean cases / 10)`,
/// or 0 when there are no records
#[must_use]
pub fn historical_risk_from_records(records: &[Arc<HistoricalRecord>]) -> f64 {
    if records.is_empty() {
        return 0.0;
    }

    let total_cases: f64 = records
        .iter()
        .map(|record| f64::from(record.confirmed_cases))
        .sum();
    let mean_cases = total_cases / records.len() as f64;

    (mean_cases / CASES_PER_POINT).min(HISTORICAL_RISK_CAP)
}

/// Historical risk for a region and disease
#[must_use]
pub fn historical_risk<H>(source: &H, region: Region, disease: Disease) -> f64
where
    H: HistoricalSource + ?Sized,
{
    historical_risk_from_records(&source.records_for(region, disease))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collections::HistoricalRecordCollection;
    use chrono::{NaiveDate, Utc};

    fn record(id: &str, disease: &str, cases: u32) -> HistoricalRecord {
        HistoricalRecord {
            id: id.to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            region: Region::GreaterAccra,
            district: None,
            disease: disease.to_string(),
            confirmed_cases: cases,
            population: 2_000_000,
            deaths: 0,
            hospitalized: 0,
            imported_at: Utc::now(),
        }
    }

    #[test]
    fn test_no_records_is_zero() {
        let source = HistoricalRecordCollection::new();
        assert_eq!(historical_risk(&source, Region::GreaterAccra, Disease::Typhoid), 0.0);
    }

    #[test]
    fn test_mean_cases_scaled() {
        let source = HistoricalRecordCollection::from_records(vec![
            record("h1", "Typhoid", 45),
            record("h2", "Typhoid", 35),
            record("h3", "Cholera", 1000),
        ]);
        // mean 40 -> 4 points
        assert!((historical_risk(&source, Region::GreaterAccra, Disease::Typhoid) - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_capped_at_twenty() {
        let source = HistoricalRecordCollection::from_records(vec![record("h1", "Cholera", 10_000)]);
        assert_eq!(
            historical_risk(&source, Region::GreaterAccra, Disease::Cholera),
            HISTORICAL_RISK_CAP
        );
    }
}

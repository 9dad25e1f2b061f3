use std::collections::BTreeSet;

use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use outbreak_risk::{AgeGroup, HistoricalRecord, Region, Symptom, SymptomReport};

/// Fixed evaluation instant shared by the tests
#[must_use]
pub fn as_of() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 10, 20, 12, 0, 0).unwrap()
}

/// Build a report submitted `days_ago` days before [`as_of`]
#[must_use]
pub fn report(
    id: &str,
    region: Region,
    symptoms: &[Symptom],
    severity: u8,
    days_ago: i64,
) -> SymptomReport {
    let submitted_at = as_of() - Duration::days(days_ago);
    SymptomReport {
        id: id.to_string(),
        anonymous_id: format!("ANO{id:0>8}"),
        encrypted_payload: String::new(),
        region,
        district: None,
        symptoms: symptoms.iter().copied().collect::<BTreeSet<_>>(),
        onset_date: submitted_at.date_naive(),
        age_group: AgeGroup::From18To35,
        severity,
        submitted_at,
    }
}

/// Build a historical record with the given disease label
#[must_use]
pub fn historical(id: &str, region: Region, disease: &str, confirmed_cases: u32) -> HistoricalRecord {
    HistoricalRecord {
        id: id.to_string(),
        date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
        region,
        district: None,
        disease: disease.to_string(),
        confirmed_cases,
        population: 100_000,
        deaths: 0,
        hospitalized: 0,
        imported_at: as_of(),
    }
}

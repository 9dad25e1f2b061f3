//! Report trend signal

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};

use crate::models::SymptomReport;

/// Binary momentum signal comparing two consecutive report windows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    /// More reports in the recent window than in the one before it
    Rising,
    /// As many or fewer reports in the recent window
    Falling,
}

impl Trend {
    /// Multiplier fed into the aggregator
    #[must_use]
    pub const fn multiplier(self) -> f64 {
        match self {
            Self::Rising => 1.2,
            Self::Falling => 0.8,
        }
    }

    #[must_use]
    pub const fn from_counts(recent: usize, prior: usize) -> Self {
        if recent > prior {
            Self::Rising
        } else {
            Self::Falling
        }
    }
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rising => write!(f, "rising"),
            Self::Falling => write!(f, "falling"),
        }
    }
}

/// Compare report counts in `[as_of - w, ..)` against `[as_of - 2w, as_of - w)`
/// where `w` is `window_days`. Reports outside both windows are ignored.
#[must_use]
pub fn trend_from_reports(
    reports: &[Arc<SymptomReport>],
    as_of: DateTime<Utc>,
    window_days: i64,
) -> Trend {
    let recent_start = as_of - Duration::days(window_days);
    let prior_start = recent_start - Duration::days(window_days);

    let recent = reports
        .iter()
        .filter(|r| r.submitted_at >= recent_start)
        .count();
    let prior = reports
        .iter()
        .filter(|r| r.submitted_at >= prior_start && r.submitted_at < recent_start)
        .count();

    Trend::from_counts(recent, prior)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::{AgeGroup, Region, Symptom};
    use chrono::{NaiveDate, TimeZone};

    fn as_of() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 10, 20, 12, 0, 0).unwrap()
    }

    fn reports_at(hours_ago: &[i64]) -> Vec<Arc<SymptomReport>> {
        hours_ago
            .iter()
            .enumerate()
            .map(|(i, hours)| {
                Arc::new(SymptomReport {
                    id: format!("sym{i}"),
                    anonymous_id: format!("ANO{i:08}"),
                    encrypted_payload: String::new(),
                    region: Region::Western,
                    district: None,
                    symptoms: [Symptom::Vomiting].into_iter().collect(),
                    onset_date: NaiveDate::from_ymd_opt(2025, 10, 1).unwrap(),
                    age_group: AgeGroup::From36To50,
                    severity: 2,
                    submitted_at: as_of() - Duration::hours(*hours),
                })
            })
            .collect()
    }

    #[test]
    fn test_rising_when_recent_exceeds_prior() {
        // 10 in days 1-7, 4 in days 8-14
        let mut hours: Vec<i64> = (0..10).map(|i| 12 + i * 12).collect();
        hours.extend((0..4).map(|i| 8 * 24 + i * 24));
        assert_eq!(trend_from_reports(&reports_at(&hours), as_of(), 7), Trend::Rising);
        assert!((Trend::Rising.multiplier() - 1.2).abs() < 1e-9);
    }

    #[test]
    fn test_equal_counts_are_falling() {
        let hours = [24, 9 * 24];
        assert_eq!(trend_from_reports(&reports_at(&hours), as_of(), 7), Trend::Falling);
    }

    #[test]
    fn test_reports_older_than_both_windows_ignored() {
        // one recent, two at 20 days ago
        let hours = [24, 20 * 24, 20 * 24];
        assert_eq!(trend_from_reports(&reports_at(&hours), as_of(), 7), Trend::Rising);
    }

    #[test]
    fn test_window_boundary_belongs_to_recent() {
        let hours = [7 * 24];
        assert_eq!(trend_from_reports(&reports_at(&hours), as_of(), 7), Trend::Rising);
    }
}

//! Demonstration data
//!
//! A handful of symptom reports spread over the last ten days and the
//! historical outbreak records the dashboard starts from.

use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};

use crate::models::{HistoricalRecord, SymptomReport};
use crate::reference::{AgeGroup, Region, Symptom};
use crate::submission::{ReporterPayload, encode_payload, generate_anonymous_id};

struct SampleReport {
    region: Region,
    district: &'static str,
    symptoms: &'static [Symptom],
    onset_days_ago: i64,
    age_group: AgeGroup,
    severity: u8,
    submitted_days_ago: i64,
}

const SAMPLE_REPORTS: &[SampleReport] = &[
    SampleReport {
        region: Region::GreaterAccra,
        district: "Accra Metro",
        symptoms: &[Symptom::Fever, Symptom::AbdominalPain, Symptom::Headache],
        onset_days_ago: 5,
        age_group: AgeGroup::From18To35,
        severity: 4,
        submitted_days_ago: 3,
    },
    SampleReport {
        region: Region::GreaterAccra,
        district: "Tema",
        symptoms: &[Symptom::SevereDiarrhea, Symptom::WateryStool, Symptom::Dehydration],
        onset_days_ago: 4,
        age_group: AgeGroup::From36To50,
        severity: 5,
        submitted_days_ago: 2,
    },
    SampleReport {
        region: Region::Ashanti,
        district: "Kumasi",
        symptoms: &[Symptom::Fever, Symptom::Vomiting, Symptom::Weakness],
        onset_days_ago: 8,
        age_group: AgeGroup::From13To17,
        severity: 3,
        submitted_days_ago: 6,
    },
    SampleReport {
        region: Region::Central,
        district: "Cape Coast",
        symptoms: &[
            Symptom::SevereDiarrhea,
            Symptom::Vomiting,
            Symptom::Dehydration,
            Symptom::RapidHeartbeat,
        ],
        onset_days_ago: 3,
        age_group: AgeGroup::From6To12,
        severity: 4,
        submitted_days_ago: 1,
    },
    SampleReport {
        region: Region::GreaterAccra,
        district: "Madina",
        symptoms: &[Symptom::Fever, Symptom::Headache, Symptom::MuscleAches, Symptom::Weakness],
        onset_days_ago: 2,
        age_group: AgeGroup::From18To35,
        severity: 3,
        submitted_days_ago: 1,
    },
    SampleReport {
        region: Region::Volta,
        district: "Ho",
        symptoms: &[Symptom::WateryStool, Symptom::SevereDiarrhea, Symptom::Dehydration],
        onset_days_ago: 6,
        age_group: AgeGroup::From36To50,
        severity: 5,
        submitted_days_ago: 4,
    },
    SampleReport {
        region: Region::GreaterAccra,
        district: "Accra Metro",
        symptoms: &[Symptom::Fever, Symptom::AbdominalPain, Symptom::RoseSpots, Symptom::Weakness],
        onset_days_ago: 7,
        age_group: AgeGroup::From18To35,
        severity: 4,
        submitted_days_ago: 5,
    },
    SampleReport {
        region: Region::Ashanti,
        district: "Obuasi",
        symptoms: &[Symptom::Vomiting, Symptom::WateryStool, Symptom::Nausea],
        onset_days_ago: 10,
        age_group: AgeGroup::Over50,
        severity: 3,
        submitted_days_ago: 9,
    },
    SampleReport {
        region: Region::Central,
        district: "Winneba",
        symptoms: &[Symptom::SevereDiarrhea, Symptom::Dehydration, Symptom::RapidHeartbeat],
        onset_days_ago: 4,
        age_group: AgeGroup::From18To35,
        severity: 5,
        submitted_days_ago: 3,
    },
    SampleReport {
        region: Region::GreaterAccra,
        district: "Tema",
        symptoms: &[Symptom::Fever, Symptom::Headache, Symptom::Constipation, Symptom::LossOfAppetite],
        onset_days_ago: 9,
        age_group: AgeGroup::From36To50,
        severity: 3,
        submitted_days_ago: 8,
    },
];

/// Sample symptom reports submitted relative to `as_of`
#[must_use]
pub fn sample_reports(as_of: DateTime<Utc>) -> Vec<SymptomReport> {
    let mut rng = rand::rng();
    let anonymous_payload = ReporterPayload {
        user_id: None,
        actual_location: None,
    };
    let encrypted_payload = encode_payload(&anonymous_payload).unwrap_or_default();

    SAMPLE_REPORTS
        .iter()
        .enumerate()
        .map(|(i, sample)| SymptomReport {
            id: format!("sym{}", i + 1),
            anonymous_id: generate_anonymous_id(&mut rng),
            encrypted_payload: encrypted_payload.clone(),
            region: sample.region,
            district: Some(sample.district.to_string()),
            symptoms: sample.symptoms.iter().copied().collect(),
            onset_date: (as_of - Duration::days(sample.onset_days_ago)).date_naive(),
            age_group: sample.age_group,
            severity: sample.severity,
            submitted_at: as_of - Duration::days(sample.submitted_days_ago),
        })
        .collect()
}

/// Sample historical outbreak records
#[must_use]
pub fn sample_historical() -> Vec<HistoricalRecord> {
    let imported_at = Utc
        .with_ymd_and_hms(2025, 10, 1, 0, 0, 0)
        .single()
        .unwrap_or_default();

    [
        ("hist1", (2024, 1, 15), Region::GreaterAccra, "Accra Metro", "Typhoid", 45, 2_000_000, 2, 30),
        ("hist2", (2024, 2, 10), Region::GreaterAccra, "Tema", "Cholera", 28, 500_000, 1, 20),
        ("hist3", (2024, 3, 5), Region::Ashanti, "Kumasi Metro", "Typhoid", 32, 2_000_000, 1, 25),
        ("hist4", (2024, 4, 20), Region::Central, "Cape Coast", "Cholera", 18, 200_000, 0, 15),
        ("hist5", (2024, 6, 15), Region::Volta, "Ho", "Cholera", 35, 300_000, 2, 28),
    ]
    .into_iter()
    .filter_map(
        |(id, (y, m, d), region, district, disease, cases, population, deaths, hospitalized)| {
            Some(HistoricalRecord {
                id: id.to_string(),
                date: NaiveDate::from_ymd_opt(y, m, d)?,
                region,
                district: Some(district.to_string()),
                disease: disease.to_string(),
                confirmed_cases: cases,
                population,
                deaths,
                hospitalized,
                imported_at,
            })
        },
    )
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Disease;

    #[test]
    fn test_sample_reports_are_valid_and_recent() {
        let as_of = Utc.with_ymd_and_hms(2025, 10, 20, 12, 0, 0).unwrap();
        let reports = sample_reports(as_of);

        assert_eq!(reports.len(), 10);
        for report in &reports {
            assert!(report.validate().is_ok());
            assert!(report.submitted_at >= as_of - Duration::days(30));
        }
    }

    #[test]
    fn test_sample_historical() {
        let records = sample_historical();
        assert_eq!(records.len(), 5);
        assert!(
            records
                .iter()
                .all(|r| Disease::ALL.iter().any(|d| r.is_for(*d)))
        );
    }
}

//! Crowd-sourced symptom reports

use std::collections::BTreeSet;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::common::traits::EntityModel;
use crate::error::{OutbreakError, Result};
use crate::reference::{AgeGroup, Region, Symptom};

/// Lowest accepted severity
pub const MIN_SEVERITY: u8 = 1;
/// Highest accepted severity
pub const MAX_SEVERITY: u8 = 5;
/// Severity at which the symptom weight sum is left unscaled
pub const NEUTRAL_SEVERITY: u8 = 3;

/// An anonymous symptom report. Immutable once stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymptomReport {
    pub id: String,
    pub anonymous_id: String,
    /// Base64 placeholder payload, see [`crate::submission`]
    #[serde(rename = "encrypted")]
    pub encrypted_payload: String,
    pub region: Region,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub district: Option<String>,
    pub symptoms: BTreeSet<Symptom>,
    /// Date the symptoms started
    #[serde(rename = "date")]
    pub onset_date: NaiveDate,
    pub age_group: AgeGroup,
    /// Self-assessed severity, 1-5
    pub severity: u8,
    pub submitted_at: DateTime<Utc>,
}

impl SymptomReport {
    /// Check the non-empty symptom set and severity range
    pub fn validate(&self) -> Result<()> {
        if self.symptoms.is_empty() {
            return Err(OutbreakError::InvalidReport(format!(
                "report {} has no symptoms",
                self.id
            )));
        }
        if !(MIN_SEVERITY..=MAX_SEVERITY).contains(&self.severity) {
            return Err(OutbreakError::InvalidReport(format!(
                "report {} has severity {} outside {MIN_SEVERITY}-{MAX_SEVERITY}",
                self.id, self.severity
            )));
        }
        Ok(())
    }

    /// Whether the report was submitted at or after `cutoff`
    #[must_use]
    pub fn submitted_since(&self, cutoff: DateTime<Utc>) -> bool {
        self.submitted_at >= cutoff
    }
}

impl EntityModel for SymptomReport {
    type Id = String;

    fn id(&self) -> &String {
        &self.id
    }
}

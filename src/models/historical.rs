//! Historical outbreak records imported in bulk

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::common::traits::EntityModel;
use crate::models::Disease;
use crate::reference::Region;

/// A past confirmed-case record for one region and disease
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoricalRecord {
    pub id: String,
    pub date: NaiveDate,
    pub region: Region,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub district: Option<String>,
    /// Disease label as imported, normally `Typhoid` or `Cholera`
    pub disease: String,
    pub confirmed_cases: u32,
    pub population: u64,
    #[serde(default)]
    pub deaths: u32,
    #[serde(default)]
    pub hospitalized: u32,
    pub imported_at: DateTime<Utc>,
}

impl HistoricalRecord {
    /// Whether this record concerns `disease`, compared case-insensitively
    #[must_use]
    pub fn is_for(&self, disease: Disease) -> bool {
        disease.matches_label(&self.disease)
    }
}

impl EntityModel for HistoricalRecord {
    type Id = String;

    fn id(&self) -> &String {
        &self.id
    }
}

//! Symptom report submission
//!
//! Validates a report draft, assigns it an anonymous identity, appends it to
//! storage and refreshes the prediction snapshot.
//!
//! The reporter payload is base64-encoded JSON. This is a reversible
//! placeholder and provides no confidentiality; replace it with authenticated
//! encryption before the payload carries anything sensitive.

use std::collections::BTreeSet;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use chrono::{DateTime, NaiveDate, Utc};
use rand::Rng;
use rand::distr::Alphanumeric;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::algorithm::prediction::PredictionCache;
use crate::config::EngineConfig;
use crate::error::Result;
use crate::models::{PredictionSnapshot, SymptomReport};
use crate::reference::{AgeGroup, Region, Symptom};
use crate::storage::{self, Storage};

/// Prefix of every anonymous identifier
pub const ANONYMOUS_ID_PREFIX: &str = "ANO";
/// Number of random characters after the prefix
const ANONYMOUS_ID_LEN: usize = 8;

/// A report as entered by the reporter, before it is stored
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportDraft {
    pub region: Region,
    pub district: Option<String>,
    pub symptoms: BTreeSet<Symptom>,
    pub onset_date: NaiveDate,
    pub age_group: AgeGroup,
    pub severity: u8,
    /// Signed-in user, if any. Only ever stored inside the payload
    pub user_id: Option<String>,
}

/// Reporter details carried in the encoded payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReporterPayload {
    pub user_id: Option<String>,
    pub actual_location: Option<String>,
}

/// Outcome of a submission
#[derive(Debug, Clone)]
pub struct SubmissionReceipt {
    pub report: SymptomReport,
    pub snapshot: PredictionSnapshot,
}

/// Generate an identifier of the form `ANO` followed by 8 alphanumeric characters
pub fn generate_anonymous_id<R: Rng>(rng: &mut R) -> String {
    let suffix: String = (0..ANONYMOUS_ID_LEN)
        .map(|_| char::from(rng.sample(Alphanumeric)))
        .collect();
    format!("{ANONYMOUS_ID_PREFIX}{suffix}")
}

/// Encode reporter details into the placeholder payload
pub fn encode_payload(payload: &ReporterPayload) -> Result<String> {
    let json = serde_json::to_vec(payload)?;
    Ok(STANDARD.encode(json))
}

/// Decode a placeholder payload. Returns `None` if it is not valid
#[must_use]
pub fn decode_payload(encoded: &str) -> Option<ReporterPayload> {
    let bytes = STANDARD.decode(encoded.trim()).ok()?;
    serde_json::from_slice(&bytes).ok()
}

/// Build a validated report from a draft
pub fn build_report<R: Rng>(
    draft: ReportDraft,
    rng: &mut R,
    as_of: DateTime<Utc>,
) -> Result<SymptomReport> {
    let payload = ReporterPayload {
        user_id: draft.user_id,
        actual_location: draft.district.clone(),
    };

    let report = SymptomReport {
        id: format!("sym_{}", Uuid::new_v4()),
        anonymous_id: generate_anonymous_id(rng),
        encrypted_payload: encode_payload(&payload)?,
        region: draft.region,
        district: draft.district.filter(|d| !d.trim().is_empty()),
        symptoms: draft.symptoms,
        onset_date: draft.onset_date,
        age_group: draft.age_group,
        severity: draft.severity,
        submitted_at: as_of,
    };
    report.validate()?;
    Ok(report)
}

/// Submit a report now
pub fn submit_report<S: Storage + ?Sized>(
    storage: &mut S,
    draft: ReportDraft,
    config: &EngineConfig,
) -> Result<SubmissionReceipt> {
    submit_report_at(storage, draft, config, Utc::now())
}

/// Validate and store a report submitted at `as_of`, then recompute predictions
pub fn submit_report_at<S: Storage + ?Sized>(
    storage: &mut S,
    draft: ReportDraft,
    config: &EngineConfig,
    as_of: DateTime<Utc>,
) -> Result<SubmissionReceipt> {
    let report = build_report(draft, &mut rand::rng(), as_of)?;
    storage::append_reports(storage, [report.clone()])?;
    log::info!(
        "Stored symptom report {} for {} ({} symptoms)",
        report.anonymous_id,
        report.region,
        report.symptoms.len()
    );

    let snapshot = PredictionCache::new(storage, config.clone()).recompute_all_at(as_of)?;
    Ok(SubmissionReceipt { report, snapshot })
}

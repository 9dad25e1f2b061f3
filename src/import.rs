//! Historical outbreak data import
//!
//! Parses CSV files of past confirmed-case counts into a preview of valid
//! rows plus per-row errors, then appends the valid rows to storage and
//! refreshes the prediction snapshot.
//!
//! Required columns: `Date`, `Region`, `Disease`, `Confirmed_Cases`,
//! `Population`. Optional columns: `District`, `Deaths`, `Hospitalized`.

use std::io::Read;

use chrono::{DateTime, NaiveDate, Utc};
use csv::{ReaderBuilder, StringRecord, Trim};
use uuid::Uuid;

use crate::algorithm::prediction::PredictionCache;
use crate::config::EngineConfig;
use crate::error::{OutbreakError, Result};
use crate::models::{Disease, HistoricalRecord, PredictionSnapshot};
use crate::reference::Region;
use crate::storage::{self, Storage};

/// Columns every import file must have
pub const REQUIRED_HEADERS: [&str; 5] = ["Date", "Region", "Disease", "Confirmed_Cases", "Population"];

const DATE_FORMAT: &str = "%Y-%m-%d";

/// One validated CSV row, not yet stored
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoricalRecordDraft {
    pub date: NaiveDate,
    pub region: Region,
    pub district: Option<String>,
    pub disease: Disease,
    pub confirmed_cases: u32,
    pub population: u64,
    pub deaths: u32,
    pub hospitalized: u32,
}

impl HistoricalRecordDraft {
    /// Turn the draft into a stored record imported at `imported_at`
    #[must_use]
    pub fn into_record(self, imported_at: DateTime<Utc>) -> HistoricalRecord {
        HistoricalRecord {
            id: format!("hist_{}", Uuid::new_v4()),
            date: self.date,
            region: self.region,
            district: self.district,
            disease: self.disease.label().to_string(),
            confirmed_cases: self.confirmed_cases,
            population: self.population,
            deaths: self.deaths,
            hospitalized: self.hospitalized,
            imported_at,
        }
    }
}

/// Valid rows and row-level errors from one CSV file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportPreview {
    pub rows: Vec<HistoricalRecordDraft>,
    pub errors: Vec<String>,
}

/// Outcome of an import
#[derive(Debug, Clone)]
pub struct ImportReceipt {
    pub imported: usize,
    pub snapshot: PredictionSnapshot,
}

/// Column positions resolved from the header row
struct Columns {
    date: usize,
    region: usize,
    disease: usize,
    confirmed_cases: usize,
    population: usize,
    district: Option<usize>,
    deaths: Option<usize>,
    hospitalized: Option<usize>,
}

impl Columns {
    fn resolve(headers: &StringRecord) -> Result<Self> {
        if headers.iter().all(str::is_empty) {
            return Err(OutbreakError::Import("CSV file is empty or invalid".to_string()));
        }

        let position = |name: &str| headers.iter().position(|h| h == name);
        let missing: Vec<&str> = REQUIRED_HEADERS
            .iter()
            .copied()
            .filter(|name| position(name).is_none())
            .collect();
        if !missing.is_empty() {
            return Err(OutbreakError::Import(format!(
                "Missing required columns: {}",
                missing.join(", ")
            )));
        }

        let required = |name: &str| {
            position(name).ok_or_else(|| OutbreakError::Import(format!("Missing required columns: {name}")))
        };

        Ok(Self {
            date: required("Date")?,
            region: required("Region")?,
            disease: required("Disease")?,
            confirmed_cases: required("Confirmed_Cases")?,
            population: required("Population")?,
            district: position("District"),
            deaths: position("Deaths"),
            hospitalized: position("Hospitalized"),
        })
    }
}

fn field(record: &StringRecord, index: usize) -> &str {
    record.get(index).unwrap_or("")
}

fn optional_field(record: &StringRecord, index: Option<usize>) -> Option<&str> {
    index.map(|i| field(record, i)).filter(|v| !v.is_empty())
}

/// Validate one data row. `row` is the 1-based data row number
fn parse_row(
    columns: &Columns,
    record: &StringRecord,
    row: usize,
) -> std::result::Result<HistoricalRecordDraft, String> {
    let date = field(record, columns.date);
    let region = field(record, columns.region);
    let disease = field(record, columns.disease);
    let confirmed_cases = field(record, columns.confirmed_cases);
    let population = field(record, columns.population);

    if [date, region, disease, confirmed_cases, population]
        .iter()
        .any(|v| v.is_empty())
    {
        return Err(format!("Row {row}: Missing required fields"));
    }

    let region: Region = region
        .parse()
        .map_err(|_| format!("Row {row}: Invalid region \"{region}\""))?;

    let disease = Disease::ALL
        .into_iter()
        .find(|d| d.label() == disease)
        .ok_or_else(|| format!("Row {row}: Disease must be \"Typhoid\" or \"Cholera\""))?;

    let confirmed_cases: u32 = confirmed_cases
        .parse()
        .map_err(|_| format!("Row {row}: Invalid confirmed cases"))?;

    let population: u64 = population
        .parse()
        .map_err(|_| format!("Row {row}: Invalid population"))?;

    let date = NaiveDate::parse_from_str(date, DATE_FORMAT)
        .map_err(|_| format!("Row {row}: Invalid date \"{date}\""))?;

    let count = |index| {
        optional_field(record, index)
            .and_then(|v| v.parse().ok())
            .unwrap_or(0)
    };

    Ok(HistoricalRecordDraft {
        date,
        region,
        district: optional_field(record, columns.district).map(str::to_string),
        disease,
        confirmed_cases,
        population,
        deaths: count(columns.deaths),
        hospitalized: count(columns.hospitalized),
    })
}

/// Parse a historical data CSV.
///
/// Header problems fail the whole file. Row problems are collected in
/// [`ImportPreview::errors`] and the row is skipped.
pub fn parse_historical_csv<R: Read>(reader: R) -> Result<ImportPreview> {
    let mut csv_reader = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_reader(reader);

    let columns = Columns::resolve(csv_reader.headers()?)?;
    let mut preview = ImportPreview::default();

    for (i, record) in csv_reader.records().enumerate() {
        let row = i + 1;
        let record = match record {
            Ok(record) => record,
            Err(e) if matches!(e.kind(), csv::ErrorKind::Utf8 { .. }) => {
                preview.errors.push(format!("Row {row}: Invalid text encoding"));
                continue;
            }
            Err(e) => return Err(e.into()),
        };
        match parse_row(&columns, &record, row) {
            Ok(draft) => preview.rows.push(draft),
            Err(message) => preview.errors.push(message),
        }
    }

    log::info!(
        "Parsed historical CSV: {} valid rows, {} rejected",
        preview.rows.len(),
        preview.errors.len()
    );
    Ok(preview)
}

/// Import the valid rows of a preview now
pub fn import_historical<S: Storage + ?Sized>(
    storage: &mut S,
    preview: ImportPreview,
    config: &EngineConfig,
) -> Result<ImportReceipt> {
    import_historical_at(storage, preview, config, Utc::now())
}

/// Append the valid rows of a preview to storage and recompute predictions
pub fn import_historical_at<S: Storage + ?Sized>(
    storage: &mut S,
    preview: ImportPreview,
    config: &EngineConfig,
    as_of: DateTime<Utc>,
) -> Result<ImportReceipt> {
    if preview.rows.is_empty() {
        return Err(OutbreakError::Import("No valid data to import".to_string()));
    }

    let records: Vec<HistoricalRecord> = preview
        .rows
        .into_iter()
        .map(|draft| draft.into_record(as_of))
        .collect();
    let imported = records.len();
    storage::append_historical(storage, records)?;
    log::info!("Imported {imported} historical records");

    let snapshot = PredictionCache::new(storage, config.clone()).recompute_all_at(as_of)?;
    Ok(ImportReceipt { imported, snapshot })
}

//! Symptom report collection

use std::sync::Arc;

use chrono::{DateTime, Utc};
use rustc_hash::FxHashMap;

use crate::collections::GenericCollection;
use crate::common::traits::{LookupCollection, ModelCollection, ReportSource};
use crate::models::SymptomReport;
use crate::reference::Region;

/// Symptom reports indexed by region
#[derive(Debug, Default)]
pub struct SymptomReportCollection {
    inner: GenericCollection<SymptomReport>,
    reports_by_region: FxHashMap<Region, Vec<Arc<SymptomReport>>>,
}

impl SymptomReportCollection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_reports(reports: Vec<SymptomReport>) -> Self {
        let mut collection = Self::new();
        collection.add_all(reports);
        collection
    }

    /// All reports for a region regardless of submission time
    #[must_use]
    pub fn for_region(&self, region: Region) -> Vec<Arc<SymptomReport>> {
        self.reports_by_region
            .get(&region)
            .cloned()
            .unwrap_or_default()
    }

    /// Reports submitted at or after `cutoff`, across all regions
    #[must_use]
    pub fn submitted_since(&self, cutoff: DateTime<Utc>) -> Vec<Arc<SymptomReport>> {
        self.inner.filter(|report| report.submitted_since(cutoff))
    }

    #[must_use]
    pub fn raw(&self) -> &GenericCollection<SymptomReport> {
        &self.inner
    }

    fn rebuild_region_index(&mut self) {
        self.reports_by_region = self
            .inner
            .create_multi_lookup(|report| report.region)
            .into_iter()
            .collect();
    }
}

impl ModelCollection<SymptomReport> for SymptomReportCollection {
    fn add(&mut self, report: SymptomReport) {
        let replaces = self.inner.contains(&report.id);
        let report = self.inner.insert(report);
        if replaces {
            self.rebuild_region_index();
        } else {
            self.reports_by_region
                .entry(report.region)
                .or_default()
                .push(report);
        }
    }

    fn get(&self, id: &String) -> Option<Arc<SymptomReport>> {
        self.inner.get(id)
    }

    fn all(&self) -> Vec<Arc<SymptomReport>> {
        self.inner.all()
    }

    fn count(&self) -> usize {
        self.inner.count()
    }

    fn filter<F>(&self, predicate: F) -> Vec<Arc<SymptomReport>>
    where
        F: Fn(&SymptomReport) -> bool,
    {
        self.inner.filter(predicate)
    }
}

impl ReportSource for SymptomReportCollection {
    fn reports_since(&self, region: Region, cutoff: DateTime<Utc>) -> Vec<Arc<SymptomReport>> {
        self.reports_by_region
            .get(&region)
            .map(|reports| {
                reports
                    .iter()
                    .filter(|report| report.submitted_since(cutoff))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }
}

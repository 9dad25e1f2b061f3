//! Historical outbreak record collection

use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::collections::GenericCollection;
use crate::common::traits::{HistoricalSource, LookupCollection, ModelCollection};
use crate::models::{Disease, HistoricalRecord};
use crate::reference::Region;

/// Historical records indexed by region
#[derive(Debug, Default)]
pub struct HistoricalRecordCollection {
    inner: GenericCollection<HistoricalRecord>,
    records_by_region: FxHashMap<Region, Vec<Arc<HistoricalRecord>>>,
}

impl HistoricalRecordCollection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_records(records: Vec<HistoricalRecord>) -> Self {
        let mut collection = Self::new();
        collection.add_all(records);
        collection
    }

    #[must_use]
    pub fn raw(&self) -> &GenericCollection<HistoricalRecord> {
        &self.inner
    }

    fn rebuild_region_index(&mut self) {
        self.records_by_region = self
            .inner
            .create_multi_lookup(|record| record.region)
            .into_iter()
            .collect();
    }
}

impl ModelCollection<HistoricalRecord> for HistoricalRecordCollection {
    fn add(&mut self, record: HistoricalRecord) {
        let replaces = self.inner.contains(&record.id);
        let record = self.inner.insert(record);
        if replaces {
            self.rebuild_region_index();
        } else {
            self.records_by_region
                .entry(record.region)
                .or_default()
                .push(record);
        }
    }

    fn get(&self, id: &String) -> Option<Arc<HistoricalRecord>> {
        self.inner.get(id)
    }

    fn all(&self) -> Vec<Arc<HistoricalRecord>> {
        self.inner.all()
    }

    fn count(&self) -> usize {
        self.inner.count()
    }

    fn filter<F>(&self, predicate: F) -> Vec<Arc<HistoricalRecord>>
    where
        F: Fn(&HistoricalRecord) -> bool,
    {
        self.inner.filter(predicate)
    }
}

impl HistoricalSource for HistoricalRecordCollection {
    fn records_for(&self, region: Region, disease: Disease) -> Vec<Arc<HistoricalRecord>> {
        self.records_by_region
            .get(&region)
            .map(|records| {
                records
                    .iter()
                    .filter(|record| record.is_for(disease))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }
}

//! In-memory model collections
//!
//! The generic collection keeps models in insertion order behind `Arc`s.
//! The specialized collections add a per-region index and implement the
//! read-only source traits the prediction engine consumes.

pub mod historical;
pub mod report;

pub use historical::HistoricalRecordCollection;
pub use report::SymptomReportCollection;

use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::common::traits::{EntityModel, LookupCollection, ModelCollection};

/// Generic model collection implementation
#[derive(Debug)]
pub struct GenericCollection<T: EntityModel> {
    /// Models in insertion order
    items: Vec<Arc<T>>,
    /// Position of each model in `items`, by ID
    index: FxHashMap<T::Id, usize>,
}

impl<T: EntityModel> GenericCollection<T> {
    /// Create a new empty collection
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            index: FxHashMap::default(),
        }
    }

    /// Add a model and return the shared handle stored in the collection.
    ///
    /// A model whose ID is already present replaces the earlier one in place.
    pub fn insert(&mut self, model: T) -> Arc<T> {
        let id = model.id().clone();
        let model = Arc::new(model);
        match self.index.get(&id) {
            Some(&pos) => self.items[pos] = Arc::clone(&model),
            None => {
                self.index.insert(id, self.items.len());
                self.items.push(Arc::clone(&model));
            }
        }
        model
    }

    /// Iterate over the models in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Arc<T>> {
        self.items.iter()
    }
}

impl<T: EntityModel> Default for GenericCollection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: EntityModel> ModelCollection<T> for GenericCollection<T> {
    fn add(&mut self, model: T) {
        self.insert(model);
    }

    fn get(&self, id: &T::Id) -> Option<Arc<T>> {
        self.index.get(id).map(|&pos| Arc::clone(&self.items[pos]))
    }

    fn all(&self) -> Vec<Arc<T>> {
        self.items.clone()
    }

    fn count(&self) -> usize {
        self.items.len()
    }

    fn filter<F>(&self, predicate: F) -> Vec<Arc<T>>
    where
        F: Fn(&T) -> bool,
    {
        self.items
            .iter()
            .filter(|model| predicate(model))
            .cloned()
            .collect()
    }
}

impl<T: EntityModel> LookupCollection<T> for GenericCollection<T> {}

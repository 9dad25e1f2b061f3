//! Standardized collection traits
//!
//! These traits give the report and historical record collections a common
//! interface for adding, getting and filtering items.

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::Arc;

/// A model with a stable identifier
pub trait EntityModel: Clone + Send + Sync + std::fmt::Debug {
    /// Identifier type
    type Id: Eq + Hash + Clone + Send + Sync + std::fmt::Debug;

    /// The model's identifier
    fn id(&self) -> &Self::Id;
}

/// Core trait for model collections
pub trait ModelCollection<T: EntityModel>: Send + Sync + std::fmt::Debug {
    /// Add a model to the collection
    fn add(&mut self, model: T);

    /// Get a model by its identifier
    fn get(&self, id: &T::Id) -> Option<Arc<T>>;

    /// Get all models in the collection, in insertion order
    fn all(&self) -> Vec<Arc<T>>;

    /// Count the total number of models in the collection
    fn count(&self) -> usize;

    /// Filter models by a predicate function
    fn filter<F>(&self, predicate: F) -> Vec<Arc<T>>
    where
        F: Fn(&T) -> bool;

    /// Check if the collection contains a model with the given ID
    fn contains(&self, id: &T::Id) -> bool {
        self.get(id).is_some()
    }

    /// Whether the collection holds no models
    fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// Add multiple models to the collection
    fn add_all(&mut self, models: Vec<T>) {
        for model in models {
            self.add(model);
        }
    }
}

/// Trait for creating lookups from collections
pub trait LookupCollection<T: EntityModel>: ModelCollection<T> {
    /// Create a lookup map using multiple values per key
    fn create_multi_lookup<K, F>(&self, key_fn: F) -> HashMap<K, Vec<Arc<T>>>
    where
        K: Eq + Hash,
        F: Fn(&T) -> K,
    {
        let mut lookup = HashMap::new();
        for model in self.all() {
            let key = key_fn(&model);
            lookup.entry(key).or_insert_with(Vec::new).push(model);
        }
        lookup
    }
}

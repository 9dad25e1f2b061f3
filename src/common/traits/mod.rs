//! Common traits used across the codebase

pub mod collection;
pub mod source;

// Re-export collection traits
pub use collection::{EntityModel, LookupCollection, ModelCollection};

// Re-export data source traits
pub use source::{HistoricalSource, ReportSource};

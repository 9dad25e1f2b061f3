//! Common utilities and traits
//!
//! This module provides the traits shared between the collections, the
//! storage layer and the prediction algorithm.

pub mod traits;

// Re-export common traits for easier imports
pub use traits::*;

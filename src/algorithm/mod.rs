//! Algorithm implementations for outbreak risk estimation
//!
//! This module contains the prediction engine: the factor calculators, the
//! probability aggregator, the snapshot cache and the risk classifier.

pub mod prediction;

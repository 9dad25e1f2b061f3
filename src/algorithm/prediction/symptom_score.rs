//! Disease-specific symptom score

use crate::models::{Disease, NEUTRAL_SEVERITY};
use crate::reference::{Symptom, symptom_weight};

/// Score a set of symptoms for one disease.
///
/// The weight sum is scaled by `severity / 3`, so severity 3 leaves it
/// unchanged. The result is unbounded; bounding happens at aggregation.
#[must_use]
pub fn symptom_score<'a, I>(symptoms: I, severity: u8, disease: Disease) -> f64
where
    I: IntoIterator<Item = &'a Symptom>,
{
    let weight_sum: u32 = symptoms
        .into_iter()
        .map(|symptom| u32::from(symptom_weight(*symptom, disease)))
        .sum();

    f64::from(weight_sum) * (f64::from(severity) / f64::from(NEUTRAL_SEVERITY))
}

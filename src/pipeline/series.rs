//! Series builder: deduplicated period axis and aligned values

use crate::types::{Observation, Period};
use hashbrown::HashSet;

/// Distinct period labels, in first-occurrence order
pub type PeriodAxis = Vec<Period>;

/// Values aligned 1:1 with a [`PeriodAxis`]; `None` marks a missing value
pub type ValueSeries = Vec<Option<f64>>;

/// Build the period axis and its aligned value series
///
/// Each period takes the value of the *first* observation carrying it.
/// Later observations for an already-seen period are ignored.
pub fn build(filtered: &[&Observation]) -> (PeriodAxis, ValueSeries) {
    let axis = period_axis(filtered);
    let values = axis
        .iter()
        .map(|period| value_for(filtered, period))
        .collect();
    (axis, values)
}

/// Distinct periods of `filtered`, first occurrence wins
pub fn period_axis(filtered: &[&Observation]) -> PeriodAxis {
    let mut seen = HashSet::new();
    let mut axis = Vec::new();

    for obs in filtered {
        if seen.insert(obs.period.as_str()) {
            axis.push(obs.period.clone());
        }
    }

    axis
}

/// Value of the first observation for `period`, if any
pub fn value_for(filtered: &[&Observation], period: &str) -> Option<f64> {
    filtered
        .iter()
        .find(|obs| obs.period == period)
        .map(|obs| obs.value)
}

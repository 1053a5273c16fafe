//! Indicator filter: narrows the record set to one currency

use crate::currency::Currency;
use crate::types::Observation;

/// Select the observations whose indicator name matches `currency`
///
/// Matching is exact string equality (case- and whitespace-sensitive).
/// The relative order of `records` is preserved.
pub fn filter(records: &[Observation], currency: Currency) -> Vec<&Observation> {
    let indicator = currency.indicator_name();
    records
        .iter()
        .filter(|obs| obs.indicator_name == indicator)
        .collect()
}

/// Raw value sequence of a filtered series, duplicates included
pub fn values(filtered: &[&Observation]) -> Vec<f64> {
    filtered.iter().map(|obs| obs.value).collect()
}

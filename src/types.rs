//! Core types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Period label an observation is attributed to (e.g. "Feb 2023")
pub type Period = String;

/// Exchange rate value, quoted in roubles
pub type Rate = f64;

/// One raw exchange-rate data point
///
/// Field names on the wire follow the upstream API: `month` carries the
/// period label and `indicator` the indicator name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub date: NaiveDate,
    #[serde(rename = "month")]
    pub period: Period,
    #[serde(rename = "indicator")]
    pub indicator_name: String,
    pub value: Rate,
}

impl Observation {
    /// Create a new observation
    pub fn new(
        date: NaiveDate,
        period: impl Into<Period>,
        indicator_name: impl Into<String>,
        value: Rate,
    ) -> Self {
        Self {
            date,
            period: period.into(),
            indicator_name: indicator_name.into(),
            value,
        }
    }
}

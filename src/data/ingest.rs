//! Ingestion boundary: wire records validated into observations
//!
//! Malformed records (missing fields, wrong types, non-finite values,
//! unparseable dates) are skipped and reported, never passed downstream.
//! Only a structurally unreadable payload is an error.

use crate::error::{RateChartError, Result};
use crate::types::Observation;
use chrono::{DateTime, NaiveDate};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::io::Read;

/// Wire column names, shared by JSON and CSV payloads
const REQUIRED_FIELDS: [&str; 4] = ["date", "month", "indicator", "value"];

/// A record skipped during ingestion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedRecord {
    /// Position in the incoming payload
    pub index: usize,
    pub reason: String,
}

impl From<RejectedRecord> for RateChartError {
    fn from(rejected: RejectedRecord) -> Self {
        RateChartError::InvalidRecord {
            index: rejected.index,
            reason: rejected.reason,
        }
    }
}

/// Outcome of ingesting one payload
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IngestReport {
    /// Accepted observations, arrival order preserved
    pub records: Vec<Observation>,
    pub rejected: Vec<RejectedRecord>,
}

impl IngestReport {
    /// True when no record was rejected
    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty()
    }

    fn push(&mut self, index: usize, outcome: std::result::Result<Observation, String>) {
        match outcome {
            Ok(obs) => self.records.push(obs),
            Err(reason) => {
                log::warn!("Skipping malformed record {}: {}", index, reason);
                self.rejected.push(RejectedRecord { index, reason });
            }
        }
    }
}

/// Parse a JSON array of `{date, month, indicator, value}` objects
pub fn parse_json(text: &str) -> Result<IngestReport> {
    let payload: Value = serde_json::from_str(text)?;
    let Value::Array(items) = payload else {
        return Err(RateChartError::DataError(
            "Expected a JSON array of records".to_string(),
        ));
    };

    let mut report = IngestReport::default();
    for (index, item) in items.iter().enumerate() {
        report.push(index, record_from_json(item));
    }
    Ok(report)
}

fn record_from_json(item: &Value) -> std::result::Result<Observation, String> {
    let fields = item
        .as_object()
        .ok_or_else(|| "record is not an object".to_string())?;

    let date = parse_date(str_field(fields, "date")?)?;
    let period = str_field(fields, "month")?;
    let indicator = str_field(fields, "indicator")?;
    let value = fields
        .get("value")
        .ok_or_else(|| "missing field `value`".to_string())?
        .as_f64()
        .ok_or_else(|| "field `value` is not a number".to_string())?;

    observation(date, period, indicator, value)
}

fn str_field<'a>(fields: &'a Map<String, Value>, name: &str) -> std::result::Result<&'a str, String> {
    fields
        .get(name)
        .ok_or_else(|| format!("missing field `{}`", name))?
        .as_str()
        .ok_or_else(|| format!("field `{}` is not a string", name))
}

#[derive(Debug, Deserialize)]
struct CsvRow {
    date: String,
    month: String,
    indicator: String,
    value: String,
}

/// Parse CSV with a `date,month,indicator,value` header row
pub fn parse_csv<R: Read>(reader: R) -> Result<IngestReport> {
    let mut rdr = csv::ReaderBuilder::new().has_headers(true).from_reader(reader);

    let headers = rdr.headers()?.clone();
    for field in REQUIRED_FIELDS {
        if !headers.iter().any(|h| h == field) {
            return Err(RateChartError::DataError(format!(
                "CSV header is missing column `{}`",
                field
            )));
        }
    }

    let mut report = IngestReport::default();
    for (index, row) in rdr.deserialize::<CsvRow>().enumerate() {
        let outcome = row
            .map_err(|e| e.to_string())
            .and_then(|row| record_from_csv(&row));
        report.push(index, outcome);
    }
    Ok(report)
}

fn record_from_csv(row: &CsvRow) -> std::result::Result<Observation, String> {
    let date = parse_date(&row.date)?;
    let value: f64 = row
        .value
        .trim()
        .parse()
        .map_err(|_| format!("field `value` is not a number: {:?}", row.value))?;
    observation(date, &row.month, &row.indicator, value)
}

fn observation(
    date: NaiveDate,
    period: &str,
    indicator: &str,
    value: f64,
) -> std::result::Result<Observation, String> {
    if !value.is_finite() {
        return Err(format!("field `value` is not finite: {}", value));
    }
    Ok(Observation::new(date, period, indicator, value))
}

/// Accepts `YYYY-MM-DD`, RFC 3339 timestamps and `DD.MM.YYYY`
pub fn parse_date(text: &str) -> std::result::Result<NaiveDate, String> {
    let text = text.trim();
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .or_else(|_| DateTime::parse_from_rfc3339(text).map(|dt| dt.date_naive()))
        .or_else(|_| NaiveDate::parse_from_str(text, "%d.%m.%Y"))
        .map_err(|_| format!("unrecognised date: {:?}", text))
}

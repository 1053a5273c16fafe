//! Composed pipeline: records and a selection in, one view model out

use crate::chart::{assemble, ChartSpec, ChartStyle};
use crate::currency::Currency;
use crate::data::RecordStore;
use crate::pipeline::{self, AxisRange, PeriodAxis, ValueSeries, NO_DATA};
use crate::types::Observation;
use serde::Serialize;

/// Caption shown before the summary average
pub const AVERAGE_LABEL: &str = "Среднее за период:";

/// Unit appended to a displayed average
pub const RUBLE_SIGN: &str = "₽";

/// Everything the renderer needs for one recomputation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewModel {
    pub currency: Currency,
    pub title: &'static str,
    pub period_axis: PeriodAxis,
    pub value_series: ValueSeries,
    pub range: Option<AxisRange>,
    /// Ceiling-rounded mean, `None` when there is no data
    pub average: Option<String>,
    pub chart: ChartSpec,
}

impl ViewModel {
    /// True when the selected currency has no observations
    pub fn is_empty(&self) -> bool {
        self.period_axis.is_empty()
    }

    /// Average with its unit, or the no-data placeholder
    pub fn average_text(&self) -> String {
        match &self.average {
            Some(avg) => format!("{}{}", avg, RUBLE_SIGN),
            None => NO_DATA.to_string(),
        }
    }
}

/// Run the whole pipeline for one currency
pub fn compute_view(records: &[Observation], currency: Currency, style: &ChartStyle) -> ViewModel {
    let filtered = pipeline::filter(records, currency);
    let values = pipeline::values(&filtered);

    let (period_axis, value_series) = pipeline::build(&filtered);
    let average = pipeline::average(&values);
    let range = pipeline::axis_range(&values);
    let chart = assemble(&period_axis, &value_series, range, currency, style);

    log::debug!(
        "Computed view for {}: {} observations, {} periods",
        currency,
        filtered.len(),
        period_axis.len()
    );

    ViewModel {
        currency,
        title: currency.title(),
        period_axis,
        value_series,
        range,
        average,
        chart,
    }
}

/// Memo of the last computed view, keyed on `(store version, currency)`
///
/// The style is not part of the key; call [`ViewCache::invalidate`] after
/// changing it.
#[derive(Debug, Default)]
pub struct ViewCache {
    entry: Option<((u64, Currency), ViewModel)>,
    computations: u64,
}

impl ViewCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached view, recomputing when the key changed
    pub fn get_or_compute(
        &mut self,
        store: &RecordStore,
        currency: Currency,
        style: &ChartStyle,
    ) -> &ViewModel {
        let key = (store.version(), currency);
        if !matches!(&self.entry, Some((cached, _)) if *cached == key) {
            self.entry = None;
        }

        let computations = &mut self.computations;
        let (_, view) = self.entry.get_or_insert_with(|| {
            *computations += 1;
            (key, compute_view(store.records(), currency, style))
        });
        view
    }

    pub fn invalidate(&mut self) {
        self.entry = None;
    }

    /// Number of full recomputations performed
    pub fn computations(&self) -> u64 {
        self.computations
    }
}

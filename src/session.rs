//! Selection lifecycle of one chart session
//!
//! `Uninitialized -> Loaded -> Filtered(currency) -> Rendered(currency)`,
//! re-entered on every selection or refresh. There is no terminal state.

use crate::chart::ChartStyle;
use crate::config::AppConfig;
use crate::currency::Currency;
use crate::data::{RecordSource, RecordStore, RejectedRecord};
use crate::types::Observation;
use crate::view::{ViewCache, ViewModel};

/// Where the session is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No records received yet
    Uninitialized,
    /// Records present, no view requested since
    Loaded,
    /// A currency was selected, view pending
    Filtered(Currency),
    /// A view was produced for this currency
    Rendered(Currency),
}

/// Record store, current selection and the cached view
#[derive(Debug)]
pub struct ChartSession {
    store: RecordStore,
    selected: Currency,
    style: ChartStyle,
    state: SessionState,
    cache: ViewCache,
    rejected: Vec<RejectedRecord>,
}

impl ChartSession {
    /// New session with the default currency selected
    pub fn new(style: ChartStyle) -> Self {
        Self::with_currency(style, Currency::default())
    }

    pub fn with_currency(style: ChartStyle, currency: Currency) -> Self {
        Self {
            store: RecordStore::new(),
            selected: currency,
            style,
            state: SessionState::Uninitialized,
            cache: ViewCache::new(),
            rejected: Vec::new(),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::with_currency(config.style.clone(), config.default_currency)
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn selected(&self) -> Currency {
        self.selected
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn style(&self) -> &ChartStyle {
        &self.style
    }

    /// Records skipped by the last successful ingest
    pub fn rejected(&self) -> &[RejectedRecord] {
        &self.rejected
    }

    /// True until the first records arrive
    pub fn is_loading(&self) -> bool {
        self.state == SessionState::Uninitialized
    }

    /// Replace the record set
    pub fn load(&mut self, records: Vec<Observation>) {
        self.store.replace(records);
        self.state = SessionState::Loaded;
    }

    /// Fetch records from `source` into the store
    ///
    /// A failed fetch is logged and leaves the session unchanged; there is
    /// no retry. Returns whether records were loaded.
    pub async fn ingest<S: RecordSource>(&mut self, source: &S) -> bool {
        match source.fetch().await {
            Ok(report) => {
                if !report.is_clean() {
                    log::warn!(
                        "{} of {} records from {} were rejected",
                        report.rejected.len(),
                        report.rejected.len() + report.records.len(),
                        source.name()
                    );
                }
                self.rejected = report.rejected;
                self.load(report.records);
                true
            }
            Err(e) => {
                log::error!("Failed to fetch records from {}: {}", source.name(), e);
                false
            }
        }
    }

    /// Change the selected currency
    pub fn select(&mut self, currency: Currency) {
        self.selected = currency;
        if self.state != SessionState::Uninitialized {
            self.state = SessionState::Filtered(currency);
        }
    }

    /// Replace the chart style; the next render recomputes
    pub fn set_style(&mut self, style: ChartStyle) {
        self.style = style;
        self.cache.invalidate();
    }

    /// View for the current selection
    pub fn render(&mut self) -> &ViewModel {
        if self.state != SessionState::Uninitialized {
            self.state = SessionState::Rendered(self.selected);
        }
        self.cache
            .get_or_compute(&self.store, self.selected, &self.style)
    }
}

impl Default for ChartSession {
    fn default() -> Self {
        Self::new(ChartStyle::default())
    }
}

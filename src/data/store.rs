//! Record store: the raw observation set for the session

use crate::types::Observation;
use hashbrown::HashSet;

/// Holds the raw observations in arrival order
///
/// The store performs no transformation. Every refresh bumps `version`,
/// which downstream caches use to detect stale views.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<Observation>,
    version: u64,
}

impl RecordStore {
    /// Create new empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store already holding `records`
    pub fn from_records(records: Vec<Observation>) -> Self {
        let mut store = Self::new();
        store.replace(records);
        store
    }

    /// Replace the whole observation set
    pub fn replace(&mut self, records: Vec<Observation>) {
        self.records = records;
        self.version += 1;
        log::info!(
            "Record store refreshed: {} records (version {})",
            self.records.len(),
            self.version
        );
    }

    pub fn records(&self) -> &[Observation] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of refreshes so far; zero until first populated
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Distinct indicator names, in first-occurrence order
    pub fn indicators(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.records
            .iter()
            .map(|obs| obs.indicator_name.as_str())
            .filter(|name| seen.insert(*name))
            .collect()
    }
}

//! File-backed record sources

use super::RecordSource;
use crate::data::ingest::{parse_csv, parse_json, IngestReport};
use crate::error::Result;
use std::fs::{self, File};
use std::future::{self, Future};
use std::path::{Path, PathBuf};

/// JSON array of records stored on disk
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and validate the file
    pub fn load(&self) -> Result<IngestReport> {
        let text = fs::read_to_string(&self.path)?;
        parse_json(&text)
    }
}

impl RecordSource for JsonFileSource {
    fn fetch(&self) -> impl Future<Output = Result<IngestReport>> + Send {
        future::ready(self.load())
    }

    fn name(&self) -> &str {
        "json-file"
    }
}

/// CSV file with a `date,month,indicator,value` header
#[derive(Debug, Clone)]
pub struct CsvFileSource {
    path: PathBuf,
}

impl CsvFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and validate the file
    pub fn load(&self) -> Result<IngestReport> {
        let file = File::open(&self.path)?;
        parse_csv(file)
    }
}

impl RecordSource for CsvFileSource {
    fn fetch(&self) -> impl Future<Output = Result<IngestReport>> + Send {
        future::ready(self.load())
    }

    fn name(&self) -> &str {
        "csv-file"
    }
}

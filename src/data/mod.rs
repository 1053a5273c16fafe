//! Record data: storage, ingestion and sources

pub mod ingest;
pub mod sources;
pub mod store;

pub use ingest::{parse_csv, parse_json, IngestReport, RejectedRecord};
pub use sources::{ConfiguredSource, CsvFileSource, JsonFileSource, RecordSource};
#[cfg(feature = "async")]
pub use sources::HttpRecordSource;
pub use store::RecordStore;

//! HTTP record source
//!
//! Fetches the JSON record array from the rate API in a single request.
//! No retry and no backoff: a failed fetch leaves the caller with an error.

use super::RecordSource;
use crate::data::ingest::{parse_json, IngestReport};
use crate::error::{RateChartError, Result};
use reqwest::Client;
use std::future::Future;
use std::time::Duration;

/// Request timeout applied when none is configured
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Rate API source
#[derive(Debug, Clone)]
pub struct HttpRecordSource {
    url: String,
    client: Client,
}

impl HttpRecordSource {
    /// Create a new HTTP source with the default timeout
    pub fn new(url: impl Into<String>) -> Result<Self> {
        Self::with_timeout(url, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Create a new HTTP source with an explicit request timeout
    pub fn with_timeout(url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let url = url.into();
        if url.trim().is_empty() {
            return Err(RateChartError::ConfigError(
                "Record source URL is empty".to_string(),
            ));
        }

        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { url, client })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetch and validate the record array
    pub async fn fetch_records(&self) -> Result<IngestReport> {
        log::debug!("Fetching records from {}", self.url);
        let response = self.client.get(&self.url).send().await?;

        if !response.status().is_success() {
            return Err(RateChartError::DataError(format!(
                "Rate API returned error: {}",
                response.status()
            )));
        }

        let text = response.text().await?;
        parse_json(&text)
    }
}

impl RecordSource for HttpRecordSource {
    fn fetch(&self) -> impl Future<Output = Result<IngestReport>> + Send {
        self.fetch_records()
    }

    fn name(&self) -> &str {
        "http"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread;

    /// Serve one canned HTTP response on a local port
    fn serve_once(status: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();

        thread::spawn(move || {
            if let Ok((mut stream, _)) = listener.accept() {
                let mut buf = [0u8; 4096];
                let _ = stream.read(&mut buf);
                let response = format!(
                    "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status,
                    body.len(),
                    body
                );
                let _ = stream.write_all(response.as_bytes());
            }
        });

        format!("http://{}/rates", addr)
    }

    #[test]
    fn test_source_creation() {
        let source = HttpRecordSource::new("http://localhost/rates");
        assert!(source.is_ok());
        assert_eq!(source.unwrap().url(), "http://localhost/rates");
    }

    #[test]
    fn test_empty_url_rejected() {
        let err = HttpRecordSource::new("  ").unwrap_err();
        assert!(matches!(err, RateChartError::ConfigError(_)));
    }

    #[tokio::test]
    async fn test_fetch_records() {
        let url = serve_once(
            "200 OK",
            r#"[{"date":"2023-01-01","month":"Jan","indicator":"Курс доллара","value":70}]"#,
        );
        let source = HttpRecordSource::new(url).unwrap();

        let report = source.fetch().await.unwrap();
        assert_eq!(report.records.len(), 1);
        assert_eq!(report.records[0].indicator_name, "Курс доллара");
    }

    #[tokio::test]
    async fn test_error_status() {
        let url = serve_once("500 Internal Server Error", "oops");
        let source = HttpRecordSource::new(url).unwrap();

        let err = source.fetch().await.unwrap_err();
        assert!(err.to_string().contains("500"));
    }
}

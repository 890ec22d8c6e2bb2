//! Supplier feed download.

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::Client;
use std::path::PathBuf;
use std::time::Duration;
use stocksync_types::StockRecord;

use crate::{DEFAULT_HEADER_ROW, FeedColumns, FeedError, extract_spreadsheet, parse_stock_sheet};

/// Location of the supplier stock report archive.
pub const DEFAULT_FEED_URL: &str = "https://timeworld.ru/upload/files/ostatki.zip";

/// Configuration for the feed client.
#[derive(Debug, Clone)]
pub struct FeedConfig {
    /// Archive URL.
    pub url: String,
    /// Directory the spreadsheet is extracted into.
    pub work_dir: PathBuf,
    /// Zero-based row of the column header.
    pub header_row: u32,
    /// Header names of the columns read.
    pub columns: FeedColumns,
    /// Request timeout. `None` leaves the download unbounded.
    pub timeout: Option<Duration>,
    /// User agent string.
    pub user_agent: String,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_FEED_URL.to_string(),
            work_dir: PathBuf::from("."),
            header_row: DEFAULT_HEADER_ROW,
            columns: FeedColumns::default(),
            timeout: None,
            user_agent: format!("stocksync/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Source of supplier stock records.
#[async_trait]
pub trait StockFeed: Send + Sync {
    /// Fetches the current supplier stock report.
    async fn download_stock(&self) -> Result<Vec<StockRecord>, FeedError>;
}

/// Downloads and parses the supplier stock report.
///
/// The spreadsheet is written to the configured work directory for the
/// duration of the parse. Two clients sharing a work directory must not run
/// at the same time.
#[derive(Debug, Clone)]
pub struct FeedClient {
    client: Client,
    config: FeedConfig,
}

impl FeedClient {
    /// Creates a new feed client.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: FeedConfig) -> Result<Self, FeedError> {
        let mut builder = Client::builder().user_agent(&config.user_agent).gzip(true);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;
        Ok(Self { client, config })
    }

    /// Creates a client with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_defaults() -> Result<Self, FeedError> {
        Self::new(FeedConfig::default())
    }

    /// Returns the client configuration.
    #[must_use]
    pub const fn config(&self) -> &FeedConfig {
        &self.config
    }

    /// Downloads the raw report archive.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server answers with a
    /// non-success status.
    pub async fn download_archive(&self) -> Result<Bytes, FeedError> {
        tracing::debug!(url = %self.config.url, "downloading supplier feed");
        let response = self.client.get(&self.config.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!(url = %self.config.url, status = status.as_u16(), "supplier feed download failed");
            return Err(FeedError::Status {
                status: status.as_u16(),
            });
        }

        let archive = response.bytes().await?;
        tracing::debug!(bytes = archive.len(), "downloaded supplier feed");
        Ok(archive)
    }
}

#[async_trait]
impl StockFeed for FeedClient {
    async fn download_stock(&self) -> Result<Vec<StockRecord>, FeedError> {
        let archive = self.download_archive().await?;
        let config = self.config.clone();

        // Zip and spreadsheet decoding is CPU-bound file work
        let records = tokio::task::spawn_blocking(move || {
            let extracted = extract_spreadsheet(&archive, &config.work_dir)?;
            parse_stock_sheet(extracted.path(), config.header_row, &config.columns)
        })
        .await
        .map_err(|e| FeedError::Task(e.to_string()))??;

        tracing::info!(count = records.len(), "loaded supplier stock report");
        Ok(records)
    }
}

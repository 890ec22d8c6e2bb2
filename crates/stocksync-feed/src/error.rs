//! Feed errors.

use thiserror::Error;

/// Errors that can occur while fetching or reading the supplier feed.
#[derive(Error, Debug)]
pub enum FeedError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server returned an error status.
    #[error("Feed server returned status {status}")]
    Status {
        /// HTTP status code.
        status: u16,
    },

    /// Downloaded archive is empty.
    #[error("Downloaded archive is empty")]
    EmptyArchive,

    /// Archive could not be read.
    #[error("Archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    /// Archive holds no spreadsheet.
    #[error("Archive contains no spreadsheet")]
    NoSpreadsheet,

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Spreadsheet could not be read.
    #[error("Spreadsheet error: {0}")]
    Spreadsheet(#[from] calamine::Error),

    /// Workbook has no worksheet.
    #[error("Spreadsheet has no worksheet")]
    NoWorksheet,

    /// Sheet ends before the header row.
    #[error("Header row {row} not found")]
    HeaderNotFound {
        /// Zero-based header row index.
        row: u32,
    },

    /// Header lacks a required column.
    #[error("Column {0:?} not found in header")]
    MissingColumn(String),

    /// Blocking parse task failed.
    #[error("Parse task failed: {0}")]
    Task(String),
}

impl FeedError {
    /// Returns true if the request timed out.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Http(e) if e.is_timeout())
    }

    /// Returns true if the connection could not be established.
    #[must_use]
    pub fn is_connect(&self) -> bool {
        matches!(self, Self::Http(e) if e.is_connect())
    }
}

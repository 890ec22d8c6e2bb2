//! Output format selection and the export entry point.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use stocksync_types::{PriceUpdate, StockUpdate};
use thiserror::Error;

use crate::{CsvFormatter, JsonFormatter, Payload};

/// Output format identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutputFormat {
    /// One row per update with a header line.
    #[default]
    Csv,
    /// The import request body, pretty-printed.
    Json,
    /// One JSON object per update per line.
    Ndjson,
}

impl OutputFormat {
    /// Returns the file extension for this format.
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
            Self::Ndjson => "ndjson",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.extension())
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            "ndjson" | "jsonl" => Ok(Self::Ndjson),
            _ => Err(FormatError::UnknownFormat(s.to_string())),
        }
    }
}

/// Errors that can occur during formatting.
#[derive(Error, Debug)]
pub enum FormatError {
    /// Unknown output format.
    #[error("Unknown format: {0}")]
    UnknownFormat(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Writes update payloads in one output format.
pub trait Formatter: Send + Sync {
    /// Writes `items` to `writer`.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or writing fails.
    fn write_payload<P: Payload, W: Write>(
        &self,
        items: &[P],
        writer: W,
    ) -> Result<(), FormatError>;

    /// Returns the file extension for this format.
    fn extension(&self) -> &str;

    /// Writes stock updates.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or writing fails.
    fn write_stocks<W: Write>(&self, stocks: &[StockUpdate], writer: W) -> Result<(), FormatError> {
        self.write_payload(stocks, writer)
    }

    /// Writes price updates.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or writing fails.
    fn write_prices<W: Write>(&self, prices: &[PriceUpdate], writer: W) -> Result<(), FormatError> {
        self.write_payload(prices, writer)
    }
}

/// Writes `stocks.<ext>` and `prices.<ext>` into `dir`, creating it if needed.
///
/// Returns the two paths in that order.
///
/// # Errors
///
/// Returns an error if the directory or either file cannot be written.
pub fn write_payload_files(
    format: OutputFormat,
    dir: &Path,
    stocks: &[StockUpdate],
    prices: &[PriceUpdate],
) -> Result<(PathBuf, PathBuf), FormatError> {
    std::fs::create_dir_all(dir)?;
    match format {
        OutputFormat::Csv => write_both(&CsvFormatter::new(), dir, stocks, prices),
        OutputFormat::Json => write_both(&JsonFormatter::request(), dir, stocks, prices),
        OutputFormat::Ndjson => write_both(&JsonFormatter::ndjson(), dir, stocks, prices),
    }
}

fn write_both<F: Formatter>(
    formatter: &F,
    dir: &Path,
    stocks: &[StockUpdate],
    prices: &[PriceUpdate],
) -> Result<(PathBuf, PathBuf), FormatError> {
    Ok((
        write_file(formatter, dir, stocks)?,
        write_file(formatter, dir, prices)?,
    ))
}

fn write_file<F: Formatter, P: Payload>(
    formatter: &F,
    dir: &Path,
    items: &[P],
) -> Result<PathBuf, FormatError> {
    let path = dir.join(format!("{}.{}", P::NAME, formatter.extension()));
    let mut writer = BufWriter::new(File::create(&path)?);
    formatter.write_payload(items, &mut writer)?;
    writer.flush()?;
    Ok(path)
}

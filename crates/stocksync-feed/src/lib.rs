//! Supplier stock report download and parsing for stocksync.
//!
//! - [`FeedClient`] - Downloads the report archive and turns it into records
//! - [`extract_spreadsheet`] - Unpacks the spreadsheet from a zip archive
//! - [`parse_stock_sheet`] - Reads stock records from a spreadsheet file
//! - [`StockFeed`] - Source of supplier records for a sync run

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/stocksync/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod client;
mod error;
mod extract;
mod parse;

#[cfg(test)]
mod testing;

pub use client::{DEFAULT_FEED_URL, FeedClient, FeedConfig, StockFeed};
pub use error::FeedError;
pub use extract::{ExtractedFile, SPREADSHEET_EXTENSIONS, extract_spreadsheet};
pub use parse::{DEFAULT_HEADER_ROW, FeedColumns, parse_stock_sheet, records_from_range};

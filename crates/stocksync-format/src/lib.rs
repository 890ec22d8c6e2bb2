//! Export writers for stocksync update payloads.
//!
//! - [`CsvFormatter`] - one row per update
//! - [`JsonFormatter`] - import request bodies or NDJSON
//! - [`write_payload_files`] - `stocks.<ext>` and `prices.<ext>` in one call

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/stocksync/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod csv;
mod formatter;
mod json;
mod payload;

pub use crate::csv::CsvFormatter;
pub use formatter::{FormatError, Formatter, OutputFormat, write_payload_files};
pub use json::{JsonFormatter, JsonStyle};
pub use payload::Payload;

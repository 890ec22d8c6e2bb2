//! Sync orchestration for stocksync.
//!
//! - [`run`] - Full synchronization: stocks, then prices
//! - [`upload_stocks`] / [`upload_prices`] - The two standalone routines
//! - [`build_payloads`] - Everything a run would push, without pushing
//! - [`BatchSizes`] - Per-call-site batch limits
//! - [`SyncError`] - Failures, classified for top-level reporting

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/stocksync/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod error;
mod pipeline;
mod progress;
mod report;

pub use config::{
    BatchSizes, DEFAULT_PRICE_RUN_BATCH, DEFAULT_PRICE_UPLOAD_BATCH, DEFAULT_STOCK_BATCH,
};
pub use error::{FailureKind, Result, SyncError};
pub use pipeline::{Payloads, PriceUpload, StockUpload, build_payloads, run, upload_prices, upload_stocks};
pub use progress::{NoProgress, Phase, SyncProgress};
pub use report::{PushReport, RunSummary};

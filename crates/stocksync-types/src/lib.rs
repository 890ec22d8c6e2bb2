//! Core types for the stocksync marketplace synchronizer.
//!
//! This crate provides the data structures shared by every stage of a sync run:
//!
//! - [`OfferId`] - Marketplace identifier of a listed product
//! - [`StockRecord`] - One row of the supplier stock report
//! - [`StockUpdate`] - Stock level instruction for the marketplace
//! - [`PriceUpdate`] - Price instruction for the marketplace
//! - [`AutoAction`] - Promotion auto-enrollment flag carried by price updates

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/stocksync/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod offer;
mod record;
mod update;

pub use offer::OfferId;
pub use record::StockRecord;
pub use update::{AutoAction, DEFAULT_CURRENCY, DEFAULT_OLD_PRICE, PriceUpdate, StockUpdate};

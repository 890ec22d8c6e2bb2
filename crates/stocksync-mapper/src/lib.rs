//! Supplier-to-marketplace payload mapping for stocksync.
//!
//! - [`create_stocks`] - Stock updates covering every known offer exactly once
//! - [`create_prices`] - Price updates for offers present in the supplier feed
//! - [`convert_price`] - Supplier price text to a digit string
//! - [`parse_stock_quantity`] - Supplier quantity text to a stock level
//! - [`divide`] - Fixed-size batching for API submission

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/stocksync/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod batch;
mod error;
mod prices;
mod stocks;

pub use batch::{Batches, divide};
pub use error::MappingError;
pub use prices::{convert_price, create_prices};
pub use stocks::{
    LOW_STOCK_SENTINEL, MANY_IN_STOCK, MANY_IN_STOCK_SENTINEL, create_stocks, non_zero_stocks,
    parse_stock_quantity,
};

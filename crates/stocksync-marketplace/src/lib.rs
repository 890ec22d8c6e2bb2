//! Ozon seller API client for stocksync.
//!
//! - [`endpoint`] - API host and endpoint paths
//! - [`MarketplaceClient`] - HTTP client authenticated with seller credentials
//! - [`Marketplace`] - The operations a sync run needs from the marketplace
//! - [`collect_offer_ids`] - Paginated offer id collection with a page guard

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/stocksync/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod api;
mod client;
pub mod endpoint;
mod error;
mod model;

pub use api::{DEFAULT_MAX_PAGES, Marketplace, collect_offer_ids};
pub use client::{ClientConfig, Credentials, MarketplaceClient};
pub use error::MarketplaceError;
pub use model::{ImportItem, ImportItemError, ImportResponse, ProductListItem, ProductPage};

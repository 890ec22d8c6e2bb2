//! Sync Ozon seller stock and prices from a supplier spreadsheet feed.
//!
//! This is a facade crate that re-exports functionality from the stocksync
//! workspace crates for convenient access.
//!
//! # Quick Start
//!
//! ```ignore
//! use stocksync_lib::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let credentials = Credentials::new("client-id", "api-key")?;
//!     let marketplace = MarketplaceClient::with_defaults(credentials)?;
//!     let feed = FeedClient::with_defaults()?;
//!
//!     let summary = run(&marketplace, &feed, &BatchSizes::default(), &NoProgress).await?;
//!     println!("{} offers, {} in stock", summary.offers, summary.in_stock);
//!     Ok(())
//! }
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/stocksync/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use stocksync_types::*;

// Re-export marketplace client
pub use stocksync_marketplace::{
    ClientConfig, Credentials, DEFAULT_MAX_PAGES, ImportItem, ImportItemError, ImportResponse,
    Marketplace, MarketplaceClient, MarketplaceError, ProductListItem, ProductPage,
    collect_offer_ids,
};

// Re-export supplier feed
pub use stocksync_feed::{
    DEFAULT_FEED_URL, DEFAULT_HEADER_ROW, FeedClient, FeedColumns, FeedConfig, FeedError,
    StockFeed, parse_stock_sheet,
};

// Re-export mapping rules
pub use stocksync_mapper::{
    MappingError, convert_price, create_prices, create_stocks, divide, non_zero_stocks,
    parse_stock_quantity,
};

// Re-export orchestration
pub use stocksync_sync::{
    BatchSizes, FailureKind, NoProgress, Payloads, Phase, PriceUpload, PushReport, RunSummary,
    StockUpload, SyncError, SyncProgress, build_payloads, run, upload_prices, upload_stocks,
};

// Re-export formatters
#[cfg(feature = "format")]
pub use stocksync_format::{
    CsvFormatter, FormatError, Formatter, JsonFormatter, JsonStyle, OutputFormat, Payload,
    write_payload_files,
};

/// Prelude module for convenient imports.
///
/// ```
/// use stocksync_lib::prelude::*;
/// ```
pub mod prelude {
    pub use stocksync_types::{OfferId, PriceUpdate, StockRecord, StockUpdate};

    pub use stocksync_marketplace::{
        ClientConfig, Credentials, Marketplace, MarketplaceClient, MarketplaceError,
    };

    pub use stocksync_feed::{FeedClient, FeedConfig, FeedError, StockFeed};

    pub use stocksync_sync::{
        BatchSizes, FailureKind, NoProgress, Phase, RunSummary, SyncError, SyncProgress,
        build_payloads, run, upload_prices, upload_stocks,
    };

    #[cfg(feature = "format")]
    pub use stocksync_format::{CsvFormatter, Formatter, JsonFormatter, OutputFormat};
}

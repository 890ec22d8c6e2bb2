//! CLI command implementations.

pub(crate) mod export;
pub(crate) mod offers;
pub(crate) mod prices;
pub(crate) mod run;
pub(crate) mod stocks;

use anyhow::{Context as _, Result};
use stocksync_lib::prelude::*;

use crate::SyncArgs;
use crate::display::PushProgress;

/// Clients and settings shared by the commands.
#[derive(Debug)]
pub(crate) struct Context {
    pub(crate) marketplace: MarketplaceClient,
    pub(crate) feed: FeedClient,
    pub(crate) batches: BatchSizes,
    pub(crate) progress: PushProgress,
    pub(crate) quiet: bool,
}

impl Context {
    /// Builds the clients from parsed arguments.
    pub(crate) fn from_args(args: SyncArgs, quiet: bool) -> Result<Self> {
        let credentials = Credentials::new(
            args.client_id.unwrap_or_default(),
            args.seller_token.unwrap_or_default(),
        )
        .context("CLIENT_ID and SELLER_TOKEN must be set")?;
        let marketplace = MarketplaceClient::with_defaults(credentials)?;

        let defaults = FeedConfig::default();
        let feed = FeedClient::new(FeedConfig {
            url: args.feed_url.unwrap_or(defaults.url),
            work_dir: args.work_dir.unwrap_or(defaults.work_dir),
            ..FeedConfig::default()
        })?;

        let defaults = BatchSizes::default();
        let batches = BatchSizes {
            stocks: args.stock_batch.unwrap_or(defaults.stocks),
            prices_run: args.price_batch.unwrap_or(defaults.prices_run),
            prices_upload: args.price_upload_batch.unwrap_or(defaults.prices_upload),
        };

        Ok(Self {
            marketplace,
            feed,
            batches,
            progress: PushProgress::new(quiet),
            quiet,
        })
    }

    /// Downloads the supplier feed.
    pub(crate) async fn records(&self) -> Result<Vec<StockRecord>, SyncError> {
        Ok(self.feed.download_stock().await?)
    }
}

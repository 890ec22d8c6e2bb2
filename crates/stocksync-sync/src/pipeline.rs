//! Sync run sequencing.

use std::future::Future;
use std::num::NonZeroUsize;

use stocksync_feed::StockFeed;
use stocksync_mapper::{create_prices, create_stocks, divide, non_zero_stocks};
use stocksync_marketplace::{ImportResponse, Marketplace, MarketplaceError};
use stocksync_types::{OfferId, PriceUpdate, StockRecord, StockUpdate};

use crate::{BatchSizes, Phase, PushReport, Result, RunSummary, SyncProgress};

/// Everything a run would push.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Payloads {
    /// Offers listed on the marketplace.
    pub offer_ids: Vec<OfferId>,
    /// Supplier feed rows.
    pub records: Vec<StockRecord>,
    /// One stock update per listed offer.
    pub stocks: Vec<StockUpdate>,
    /// Price updates for listed offers present in the feed.
    pub prices: Vec<PriceUpdate>,
}

/// Result of [`upload_stocks`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockUpload {
    /// Updates with non-zero stock.
    pub not_empty: Vec<StockUpdate>,
    /// Every update pushed.
    pub stocks: Vec<StockUpdate>,
    /// Push outcome.
    pub report: PushReport,
}

/// Result of [`upload_prices`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceUpload {
    /// Every update pushed.
    pub prices: Vec<PriceUpdate>,
    /// Push outcome.
    pub report: PushReport,
}

/// Runs a full synchronization.
///
/// Collects offer ids, loads the supplier feed, pushes stock updates in
/// batches of `batches.stocks`, then price updates in batches of
/// `batches.prices_run`. The first failing call aborts the run; batches
/// already pushed stay applied.
///
/// # Errors
///
/// Returns the first marketplace, feed or mapping error.
pub async fn run<M, F>(
    marketplace: &M,
    feed: &F,
    batches: &BatchSizes,
    progress: &dyn SyncProgress,
) -> Result<RunSummary>
where
    M: Marketplace + ?Sized,
    F: StockFeed + ?Sized,
{
    let started_at = chrono::Utc::now();
    let payloads = build_payloads(marketplace, feed).await?;

    let stocks = push_stocks(marketplace, &payloads.stocks, batches.stocks, progress).await?;
    let prices = push_prices(marketplace, &payloads.prices, batches.prices_run, progress).await?;

    let summary = RunSummary {
        offers: payloads.offer_ids.len(),
        records: payloads.records.len(),
        in_stock: payloads.stocks.iter().filter(|s| s.is_in_stock()).count(),
        stocks,
        prices,
        started_at,
        finished_at: chrono::Utc::now(),
    };
    tracing::info!(
        offers = summary.offers,
        stocks = summary.stocks.items,
        prices = summary.prices.items,
        rejected = summary.stocks.rejected.len() + summary.prices.rejected.len(),
        "sync finished"
    );
    Ok(summary)
}

/// Collects offer ids and the supplier feed and builds both payloads.
///
/// Nothing is pushed.
///
/// # Errors
///
/// Returns the first marketplace, feed or mapping error.
pub async fn build_payloads<M, F>(marketplace: &M, feed: &F) -> Result<Payloads>
where
    M: Marketplace + ?Sized,
    F: StockFeed + ?Sized,
{
    let offer_ids = marketplace.offer_ids().await?;
    let records = feed.download_stock().await?;
    let stocks = create_stocks(&records, &offer_ids)?;
    let prices = create_prices(&records, &offer_ids);
    Ok(Payloads {
        offer_ids,
        records,
        stocks,
        prices,
    })
}

/// Pushes price updates for `records` in batches of `batches.prices_upload`.
///
/// # Errors
///
/// Returns the first marketplace error.
pub async fn upload_prices<M>(
    marketplace: &M,
    records: &[StockRecord],
    batches: &BatchSizes,
    progress: &dyn SyncProgress,
) -> Result<PriceUpload>
where
    M: Marketplace + ?Sized,
{
    let offer_ids = marketplace.offer_ids().await?;
    let prices = create_prices(records, &offer_ids);
    let report = push_prices(marketplace, &prices, batches.prices_upload, progress).await?;
    Ok(PriceUpload { prices, report })
}

/// Pushes stock updates for every listed offer in batches of `batches.stocks`.
///
/// # Errors
///
/// Returns the first marketplace or mapping error.
pub async fn upload_stocks<M>(
    marketplace: &M,
    records: &[StockRecord],
    batches: &BatchSizes,
    progress: &dyn SyncProgress,
) -> Result<StockUpload>
where
    M: Marketplace + ?Sized,
{
    let offer_ids = marketplace.offer_ids().await?;
    let stocks = create_stocks(records, &offer_ids)?;
    let report = push_stocks(marketplace, &stocks, batches.stocks, progress).await?;
    Ok(StockUpload {
        not_empty: non_zero_stocks(&stocks),
        stocks,
        report,
    })
}

async fn push_stocks<M>(
    marketplace: &M,
    stocks: &[StockUpdate],
    size: NonZeroUsize,
    progress: &dyn SyncProgress,
) -> Result<PushReport>
where
    M: Marketplace + ?Sized,
{
    push_batches(Phase::Stocks, stocks, size, progress, |batch| {
        marketplace.update_stocks(batch)
    })
    .await
}

async fn push_prices<M>(
    marketplace: &M,
    prices: &[PriceUpdate],
    size: NonZeroUsize,
    progress: &dyn SyncProgress,
) -> Result<PushReport>
where
    M: Marketplace + ?Sized,
{
    push_batches(Phase::Prices, prices, size, progress, |batch| {
        marketplace.update_prices(batch)
    })
    .await
}

async fn push_batches<'a, T, P, Fut>(
    phase: Phase,
    items: &'a [T],
    size: NonZeroUsize,
    progress: &dyn SyncProgress,
    mut push: P,
) -> Result<PushReport>
where
    P: FnMut(&'a [T]) -> Fut,
    Fut: Future<Output = std::result::Result<ImportResponse, MarketplaceError>>,
{
    let mut report = PushReport::default();
    progress.phase_started(phase, items.len());
    tracing::info!(%phase, items = items.len(), batch_size = size.get(), "pushing updates");

    for batch in divide(items, size) {
        let response = push(batch).await?;
        report.record(phase, batch.len(), response);
        progress.batch_pushed(phase, batch.len());
    }

    progress.phase_finished(phase);
    Ok(report)
}

//! Marketplace operations used by a sync run.

use async_trait::async_trait;
use stocksync_types::{OfferId, PriceUpdate, StockUpdate};

use crate::{ImportResponse, MarketplaceError, ProductPage};

/// Default cap on listing pages fetched by [`collect_offer_ids`].
pub const DEFAULT_MAX_PAGES: usize = 10_000;

/// The marketplace calls a sync run performs.
///
/// [`MarketplaceClient`](crate::MarketplaceClient) implements it over HTTP.
#[async_trait]
pub trait Marketplace: Send + Sync {
    /// Fetches one listing page starting after `last_id` (empty for the first page).
    async fn list_products(&self, last_id: &str) -> Result<ProductPage, MarketplaceError>;

    /// Pushes one batch of price updates.
    async fn update_prices(
        &self,
        prices: &[PriceUpdate],
    ) -> Result<ImportResponse, MarketplaceError>;

    /// Pushes one batch of stock updates.
    async fn update_stocks(
        &self,
        stocks: &[StockUpdate],
    ) -> Result<ImportResponse, MarketplaceError>;

    /// Collects every listed offer id, in discovery order.
    async fn offer_ids(&self) -> Result<Vec<OfferId>, MarketplaceError> {
        collect_offer_ids(self, DEFAULT_MAX_PAGES).await
    }
}

/// Pages through the product listing until the accumulated item count equals
/// the reported total.
///
/// # Errors
///
/// Returns [`MarketplaceError::PaginationDiverged`] when `max_pages` pages
/// were fetched without converging, when a page comes back empty before the
/// total is reached, or when the accumulated count overshoots the total.
/// Request errors are propagated.
pub async fn collect_offer_ids<M>(
    marketplace: &M,
    max_pages: usize,
) -> Result<Vec<OfferId>, MarketplaceError>
where
    M: Marketplace + ?Sized,
{
    let mut offer_ids = Vec::new();
    let mut last_id = String::new();
    let mut total = 0;

    for page_number in 1..=max_pages {
        let page = marketplace.list_products(&last_id).await?;
        let fetched = page.items.len();
        total = page.total;
        offer_ids.extend(page.items.into_iter().map(|item| item.offer_id));

        tracing::debug!(
            page = page_number,
            fetched,
            collected = offer_ids.len(),
            total,
            "fetched product page"
        );

        let collected = offer_ids.len() as u64;
        if collected == total {
            return Ok(offer_ids);
        }
        if fetched == 0 || collected > total {
            return Err(MarketplaceError::PaginationDiverged {
                pages: page_number,
                collected: offer_ids.len(),
                total,
            });
        }
        last_id = page.last_id;
    }

    Err(MarketplaceError::PaginationDiverged {
        pages: max_pages,
        collected: offer_ids.len(),
        total,
    })
}

//! Request and response bodies of the seller API.

use serde::{Deserialize, Serialize};
use stocksync_types::{OfferId, PriceUpdate, StockUpdate};

#[derive(Debug, Serialize)]
pub(crate) struct ProductListRequest<'a> {
    pub(crate) filter: ProductListFilter<'a>,
    pub(crate) last_id: &'a str,
    pub(crate) limit: u32,
}

#[derive(Debug, Serialize)]
pub(crate) struct ProductListFilter<'a> {
    pub(crate) visibility: &'a str,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ProductListResponse {
    pub(crate) result: Option<ProductPage>,
}

/// One page of the product listing.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProductPage {
    /// Products on this page.
    #[serde(default)]
    pub items: Vec<ProductListItem>,
    /// Total number of products matching the filter.
    #[serde(default)]
    pub total: u64,
    /// Cursor for the next page.
    #[serde(default)]
    pub last_id: String,
}

/// A listed product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductListItem {
    /// Marketplace product id.
    #[serde(default)]
    pub product_id: i64,
    /// Seller article.
    pub offer_id: OfferId,
}

#[derive(Debug, Serialize)]
pub(crate) struct ImportPricesRequest<'a> {
    pub(crate) prices: &'a [PriceUpdate],
}

#[derive(Debug, Serialize)]
pub(crate) struct ImportStocksRequest<'a> {
    pub(crate) stocks: &'a [StockUpdate],
}

/// Response of the price and stock import endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ImportResponse {
    /// Per-offer outcome.
    #[serde(default)]
    pub result: Vec<ImportItem>,
}

impl ImportResponse {
    /// Returns the items the marketplace did not apply.
    pub fn rejected(&self) -> impl Iterator<Item = &ImportItem> {
        self.result.iter().filter(|item| !item.updated)
    }
}

/// Outcome of one imported offer.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ImportItem {
    /// Marketplace product id.
    #[serde(default)]
    pub product_id: i64,
    /// Seller article.
    #[serde(default)]
    pub offer_id: OfferId,
    /// Whether the update was applied.
    #[serde(default)]
    pub updated: bool,
    /// Reasons the update was not applied.
    #[serde(default)]
    pub errors: Vec<ImportItemError>,
}

/// Rejection reason reported for an imported offer.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ImportItemError {
    /// Machine-readable code.
    #[serde(default)]
    pub code: String,
    /// Human-readable message.
    #[serde(default)]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_request_body() {
        let request = ProductListRequest {
            filter: ProductListFilter { visibility: "ALL" },
            last_id: "",
            limit: 1000,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"filter": {"visibility": "ALL"}, "last_id": "", "limit": 1000})
        );
    }

    #[test]
    fn test_import_response_rejected() {
        let body = r#"{"result":[
            {"product_id":1,"offer_id":"a","updated":true,"errors":[]},
            {"product_id":2,"offer_id":"b","updated":false,
             "errors":[{"code":"NOT_FOUND","message":"product not found"}]}
        ]}"#;
        let response: ImportResponse = serde_json::from_str(body).unwrap();
        let rejected: Vec<_> = response.rejected().collect();
        assert_eq!(rejected.len(), 1);
        assert_eq!(rejected[0].offer_id.as_str(), "b");
        assert_eq!(rejected[0].errors[0].code, "NOT_FOUND");
    }

    #[test]
    fn test_page_tolerates_missing_fields() {
        let page: ProductPage = serde_json::from_str(r#"{"items":[{"offer_id":"x"}]}"#).unwrap();
        assert_eq!(page.total, 0);
        assert_eq!(page.items[0].product_id, 0);
        assert!(page.last_id.is_empty());
    }
}

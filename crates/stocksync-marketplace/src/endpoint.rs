//! Ozon seller API endpoints.

/// Production host of the seller API.
pub const BASE_URL: &str = "https://api-seller.ozon.ru";

/// Paginated product listing.
pub const PRODUCT_LIST: &str = "/v2/product/list";

/// Price import.
pub const IMPORT_PRICES: &str = "/v1/product/import/prices";

/// Stock import.
pub const IMPORT_STOCKS: &str = "/v1/product/import/stocks";

/// Maximum page size accepted by [`PRODUCT_LIST`].
pub const PRODUCT_LIST_LIMIT: u32 = 1000;

/// Joins a base URL and an endpoint path.
///
/// # Example
///
/// ```
/// use stocksync_marketplace::endpoint::{BASE_URL, PRODUCT_LIST, endpoint_url};
///
/// assert_eq!(
///     endpoint_url(BASE_URL, PRODUCT_LIST),
///     "https://api-seller.ozon.ru/v2/product/list"
/// );
/// ```
#[must_use]
pub fn endpoint_url(base_url: &str, path: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash() {
        assert_eq!(
            endpoint_url("http://localhost:8080/", IMPORT_STOCKS),
            "http://localhost:8080/v1/product/import/stocks"
        );
    }

    #[test]
    fn test_import_prices() {
        assert_eq!(
            endpoint_url(BASE_URL, IMPORT_PRICES),
            "https://api-seller.ozon.ru/v1/product/import/prices"
        );
    }
}

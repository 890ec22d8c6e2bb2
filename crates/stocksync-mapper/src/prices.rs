//! Price update mapping.

use std::collections::HashSet;

use stocksync_types::{OfferId, PriceUpdate, StockRecord};

/// Converts a supplier price into the digit string the marketplace expects.
///
/// Keeps the part before the first `.` and drops every non-digit character.
/// Malformed input yields an empty string.
///
/// # Example
///
/// ```
/// use stocksync_mapper::convert_price;
///
/// assert_eq!(convert_price("5'990.00 руб."), "5990");
/// ```
#[must_use]
pub fn convert_price(price: &str) -> String {
    price
        .split('.')
        .next()
        .unwrap_or_default()
        .chars()
        .filter(char::is_ascii_digit)
        .collect()
}

/// Builds price updates for supplier records that match a known offer.
///
/// Records with unknown codes are skipped. Offers without a supplier record
/// get no price update.
#[must_use]
pub fn create_prices(records: &[StockRecord], offer_ids: &[OfferId]) -> Vec<PriceUpdate> {
    let known: HashSet<&str> = offer_ids.iter().map(OfferId::as_str).collect();

    let prices: Vec<PriceUpdate> = records
        .iter()
        .filter(|record| known.contains(record.code.as_str()))
        .map(|record| PriceUpdate::new(OfferId::new(&record.code), convert_price(&record.price)))
        .collect();

    tracing::debug!(count = prices.len(), "built price updates");
    prices
}

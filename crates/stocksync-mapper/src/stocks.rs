//! Stock update mapping.

use std::collections::HashSet;

use stocksync_types::{OfferId, StockRecord, StockUpdate};

use crate::MappingError;

/// Supplier quantity meaning "more than ten in stock".
pub const MANY_IN_STOCK_SENTINEL: &str = ">10";

/// Stock level published for [`MANY_IN_STOCK_SENTINEL`].
pub const MANY_IN_STOCK: i64 = 100;

/// Supplier quantity meaning "last unit"; published as out of stock.
pub const LOW_STOCK_SENTINEL: &str = "1";

/// Converts a supplier quantity cell into a stock level.
///
/// `">10"` becomes 100 and `"1"` becomes 0. Any other value must be an
/// integer; a float cell is truncated toward zero.
///
/// # Errors
///
/// Returns [`MappingError::InvalidQuantity`] if the value is not a number.
pub fn parse_stock_quantity(code: &str, quantity: &str) -> Result<i64, MappingError> {
    let value = quantity.trim();
    match value {
        MANY_IN_STOCK_SENTINEL => Ok(MANY_IN_STOCK),
        LOW_STOCK_SENTINEL => Ok(0),
        _ => value
            .parse::<i64>()
            .ok()
            .or_else(|| {
                value
                    .parse::<f64>()
                    .ok()
                    .filter(|v| v.is_finite())
                    .map(|v| v.trunc() as i64)
            })
            .ok_or_else(|| MappingError::InvalidQuantity {
                code: code.to_string(),
                value: quantity.to_string(),
            }),
    }
}

/// Builds stock updates for every known offer.
///
/// Each record whose code is a known offer id yields one update, the first
/// occurrence winning. Every known offer without a supplier record is then
/// appended with zero stock, in `offer_ids` order. The result covers each
/// distinct offer id exactly once.
///
/// # Errors
///
/// Returns an error if a matched record has an unparseable quantity.
///
/// # Example
///
/// ```
/// use stocksync_mapper::create_stocks;
/// use stocksync_types::{OfferId, StockRecord};
///
/// let records = vec![StockRecord::new("123", ">10", "")];
/// let offers = vec![OfferId::new("123"), OfferId::new("789")];
/// let stocks = create_stocks(&records, &offers).unwrap();
/// assert_eq!(stocks.len(), 2);
/// assert_eq!(stocks[0].stock, 100);
/// assert_eq!(stocks[1].stock, 0);
/// ```
pub fn create_stocks(
    records: &[StockRecord],
    offer_ids: &[OfferId],
) -> Result<Vec<StockUpdate>, MappingError> {
    let known: HashSet<&str> = offer_ids.iter().map(OfferId::as_str).collect();
    let mut consumed: HashSet<&str> = HashSet::with_capacity(known.len());
    let mut stocks = Vec::with_capacity(known.len());

    for record in records {
        let code = record.code.as_str();
        if !known.contains(code) || !consumed.insert(code) {
            continue;
        }
        let stock = parse_stock_quantity(code, &record.quantity)?;
        stocks.push(StockUpdate::new(OfferId::new(code), stock));
    }

    let matched = stocks.len();
    for offer_id in offer_ids {
        if consumed.insert(offer_id.as_str()) {
            stocks.push(StockUpdate::out_of_stock(offer_id.clone()));
        }
    }

    tracing::debug!(
        matched,
        missing = stocks.len() - matched,
        "built stock updates"
    );
    Ok(stocks)
}

/// Returns the updates that leave an offer in stock.
#[must_use]
pub fn non_zero_stocks(stocks: &[StockUpdate]) -> Vec<StockUpdate> {
    stocks.iter().filter(|s| s.is_in_stock()).cloned().collect()
}

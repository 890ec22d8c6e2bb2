//! Update payloads as exportable rows.

use std::borrow::Cow;

use serde::Serialize;
use stocksync_types::{PriceUpdate, StockUpdate};

/// An update type that can be exported.
///
/// `NAME` is both the export file stem and the key the marketplace import
/// request wraps the items in.
pub trait Payload: Serialize + Sync {
    /// Payload name.
    const NAME: &'static str;

    /// Column names, in [`fields`](Self::fields) order.
    const COLUMNS: &'static [&'static str];

    /// Field values as text.
    fn fields(&self) -> Vec<Cow<'_, str>>;
}

impl Payload for StockUpdate {
    const NAME: &'static str = "stocks";
    const COLUMNS: &'static [&'static str] = &["offer_id", "stock"];

    fn fields(&self) -> Vec<Cow<'_, str>> {
        vec![
            Cow::Borrowed(self.offer_id.as_str()),
            Cow::Owned(self.stock.to_string()),
        ]
    }
}

impl Payload for PriceUpdate {
    const NAME: &'static str = "prices";
    const COLUMNS: &'static [&'static str] = &[
        "offer_id",
        "price",
        "old_price",
        "currency_code",
        "auto_action_enabled",
    ];

    fn fields(&self) -> Vec<Cow<'_, str>> {
        vec![
            Cow::Borrowed(self.offer_id.as_str()),
            Cow::Borrowed(&self.price),
            Cow::Borrowed(&self.old_price),
            Cow::Borrowed(&self.currency_code),
            Cow::Owned(self.auto_action_enabled.to_string()),
        ]
    }
}

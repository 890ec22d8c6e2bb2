//! Update payloads accepted by the marketplace import endpoints.

use serde::{Deserialize, Serialize};

use crate::OfferId;

/// Currency code sent with every price update.
pub const DEFAULT_CURRENCY: &str = "RUB";

/// Reference ("old") price sent with every price update. Zero disables it.
pub const DEFAULT_OLD_PRICE: &str = "0";

/// Sets the available quantity of one offer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StockUpdate {
    /// Offer being updated.
    pub offer_id: OfferId,
    /// New available quantity.
    pub stock: i64,
}

impl StockUpdate {
    /// Creates a new stock update.
    #[must_use]
    pub const fn new(offer_id: OfferId, stock: i64) -> Self {
        Self { offer_id, stock }
    }

    /// Creates an update that marks the offer as out of stock.
    #[must_use]
    pub const fn out_of_stock(offer_id: OfferId) -> Self {
        Self { offer_id, stock: 0 }
    }

    /// Returns true if the update leaves the offer in stock.
    #[must_use]
    pub const fn is_in_stock(&self) -> bool {
        self.stock != 0
    }
}

/// Promotion auto-enrollment flag of a price update.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, derive_more::Display,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AutoAction {
    /// Leave the current marketplace setting untouched.
    #[default]
    #[display("UNKNOWN")]
    Unknown,
    /// Enroll the offer in automatic promotions.
    #[display("ENABLED")]
    Enabled,
    /// Withdraw the offer from automatic promotions.
    #[display("DISABLED")]
    Disabled,
}

/// Sets the current price of one offer.
///
/// Prices travel as strings of digits, as the marketplace schema expects.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PriceUpdate {
    /// Promotion auto-enrollment flag.
    pub auto_action_enabled: AutoAction,
    /// ISO currency code.
    pub currency_code: String,
    /// Offer being updated.
    pub offer_id: OfferId,
    /// Reference price shown crossed out; `"0"` for none.
    pub old_price: String,
    /// New price.
    pub price: String,
}

impl PriceUpdate {
    /// Creates a price update with the default currency, no reference price
    /// and the auto-action flag left untouched.
    #[must_use]
    pub fn new(offer_id: OfferId, price: impl Into<String>) -> Self {
        Self {
            auto_action_enabled: AutoAction::Unknown,
            currency_code: DEFAULT_CURRENCY.to_string(),
            offer_id,
            old_price: DEFAULT_OLD_PRICE.to_string(),
            price: price.into(),
        }
    }
}

//! Supplier stock report rows.

use serde::{Deserialize, Serialize};

/// One row of the supplier stock report.
///
/// All fields hold the cell text as the spreadsheet displays it. Empty cells
/// are empty strings.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StockRecord {
    /// Supplier product code, matched against marketplace offer ids.
    pub code: String,
    /// Available quantity: a sentinel (`">10"`, `"1"`) or an integer.
    pub quantity: String,
    /// Retail price with currency suffix, e.g. `"5'990.00 руб."`.
    pub price: String,
}

impl StockRecord {
    /// Creates a new record.
    #[must_use]
    pub fn new(
        code: impl Into<String>,
        quantity: impl Into<String>,
        price: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            quantity: quantity.into(),
            price: price.into(),
        }
    }

    /// Returns true if every field is blank.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.code.trim().is_empty()
            && self.quantity.trim().is_empty()
            && self.price.trim().is_empty()
    }
}

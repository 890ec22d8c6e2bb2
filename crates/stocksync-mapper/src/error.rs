//! Mapping errors.

use thiserror::Error;

/// Errors that can occur while mapping supplier records.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MappingError {
    /// Quantity cell is neither a known sentinel nor an integer.
    #[error("Invalid quantity {value:?} for product {code}")]
    InvalidQuantity {
        /// Supplier product code of the offending row.
        code: String,
        /// Raw quantity text.
        value: String,
    },
}

//! Marketplace offer identifiers.

use derive_more::{Display, From, Into};
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;

/// Seller-assigned article of a product listed on the marketplace.
///
/// Supplier product codes are matched against offer ids by exact string
/// comparison.
#[derive(
    Debug,
    Clone,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    From,
    Into,
)]
#[serde(transparent)]
pub struct OfferId(String);

impl OfferId {
    /// Creates an offer id from anything string-like.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for OfferId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl Borrow<str> for OfferId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for OfferId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

//! Marketplace client errors.

use thiserror::Error;

/// Errors that can occur while talking to the marketplace.
#[derive(Error, Debug)]
pub enum MarketplaceError {
    /// Transport failure: timeout, connection refused, TLS, body read.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status.
    #[error("{endpoint} failed with status {status}: {body}")]
    Status {
        /// Endpoint path.
        endpoint: &'static str,
        /// HTTP status code.
        status: u16,
        /// Response body preview.
        body: String,
    },

    /// Response body is not the expected JSON.
    #[error("Failed to decode {endpoint} response: {source}")]
    Decode {
        /// Endpoint path.
        endpoint: &'static str,
        /// Underlying JSON error.
        source: serde_json::Error,
    },

    /// Request body could not be serialized.
    #[error("Failed to encode request: {0}")]
    Encode(#[from] serde_json::Error),

    /// Listing response lacks its `result` object.
    #[error("{endpoint} response has no result")]
    MissingResult {
        /// Endpoint path.
        endpoint: &'static str,
    },

    /// Listing never reached the reported total.
    #[error("Product listing did not converge after {pages} pages: collected {collected} of {total}")]
    PaginationDiverged {
        /// Pages fetched before giving up.
        pages: usize,
        /// Items accumulated so far.
        collected: usize,
        /// Total reported by the last page.
        total: u64,
    },

    /// A required credential is empty.
    #[error("{0} is required for the seller API")]
    MissingCredential(&'static str),
}

impl MarketplaceError {
    /// Returns true if the request timed out.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Http(e) if e.is_timeout())
    }

    /// Returns true if the connection could not be established.
    #[must_use]
    pub fn is_connect(&self) -> bool {
        matches!(self, Self::Http(e) if e.is_connect())
    }

    /// Returns the HTTP status for [`MarketplaceError::Status`] errors.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

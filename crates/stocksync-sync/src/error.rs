//! Sync errors.

use stocksync_feed::FeedError;
use stocksync_mapper::MappingError;
use stocksync_marketplace::MarketplaceError;
use thiserror::Error;

/// Result type alias for sync operations.
pub type Result<T> = std::result::Result<T, SyncError>;

/// Errors that abort a sync run.
#[derive(Error, Debug)]
pub enum SyncError {
    /// Marketplace call failed.
    #[error("Marketplace error: {0}")]
    Marketplace(#[from] MarketplaceError),

    /// Supplier feed could not be loaded.
    #[error("Supplier feed error: {0}")]
    Feed(#[from] FeedError),

    /// Supplier data could not be mapped.
    #[error("Mapping error: {0}")]
    Mapping(#[from] MappingError),
}

/// Coarse failure category used for top-level reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// A request timed out.
    Timeout,
    /// A connection could not be established.
    Connection,
    /// Anything else.
    Other,
}

impl SyncError {
    /// Classifies the error.
    #[must_use]
    pub fn kind(&self) -> FailureKind {
        let (timeout, connect) = match self {
            Self::Marketplace(e) => (e.is_timeout(), e.is_connect()),
            Self::Feed(e) => (e.is_timeout(), e.is_connect()),
            Self::Mapping(_) => (false, false),
        };
        if timeout {
            FailureKind::Timeout
        } else if connect {
            FailureKind::Connection
        } else {
            FailureKind::Other
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use stocksync_marketplace::{ClientConfig, Credentials, Marketplace, MarketplaceClient};
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client(base_url: String, timeout: Option<Duration>) -> MarketplaceClient {
        let config = ClientConfig {
            base_url,
            timeout,
            ..Default::default()
        };
        let credentials = Credentials::new("client-1", "secret-key").unwrap();
        MarketplaceClient::new(config, credentials).unwrap()
    }

    #[tokio::test]
    async fn test_timeout_is_classified() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(2)))
            .mount(&server)
            .await;
        let marketplace = client(server.uri(), Some(Duration::from_millis(100)));

        let err = SyncError::from(marketplace.list_products("").await.unwrap_err());

        assert_eq!(err.kind(), FailureKind::Timeout);
    }

    #[tokio::test]
    async fn test_connection_failure_is_classified() {
        let marketplace = client("http://127.0.0.1:1".to_string(), None);

        let err = SyncError::from(marketplace.offer_ids().await.unwrap_err());

        assert_eq!(err.kind(), FailureKind::Connection);
    }

    #[test]
    fn test_mapping_error_is_other() {
        let err = SyncError::from(MappingError::InvalidQuantity {
            code: "1".to_string(),
            value: "x".to_string(),
        });
        assert_eq!(err.kind(), FailureKind::Other);
    }

    #[test]
    fn test_status_error_is_other() {
        let err = SyncError::from(MarketplaceError::Status {
            endpoint: "/v2/product/list",
            status: 500,
            body: String::new(),
        });
        assert_eq!(err.kind(), FailureKind::Other);
        assert!(err.to_string().contains("500"));
    }
}

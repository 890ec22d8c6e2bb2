//! HTTP client for the seller API.

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;
use stocksync_types::{OfferId, PriceUpdate, StockUpdate};

use crate::endpoint::{self, endpoint_url};
use crate::model::{
    ImportPricesRequest, ImportStocksRequest, ProductListFilter, ProductListRequest,
    ProductListResponse,
};
use crate::{DEFAULT_MAX_PAGES, ImportResponse, Marketplace, MarketplaceError, ProductPage};

/// Characters of a failed response body kept in errors and logs.
const BODY_PREVIEW_CHARS: usize = 500;

/// Configuration for the marketplace client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API host, without a trailing path.
    pub base_url: String,
    /// Request timeout. `None` leaves requests unbounded.
    pub timeout: Option<Duration>,
    /// Connection timeout. `None` leaves the OS default.
    pub connect_timeout: Option<Duration>,
    /// User agent string.
    pub user_agent: String,
    /// Listing page size.
    pub page_limit: u32,
    /// Maximum listing pages fetched before giving up.
    pub max_pages: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: endpoint::BASE_URL.to_string(),
            timeout: None,
            connect_timeout: None,
            user_agent: format!("stocksync/{}", env!("CARGO_PKG_VERSION")),
            page_limit: endpoint::PRODUCT_LIST_LIMIT,
            max_pages: DEFAULT_MAX_PAGES,
        }
    }
}

/// Seller API credentials.
#[derive(Clone)]
pub struct Credentials {
    client_id: String,
    api_key: String,
}

impl Credentials {
    /// Creates credentials from a client id and a seller API key.
    ///
    /// # Errors
    ///
    /// Returns [`MarketplaceError::MissingCredential`] if either value is blank.
    pub fn new(
        client_id: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Result<Self, MarketplaceError> {
        let client_id = client_id.into();
        let api_key = api_key.into();
        if client_id.trim().is_empty() {
            return Err(MarketplaceError::MissingCredential("Client-Id"));
        }
        if api_key.trim().is_empty() {
            return Err(MarketplaceError::MissingCredential("Api-Key"));
        }
        Ok(Self { client_id, api_key })
    }

    /// Returns the client id.
    #[must_use]
    pub fn client_id(&self) -> &str {
        &self.client_id
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("api_key", &"****")
            .finish()
    }
}

/// Seller API client.
///
/// Holds one pooled connection set; clone it freely.
#[derive(Debug, Clone)]
pub struct MarketplaceClient {
    client: Client,
    config: ClientConfig,
    credentials: Credentials,
}

impl MarketplaceClient {
    /// Creates a new client.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: ClientConfig, credentials: Credentials) -> Result<Self, MarketplaceError> {
        let mut builder = Client::builder().user_agent(&config.user_agent).gzip(true);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(timeout) = config.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        let client = builder.build()?;
        Ok(Self {
            client,
            config,
            credentials,
        })
    }

    /// Creates a client with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_defaults(credentials: Credentials) -> Result<Self, MarketplaceError> {
        Self::new(ClientConfig::default(), credentials)
    }

    /// Returns the client configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// POSTs a JSON body to `path` and decodes the JSON answer.
    async fn post<B, R>(&self, path: &'static str, body: &B) -> Result<R, MarketplaceError>
    where
        B: Serialize + Sync,
        R: DeserializeOwned,
    {
        let url = endpoint_url(&self.config.base_url, path);
        let payload = serde_json::to_vec(body)?;
        tracing::debug!(
            %url,
            client_id = self.credentials.client_id(),
            bytes = payload.len(),
            "seller API request"
        );

        let response = self
            .client
            .post(&url)
            .header("Client-Id", &self.credentials.client_id)
            .header("Api-Key", &self.credentials.api_key)
            .header(CONTENT_TYPE, "application/json")
            .body(payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let preview = preview(&body);
            tracing::error!(%url, status = status.as_u16(), body = %preview, "seller API request failed");
            return Err(MarketplaceError::Status {
                endpoint: path,
                status: status.as_u16(),
                body: preview,
            });
        }

        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|source| {
            tracing::error!(%url, body = %preview(&String::from_utf8_lossy(&bytes)), "undecodable seller API response");
            MarketplaceError::Decode {
                endpoint: path,
                source,
            }
        })
    }
}

#[async_trait]
impl Marketplace for MarketplaceClient {
    async fn list_products(&self, last_id: &str) -> Result<ProductPage, MarketplaceError> {
        let request = ProductListRequest {
            filter: ProductListFilter { visibility: "ALL" },
            last_id,
            limit: self.config.page_limit,
        };
        let response: ProductListResponse = self.post(endpoint::PRODUCT_LIST, &request).await?;
        response.result.ok_or(MarketplaceError::MissingResult {
            endpoint: endpoint::PRODUCT_LIST,
        })
    }

    async fn update_prices(
        &self,
        prices: &[PriceUpdate],
    ) -> Result<ImportResponse, MarketplaceError> {
        tracing::debug!(count = prices.len(), "importing prices");
        self.post(endpoint::IMPORT_PRICES, &ImportPricesRequest { prices })
            .await
    }

    async fn update_stocks(
        &self,
        stocks: &[StockUpdate],
    ) -> Result<ImportResponse, MarketplaceError> {
        tracing::debug!(count = stocks.len(), "importing stocks");
        self.post(endpoint::IMPORT_STOCKS, &ImportStocksRequest { stocks })
            .await
    }

    async fn offer_ids(&self) -> Result<Vec<OfferId>, MarketplaceError> {
        let offer_ids = crate::collect_offer_ids(self, self.config.max_pages).await?;
        tracing::info!(count = offer_ids.len(), "collected offer ids");
        Ok(offer_ids)
    }
}

/// Truncates a response body for logs and errors.
fn preview(body: &str) -> String {
    let mut preview: String = body.chars().take(BODY_PREVIEW_CHARS).collect();
    if preview.len() < body.len() {
        preview.push_str("...");
    }
    preview
}

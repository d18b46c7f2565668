//! Shopify Admin API order fetcher
//!
//! Fetches one page of paid orders newer than the sync cursor. The fetcher
//! never paginates within a run; catching up after a backlog larger than
//! one page is an emergent property of repeated invocations with the
//! advancing cursor.

use crate::adapters::shopify::models::OrdersResponse;
use crate::adapters::shopify::throttle::Throttle;
use crate::config::ShopifyConfig;
use crate::domain::errors::{ShopifyError, SyncError};
use crate::domain::order::RawOrder;
use crate::domain::result::Result;
use base64::{engine::general_purpose, Engine as _};
use reqwest::{Client, ClientBuilder, StatusCode};
use secrecy::ExposeSecret;
use std::time::Duration;

/// Order fetcher against the Shopify Admin REST API
///
/// # Example
///
/// ```no_run
/// use shopsync::adapters::shopify::OrderFetcher;
/// use shopsync::config::ShopifyConfig;
///
/// # async fn example() -> shopsync::domain::Result<()> {
/// let config = ShopifyConfig::default();
/// let fetcher = OrderFetcher::new(&config)?;
///
/// let orders = fetcher.fetch(0).await?;
/// println!("fetched {} orders", orders.len());
/// # Ok(())
/// # }
/// ```
pub struct OrderFetcher {
    base_url: String,
    client: Client,
    auth_header: Option<String>,
    page_size: usize,
    throttle: Throttle,
}

impl OrderFetcher {
    /// Create a fetcher from configuration
    ///
    /// # Errors
    ///
    /// Returns `SyncError::Configuration` if the HTTP client cannot be
    /// constructed.
    pub fn new(config: &ShopifyConfig) -> Result<Self> {
        let client = ClientBuilder::new()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .connect_timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| SyncError::Configuration(format!("Failed to build HTTP client: {e}")))?;

        let auth_header = config.api_password.as_ref().map(|password| {
            let credentials = format!("{}:{}", config.api_key, password.expose_secret());
            let encoded = general_purpose::STANDARD.encode(credentials.as_bytes());
            format!("Basic {encoded}")
        });

        Ok(Self {
            base_url: config.effective_base_url(),
            client,
            auth_header,
            page_size: config.page_size,
            throttle: Throttle::from_config(&config.throttle),
        })
    }

    /// Base URL requests are issued against
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch one page of paid orders with id greater than `since_order_id`
    ///
    /// An empty vector is a normal terminal condition, not an error. Any
    /// transport failure or non-success status aborts the run; the caller
    /// must not advance any persisted state on error.
    ///
    /// # Errors
    ///
    /// Returns `SyncError::Shopify` describing the transport or status
    /// failure.
    pub async fn fetch(&self, since_order_id: u64) -> Result<Vec<RawOrder>> {
        let url = format!(
            "{}/admin/orders.json?financial_status=paid&limit={}&since_id={}",
            self.base_url, self.page_size, since_order_id
        );

        tracing::debug!(
            since_order_id,
            page_size = self.page_size,
            "Requesting paid orders"
        );

        self.throttle.acquire().await;

        let mut request = self.client.get(&url);
        if let Some(auth) = &self.auth_header {
            request = request.header("Authorization", auth);
        }

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                ShopifyError::Timeout(e.to_string())
            } else {
                ShopifyError::ConnectionFailed(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SyncError::Shopify(Self::status_error(status, body)));
        }

        let body: OrdersResponse = response
            .json()
            .await
            .map_err(|e| ShopifyError::InvalidResponse(e.to_string()))?;

        tracing::info!(
            since_order_id,
            count = body.orders.len(),
            "Fetched order page"
        );

        Ok(body.orders)
    }

    /// Map a non-success HTTP status to the domain error taxonomy
    fn status_error(status: StatusCode, body: String) -> ShopifyError {
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                ShopifyError::AuthenticationFailed(format!("{status}: {body}"))
            }
            StatusCode::TOO_MANY_REQUESTS => ShopifyError::RateLimitExceeded(body),
            s if s.is_server_error() => ShopifyError::ServerError {
                status: s.as_u16(),
                message: body,
            },
            s => ShopifyError::ClientError {
                status: s.as_u16(),
                message: body,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::secret_string;

    fn test_config(base_url: &str) -> ShopifyConfig {
        ShopifyConfig {
            base_url: Some(base_url.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_fetcher_uses_base_url_override() {
        let fetcher = OrderFetcher::new(&test_config("http://127.0.0.1:9999")).unwrap();
        assert_eq!(fetcher.base_url(), "http://127.0.0.1:9999");
    }

    #[test]
    fn test_fetcher_builds_auth_header_from_credentials() {
        let config = ShopifyConfig {
            shop_name: "acme".to_string(),
            api_key: "key".to_string(),
            api_password: Some(secret_string("pw".to_string())),
            ..Default::default()
        };

        let fetcher = OrderFetcher::new(&config).unwrap();
        let expected = format!(
            "Basic {}",
            general_purpose::STANDARD.encode("key:pw".as_bytes())
        );
        assert_eq!(fetcher.auth_header.as_deref(), Some(expected.as_str()));
        assert_eq!(fetcher.base_url(), "https://acme.myshopify.com");
    }

    #[test]
    fn test_status_error_mapping() {
        assert!(matches!(
            OrderFetcher::status_error(StatusCode::UNAUTHORIZED, String::new()),
            ShopifyError::AuthenticationFailed(_)
        ));
        assert!(matches!(
            OrderFetcher::status_error(StatusCode::TOO_MANY_REQUESTS, String::new()),
            ShopifyError::RateLimitExceeded(_)
        ));
        assert!(matches!(
            OrderFetcher::status_error(StatusCode::SERVICE_UNAVAILABLE, String::new()),
            ShopifyError::ServerError { status: 503, .. }
        ));
        assert!(matches!(
            OrderFetcher::status_error(StatusCode::NOT_FOUND, String::new()),
            ShopifyError::ClientError { status: 404, .. }
        ));
    }

    #[tokio::test]
    async fn test_fetch_returns_page_from_mock_server() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/admin/orders.json")
            .match_query(mockito::Matcher::AllOf(vec![
                mockito::Matcher::UrlEncoded("financial_status".into(), "paid".into()),
                mockito::Matcher::UrlEncoded("since_id".into(), "0".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{ "orders": [ {
                    "id": 7, "order_number": 1001,
                    "created_at": "2016-09-09T10:00:00Z",
                    "total_price": "10.00", "subtotal_price": "10.00",
                    "total_tax": "0.00", "total_discounts": "0.00",
                    "line_items": [
                        { "sku": "A", "quantity": 1, "price": "10.00",
                          "total_discount": "0.00" }
                    ]
                } ] }"#,
            )
            .create_async()
            .await;

        let fetcher = OrderFetcher::new(&test_config(&server.url())).unwrap();
        let orders = fetcher.fetch(0).await.unwrap();

        mock.assert_async().await;
        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].id, 7);
    }

    #[tokio::test]
    async fn test_fetch_maps_server_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", mockito::Matcher::Any)
            .with_status(500)
            .with_body("boom")
            .create_async()
            .await;

        let fetcher = OrderFetcher::new(&test_config(&server.url())).unwrap();
        let err = fetcher.fetch(0).await.unwrap_err();

        assert!(matches!(
            err,
            SyncError::Shopify(ShopifyError::ServerError { status: 500, .. })
        ));
    }
}

//! Shop API client implementation.

use std::sync::Arc;

use blueshop_core::{OrderRequest, Product};
use tracing::instrument;

use super::BackendError;
use super::types::{ErrorDetail, OrderConfirmation};
use crate::config::BackendConfig;

/// Fallback message when a rejection carries no detail.
const GENERIC_REJECTION: &str = "Failed to place order";

/// Client for the upstream shop API.
///
/// Cheaply cloneable; the underlying `reqwest::Client` pools connections.
#[derive(Clone)]
pub struct BackendClient {
    inner: Arc<BackendClientInner>,
}

struct BackendClientInner {
    client: reqwest::Client,
    base_url: String,
}

impl BackendClient {
    /// Create a new shop API client.
    #[must_use]
    pub fn new(config: &BackendConfig) -> Self {
        Self {
            inner: Arc::new(BackendClientInner {
                client: reqwest::Client::new(),
                base_url: config.base_url.clone(),
            }),
        }
    }

    fn products_url(&self) -> String {
        format!("{}/api/products", self.inner.base_url)
    }

    fn orders_url(&self) -> String {
        format!("{}/api/orders", self.inner.base_url)
    }

    /// Fetch the product catalog.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or when the response is not a
    /// JSON array of products. Callers render failures as an empty catalog;
    /// there is no retry.
    #[instrument(skip(self))]
    pub async fn fetch_products(&self) -> Result<Vec<Product>, BackendError> {
        let response = self.inner.client.get(self.products_url()).send().await?;

        // Read the body as text first for better parse-failure diagnostics.
        let body = response.text().await?;

        match serde_json::from_str(&body) {
            Ok(products) => Ok(products),
            Err(e) => {
                tracing::error!(
                    error = %e,
                    body = %body.chars().take(500).collect::<String>(),
                    "Failed to parse product feed"
                );
                Err(BackendError::Parse(e))
            }
        }
    }

    /// Create an order from a checkout payload.
    ///
    /// # Errors
    ///
    /// Returns `Rejected` when the API answers with a non-success status
    /// (carrying the server's `detail` when present), `Http` on transport
    /// failure, and `Parse` when a success response has no usable body.
    #[instrument(skip(self, order), fields(items = order.items.len()))]
    pub async fn create_order(
        &self,
        order: &OrderRequest,
    ) -> Result<OrderConfirmation, BackendError> {
        let response = self
            .inner
            .client
            .post(self.orders_url())
            .json(order)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let detail = serde_json::from_str::<ErrorDetail>(&body)
                .unwrap_or_default()
                .detail;
            tracing::warn!(status = %status, "Order rejected by shop API");
            return Err(BackendError::Rejected(
                detail.unwrap_or_else(|| GENERIC_REJECTION.to_string()),
            ));
        }

        match serde_json::from_str(&body) {
            Ok(confirmation) => Ok(confirmation),
            Err(e) => {
                tracing::error!(
                    error = %e,
                    body = %body.chars().take(500).collect::<String>(),
                    "Failed to parse order confirmation"
                );
                Err(BackendError::Parse(e))
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::config::BackendConfig;

    #[test]
    fn test_endpoint_urls() {
        let config = BackendConfig::new("http://shop.example/").unwrap();
        let client = BackendClient::new(&config);

        assert_eq!(client.products_url(), "http://shop.example/api/products");
        assert_eq!(client.orders_url(), "http://shop.example/api/orders");
    }
}

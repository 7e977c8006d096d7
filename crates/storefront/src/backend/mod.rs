//! Upstream shop API client.
//!
//! # Architecture
//!
//! - Plain REST/JSON over `reqwest`
//! - The API is the source of truth for the catalog - no local sync
//! - No caching and no retries: the widget refetches per render
//!
//! # Endpoints
//!
//! - `GET {base}/api/products` - catalog feed
//! - `POST {base}/api/orders` - order submission
//!
//! # Example
//!
//! ```rust,ignore
//! use blueshop_storefront::backend::BackendClient;
//!
//! let client = BackendClient::new(&config.backend);
//! let products = client.fetch_products().await?;
//! let confirmation = client.create_order(&order).await?;
//! ```

mod client;
pub mod types;

pub use client::BackendClient;
pub use types::{ErrorDetail, OrderConfirmation};

use thiserror::Error;

/// Errors that can occur when talking to the shop API.
#[derive(Debug, Error)]
pub enum BackendError {
    /// HTTP request failed at the transport level.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// The API rejected the request and reported a reason.
    #[error("Rejected: {0}")]
    Rejected(String),
}

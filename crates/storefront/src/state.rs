//! Application state shared across handlers.

use std::sync::Arc;

use crate::backend::BackendClient;
use crate::config::ShopConfig;
use crate::storage::CartStorage;
use crate::store::CartStore;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// configuration, the shop API client, and the cart store.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: ShopConfig,
    backend: BackendClient,
    cart: CartStore,
}

impl AppState {
    /// Create the application state, loading any persisted cart.
    ///
    /// Never fails: corrupt or missing cart state degrades to an empty cart.
    #[must_use]
    pub fn new(config: ShopConfig) -> Self {
        let backend = BackendClient::new(&config.backend);
        let cart = CartStore::open(CartStorage::new(config.cart_file.clone()));

        Self {
            inner: Arc::new(AppStateInner {
                config,
                backend,
                cart,
            }),
        }
    }

    /// Get a reference to the shop configuration.
    #[must_use]
    pub fn config(&self) -> &ShopConfig {
        &self.inner.config
    }

    /// Get a reference to the shop API client.
    #[must_use]
    pub fn backend(&self) -> &BackendClient {
        &self.inner.backend
    }

    /// Get a reference to the cart store.
    #[must_use]
    pub fn cart(&self) -> &CartStore {
        &self.inner.cart
    }
}

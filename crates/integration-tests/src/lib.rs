//! Integration tests for BlueShop.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p blueshop-integration-tests
//! ```
//!
//! # Approach
//!
//! Tests drive the storefront router in-process via
//! `tower::ServiceExt::oneshot`; no live shop API is required. The
//! configured API origin points at a loopback port nothing listens on, so
//! catalog and order calls fail fast and exercise the widget's degradation
//! paths (empty catalog, network-error checkout). Cart state goes through a
//! per-test temp file, which is also how tests seed pre-existing carts.

use std::path::{Path, PathBuf};

use axum::Router;
use blueshop_core::{Cart, Product, ProductId};
use blueshop_storefront::config::{BackendConfig, ShopConfig};
use blueshop_storefront::routes;
use blueshop_storefront::state::AppState;
use rust_decimal::Decimal;

/// API origin on a loopback port nothing listens on (port 1 needs root to
/// bind, so connections are refused immediately).
pub const UNREACHABLE_API: &str = "http://127.0.0.1:1";

/// Unique temp path for a test cart file. Any leftover from a previous run
/// is removed.
#[must_use]
pub fn temp_cart_file(name: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "blueshop-it-{name}-{}.json",
        std::process::id()
    ));
    let _ = std::fs::remove_file(&path);
    path
}

/// Build an application router whose cart persists to `cart_file` and whose
/// API origin is unreachable.
#[must_use]
pub fn test_app(cart_file: &Path) -> Router {
    let config = ShopConfig {
        host: "127.0.0.1".parse().expect("loopback address"),
        port: 0,
        backend: BackendConfig::new(UNREACHABLE_API).expect("valid test origin"),
        cart_file: cart_file.to_path_buf(),
        sentry_dsn: None,
    };

    routes::routes().with_state(AppState::new(config))
}

/// Seed `path` with a one-line cart: Blue Mug, price 10, quantity 2.
///
/// Written through the core types so the file shape always matches what the
/// storefront persists.
pub fn seed_cart_file(path: &Path) {
    let mut cart = Cart::new();
    cart.add(
        &Product {
            id: ProductId::new("p1"),
            title: "Blue Mug".to_owned(),
            category: "Kitchen".to_owned(),
            price: Decimal::from(10),
            image: None,
        },
        2,
    );

    let json = serde_json::to_string(&cart).expect("cart serializes");
    std::fs::write(path, json).expect("seed cart file");
}

//! HTTP route handlers for the shop widget.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                - Shop page (product grid + cart panel + checkout)
//! GET  /health          - Health check
//!
//! # Products
//! GET  /products        - Product grid fragment, ?q= filters by term (HTMX)
//!
//! # Cart (HTMX fragments)
//! GET  /cart/items      - Cart panel contents (rows + totals)
//! POST /cart/add        - Add product (returns cart items, opens panel)
//! POST /cart/update     - Update line quantity (returns cart items)
//! GET  /cart/count      - Cart count badge
//!
//! # Checkout (HTMX fragments)
//! GET  /checkout/form   - Checkout form
//! POST /checkout        - Submit order (form with message, or confirmation)
//! ```

pub mod cart;
pub mod checkout;
pub mod products;
pub mod shop;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/items", get(cart::items))
        .route("/add", post(cart::add))
        .route("/update", post(cart::update))
        .route("/count", get(cart::count))
}

/// Create all routes for the shop widget.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Shop page
        .route("/", get(shop::shop))
        // Product grid fragment
        .route("/products", get(products::grid))
        // Cart fragments
        .nest("/cart", cart_routes())
        // Checkout fragments
        .route("/checkout", post(checkout::submit))
        .route("/checkout/form", get(checkout::form))
}

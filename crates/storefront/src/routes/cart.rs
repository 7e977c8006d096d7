//! Cart fragment handlers.
//!
//! Cart mutations are HTMX POSTs; each returns a freshly rendered fragment
//! (a full replacement, never an append) and fires `HX-Trigger` events that
//! the other fragments listen for:
//!
//! - `cart-updated` - the count badge refetches itself
//! - `cart-open`    - the cart panel slides open after an add

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{AppendHeaders, IntoResponse, Response},
};
use blueshop_core::{Cart, LineItem, ProductId, compute_totals};
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::instrument;

use crate::error::AppError;
use crate::state::AppState;

/// Cart line display data for templates.
#[derive(Clone)]
pub struct CartItemView {
    pub id: String,
    pub title: String,
    pub price: String,
    pub line_total: String,
    pub quantity: u32,
    pub image: Option<String>,
}

/// Cart panel display data for templates.
#[derive(Clone)]
pub struct CartPanelView {
    pub items: Vec<CartItemView>,
    pub subtotal: String,
    pub shipping: String,
    pub tax: String,
    pub total: String,
    pub item_count: u32,
}

// =============================================================================
// Type Conversions
// =============================================================================

/// Format a decimal amount as a price string.
pub(crate) fn format_price(amount: Decimal) -> String {
    format!("${amount:.2}")
}

impl From<&LineItem> for CartItemView {
    fn from(line: &LineItem) -> Self {
        Self {
            id: line.id.to_string(),
            title: line.title.clone(),
            price: format_price(line.price),
            line_total: format_price(line.line_total()),
            quantity: line.quantity,
            image: line.image.clone(),
        }
    }
}

impl From<&Cart> for CartPanelView {
    fn from(cart: &Cart) -> Self {
        let totals = compute_totals(cart);

        Self {
            items: cart.lines().iter().map(CartItemView::from).collect(),
            subtotal: format_price(totals.subtotal),
            shipping: format_price(totals.shipping),
            tax: format_price(totals.tax),
            total: format_price(totals.total),
            item_count: cart.item_count(),
        }
    }
}

// =============================================================================
// Forms and Templates
// =============================================================================

/// Add-to-cart form data.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub product_id: String,
    pub quantity: Option<u32>,
}

/// Quantity update form data.
#[derive(Debug, Deserialize)]
pub struct UpdateCartForm {
    pub product_id: String,
    pub quantity: u32,
}

/// Cart items fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_items.html")]
pub struct CartItemsTemplate {
    pub cart: CartPanelView,
}

/// Cart count badge fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_count.html")]
pub struct CartCountTemplate {
    pub count: u32,
}

// =============================================================================
// Handlers
// =============================================================================

/// Cart items fragment.
#[instrument(skip(state))]
pub async fn items(State(state): State<AppState>) -> impl IntoResponse {
    let cart = state.cart().snapshot();

    CartItemsTemplate {
        cart: CartPanelView::from(&cart),
    }
}

/// Cart count badge fragment.
#[instrument(skip(state))]
pub async fn count(State(state): State<AppState>) -> impl IntoResponse {
    CartCountTemplate {
        count: state.cart().snapshot().item_count(),
    }
}

/// Add a product to the cart (HTMX).
///
/// Resolves the product against the catalog, merges it into the cart (one
/// line per product, quantities sum), and returns the re-rendered cart
/// items fragment. Fires `cart-updated` and `cart-open`.
#[instrument(skip(state))]
pub async fn add(
    State(state): State<AppState>,
    Form(form): Form<AddToCartForm>,
) -> Result<Response, AppError> {
    let quantity = form.quantity.unwrap_or(1);
    let id = ProductId::new(form.product_id);

    let products = state.backend().fetch_products().await?;
    let product = products
        .iter()
        .find(|product| product.id == id)
        .ok_or_else(|| AppError::BadRequest(format!("unknown product: {id}")))?;

    let cart = state.cart().add(product, quantity);

    Ok((
        AppendHeaders([("HX-Trigger", "cart-updated, cart-open")]),
        CartItemsTemplate {
            cart: CartPanelView::from(&cart),
        },
    )
        .into_response())
}

/// Update a line's quantity (HTMX).
///
/// Quantities below 1 clamp to 1; an unknown product is a no-op. Either way
/// the fragment re-renders so the client view resynchronizes.
#[instrument(skip(state))]
pub async fn update(
    State(state): State<AppState>,
    Form(form): Form<UpdateCartForm>,
) -> impl IntoResponse {
    let cart = state
        .cart()
        .set_quantity(&ProductId::new(form.product_id), form.quantity);

    (
        AppendHeaders([("HX-Trigger", "cart-updated")]),
        CartItemsTemplate {
            cart: CartPanelView::from(&cart),
        },
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use blueshop_core::Product;

    #[test]
    fn test_format_price_two_decimals() {
        assert_eq!(format_price(Decimal::from(6)), "$6.00");
        assert_eq!(format_price(Decimal::new(1099, 2)), "$10.99");
        assert_eq!(format_price(Decimal::ZERO), "$0.00");
    }

    #[test]
    fn test_cart_panel_view_formats_totals() {
        let mut cart = Cart::new();
        cart.add(
            &Product {
                id: ProductId::new("p1"),
                title: "Blue Mug".to_owned(),
                category: "Kitchen".to_owned(),
                price: Decimal::from(10),
                image: None,
            },
            5,
        );

        let view = CartPanelView::from(&cart);
        assert_eq!(view.subtotal, "$50.00");
        assert_eq!(view.shipping, "$6.00");
        assert_eq!(view.tax, "$5.00");
        assert_eq!(view.total, "$61.00");
        assert_eq!(view.item_count, 5);

        let line = view.items.first().unwrap();
        assert_eq!(line.price, "$10.00");
        assert_eq!(line.line_total, "$50.00");
    }

    #[test]
    fn test_empty_cart_panel_view() {
        let view = CartPanelView::from(&Cart::new());
        assert!(view.items.is_empty());
        assert_eq!(view.total, "$0.00");
        assert_eq!(view.item_count, 0);
    }
}

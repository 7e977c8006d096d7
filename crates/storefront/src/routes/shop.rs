//! Shop page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use tracing::instrument;

use crate::filters;
use crate::routes::cart::CartPanelView;
use crate::routes::checkout::CheckoutFormView;
use crate::routes::products::{ProductCardView, load_catalog};
use crate::state::AppState;

/// Shop page template.
#[derive(Template, WebTemplate)]
#[template(path = "pages/shop.html")]
pub struct ShopPageTemplate {
    /// Product cards for the grid (unfiltered on initial load).
    pub products: Vec<ProductCardView>,
    /// Cart panel contents, restored from persisted state.
    pub cart: CartPanelView,
    /// Checkout form state (blank on page load, hidden until toggled).
    pub form: CheckoutFormView,
}

/// Display the shop page.
///
/// Renders the full widget: product grid, cart panel with persisted
/// contents, and the checkout area. A catalog failure renders an empty grid.
#[instrument(skip(state))]
pub async fn shop(State(state): State<AppState>) -> impl IntoResponse {
    let products = load_catalog(&state)
        .await
        .iter()
        .map(ProductCardView::from)
        .collect();

    let cart = state.cart().snapshot();

    ShopPageTemplate {
        products,
        cart: CartPanelView::from(&cart),
        form: CheckoutFormView::default(),
    }
}

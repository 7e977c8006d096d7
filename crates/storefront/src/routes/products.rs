//! Product grid handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Query, State},
    response::IntoResponse,
};
use blueshop_core::{Product, filter_products};
use serde::Deserialize;
use tracing::instrument;

use crate::routes::cart::format_price;
use crate::state::AppState;

/// Product card display data for templates.
#[derive(Clone)]
pub struct ProductCardView {
    pub id: String,
    pub title: String,
    pub category: String,
    pub price: String,
    pub image: Option<String>,
}

impl From<&Product> for ProductCardView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.to_string(),
            title: product.title.clone(),
            category: product.category.clone(),
            price: format_price(product.price),
            image: product.image.clone(),
        }
    }
}

/// Search query parameters.
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

/// Product grid fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/product_grid.html")]
pub struct ProductGridTemplate {
    pub products: Vec<ProductCardView>,
}

/// Product grid fragment, filtered by the search term (HTMX).
///
/// A term matching nothing renders an empty grid; clearing it restores the
/// full catalog.
#[instrument(skip(state))]
pub async fn grid(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> impl IntoResponse {
    let products = load_catalog(&state).await;
    let products = filter_products(&products, &query.q)
        .into_iter()
        .map(ProductCardView::from)
        .collect();

    ProductGridTemplate { products }
}

/// Fetch the catalog, degrading to an empty list on failure.
///
/// The widget shows no products and no error banner when the feed is down;
/// the failure is only logged.
pub(crate) async fn load_catalog(state: &AppState) -> Vec<Product> {
    state.backend().fetch_products().await.map_or_else(
        |e| {
            tracing::error!("Failed to load products: {e}");
            Vec::new()
        },
        |products| products,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use blueshop_core::ProductId;
    use rust_decimal::Decimal;

    #[test]
    fn test_product_card_view_formats_price() {
        let product = Product {
            id: ProductId::new("p1"),
            title: "Blue Mug".to_owned(),
            category: "Kitchen".to_owned(),
            price: Decimal::new(125, 1),
            image: Some("https://cdn.example/mug.jpg".to_owned()),
        };

        let view = ProductCardView::from(&product);
        assert_eq!(view.id, "p1");
        assert_eq!(view.price, "$12.50");
        assert_eq!(view.image.as_deref(), Some("https://cdn.example/mug.jpg"));
    }
}

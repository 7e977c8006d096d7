//! Checkout order payload assembly.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cart::{Cart, LineItem};
use crate::totals::{OrderTotals, compute_totals};
use crate::types::ProductId;

/// Error building an order payload.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OrderBuildError {
    /// The cart has no line items; no order may be submitted.
    #[error("cart is empty")]
    EmptyCart,
}

/// Snapshot of a cart line inside an order payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    pub product_id: ProductId,
    pub title: String,
    pub price: Decimal,
    pub quantity: u32,
    pub image: Option<String>,
}

impl From<&LineItem> for OrderLine {
    fn from(line: &LineItem) -> Self {
        Self {
            product_id: line.id.clone(),
            title: line.title.clone(),
            price: line.price,
            quantity: line.quantity,
            image: line.image.clone(),
        }
    }
}

/// Customer and shipping address fields collected from the checkout form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerDetails {
    pub customer_name: String,
    pub customer_email: String,
    pub address_line1: String,
    /// Secondary address line; `None` when the form field was left blank.
    pub address_line2: Option<String>,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub country: String,
}

/// Payload for the create-order API call.
///
/// Constructed once at submission time from the current cart and the form
/// fields; never stored locally beyond the request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRequest {
    pub items: Vec<OrderLine>,
    pub subtotal: Decimal,
    pub shipping: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
    #[serde(flatten)]
    pub customer: CustomerDetails,
}

impl OrderRequest {
    /// Assemble an order payload from the current cart and form fields.
    ///
    /// Totals are recomputed from the cart at submission time rather than
    /// trusting anything previously rendered.
    ///
    /// # Errors
    ///
    /// Returns [`OrderBuildError::EmptyCart`] when the cart has no lines.
    pub fn build(cart: &Cart, customer: CustomerDetails) -> Result<Self, OrderBuildError> {
        if cart.is_empty() {
            return Err(OrderBuildError::EmptyCart);
        }

        let OrderTotals {
            subtotal,
            shipping,
            tax,
            total,
        } = compute_totals(cart);

        Ok(Self {
            items: cart.lines().iter().map(OrderLine::from).collect(),
            subtotal,
            shipping,
            tax,
            total,
            customer,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::product::Product;

    fn customer() -> CustomerDetails {
        CustomerDetails {
            customer_name: "Ada Lovelace".to_owned(),
            customer_email: "ada@example.com".to_owned(),
            address_line1: "1 Analytical Way".to_owned(),
            address_line2: None,
            city: "London".to_owned(),
            state: "LDN".to_owned(),
            postal_code: "N1 7AA".to_owned(),
            country: "GB".to_owned(),
        }
    }

    fn seeded_cart() -> Cart {
        let mut cart = Cart::new();
        cart.add(
            &Product {
                id: ProductId::new("p1"),
                title: "Blue Mug".to_owned(),
                category: "Kitchen".to_owned(),
                price: Decimal::from(10),
                image: Some("https://cdn.example/mug.jpg".to_owned()),
            },
            2,
        );
        cart
    }

    #[test]
    fn test_build_rejects_empty_cart() {
        let result = OrderRequest::build(&Cart::new(), customer());
        assert_eq!(result.unwrap_err(), OrderBuildError::EmptyCart);
    }

    #[test]
    fn test_build_snapshots_lines_and_totals() {
        let cart = seeded_cart();
        let order = OrderRequest::build(&cart, customer()).unwrap();

        assert_eq!(order.items.len(), 1);
        let line = order.items.first().unwrap();
        assert_eq!(line.product_id, ProductId::new("p1"));
        assert_eq!(line.quantity, 2);

        let totals = compute_totals(&cart);
        assert_eq!(order.subtotal, totals.subtotal);
        assert_eq!(order.shipping, totals.shipping);
        assert_eq!(order.tax, totals.tax);
        assert_eq!(order.total, totals.total);
    }

    #[test]
    fn test_payload_shape_matches_wire_format() {
        let order = OrderRequest::build(&seeded_cart(), customer()).unwrap();
        let value = serde_json::to_value(&order).unwrap();

        // Customer fields are flattened to the top level.
        assert_eq!(value["customer_name"], "Ada Lovelace");
        assert_eq!(value["customer_email"], "ada@example.com");
        assert_eq!(value["address_line2"], serde_json::Value::Null);
        assert_eq!(value["country"], "GB");

        // Items carry the line snapshot fields.
        assert_eq!(value["items"][0]["product_id"], "p1");
        assert_eq!(value["items"][0]["quantity"], 2);
        assert!(value["items"][0].get("image").is_some());

        // Totals are present at the top level.
        for key in ["subtotal", "shipping", "tax", "total"] {
            assert!(value.get(key).is_some(), "missing {key}");
        }
    }
}

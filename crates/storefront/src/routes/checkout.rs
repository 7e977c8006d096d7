//! Checkout flow handlers.
//!
//! The checkout form renders inline in the shop page, hidden until the
//! toggle button reveals it. Submission re-renders the checkout area: the
//! form with an inline message on any failure (values preserved, cart
//! intact), or the order confirmation on success (cart cleared, form gone).

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{AppendHeaders, IntoResponse, Response},
};
use blueshop_core::{CustomerDetails, OrderBuildError, OrderRequest};
use serde::Deserialize;
use tracing::instrument;

use crate::backend::BackendError;
use crate::state::AppState;

/// Checkout form field values plus an optional inline message.
#[derive(Clone, Default)]
pub struct CheckoutFormView {
    pub customer_name: String,
    pub customer_email: String,
    pub address_line1: String,
    pub address_line2: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub country: String,
    pub error: Option<String>,
}

impl CheckoutFormView {
    fn with_error(mut self, message: impl Into<String>) -> Self {
        self.error = Some(message.into());
        self
    }
}

impl From<&CheckoutForm> for CheckoutFormView {
    fn from(form: &CheckoutForm) -> Self {
        Self {
            customer_name: form.customer_name.clone(),
            customer_email: form.customer_email.clone(),
            address_line1: form.address_line1.clone(),
            address_line2: form.address_line2.clone(),
            city: form.city.clone(),
            state: form.state.clone(),
            postal_code: form.postal_code.clone(),
            country: form.country.clone(),
            error: None,
        }
    }
}

/// Checkout form data.
#[derive(Debug, Deserialize)]
pub struct CheckoutForm {
    pub customer_name: String,
    pub customer_email: String,
    pub address_line1: String,
    #[serde(default)]
    pub address_line2: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub country: String,
}

/// Checkout form fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/checkout_form.html")]
pub struct CheckoutFormTemplate {
    pub form: CheckoutFormView,
}

/// Order confirmation fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/order_status.html")]
pub struct OrderStatusTemplate {
    pub order_id: String,
}

/// Blank checkout form fragment (HTMX).
///
/// The checkout area's toggle button swaps this in, taking the form from
/// `hidden` to `visible`.
#[instrument]
pub async fn form() -> impl IntoResponse {
    CheckoutFormTemplate {
        form: CheckoutFormView::default(),
    }
}

/// Submit the order (HTMX).
///
/// An empty cart or an invalid email aborts before any request is sent. The
/// cart is cleared only on a confirmed order; every failure path leaves it
/// intact for retry.
#[instrument(skip(state, form), fields(email = %form.customer_email))]
pub async fn submit(State(state): State<AppState>, Form(form): Form<CheckoutForm>) -> Response {
    let view = CheckoutFormView::from(&form);

    // Empty-cart submissions abort before anything touches the network.
    let cart = state.cart().snapshot();
    if cart.is_empty() {
        return CheckoutFormTemplate {
            form: view.with_error("Your cart is empty."),
        }
        .into_response();
    }

    let email = form.customer_email.trim().to_lowercase();
    if !is_valid_email(&email) {
        return CheckoutFormTemplate {
            form: view.with_error("Please enter a valid email address."),
        }
        .into_response();
    }

    let customer = CustomerDetails {
        customer_name: form.customer_name.trim().to_owned(),
        customer_email: email,
        address_line1: form.address_line1.trim().to_owned(),
        address_line2: optional_field(&form.address_line2),
        city: form.city.trim().to_owned(),
        state: form.state.trim().to_owned(),
        postal_code: form.postal_code.trim().to_owned(),
        country: form.country.trim().to_owned(),
    };

    // Totals are recomputed from the live cart inside the payload builder.
    // The emptiness re-check covers a checkout racing a concurrent clear.
    let order = match OrderRequest::build(&cart, customer) {
        Ok(order) => order,
        Err(OrderBuildError::EmptyCart) => {
            return CheckoutFormTemplate {
                form: view.with_error("Your cart is empty."),
            }
            .into_response();
        }
    };

    match state.backend().create_order(&order).await {
        Ok(confirmation) => {
            state.cart().clear();
            tracing::info!(order_id = %confirmation.id, "Order placed");

            (
                AppendHeaders([("HX-Trigger", "cart-updated, cart-cleared")]),
                OrderStatusTemplate {
                    order_id: confirmation.id.to_string(),
                },
            )
                .into_response()
        }
        Err(BackendError::Rejected(detail)) => CheckoutFormTemplate {
            form: view.with_error(detail),
        }
        .into_response(),
        Err(e) => {
            tracing::error!("Order submission failed: {e}");
            CheckoutFormTemplate {
                form: view.with_error("Network error. Try again."),
            }
            .into_response()
        }
    }
}

/// Basic email validation.
fn is_valid_email(email: &str) -> bool {
    let mut parts = email.splitn(2, '@');
    let Some(local) = parts.next() else {
        return false;
    };
    let Some(domain) = parts.next() else {
        return false;
    };
    !local.is_empty() && !domain.is_empty() && domain.contains('.')
}

/// Treat a blank form field as absent.
fn optional_field(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_email() {
        assert!(is_valid_email("ada@example.com"));
        assert!(!is_valid_email("ada"));
        assert!(!is_valid_email("ada@"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("ada@example"));
    }

    #[test]
    fn test_optional_field_blank_is_absent() {
        assert_eq!(optional_field(""), None);
        assert_eq!(optional_field("   "), None);
        assert_eq!(optional_field(" Unit 4 "), Some("Unit 4".to_owned()));
    }
}

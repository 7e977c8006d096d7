//! Integration tests for the checkout flow.
//!
//! The backend origin is unreachable, so any submission that gets as far as
//! the order request must surface the network-error message and leave the
//! cart untouched. Paths that abort earlier (empty cart, invalid email)
//! never reach the network at all.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use tower::ServiceExt;

use blueshop_integration_tests::{seed_cart_file, temp_cart_file, test_app};

const VALID_FORM: &str = "customer_name=Ada+Lovelace&customer_email=ada%40example.com\
&address_line1=1+Analytical+Way&address_line2=&city=London&state=LDN\
&postal_code=N1+7AA&country=GB";

async fn post_form(app: Router, uri: &str, body: &'static str) -> (StatusCode, String) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(body))
                .expect("request builds"),
        )
        .await
        .expect("request succeeds");

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body reads");
    (status, String::from_utf8_lossy(&bytes).into_owned())
}

async fn get(app: Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .oneshot(
            Request::builder()
                .uri(uri)
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("request succeeds");

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body reads");
    (status, String::from_utf8_lossy(&bytes).into_owned())
}

// =============================================================================
// Pre-flight Failures (no request sent)
// =============================================================================

#[tokio::test]
async fn test_empty_cart_submit_shows_message() {
    let cart_file = temp_cart_file("empty-submit");
    let app = test_app(&cart_file);

    let (status, body) = post_form(app, "/checkout", VALID_FORM).await;

    // Inline message on the re-rendered form; no order request was sent
    // (the origin is unreachable, so reaching it would show a network error
    // instead).
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Your cart is empty."));
    assert!(!body.contains("Network error"));
    // Entered values are preserved for retry.
    assert!(body.contains("value=\"Ada Lovelace\""));

    let _ = std::fs::remove_file(&cart_file);
}

#[tokio::test]
async fn test_invalid_email_aborts_before_submitting() {
    let cart_file = temp_cart_file("bad-email");
    seed_cart_file(&cart_file);
    let app = test_app(&cart_file);

    let (status, body) = post_form(
        app,
        "/checkout",
        "customer_name=Ada&customer_email=not-an-email&address_line1=1+Way\
&city=London&state=LDN&postal_code=N1&country=GB",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Please enter a valid email address."));
    assert!(!body.contains("Network error"));

    let _ = std::fs::remove_file(&cart_file);
}

// =============================================================================
// Transport Failure
// =============================================================================

#[tokio::test]
async fn test_network_failure_preserves_cart() {
    let cart_file = temp_cart_file("net-failure");
    seed_cart_file(&cart_file);
    let app = test_app(&cart_file);

    let (status, body) = post_form(app.clone(), "/checkout", VALID_FORM).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Network error. Try again."));

    // The cart is intact in memory and on disk.
    let (_, items) = get(app, "/cart/items").await;
    assert!(items.contains("Blue Mug"));

    let contents = std::fs::read_to_string(&cart_file).expect("cart file exists");
    let value: serde_json::Value = serde_json::from_str(&contents).expect("cart file is JSON");
    assert_eq!(value.as_array().map(Vec::len), Some(1));

    let _ = std::fs::remove_file(&cart_file);
}

// =============================================================================
// Form Fragment
// =============================================================================

#[tokio::test]
async fn test_checkout_form_fragment_renders_blank() {
    let cart_file = temp_cart_file("form-fragment");
    let app = test_app(&cart_file);

    let (status, body) = get(app, "/checkout/form").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("name=\"customer_name\""));
    assert!(body.contains("name=\"address_line2\""));
    assert!(body.contains("Place order"));

    let _ = std::fs::remove_file(&cart_file);
}

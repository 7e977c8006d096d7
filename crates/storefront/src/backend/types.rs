//! Wire types for the shop API.

use blueshop_core::OrderId;
use serde::Deserialize;

/// Successful order creation response.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderConfirmation {
    /// Identifier the API assigned to the created order.
    pub id: OrderId,
}

/// Failure response body.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorDetail {
    /// Human-readable reason, when the API provides one.
    #[serde(default)]
    pub detail: Option<String>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_confirmation_accepts_numeric_ids() {
        let confirmation: OrderConfirmation = serde_json::from_str(r#"{"id": 81}"#).unwrap();
        assert_eq!(confirmation.id, OrderId::new("81"));

        let confirmation: OrderConfirmation =
            serde_json::from_str(r#"{"id": "ord_81"}"#).unwrap();
        assert_eq!(confirmation.id, OrderId::new("ord_81"));
    }

    #[test]
    fn test_error_detail_is_optional() {
        let detail: ErrorDetail = serde_json::from_str("{}").unwrap();
        assert_eq!(detail.detail, None);

        let detail: ErrorDetail =
            serde_json::from_str(r#"{"detail": "card declined"}"#).unwrap();
        assert_eq!(detail.detail.as_deref(), Some("card declined"));
    }
}

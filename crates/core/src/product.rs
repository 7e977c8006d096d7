//! Catalog products as fetched from the shop API.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::ProductId;

/// A product in the catalog.
///
/// Immutable once fetched; the cart copies the fields it needs into its own
/// line items rather than holding references into the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Product identifier, unique within the catalog.
    pub id: ProductId,
    /// Display title.
    pub title: String,
    /// Category label; searchable alongside the title.
    pub category: String,
    /// Unit price in the shop currency's standard unit.
    pub price: Decimal,
    /// Image URL. Some catalog feeds omit it.
    #[serde(default)]
    pub image: Option<String>,
}

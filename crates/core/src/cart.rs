//! Cart state: ordered line items with merge and clamp semantics.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::product::Product;
use crate::types::ProductId;

/// Minimum quantity for any stored line.
pub const MIN_QUANTITY: u32 = 1;

/// A product plus the quantity of it in the cart.
///
/// Carries a snapshot of the product fields so the cart stays renderable
/// even when the catalog is unavailable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Identifier of the product this line refers to.
    pub id: ProductId,
    pub title: String,
    pub category: String,
    /// Unit price at the time the product was added.
    pub price: Decimal,
    #[serde(default)]
    pub image: Option<String>,
    /// Invariant: always >= [`MIN_QUANTITY`].
    pub quantity: u32,
}

impl LineItem {
    /// Unit price multiplied by quantity.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}

/// Ordered sequence of line items; insertion order is add order.
///
/// One line per product: adding a product that already has a line merges
/// quantities instead of appending a duplicate.
///
/// Serializes transparently as the JSON array of line items, which is also
/// the exact shape persisted to the cart storage file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    lines: Vec<LineItem>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// The line items, in add order.
    #[must_use]
    pub fn lines(&self) -> &[LineItem] {
        &self.lines
    }

    /// Whether the cart has no line items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of all line quantities (the cart badge value).
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    /// Add a product to the cart.
    ///
    /// If a line for the product already exists its quantity is incremented
    /// by `quantity`; otherwise a new line is appended at the end. A
    /// requested quantity below [`MIN_QUANTITY`] is clamped up.
    pub fn add(&mut self, product: &Product, quantity: u32) {
        let quantity = quantity.max(MIN_QUANTITY);

        if let Some(line) = self.lines.iter_mut().find(|line| line.id == product.id) {
            line.quantity = line.quantity.saturating_add(quantity);
        } else {
            self.lines.push(LineItem {
                id: product.id.clone(),
                title: product.title.clone(),
                category: product.category.clone(),
                price: product.price,
                image: product.image.clone(),
                quantity,
            });
        }
    }

    /// Replace the quantity of the line for `id`, clamped to
    /// [`MIN_QUANTITY`]. No-op when no line matches.
    pub fn set_quantity(&mut self, id: &ProductId, quantity: u32) {
        let quantity = quantity.max(MIN_QUANTITY);

        if let Some(line) = self.lines.iter_mut().find(|line| &line.id == id) {
            line.quantity = quantity;
        }
    }

    /// Remove all line items.
    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

impl From<Vec<LineItem>> for Cart {
    fn from(lines: Vec<LineItem>) -> Self {
        Self { lines }
    }
}

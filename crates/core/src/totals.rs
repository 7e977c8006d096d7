//! The fixed subtotal/shipping/tax formula for a cart.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::cart::{Cart, LineItem};

/// Flat shipping fee charged on any non-empty cart, in currency units.
pub const SHIPPING_FLAT_FEE: Decimal = Decimal::from_parts(6, 0, 0, false, 0);

/// Tax rate applied to the subtotal (10%).
pub const TAX_RATE: Decimal = Decimal::from_parts(10, 0, 0, false, 2);

/// Derived monetary figures for a cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderTotals {
    /// Sum of price x quantity over all lines.
    pub subtotal: Decimal,
    /// [`SHIPPING_FLAT_FEE`] when the cart is non-empty, zero otherwise.
    pub shipping: Decimal,
    /// [`TAX_RATE`] x subtotal.
    pub tax: Decimal,
    /// subtotal + shipping + tax.
    pub total: Decimal,
}

impl OrderTotals {
    /// Totals for an empty cart.
    pub const ZERO: Self = Self {
        subtotal: Decimal::ZERO,
        shipping: Decimal::ZERO,
        tax: Decimal::ZERO,
        total: Decimal::ZERO,
    };
}

/// Compute the totals for a cart.
///
/// Pure function; the cart is not modified and no rounding is applied
/// beyond decimal arithmetic.
#[must_use]
pub fn compute_totals(cart: &Cart) -> OrderTotals {
    let subtotal: Decimal = cart.lines().iter().map(LineItem::line_total).sum();
    let shipping = if cart.is_empty() {
        Decimal::ZERO
    } else {
        SHIPPING_FLAT_FEE
    };
    let tax = subtotal * TAX_RATE;

    OrderTotals {
        subtotal,
        shipping,
        tax,
        total: subtotal + shipping + tax,
    }
}

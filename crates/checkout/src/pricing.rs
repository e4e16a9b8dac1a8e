//! Cart totals.

use serde::Serialize;
use sova_home_core::Price;

use crate::cart::LineItem;

/// Shipping charged on every order. The store currently ships for free.
pub const SHIPPING_FEE: Price = Price::ZERO;

/// Line total for a single item (`unit_price * quantity`).
#[must_use]
pub const fn line_total(item: &LineItem) -> Price {
    item.line_total()
}

/// The cart total does not fit in a [`Price`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("cart total exceeds {}", Price::MAX)]
pub struct CartTooLarge;

/// Sum of all line totals. An empty cart totals zero.
///
/// # Errors
///
/// Returns [`CartTooLarge`] if the sum overflows.
pub fn compute_total(items: &[LineItem]) -> Result<Price, CartTooLarge> {
    items
        .iter()
        .try_fold(Price::ZERO, |total, item| total.checked_add(item.line_total()))
        .ok_or(CartTooLarge)
}

/// Number of units across all lines, for the cart badge.
#[must_use]
pub fn item_count(items: &[LineItem]) -> u32 {
    items
        .iter()
        .fold(0u32, |count, item| count.saturating_add(item.quantity()))
}

/// Goods total, shipping, and the amount the customer pays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Totals {
    pub subtotal: Price,
    pub shipping: Price,
    pub amount_due: Price,
}

impl Totals {
    /// Compute totals for a cart.
    ///
    /// # Errors
    ///
    /// Returns [`CartTooLarge`] if the subtotal or amount due overflows.
    pub fn of(items: &[LineItem]) -> Result<Self, CartTooLarge> {
        let subtotal = compute_total(items)?;
        Ok(Self {
            subtotal,
            shipping: SHIPPING_FEE,
            amount_due: subtotal.checked_add(SHIPPING_FEE).ok_or(CartTooLarge)?,
        })
    }
}

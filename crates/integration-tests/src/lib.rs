//! Integration tests for Sova Home.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p sova-home-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `checkout_flow` - End-to-end walks through the checkout steps
//! - `checkout_properties` - Totals, validation and step order checked with proptest
//!
//! This crate also exposes the fixtures those tests share.

use sova_home_checkout::{LineItem, OrderForm};
use sova_home_core::{DeliveryMethod, LineItemId, PaymentMethod, Price};

/// Build a line item, panicking on invalid input.
///
/// # Panics
///
/// If `quantity` is zero or the line total overflows.
#[must_use]
#[allow(clippy::expect_used)]
pub fn line_item(id: i32, name: &str, unit_price: u64, quantity: u32) -> LineItem {
    LineItem::new(LineItemId::new(id), name, Price::new(unit_price), quantity)
        .expect("fixture line item must be valid")
}

/// The two-line cart used by the checkout scenarios (total NT$ 181,800).
#[must_use]
pub fn scenario_cart() -> Vec<LineItem> {
    vec![
        line_item(1, "Sofa", 45_800, 1),
        line_item(2, "Modular", 68_000, 2),
    ]
}

/// A form with every required field filled.
#[must_use]
pub fn complete_form() -> OrderForm {
    OrderForm::new()
        .with_name("Amy")
        .with_phone("0912345678")
        .with_email("a@b.com")
        .with_delivery(DeliveryMethod::HomeDelivery)
        .with_payment(PaymentMethod::CreditCard)
}

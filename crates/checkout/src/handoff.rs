//! Hand-off of a confirmed order to whatever records it.
//!
//! Persistence, payment capture and notifications all live behind
//! [`OrderHandoff`]; this crate only builds the [`PlacedOrder`].

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::cart::LineItem;
use crate::form::OrderForm;
use crate::pricing::Totals;

/// Where the storefront sends the customer after placing an order.
pub const DEFAULT_EXIT_TARGET: &str = "/";

/// The collaborator rejected the order.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("order hand-off failed: {0}")]
pub struct HandoffError(pub String);

/// A confirmed order, as handed to the order collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlacedOrder {
    pub order_number: Uuid,
    pub placed_at: DateTime<Utc>,
    pub items: Vec<LineItem>,
    #[serde(flatten)]
    pub totals: Totals,
    pub customer: OrderForm,
}

impl PlacedOrder {
    pub(crate) fn new(items: Vec<LineItem>, totals: Totals, customer: OrderForm) -> Self {
        Self {
            order_number: Uuid::new_v4(),
            placed_at: Utc::now(),
            items,
            totals,
            customer,
        }
    }
}

/// Result of a completed checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Completion {
    pub order: PlacedOrder,
    /// Navigation target for the presentation layer.
    pub redirect_to: String,
}

/// Receives placed orders.
pub trait OrderHandoff {
    /// Record or forward the order.
    ///
    /// # Errors
    ///
    /// Returns [`HandoffError`] if the order could not be accepted.
    fn hand_off(&mut self, order: &PlacedOrder) -> Result<(), HandoffError>;

    /// Where to send the customer afterwards.
    fn exit_target(&self) -> &str {
        DEFAULT_EXIT_TARGET
    }
}

/// Emits each order as a tracing event and accepts it.
#[derive(Debug, Clone)]
pub struct LoggingHandoff {
    exit_target: String,
}

impl LoggingHandoff {
    #[must_use]
    pub fn new(exit_target: impl Into<String>) -> Self {
        Self {
            exit_target: exit_target.into(),
        }
    }
}

impl Default for LoggingHandoff {
    fn default() -> Self {
        Self::new(DEFAULT_EXIT_TARGET)
    }
}

impl OrderHandoff for LoggingHandoff {
    fn hand_off(&mut self, order: &PlacedOrder) -> Result<(), HandoffError> {
        info!(
            order_number = %order.order_number,
            lines = order.items.len(),
            amount_due = order.totals.amount_due.amount(),
            delivery = %order.customer.delivery(),
            payment = %order.customer.payment(),
            "Order placed"
        );
        Ok(())
    }

    fn exit_target(&self) -> &str {
        &self.exit_target
    }
}

/// Keeps placed orders in memory.
#[derive(Debug, Clone, Default)]
pub struct CollectingHandoff {
    orders: Vec<PlacedOrder>,
}

impl CollectingHandoff {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn orders(&self) -> &[PlacedOrder] {
        &self.orders
    }

    #[must_use]
    pub fn into_orders(self) -> Vec<PlacedOrder> {
        self.orders
    }
}

impl OrderHandoff for CollectingHandoff {
    fn hand_off(&mut self, order: &PlacedOrder) -> Result<(), HandoffError> {
        self.orders.push(order.clone());
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use sova_home_core::{LineItemId, Price};

    use super::*;

    fn place(items: Vec<LineItem>, customer: OrderForm) -> PlacedOrder {
        let totals = Totals::of(&items).unwrap();
        PlacedOrder::new(items, totals, customer)
    }

    #[test]
    fn test_placed_order_totals() {
        let items = vec![
            LineItem::new(LineItemId::new(1), "Sofa", Price::new(45_800), 1).unwrap(),
            LineItem::new(LineItemId::new(2), "Modular", Price::new(68_000), 2).unwrap(),
        ];
        let order = place(items, OrderForm::new().with_name("Amy"));
        assert_eq!(order.totals.subtotal, Price::new(181_800));
        assert_eq!(order.totals.amount_due, Price::new(181_800));
        assert_eq!(order.customer.name(), "Amy");
    }

    #[test]
    fn test_order_numbers_are_unique() {
        let a = place(Vec::new(), OrderForm::new());
        let b = place(Vec::new(), OrderForm::new());
        assert_ne!(a.order_number, b.order_number);
    }

    #[test]
    fn test_serialized_order_flattens_totals() {
        let order = place(Vec::new(), OrderForm::new());
        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(json["amount_due"], 0);
        assert_eq!(json["shipping"], 0);
        assert!(json["order_number"].is_string());
    }

    #[test]
    fn test_logging_handoff_exit_target() {
        assert_eq!(LoggingHandoff::default().exit_target(), "/");
        assert_eq!(LoggingHandoff::new("/orders/thanks").exit_target(), "/orders/thanks");
    }

    #[test]
    fn test_collecting_handoff_keeps_orders() {
        let mut handoff = CollectingHandoff::new();
        let order = place(Vec::new(), OrderForm::new());
        handoff.hand_off(&order).unwrap();
        assert_eq!(handoff.orders(), std::slice::from_ref(&order));
        assert_eq!(handoff.exit_target(), DEFAULT_EXIT_TARGET);
    }
}

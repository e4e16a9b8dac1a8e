//! Sova Home Checkout - the three-step checkout flow.
//!
//! A [`CheckoutSession`] walks a fixed cart snapshot through
//! 購物車 (cart) → 填寫資料 (customer info) → 訂單確認 (confirm).
//! Moving past the info step requires the [`OrderForm`] to pass the
//! [`Validator`]; a failed check is an ordinary outcome returned as a
//! [`ValidationResult`], never a panic.
//!
//! Everything here is synchronous and free of I/O. Loading the cart and
//! recording a placed order are delegated to the [`CartSource`] and
//! [`OrderHandoff`] traits.
//!
//! # Example
//!
//! ```
//! use sova_home_checkout::{CheckoutSession, CheckoutStep, LineItem, OrderForm};
//! use sova_home_core::{DeliveryMethod, LineItemId, PaymentMethod, Price};
//!
//! let cart = vec![
//!     LineItem::new(LineItemId::new(1), "Sofa", Price::new(45_800), 1).unwrap(),
//!     LineItem::new(LineItemId::new(2), "Modular", Price::new(68_000), 2).unwrap(),
//! ];
//! let mut session = CheckoutSession::new(cart).unwrap();
//! session.advance().unwrap();
//!
//! let form = OrderForm::new()
//!     .with_name("Amy")
//!     .with_phone("0912345678")
//!     .with_email("a@b.com")
//!     .with_delivery(DeliveryMethod::HomeDelivery)
//!     .with_payment(PaymentMethod::CreditCard);
//! session.submit(form).unwrap();
//!
//! assert_eq!(session.step(), CheckoutStep::Confirm);
//! assert_eq!(session.summary().total, Price::new(181_800));
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod error;
pub mod form;
pub mod handoff;
pub mod pricing;
pub mod session;
pub mod validation;

pub use cart::{CartSource, LineItem, LineItemError, MockCart};
pub use error::{CheckoutError, CompleteError, StartError, SubmitError, TransitionError};
pub use form::{FormError, FormField, OrderForm};
pub use handoff::{CollectingHandoff, Completion, HandoffError, LoggingHandoff, OrderHandoff, PlacedOrder};
pub use pricing::{CartTooLarge, Totals, compute_total, item_count, line_total};
pub use session::{CheckoutAction, CheckoutSession, CheckoutStep, CheckoutSummary};
pub use validation::{ValidationResult, Validator, validate};

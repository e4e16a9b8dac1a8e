//! Core types for Sova Home.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod choice;
pub mod email;
pub mod id;
pub mod price;

pub use choice::{Choice, ChoiceError, DeliveryMethod, InvoiceOption, PaymentMethod, Selection};
pub use email::{Email, EmailError};
pub use id::*;
pub use price::Price;

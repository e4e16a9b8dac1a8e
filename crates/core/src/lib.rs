//! Sova Home Core - Shared types library.
//!
//! This crate provides common types used across all Sova Home components:
//! - `checkout` - Cart snapshot, order form, validation and the checkout flow
//! - `cli` - Terminal front-end that drives a checkout session
//!
//! # Architecture
//!
//! The core crate contains only types and traits - no I/O, no logging,
//! no clock. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, emails, and
//!   the checkout choice lists (delivery, payment, invoice)

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;

//! Checkout error types.
//!
//! A failed form check is not listed here as a fatal condition: it travels
//! as [`SubmitError::Invalid`] so the caller can render per-field messages.

use thiserror::Error;

use crate::handoff::HandoffError;
use crate::pricing::CartTooLarge;
use crate::session::{CheckoutAction, CheckoutSession, CheckoutStep};
use crate::validation::ValidationResult;

/// An operation was attempted from a step that does not allow it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cannot {action} at the {from} step")]
pub struct TransitionError {
    /// Step the session was at (and still is).
    pub from: CheckoutStep,
    /// The rejected operation.
    pub action: CheckoutAction,
}

/// A session could not be started from a [`CartSource`](crate::cart::CartSource).
#[derive(Debug, Error)]
pub enum StartError<E> {
    #[error("could not load cart: {0}")]
    Load(#[source] E),

    #[error(transparent)]
    TooLarge(#[from] CartTooLarge),
}

/// Outcome of a rejected submit.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// The form has missing fields; the session stays on the info step.
    #[error("order form has {} invalid field(s)", .0.len())]
    Invalid(ValidationResult),

    #[error(transparent)]
    Transition(#[from] TransitionError),
}

impl SubmitError {
    /// The field errors, if this was a validation failure.
    #[must_use]
    pub const fn validation(&self) -> Option<&ValidationResult> {
        match self {
            Self::Invalid(result) => Some(result),
            Self::Transition(_) => None,
        }
    }
}

/// Errors from completing a checkout.
#[derive(Debug, Error)]
pub enum CheckoutError {
    #[error(transparent)]
    Transition(#[from] TransitionError),

    #[error(transparent)]
    Handoff(#[from] HandoffError),
}

/// A failed [`CheckoutSession::complete`], carrying the session back so the
/// customer does not lose the order.
#[derive(Debug, Error)]
#[error("{source}")]
pub struct CompleteError {
    session: Box<CheckoutSession>,
    source: CheckoutError,
}

impl CompleteError {
    pub(crate) fn new(session: CheckoutSession, source: impl Into<CheckoutError>) -> Self {
        Self {
            session: Box::new(session),
            source: source.into(),
        }
    }

    #[must_use]
    pub const fn kind(&self) -> &CheckoutError {
        &self.source
    }

    /// Recover the untouched session.
    #[must_use]
    pub fn into_session(self) -> CheckoutSession {
        *self.session
    }
}

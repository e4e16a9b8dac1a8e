//! The checkout state machine.
//!
//! ```text
//!   Cart --advance--> Info --submit (valid)--> Confirm --complete--> (exit)
//!                      ^  |
//!                      +--+ submit (invalid): stays on Info
//! ```
//!
//! Steps only move forward. There is no back transition; leaving checkout
//! ("繼續購物") simply drops the session.

use core::fmt;

use serde::Serialize;
use sova_home_core::Price;
use tracing::{debug, info, instrument};

use crate::cart::{CartSource, LineItem};
use crate::error::{CompleteError, StartError, SubmitError, TransitionError};
use crate::form::OrderForm;
use crate::handoff::{Completion, OrderHandoff, PlacedOrder};
use crate::pricing::{self, CartTooLarge, Totals};
use crate::validation::{ValidationResult, Validator};

/// Position in the checkout flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckoutStep {
    Cart,
    Info,
    Confirm,
}

impl CheckoutStep {
    pub const ALL: [Self; 3] = [Self::Cart, Self::Info, Self::Confirm];

    /// Zero-based position, as numbered in the progress bar.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Cart => 0,
            Self::Info => 1,
            Self::Confirm => 2,
        }
    }

    /// Progress-bar label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Cart => "購物車",
            Self::Info => "填寫資料",
            Self::Confirm => "訂單確認",
        }
    }

    /// Fraction of the progress bar to fill.
    #[must_use]
    pub const fn progress(self) -> f32 {
        match self {
            Self::Cart => 0.0,
            Self::Info => 0.5,
            Self::Confirm => 1.0,
        }
    }

    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Cart => Some(Self::Info),
            Self::Info => Some(Self::Confirm),
            Self::Confirm => None,
        }
    }
}

impl fmt::Display for CheckoutStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Cart => "cart",
            Self::Info => "info",
            Self::Confirm => "confirm",
        })
    }
}

/// Operations a session can be asked to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckoutAction {
    Advance,
    EditForm,
    Submit,
    Complete,
}

impl CheckoutAction {
    /// The only step this action is allowed from.
    #[must_use]
    pub const fn allowed_from(self) -> CheckoutStep {
        match self {
            Self::Advance => CheckoutStep::Cart,
            Self::EditForm | Self::Submit => CheckoutStep::Info,
            Self::Complete => CheckoutStep::Confirm,
        }
    }
}

impl fmt::Display for CheckoutAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Advance => "advance",
            Self::EditForm => "edit the form",
            Self::Submit => "submit",
            Self::Complete => "complete",
        })
    }
}

/// Everything the confirm page renders.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CheckoutSummary<'a> {
    pub step: CheckoutStep,
    pub items: &'a [LineItem],
    pub item_count: u32,
    /// Goods total (sum of line totals).
    pub total: Price,
    pub shipping: Price,
    pub amount_due: Price,
    pub form: &'a OrderForm,
}

/// One customer's trip through checkout.
#[derive(Debug, Clone, Serialize)]
pub struct CheckoutSession {
    step: CheckoutStep,
    cart: Vec<LineItem>,
    totals: Totals,
    form: OrderForm,
    last_validation: ValidationResult,
    #[serde(skip)]
    validator: Validator,
}

impl CheckoutSession {
    /// Start a session at the cart step.
    ///
    /// An empty cart is accepted; the storefront never blocks on it. Totals
    /// are computed once here, since the cart cannot change afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`CartTooLarge`] if the cart total does not fit in a `Price`.
    pub fn new(cart: Vec<LineItem>) -> Result<Self, CartTooLarge> {
        let totals = Totals::of(&cart)?;
        Ok(Self {
            step: CheckoutStep::Cart,
            cart,
            totals,
            form: OrderForm::new(),
            last_validation: ValidationResult::default(),
            validator: Validator::new(),
        })
    }

    /// Start a session from a cart source.
    ///
    /// # Errors
    ///
    /// - [`StartError::Load`] with the source's load error.
    /// - [`StartError::TooLarge`] if the loaded cart total overflows.
    pub fn from_source<S: CartSource>(source: &S) -> Result<Self, StartError<S::Error>> {
        let cart = source.load().map_err(StartError::Load)?;
        Ok(Self::new(cart)?)
    }

    /// Use a non-default validation policy.
    #[must_use]
    pub const fn with_validator(mut self, validator: Validator) -> Self {
        self.validator = validator;
        self
    }

    #[must_use]
    pub const fn step(&self) -> CheckoutStep {
        self.step
    }

    #[must_use]
    pub fn cart(&self) -> &[LineItem] {
        &self.cart
    }

    #[must_use]
    pub const fn form(&self) -> &OrderForm {
        &self.form
    }

    /// Errors from the most recent submit; empty before any submit and after
    /// a successful one.
    #[must_use]
    pub const fn last_validation(&self) -> &ValidationResult {
        &self.last_validation
    }

    #[must_use]
    pub const fn total(&self) -> Price {
        self.totals.subtotal
    }

    #[must_use]
    pub const fn totals(&self) -> Totals {
        self.totals
    }

    /// Whether `action` is legal right now.
    #[must_use]
    pub fn can(&self, action: CheckoutAction) -> bool {
        self.step == action.allowed_from()
    }

    fn ensure(&self, action: CheckoutAction) -> Result<(), TransitionError> {
        if self.can(action) {
            Ok(())
        } else {
            Err(TransitionError {
                from: self.step,
                action,
            })
        }
    }

    /// Cart → Info. Unconditional.
    ///
    /// # Errors
    ///
    /// Returns [`TransitionError`] unless the session is at the cart step.
    #[instrument(skip(self), fields(step = %self.step))]
    pub fn advance(&mut self) -> Result<CheckoutStep, TransitionError> {
        self.ensure(CheckoutAction::Advance)?;
        self.step = CheckoutStep::Info;
        info!(lines = self.cart.len(), "Checkout moved to info step");
        Ok(self.step)
    }

    /// Mutable access to the form while the customer is filling it in.
    ///
    /// # Errors
    ///
    /// Returns [`TransitionError`] outside the info step; the form is frozen
    /// once the order is confirmed.
    pub fn edit_form(&mut self) -> Result<&mut OrderForm, TransitionError> {
        self.ensure(CheckoutAction::EditForm)?;
        Ok(&mut self.form)
    }

    /// Info → Confirm, if `form` passes validation.
    ///
    /// The submitted form replaces the session's form either way, so the
    /// customer's entries survive a failed attempt.
    ///
    /// # Errors
    ///
    /// - [`SubmitError::Invalid`] with the field errors; the step stays Info.
    /// - [`SubmitError::Transition`] outside the info step; nothing changes.
    #[instrument(skip(self, form), fields(step = %self.step))]
    pub fn submit(&mut self, form: OrderForm) -> Result<(), SubmitError> {
        self.ensure(CheckoutAction::Submit)?;
        self.form = form;
        self.validate_and_confirm()
    }

    /// Like [`submit`](Self::submit), using the form already held by the
    /// session (see [`edit_form`](Self::edit_form)).
    ///
    /// # Errors
    ///
    /// Same as [`submit`](Self::submit).
    #[instrument(skip(self), fields(step = %self.step))]
    pub fn submit_current(&mut self) -> Result<(), SubmitError> {
        self.ensure(CheckoutAction::Submit)?;
        self.validate_and_confirm()
    }

    fn validate_and_confirm(&mut self) -> Result<(), SubmitError> {
        let result = self.validator.validate(&self.form);
        self.last_validation = result.clone();

        if !result.is_valid() {
            debug!(
                invalid = ?result.fields().collect::<Vec<_>>(),
                "Order form rejected"
            );
            return Err(SubmitError::Invalid(result));
        }

        self.step = CheckoutStep::Confirm;
        info!("Checkout moved to confirm step");
        Ok(())
    }

    /// Cart, totals and form for rendering. Available at every step; the
    /// form is final once the step is Confirm.
    #[must_use]
    pub fn summary(&self) -> CheckoutSummary<'_> {
        CheckoutSummary {
            step: self.step,
            items: &self.cart,
            item_count: pricing::item_count(&self.cart),
            total: self.totals.subtotal,
            shipping: self.totals.shipping,
            amount_due: self.totals.amount_due,
            form: &self.form,
        }
    }

    /// Place the order and end the session.
    ///
    /// # Errors
    ///
    /// Returns [`CompleteError`] if the session is not at the confirm step
    /// or the hand-off rejects the order. The session is returned inside
    /// the error unchanged.
    #[instrument(skip(self, handoff), fields(step = %self.step))]
    pub fn complete<H: OrderHandoff + ?Sized>(
        self,
        handoff: &mut H,
    ) -> Result<Completion, CompleteError> {
        if let Err(e) = self.ensure(CheckoutAction::Complete) {
            return Err(CompleteError::new(self, e));
        }

        let order = PlacedOrder::new(self.cart.clone(), self.totals, self.form.clone());
        if let Err(e) = handoff.hand_off(&order) {
            tracing::warn!(order_number = %order.order_number, error = %e, "Order hand-off failed");
            return Err(CompleteError::new(self, e));
        }

        info!(order_number = %order.order_number, "Checkout complete");
        Ok(Completion {
            order,
            redirect_to: handoff.exit_target().to_owned(),
        })
    }
}

//! Customer-entered order details collected on the info step.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};
use sova_home_core::{ChoiceError, DeliveryMethod, InvoiceOption, PaymentMethod, Selection};

/// Errors from setting a form field by name.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("unknown form field: {0:?}")]
    UnknownField(String),
    #[error(transparent)]
    UnknownChoice(#[from] ChoiceError),
}

/// The fields of an [`OrderForm`], in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormField {
    Name,
    Phone,
    Email,
    Delivery,
    Payment,
    Invoice,
    Coupon,
}

impl FormField {
    pub const ALL: [Self; 7] = [
        Self::Name,
        Self::Phone,
        Self::Email,
        Self::Delivery,
        Self::Payment,
        Self::Invoice,
        Self::Coupon,
    ];

    /// Fields that must be filled before the order can be submitted.
    pub const REQUIRED: [Self; 5] = [
        Self::Name,
        Self::Phone,
        Self::Email,
        Self::Delivery,
        Self::Payment,
    ];

    /// Stable key used in serialized forms and error maps.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Phone => "phone",
            Self::Email => "email",
            Self::Delivery => "delivery",
            Self::Payment => "payment",
            Self::Invoice => "invoice",
            Self::Coupon => "coupon",
        }
    }

    /// Label shown next to the field on the confirm page.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "姓名",
            Self::Phone => "電話",
            Self::Email => "Email",
            Self::Delivery => "配送方式",
            Self::Payment => "付款方式",
            Self::Invoice => "發票",
            Self::Coupon => "優惠碼",
        }
    }

    #[must_use]
    pub const fn is_required(self) -> bool {
        !matches!(self, Self::Invoice | Self::Coupon)
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for FormField {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.key() == s.trim())
            .ok_or_else(|| FormError::UnknownField(s.to_owned()))
    }
}

/// Order details entered by the customer.
///
/// Text fields keep exactly what was typed; nothing is trimmed or
/// normalised here. Choice fields start [`Selection::Unset`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderForm {
    name: String,
    phone: String,
    email: String,
    delivery: Selection<DeliveryMethod>,
    payment: Selection<PaymentMethod>,
    invoice: Selection<InvoiceOption>,
    coupon: String,
}

impl OrderForm {
    /// An empty form, as first shown on the info step.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn phone(&self) -> &str {
        &self.phone
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub const fn delivery(&self) -> Selection<DeliveryMethod> {
        self.delivery
    }

    #[must_use]
    pub const fn payment(&self) -> Selection<PaymentMethod> {
        self.payment
    }

    #[must_use]
    pub const fn invoice(&self) -> Selection<InvoiceOption> {
        self.invoice
    }

    #[must_use]
    pub fn coupon(&self) -> &str {
        &self.coupon
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_phone(&mut self, phone: impl Into<String>) {
        self.phone = phone.into();
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    pub fn set_delivery(&mut self, delivery: impl Into<Selection<DeliveryMethod>>) {
        self.delivery = delivery.into();
    }

    pub fn set_payment(&mut self, payment: impl Into<Selection<PaymentMethod>>) {
        self.payment = payment.into();
    }

    pub fn set_invoice(&mut self, invoice: impl Into<Selection<InvoiceOption>>) {
        self.invoice = invoice.into();
    }

    pub fn set_coupon(&mut self, coupon: impl Into<String>) {
        self.coupon = coupon.into();
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.set_name(name);
        self
    }

    #[must_use]
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.set_phone(phone);
        self
    }

    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.set_email(email);
        self
    }

    #[must_use]
    pub fn with_delivery(mut self, delivery: impl Into<Selection<DeliveryMethod>>) -> Self {
        self.set_delivery(delivery);
        self
    }

    #[must_use]
    pub fn with_payment(mut self, payment: impl Into<Selection<PaymentMethod>>) -> Self {
        self.set_payment(payment);
        self
    }

    #[must_use]
    pub fn with_invoice(mut self, invoice: impl Into<Selection<InvoiceOption>>) -> Self {
        self.set_invoice(invoice);
        self
    }

    #[must_use]
    pub fn with_coupon(mut self, coupon: impl Into<String>) -> Self {
        self.set_coupon(coupon);
        self
    }

    /// Set a field from its raw form value.
    ///
    /// Choice fields accept their option label, or `""` to clear.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::UnknownChoice`] if a choice label matches no
    /// option. The field is left unchanged in that case.
    pub fn set(&mut self, field: FormField, raw: &str) -> Result<(), FormError> {
        match field {
            FormField::Name => self.set_name(raw),
            FormField::Phone => self.set_phone(raw),
            FormField::Email => self.set_email(raw),
            FormField::Delivery => self.delivery = Selection::parse(raw)?,
            FormField::Payment => self.payment = Selection::parse(raw)?,
            FormField::Invoice => self.invoice = Selection::parse(raw)?,
            FormField::Coupon => self.set_coupon(raw),
        }
        Ok(())
    }

    /// The field's value as displayed (choice label, or `""` when unset).
    #[must_use]
    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Phone => &self.phone,
            FormField::Email => &self.email,
            FormField::Delivery => self.delivery.label(),
            FormField::Payment => self.payment.label(),
            FormField::Invoice => self.invoice.label(),
            FormField::Coupon => &self.coupon,
        }
    }
}

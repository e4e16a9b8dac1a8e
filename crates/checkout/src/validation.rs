//! Required-field checks for the order form.
//!
//! Every rule runs on every call; errors are collected, not short-circuited.
//! The email rule only checks for a non-empty value unless the strict policy
//! is switched on.

use std::collections::BTreeMap;

use serde::Serialize;
use sova_home_core::Email;

use crate::form::{FormField, OrderForm};

/// Messages shown under the offending field.
pub mod messages {
    pub const NAME_REQUIRED: &str = "請輸入姓名";
    pub const PHONE_REQUIRED: &str = "請輸入電話";
    pub const EMAIL_REQUIRED: &str = "請輸入 Email";
    pub const EMAIL_MALFORMED: &str = "Email 格式不正確";
    pub const DELIVERY_REQUIRED: &str = "請選擇配送方式";
    pub const PAYMENT_REQUIRED: &str = "請選擇付款方式";
}

/// Field-level errors from one validation run. Empty means valid.
///
/// Iterates and serializes in field display order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationResult(BTreeMap<FormField, &'static str>);

impl ValidationResult {
    /// Returns `true` if no field failed.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of failing fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Message for a field, if it failed.
    #[must_use]
    pub fn get(&self, field: FormField) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    #[must_use]
    pub fn contains(&self, field: FormField) -> bool {
        self.0.contains_key(&field)
    }

    /// Failing fields in display order.
    pub fn fields(&self) -> impl Iterator<Item = FormField> + '_ {
        self.0.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FormField, &'static str)> + '_ {
        self.0.iter().map(|(field, message)| (*field, *message))
    }

    fn reject(&mut self, field: FormField, message: &'static str) {
        self.0.insert(field, message);
    }
}

impl<'a> IntoIterator for &'a ValidationResult {
    type Item = (&'a FormField, &'a &'static str);
    type IntoIter = std::collections::btree_map::Iter<'a, FormField, &'static str>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Validation policy for the order form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Validator {
    strict_email: bool,
}

impl Validator {
    /// The storefront's rules: required fields only.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            strict_email: false,
        }
    }

    /// Also reject email values that do not parse as an address.
    #[must_use]
    pub const fn strict_email(mut self, strict: bool) -> Self {
        self.strict_email = strict;
        self
    }

    #[must_use]
    pub const fn is_strict_email(&self) -> bool {
        self.strict_email
    }

    /// Check a form. Pure: the same form always yields the same result.
    #[must_use]
    pub fn validate(&self, form: &OrderForm) -> ValidationResult {
        let mut result = ValidationResult::default();

        if form.name().is_empty() {
            result.reject(FormField::Name, messages::NAME_REQUIRED);
        }
        if form.phone().is_empty() {
            result.reject(FormField::Phone, messages::PHONE_REQUIRED);
        }
        if form.email().is_empty() {
            result.reject(FormField::Email, messages::EMAIL_REQUIRED);
        } else if self.strict_email && Email::parse(form.email()).is_err() {
            result.reject(FormField::Email, messages::EMAIL_MALFORMED);
        }
        if form.delivery().is_unset() {
            result.reject(FormField::Delivery, messages::DELIVERY_REQUIRED);
        }
        if form.payment().is_unset() {
            result.reject(FormField::Payment, messages::PAYMENT_REQUIRED);
        }
        // invoice and coupon are optional

        result
    }
}

/// Check a form with the default (non-strict) policy.
#[must_use]
pub fn validate(form: &OrderForm) -> ValidationResult {
    Validator::new().validate(form)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use sova_home_core::{DeliveryMethod, InvoiceOption, PaymentMethod, Selection};

    use super::*;

    fn complete_form() -> OrderForm {
        OrderForm::new()
            .with_name("Amy")
            .with_phone("0912345678")
            .with_email("a@b.com")
            .with_delivery(DeliveryMethod::HomeDelivery)
            .with_payment(PaymentMethod::CreditCard)
    }

    #[test]
    fn test_empty_form_reports_every_required_field() {
        let result = validate(&OrderForm::new());
        assert_eq!(result.len(), 5);
        assert_eq!(result.get(FormField::Name), Some("請輸入姓名"));
        assert_eq!(result.get(FormField::Phone), Some("請輸入電話"));
        assert_eq!(result.get(FormField::Email), Some("請輸入 Email"));
        assert_eq!(result.get(FormField::Delivery), Some("請選擇配送方式"));
        assert_eq!(result.get(FormField::Payment), Some("請選擇付款方式"));
        assert!(!result.contains(FormField::Invoice));
        assert!(!result.contains(FormField::Coupon));
    }

    #[test]
    fn test_complete_form_is_valid() {
        assert!(validate(&complete_form()).is_valid());
    }

    #[test]
    fn test_optional_fields_never_fail() {
        let with_extras = complete_form()
            .with_invoice(InvoiceOption::CompanyTaxId)
            .with_coupon("SOVA2024");
        assert!(validate(&with_extras).is_valid());
    }

    #[test]
    fn test_each_missing_field_reported_alone() {
        let cases: [(FormField, fn(OrderForm) -> OrderForm); 5] = [
            (FormField::Name, |f| f.with_name("")),
            (FormField::Phone, |f| f.with_phone("")),
            (FormField::Email, |f| f.with_email("")),
            (FormField::Delivery, |f| f.with_delivery(Selection::Unset)),
            (FormField::Payment, |f| f.with_payment(Selection::Unset)),
        ];
        for (field, clear) in cases {
            let result = validate(&clear(complete_form()));
            assert_eq!(result.fields().collect::<Vec<_>>(), [field], "clearing {field}");
        }
    }

    #[test]
    fn test_email_format_not_checked_by_default() {
        let form = complete_form().with_email("not an email");
        assert!(validate(&form).is_valid());
    }

    #[test]
    fn test_strict_email_policy() {
        let strict = Validator::new().strict_email(true);
        let form = complete_form().with_email("not an email");
        assert_eq!(strict.validate(&form).get(FormField::Email), Some("Email 格式不正確"));

        let empty = complete_form().with_email("");
        assert_eq!(strict.validate(&empty).get(FormField::Email), Some("請輸入 Email"));

        assert!(strict.validate(&complete_form()).is_valid());
    }

    #[test]
    fn test_whitespace_counts_as_filled() {
        let form = complete_form().with_name(" ");
        assert!(validate(&form).is_valid());
    }

    #[test]
    fn test_validate_is_idempotent() {
        let form = OrderForm::new().with_name("Amy");
        assert_eq!(validate(&form), validate(&form));
    }

    #[test]
    fn test_serializes_as_field_map() {
        let result = validate(&complete_form().with_name(""));
        let json = serde_json::to_string(&result).unwrap();
        assert_eq!(json, r#"{"name":"請輸入姓名"}"#);
    }
}

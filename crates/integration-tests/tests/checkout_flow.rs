//! End-to-end checkout walks: cart → info → confirm → order placed.

use sova_home_checkout::{
    CheckoutAction, CheckoutError, CheckoutSession, CheckoutStep, CollectingHandoff, FormField,
    MockCart, OrderForm, SubmitError,
};
use sova_home_core::{DeliveryMethod, InvoiceOption, PaymentMethod, Price};
use sova_home_integration_tests::{complete_form, scenario_cart};

// ============================================================================
// Storefront scenarios
// ============================================================================

#[test]
fn test_missing_name_keeps_customer_on_info_step() {
    let mut session = CheckoutSession::new(scenario_cart()).expect("scenario cart fits");
    session.advance().expect("cart step advances");
    assert_eq!(session.step(), CheckoutStep::Info);

    let form = OrderForm::new()
        .with_name("")
        .with_phone("0912")
        .with_email("a@b.com")
        .with_delivery(DeliveryMethod::HomeDelivery)
        .with_payment(PaymentMethod::CreditCard);

    let err = session.submit(form).expect_err("name is required");
    let Some(result) = err.validation() else {
        panic!("expected a validation failure, got {err:?}");
    };

    assert_eq!(
        serde_json::to_value(result).expect("serializable"),
        serde_json::json!({ "name": "請輸入姓名" })
    );
    assert_eq!(session.step(), CheckoutStep::Info);
}

#[test]
fn test_complete_form_reaches_confirm_with_totals() {
    let mut session = CheckoutSession::new(scenario_cart()).expect("scenario cart fits");
    session.advance().expect("cart step advances");

    // First attempt fails, second succeeds on the same session.
    assert!(session.submit(complete_form().with_name("")).is_err());
    session.submit(complete_form()).expect("form is complete");

    assert_eq!(session.step(), CheckoutStep::Confirm);
    let summary = session.summary();
    assert_eq!(summary.total, Price::new(181_800));
    assert_eq!(summary.amount_due, Price::new(181_800));
    assert_eq!(summary.items.len(), 2);
    assert_eq!(summary.form.name(), "Amy");
    assert!(session.last_validation().is_empty());
}

#[test]
fn test_full_checkout_with_demo_cart() {
    let mut session = CheckoutSession::from_source(&MockCart).expect("demo cart loads");
    assert_eq!(session.total(), Price::new(234_300));

    session.advance().expect("cart step advances");
    {
        let form = session.edit_form().expect("form is editable on info step");
        form.set_name("陳小姐");
        form.set_phone("0987654321");
        form.set_email("chen@example.com");
        form.set(FormField::Delivery, "超商").expect("known option");
        form.set(FormField::Payment, "LINE Pay").expect("known option");
        form.set_invoice(InvoiceOption::MobileCarrier);
        form.set_coupon("SOVA10");
    }
    session.submit_current().expect("form is complete");

    let mut handoff = CollectingHandoff::new();
    let completion = session.complete(&mut handoff).expect("order is placed");

    assert_eq!(completion.redirect_to, "/");
    assert_eq!(completion.order.items.len(), 3);
    assert_eq!(completion.order.totals.amount_due, Price::new(234_300));
    assert_eq!(completion.order.customer.invoice().label(), "自然人載具");
    assert_eq!(completion.order.customer.coupon(), "SOVA10");

    let orders = handoff.into_orders();
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0], completion.order);
}

// ============================================================================
// Transition rules
// ============================================================================

#[test]
fn test_no_skipping_ahead() {
    let mut session = CheckoutSession::new(scenario_cart()).expect("scenario cart fits");

    let err = session.submit(complete_form()).expect_err("cannot submit from cart");
    assert!(matches!(err, SubmitError::Transition(e) if e.action == CheckoutAction::Submit));

    let err = session
        .complete(&mut CollectingHandoff::new())
        .expect_err("cannot complete from cart");
    assert!(matches!(err.kind(), CheckoutError::Transition(_)));

    let session = err.into_session();
    assert_eq!(session.step(), CheckoutStep::Cart);
    assert_eq!(session.form(), &OrderForm::new());
}

#[test]
fn test_confirmed_form_is_frozen() {
    let mut session = CheckoutSession::new(scenario_cart()).expect("scenario cart fits");
    session.advance().expect("cart step advances");
    session.submit(complete_form()).expect("form is complete");

    assert!(session.edit_form().is_err());
    assert!(session.submit(OrderForm::new()).is_err());
    assert!(session.advance().is_err());
    assert_eq!(session.form(), &complete_form());
    assert_eq!(session.step(), CheckoutStep::Confirm);
}

#[test]
fn test_session_serializes_for_presentation() {
    let mut session = CheckoutSession::new(scenario_cart()).expect("scenario cart fits");
    session.advance().expect("cart step advances");
    let _ = session.submit(OrderForm::new().with_payment(PaymentMethod::CashOnDelivery));

    let value = serde_json::to_value(&session).expect("serializable");
    assert_eq!(value["step"], "info");
    assert_eq!(value["totals"]["amount_due"], 181_800);
    assert_eq!(value["form"]["payment"], "貨到付款");
    assert_eq!(value["last_validation"]["delivery"], "請選擇配送方式");
    assert!(value["last_validation"].get("payment").is_none());
}

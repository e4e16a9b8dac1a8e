//! Run a whole checkout from an order-form file.
//!
//! # Usage
//!
//! ```bash
//! sova-cli checkout --order order.yaml
//! sova-cli checkout --order order.yaml --cart cart.yaml --strict-email --json
//! ```
//!
//! Exit status is 2 when the order form is rejected.

use std::io::Write;
use std::path::Path;

use serde_json::json;
use sova_home_checkout::{CheckoutSession, LoggingHandoff, SubmitError, Validator};
use tracing::{info, warn};

use crate::error::CliError;
use crate::files::read_order_form;
use crate::render;

/// Options for one checkout run.
#[derive(Debug, Clone)]
pub struct CheckoutOptions<'a> {
    pub order: &'a Path,
    pub cart: Option<&'a Path>,
    pub strict_email: bool,
    pub exit_url: &'a str,
    pub as_json: bool,
}

/// Cart → info → confirm → place order.
pub async fn run(opts: CheckoutOptions<'_>, out: &mut impl Write) -> Result<(), CliError> {
    let items = super::load_cart(opts.cart)?;
    let form = read_order_form(opts.order).await?;

    let validator = Validator::new().strict_email(opts.strict_email);
    let mut session = CheckoutSession::new(items)?.with_validator(validator);
    session.advance()?;

    match session.submit(form) {
        Ok(()) => {}
        Err(SubmitError::Invalid(result)) => {
            warn!(fields = result.len(), "Order form rejected");
            if opts.as_json {
                serde_json::to_writer_pretty(&mut *out, &json!({ "errors": result }))?;
                writeln!(out)?;
            } else {
                render::validation(out, &result)?;
            }
            return Err(CliError::InvalidOrder(result.len()));
        }
        Err(SubmitError::Transition(e)) => return Err(e.into()),
    }

    if !opts.as_json {
        render::summary(out, &session.summary())?;
    }

    let mut handoff = LoggingHandoff::new(opts.exit_url);
    let completion = session.complete(&mut handoff)?;
    info!(order_number = %completion.order.order_number, "Order placed");

    if opts.as_json {
        serde_json::to_writer_pretty(&mut *out, &completion)?;
        writeln!(out)?;
    } else {
        render::completion(out, &completion)?;
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::io::Write as _;

    use super::*;

    fn order_file(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    fn opts(order: &Path) -> CheckoutOptions<'_> {
        CheckoutOptions {
            order,
            cart: None,
            strict_email: false,
            exit_url: "/",
            as_json: false,
        }
    }

    const VALID: &str = "name: Amy\nphone: \"0912345678\"\nemail: a@b.com\ndelivery: 宅配\npayment: 信用卡\n";

    #[tokio::test]
    async fn test_checkout_places_order() {
        let file = order_file(VALID);
        let mut out = Vec::new();
        run(opts(file.path()), &mut out).await.unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("應付金額 NT$ 234,300"));
        assert!(text.contains("訂單編號 "));
        assert!(text.ends_with("→ /\n"));
    }

    #[tokio::test]
    async fn test_checkout_json_output() {
        let file = order_file(VALID);
        let mut out = Vec::new();
        let options = CheckoutOptions {
            as_json: true,
            exit_url: "/thanks",
            ..opts(file.path())
        };
        run(options, &mut out).await.unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["redirect_to"], "/thanks");
        assert_eq!(value["order"]["amount_due"], 234_300);
        assert_eq!(value["order"]["customer"]["delivery"], "宅配");
    }

    #[tokio::test]
    async fn test_checkout_rejects_incomplete_form() {
        let file = order_file("phone: \"0912\"\nemail: a@b.com\ndelivery: 宅配\npayment: 信用卡\n");
        let mut out = Vec::new();
        let err = run(opts(file.path()), &mut out).await.unwrap_err();

        assert!(matches!(err, CliError::InvalidOrder(1)));
        assert_eq!(err.exit_code(), 2);
        assert_eq!(String::from_utf8(out).unwrap(), "姓名: 請輸入姓名\n");
    }

    #[tokio::test]
    async fn test_checkout_rejects_cart_total_overflow() {
        let order = order_file(VALID);
        let cart = order_file(
            "- { id: 1, name: Sofa, price: 10000000000000000000, qty: 1 }\n\
             - { id: 2, name: Sofa, price: 10000000000000000000, qty: 1 }\n",
        );
        let mut out = Vec::new();
        let options = CheckoutOptions {
            cart: Some(cart.path()),
            ..opts(order.path())
        };
        let err = run(options, &mut out).await.unwrap_err();

        assert!(matches!(err, CliError::Cart(_)));
        assert_eq!(err.exit_code(), 1);
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn test_checkout_strict_email() {
        let file = order_file(&VALID.replace("a@b.com", "amy"));
        let mut out = Vec::new();
        let options = CheckoutOptions {
            strict_email: true,
            ..opts(file.path())
        };
        let err = run(options, &mut out).await.unwrap_err();
        assert!(matches!(err, CliError::InvalidOrder(1)));
        assert!(String::from_utf8(out).unwrap().contains("Email 格式不正確"));
    }
}

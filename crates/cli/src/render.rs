//! Plain-text rendering of checkout state.

use std::io::{self, Write};

use sova_home_checkout::{CheckoutSummary, Completion, FormField, LineItem, ValidationResult};
use sova_home_core::Price;

/// Cart lines followed by the goods total, as on the 購物車 step.
pub fn cart(out: &mut impl Write, items: &[LineItem], total: Price) -> io::Result<()> {
    for item in items {
        writeln!(
            out,
            "{}  數量 x {}  {}",
            item.name(),
            item.quantity(),
            item.line_total()
        )?;
    }
    writeln!(out, "總金額 {total}")
}

/// Field messages, one per line, in form order.
pub fn validation(out: &mut impl Write, result: &ValidationResult) -> io::Result<()> {
    for (field, message) in result.iter() {
        writeln!(out, "{}: {message}", field.label())?;
    }
    Ok(())
}

/// The 訂單確認 page: items, totals and the customer's details.
pub fn summary(out: &mut impl Write, summary: &CheckoutSummary<'_>) -> io::Result<()> {
    writeln!(out, "訂單確認")?;
    for item in summary.items {
        writeln!(out, "  {} x{}  {}", item.name(), item.quantity(), item.line_total())?;
    }
    writeln!(out, "商品總金額 {}", summary.total)?;
    writeln!(out, "運費 {}", summary.shipping)?;
    writeln!(out, "應付金額 {}", summary.amount_due)?;
    writeln!(out, "訂購人資訊")?;
    for field in FormField::ALL {
        if field == FormField::Coupon {
            continue;
        }
        writeln!(out, "  {}：{}", field.label(), summary.form.value(field))?;
    }
    Ok(())
}

pub fn completion(out: &mut impl Write, completion: &Completion) -> io::Result<()> {
    writeln!(out, "訂單編號 {}", completion.order.order_number)?;
    writeln!(out, "→ {}", completion.redirect_to)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use sova_home_checkout::{CheckoutSession, MockCart, OrderForm, validate};
    use sova_home_core::{DeliveryMethod, PaymentMethod};

    use super::*;

    fn render<F: FnOnce(&mut Vec<u8>) -> io::Result<()>>(f: F) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_cart() {
        let items = MockCart::items();
        let text = render(|out| cart(out, &items, Price::new(234_300)));
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[1], "多功能模組沙發  數量 x 2  NT$ 136,000");
        assert!(text.ends_with("總金額 NT$ 234,300\n"));
    }

    #[test]
    fn test_validation() {
        let result = validate(&OrderForm::new().with_name("Amy"));
        let text = render(|out| validation(out, &result));
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(
            lines,
            [
                "電話: 請輸入電話",
                "Email: 請輸入 Email",
                "配送方式: 請選擇配送方式",
                "付款方式: 請選擇付款方式",
            ]
        );
    }

    #[test]
    fn test_summary() {
        let mut session = CheckoutSession::new(MockCart::items()).unwrap();
        session.advance().unwrap();
        session
            .submit(
                OrderForm::new()
                    .with_name("Amy")
                    .with_phone("0912345678")
                    .with_email("a@b.com")
                    .with_delivery(DeliveryMethod::HomeDelivery)
                    .with_payment(PaymentMethod::LinePay),
            )
            .unwrap();

        let text = render(|out| summary(out, &session.summary()));
        assert!(text.contains("應付金額 NT$ 234,300"));
        assert!(text.contains("運費 NT$ 0"));
        assert!(text.contains("付款方式：LINE Pay"));
        assert!(text.contains("發票："));
        assert!(!text.contains("優惠碼"));
    }
}

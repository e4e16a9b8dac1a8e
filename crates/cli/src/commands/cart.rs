//! Show the cart and its total.
//!
//! # Usage
//!
//! ```bash
//! sova-cli cart
//! sova-cli cart --file cart.yaml --json
//! ```

use std::io::Write;
use std::path::Path;

use serde_json::json;
use sova_home_checkout::{Totals, item_count};

use crate::error::CliError;
use crate::render;

/// Print the cart lines, unit count and totals.
pub fn show(file: Option<&Path>, as_json: bool, out: &mut impl Write) -> Result<(), CliError> {
    let items = super::load_cart(file)?;
    let totals = Totals::of(&items)?;

    if as_json {
        let body = json!({
            "items": items,
            "item_count": item_count(&items),
            "totals": totals,
        });
        serde_json::to_writer_pretty(&mut *out, &body)?;
        writeln!(out)?;
    } else {
        render::cart(out, &items, totals.subtotal)?;
        writeln!(out, "共 {} 件", item_count(&items))?;
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_show_demo_cart() {
        let mut out = Vec::new();
        show(None, false, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("總金額 NT$ 234,300"));
        assert!(text.contains("共 4 件"));
    }

    #[test]
    fn test_show_demo_cart_json() {
        let mut out = Vec::new();
        show(None, true, &mut out).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["item_count"], 4);
        assert_eq!(value["totals"]["amount_due"], 234_300);
        assert_eq!(value["items"][0]["unit_price"], 45_800);
    }
}

//! Check an order-form file without placing an order.
//!
//! # Usage
//!
//! ```bash
//! sova-cli validate --order order.yaml
//! ```

use std::io::Write;
use std::path::Path;

use sova_home_checkout::Validator;

use crate::error::CliError;
use crate::files::read_order_form;
use crate::render;

/// Validate the form in `path` and print any field errors.
pub async fn run(
    path: &Path,
    strict_email: bool,
    as_json: bool,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let form = read_order_form(path).await?;
    let result = Validator::new().strict_email(strict_email).validate(&form);

    if as_json {
        serde_json::to_writer_pretty(&mut *out, &result)?;
        writeln!(out)?;
    } else if result.is_valid() {
        writeln!(out, "OK")?;
    } else {
        render::validation(out, &result)?;
    }

    if result.is_valid() {
        Ok(())
    } else {
        Err(CliError::InvalidOrder(result.len()))
    }
}

//! Subcommand implementations.

pub mod cart;
pub mod checkout;
pub mod validate;

use std::path::Path;

use sova_home_checkout::{CartSource, LineItem, MockCart};
use tracing::info;

use crate::files::{FileCart, FileError};

/// Load the cart from `path`, or the demo cart when none is given.
fn load_cart(path: Option<&Path>) -> Result<Vec<LineItem>, FileError> {
    match path {
        Some(path) => {
            info!(path = %path.display(), "Loading cart from file");
            FileCart::new(path).load()
        }
        None => {
            info!("Using demo cart");
            Ok(MockCart::items())
        }
    }
}

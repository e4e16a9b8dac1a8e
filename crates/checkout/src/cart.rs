//! Cart snapshot: the line items a checkout session prices and displays.
//!
//! Items are fixed once the session starts. There is no quantity editing
//! inside checkout; the customer goes back to the cart drawer for that.

use std::convert::Infallible;

use serde::{Deserialize, Serialize};
use sova_home_core::{LineItemId, Price};

/// Errors raised when constructing a [`LineItem`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum LineItemError {
    /// Quantity must be at least one.
    #[error("line item {id} has zero quantity")]
    ZeroQuantity {
        /// Offending item.
        id: LineItemId,
    },
    /// `unit_price * quantity` does not fit in a [`Price`].
    #[error("line item {id} total exceeds {}", Price::MAX)]
    LineTotalTooLarge {
        /// Offending item.
        id: LineItemId,
    },
}

/// One product entry in the cart.
///
/// `unit_price` is unsigned so it can never be negative; `quantity` and the
/// line total are checked by [`LineItem::new`], which deserialization also
/// goes through.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawLineItem")]
pub struct LineItem {
    id: LineItemId,
    name: String,
    unit_price: Price,
    quantity: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    image: Option<String>,
}

/// Unchecked shape used for deserialization.
#[derive(Deserialize)]
struct RawLineItem {
    id: LineItemId,
    name: String,
    #[serde(alias = "price")]
    unit_price: Price,
    #[serde(alias = "qty")]
    quantity: u32,
    #[serde(default)]
    image: Option<String>,
}

impl TryFrom<RawLineItem> for LineItem {
    type Error = LineItemError;

    fn try_from(raw: RawLineItem) -> Result<Self, Self::Error> {
        let item = Self::new(raw.id, raw.name, raw.unit_price, raw.quantity)?;
        Ok(match raw.image {
            Some(image) => item.with_image(image),
            None => item,
        })
    }
}

impl LineItem {
    /// Create a line item.
    ///
    /// # Errors
    ///
    /// Returns [`LineItemError::ZeroQuantity`] if `quantity` is 0 and
    /// [`LineItemError::LineTotalTooLarge`] if `unit_price * quantity`
    /// overflows.
    pub fn new(
        id: LineItemId,
        name: impl Into<String>,
        unit_price: Price,
        quantity: u32,
    ) -> Result<Self, LineItemError> {
        if quantity == 0 {
            return Err(LineItemError::ZeroQuantity { id });
        }
        if unit_price.checked_times(quantity).is_none() {
            return Err(LineItemError::LineTotalTooLarge { id });
        }
        Ok(Self {
            id,
            name: name.into(),
            unit_price,
            quantity,
            image: None,
        })
    }

    /// Attach a thumbnail path.
    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    #[must_use]
    pub const fn id(&self) -> LineItemId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn unit_price(&self) -> Price {
        self.unit_price
    }

    #[must_use]
    pub const fn quantity(&self) -> u32 {
        self.quantity
    }

    #[must_use]
    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }

    /// `unit_price * quantity`.
    #[must_use]
    pub const fn line_total(&self) -> Price {
        // Cannot overflow: `new` rejects items whose total does not fit.
        Price::new(self.unit_price.amount() * self.quantity as u64)
    }
}

/// Supplies the cart snapshot a checkout session starts from.
pub trait CartSource {
    /// Error produced when the cart cannot be loaded.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Load the cart lines in display order.
    ///
    /// # Errors
    ///
    /// Implementation-specific; see [`CartSource::Error`].
    fn load(&self) -> Result<Vec<LineItem>, Self::Error>;
}

/// The fixed demo cart shown on the storefront checkout page.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockCart;

impl MockCart {
    const ITEMS: &'static [(i32, &'static str, u64, u32, &'static str)] = &[
        (1, "現代舒適三人沙發", 45_800, 1, "/sofa1.png"),
        (2, "多功能模組沙發", 68_000, 2, "/sofa2.png"),
        (3, "簡約雙人沙發", 52_500, 1, "/sofa3.png"),
    ];

    /// Build the demo line items.
    #[must_use]
    pub fn items() -> Vec<LineItem> {
        Self::ITEMS
            .iter()
            .map(|&(id, name, price, quantity, image)| LineItem {
                id: LineItemId::new(id),
                name: name.to_owned(),
                unit_price: Price::new(price),
                quantity,
                image: Some(image.to_owned()),
            })
            .collect()
    }
}

impl CartSource for MockCart {
    type Error = Infallible;

    fn load(&self) -> Result<Vec<LineItem>, Self::Error> {
        Ok(Self::items())
    }
}

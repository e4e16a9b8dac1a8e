//! Whole-dollar price representation.
//!
//! The storefront sells in New Taiwan dollars and never shows minor units,
//! so a price is a non-negative integer number of NT$. Arithmetic is
//! checked: an amount that does not fit is reported as `None`, never
//! clamped or wrapped.

use core::fmt;

use serde::{Deserialize, Serialize};

/// A non-negative amount in whole New Taiwan dollars.
///
/// ## Examples
///
/// ```
/// use sova_home_core::Price;
///
/// let sofa = Price::new(68_000);
/// assert_eq!(sofa.checked_times(2), Some(Price::new(136_000)));
/// assert_eq!(sofa.to_string(), "NT$ 68,000");
/// assert_eq!(Price::MAX.checked_add(sofa), None);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Price(u64);

impl Price {
    /// A zero amount.
    pub const ZERO: Self = Self(0);

    /// The largest representable amount.
    pub const MAX: Self = Self(u64::MAX);

    /// ISO 4217 code of the only currency the store prices in.
    pub const CURRENCY_CODE: &'static str = "TWD";

    /// Display prefix used on every price label.
    pub const SYMBOL: &'static str = "NT$";

    /// Create a price from a whole-dollar amount.
    #[must_use]
    pub const fn new(amount: u64) -> Self {
        Self(amount)
    }

    /// Get the whole-dollar amount.
    #[must_use]
    pub const fn amount(self) -> u64 {
        self.0
    }

    /// Returns `true` if the amount is zero.
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Multiply by a quantity (line total), or `None` on overflow.
    #[must_use]
    pub const fn checked_times(self, quantity: u32) -> Option<Self> {
        match self.0.checked_mul(quantity as u64) {
            Some(amount) => Some(Self(amount)),
            None => None,
        }
    }

    /// Add two prices, or `None` on overflow.
    #[must_use]
    pub const fn checked_add(self, other: Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(amount) => Some(Self(amount)),
            None => None,
        }
    }

    /// Format for display with thousands separators (e.g. `NT$ 181,800`).
    #[must_use]
    pub fn display(&self) -> String {
        format!("{} {}", Self::SYMBOL, group_thousands(self.0))
    }
}

/// Insert a comma between every group of three digits.
fn group_thousands(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

impl From<u64> for Price {
    fn from(amount: u64) -> Self {
        Self(amount)
    }
}

impl From<Price> for u64 {
    fn from(price: Price) -> Self {
        price.0
    }
}

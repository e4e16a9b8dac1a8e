//! Checkout choice lists and the explicit "not selected" wrapper.
//!
//! Every choice serializes to the label shown in the checkout form, so a
//! stored order reads the same as what the customer picked.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Error returned when a label does not name any option of a choice list.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown {kind}: {label:?}")]
pub struct ChoiceError {
    /// Which choice list was being parsed (e.g. "delivery method").
    pub kind: &'static str,
    /// The rejected input.
    pub label: String,
}

/// A closed list of options presented as a drop-down.
pub trait Choice: Copy + Eq + 'static {
    /// Human-readable name of the list, used in error messages.
    const KIND: &'static str;

    /// All options in display order.
    const ALL: &'static [Self];

    /// The label shown to the customer.
    fn label(self) -> &'static str;

    /// Look up an option by its exact label.
    #[must_use]
    fn from_label(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.label() == label)
    }
}

macro_rules! define_choice {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal {
            $($(#[$vmeta:meta])* $variant:ident => $label:tt),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $label)]
                $variant,
            )+
        }

        impl Choice for $name {
            const KIND: &'static str = $kind;
            const ALL: &'static [Self] = &[$(Self::$variant),+];

            fn label(self) -> &'static str {
                match self {
                    $(Self::$variant => $label,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        impl FromStr for $name {
            type Err = ChoiceError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::from_label(s.trim()).ok_or_else(|| ChoiceError {
                    kind: Self::KIND,
                    label: s.to_owned(),
                })
            }
        }
    };
}

define_choice! {
    /// How the order reaches the customer.
    DeliveryMethod, "delivery method" {
        /// Home delivery by the store's own carrier.
        HomeDelivery => "宅配",
        /// Pick-up at a convenience store.
        ConvenienceStore => "超商",
        /// Black Cat (T-Cat) courier.
        BlackCat => "黑貓",
    }
}

define_choice! {
    /// How the customer pays.
    PaymentMethod, "payment method" {
        CreditCard => "信用卡",
        LinePay => "LINE Pay",
        CashOnDelivery => "貨到付款",
    }
}

define_choice! {
    /// Uniform-invoice delivery preference.
    InvoiceOption, "invoice option" {
        /// Mobile barcode carrier (citizen digital certificate).
        MobileCarrier => "自然人載具",
        /// Company invoice with a tax ID number.
        CompanyTaxId => "統編",
        /// Printed paper invoice.
        Paper => "紙本發票",
    }
}

/// A drop-down value that may not have been chosen yet.
///
/// Serializes to the option label, or to `""` when unset, matching what the
/// form posts for the "請選擇" placeholder.
///
/// ```
/// use sova_home_core::{DeliveryMethod, Selection};
///
/// let unset: Selection<DeliveryMethod> = Selection::parse("").unwrap();
/// assert!(unset.is_unset());
///
/// let home = Selection::parse("宅配").unwrap();
/// assert_eq!(home, Selection::Selected(DeliveryMethod::HomeDelivery));
///
/// assert!(Selection::<DeliveryMethod>::parse("郵局").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Selection<T> {
    /// The placeholder is still selected.
    Unset,
    /// The customer picked an option.
    Selected(T),
}

impl<T> Default for Selection<T> {
    fn default() -> Self {
        Self::Unset
    }
}

impl<T: Copy> Selection<T> {
    /// Returns `true` if nothing was chosen.
    #[must_use]
    pub const fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }

    /// Returns `true` if an option was chosen.
    #[must_use]
    pub const fn is_selected(&self) -> bool {
        matches!(self, Self::Selected(_))
    }

    /// The chosen option, if any.
    #[must_use]
    pub const fn selected(&self) -> Option<T> {
        match self {
            Self::Unset => None,
            Self::Selected(value) => Some(*value),
        }
    }
}

impl<T: Choice> Selection<T> {
    /// Parse a form value; an empty (or blank) string means unset.
    ///
    /// # Errors
    ///
    /// Returns [`ChoiceError`] if the value is non-empty and matches no option.
    pub fn parse(raw: &str) -> Result<Self, ChoiceError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Ok(Self::Unset);
        }
        T::from_label(raw).map(Self::Selected).ok_or_else(|| ChoiceError {
            kind: T::KIND,
            label: raw.to_owned(),
        })
    }

    /// The option label, or `""` when unset.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Unset => "",
            Self::Selected(value) => value.label(),
        }
    }
}

impl<T> From<T> for Selection<T> {
    fn from(value: T) -> Self {
        Self::Selected(value)
    }
}

impl<T> From<Option<T>> for Selection<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Unset, Self::Selected)
    }
}

impl<T: Choice> fmt::Display for Selection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl<T: Choice> Serialize for Selection<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de, T: Choice> Deserialize<'de> for Selection<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

//! Type-safe price representation using decimal arithmetic.

use core::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A price with currency information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Price {
    /// Amount in the currency's standard unit (rupees, not paise).
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency_code: CurrencyCode,
}

impl Price {
    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal, currency_code: CurrencyCode) -> Self {
        Self {
            amount,
            currency_code,
        }
    }

    /// A whole-rupee price.
    #[must_use]
    pub fn inr(rupees: i64) -> Self {
        Self::new(Decimal::from(rupees), CurrencyCode::INR)
    }

    /// Zero in the given currency.
    #[must_use]
    pub const fn zero(currency_code: CurrencyCode) -> Self {
        Self::new(Decimal::ZERO, currency_code)
    }

    /// Add two prices, or `None` if their currencies differ.
    ///
    /// Saturates at `Decimal::MAX`.
    #[must_use]
    pub fn checked_add(self, other: Self) -> Option<Self> {
        (self.currency_code == other.currency_code).then(|| {
            Self::new(
                self.amount.saturating_add(other.amount),
                self.currency_code,
            )
        })
    }

    /// Multiply by a count (e.g. nightly rate times nights booked).
    #[must_use]
    pub fn times(self, count: u32) -> Self {
        Self::new(
            self.amount.saturating_mul(Decimal::from(count)),
            self.currency_code,
        )
    }

    /// Sum prices in one currency, skipping any in another currency.
    pub fn sum_in(currency_code: CurrencyCode, prices: impl IntoIterator<Item = Self>) -> Self {
        prices
            .into_iter()
            .filter_map(|p| Self::zero(currency_code).checked_add(p))
            .fold(Self::zero(currency_code), |acc, p| {
                Self::new(acc.amount.saturating_add(p.amount), currency_code)
            })
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.currency_code.symbol(), self.amount.normalize())
    }
}

/// ISO 4217 currency codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    INR,
    USD,
}

impl CurrencyCode {
    /// Display symbol for the currency.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::INR => "₹",
            Self::USD => "$",
        }
    }
}

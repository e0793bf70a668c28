//! Whole-unit prices in the display currency.
//!
//! The storefront sells in Indian rupees and never deals in fractional units,
//! so a [`Price`] is a non-negative integer. Display formatting follows the
//! `en-IN` convention: the last three digits form one group and every group
//! above it has two digits (`12,34,567`).

use core::fmt;
use core::iter::Sum;

use serde::{Deserialize, Serialize};

/// A non-negative price in whole display-currency units.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Price(u64);

impl Price {
    /// A price of zero.
    pub const ZERO: Self = Self(0);

    /// Currency symbol shown before every amount.
    pub const SYMBOL: &'static str = "₹";

    /// Create a new price.
    #[must_use]
    pub const fn new(amount: u64) -> Self {
        Self(amount)
    }

    /// Get the amount in whole units.
    #[must_use]
    pub const fn amount(&self) -> u64 {
        self.0
    }

    /// Parse admin-entered text into a price without ever failing.
    ///
    /// Reads an optional sign followed by the leading run of decimal digits,
    /// ignoring whatever follows (`"12abc"` is 12, `"3.9"` is 3). Negative
    /// values are made positive and text without leading digits is 0.
    /// Values too large for the price type saturate.
    #[must_use]
    pub fn parse_lenient(raw: &str) -> Self {
        let trimmed = raw.trim_start();
        let unsigned = trimmed
            .strip_prefix('-')
            .or_else(|| trimmed.strip_prefix('+'))
            .unwrap_or(trimmed);

        let amount = unsigned
            .chars()
            .map_while(|c| c.to_digit(10))
            .fold(0_u64, |acc, digit| {
                acc.saturating_mul(10).saturating_add(u64::from(digit))
            });

        Self(amount)
    }

    /// Price of `quantity` units at this unit price, saturating on overflow.
    #[must_use]
    pub fn times(self, quantity: u32) -> Self {
        Self(self.0.saturating_mul(u64::from(quantity)))
    }

    /// Add two prices, saturating on overflow.
    #[must_use]
    pub const fn saturating_add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }

    /// Format the amount with Indian digit grouping, without a symbol.
    #[must_use]
    pub fn grouped(&self) -> String {
        let digits = self.0.to_string();
        let len = digits.len();
        if len <= 3 {
            return digits;
        }

        let head_len = len - 3;
        let mut out = String::with_capacity(len + len / 2);
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && i < head_len && (head_len - i) % 2 == 0 {
                out.push(',');
            }
            if i == head_len {
                out.push(',');
            }
            out.push(c);
        }
        out
    }

    /// Format for display (e.g., `₹2,499`).
    #[must_use]
    pub fn display(&self) -> String {
        format!("{}{}", Self::SYMBOL, self.grouped())
    }
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

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Self::saturating_add)
    }
}

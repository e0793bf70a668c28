//! Small enums shared between the storefront and its front-ends.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

/// Severity of a user-facing notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    #[default]
    Info,
    Success,
    Error,
}

impl Severity {
    /// Lowercase name, as used for styling hooks.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordering applied to a catalog listing.
///
/// Sorting is a view concern: it never changes the stored order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Storage order (most recently added first).
    #[default]
    None,
    /// Cheapest first.
    PriceAscending,
    /// Most expensive first.
    PriceDescending,
}

/// Error returned when a sort order name is not recognised.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown sort order '{0}' (expected none, low or high)")]
pub struct UnknownSortOrder(pub String);

impl FromStr for SortOrder {
    type Err = UnknownSortOrder;

    /// Accepts the select values of the product page (`low`, `high`) as well
    /// as `none` and the empty string.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "none" | "default" => Ok(Self::None),
            "low" | "asc" | "price-asc" => Ok(Self::PriceAscending),
            "high" | "desc" | "price-desc" => Ok(Self::PriceDescending),
            other => Err(UnknownSortOrder(other.to_owned())),
        }
    }
}

//! Type-safe price representation using decimal arithmetic.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A product or order price in the shop's single implied currency.
///
/// Backed by [`Decimal`] so comparisons and totals are exact, and serialized
/// as a bare JSON number to match the wire format the demo UI expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// Create a new price from a decimal amount.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Get the underlying decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }
}

impl From<i64> for Price {
    fn from(amount: i64) -> Self {
        Self(Decimal::from(amount))
    }
}

impl From<Decimal> for Price {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_orders_numerically() {
        let low = Price::from(35);
        let high = Price::from(100);
        assert!(low < high);
    }

    #[test]
    fn test_price_display_is_bare_decimal() {
        assert_eq!(Price::from(120).to_string(), "120");
    }

    #[test]
    fn test_price_serializes_as_json_number() {
        let json = serde_json::to_string(&Price::from(65)).expect("serialize");
        let value: f64 = json.parse().expect("numeric literal");
        assert!((value - 65.0).abs() < f64::EPSILON);
    }
}

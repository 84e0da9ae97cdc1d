//! Money type for the checkout boundary.
//!
//! Catalog prices are decimal USD amounts entered by creators and displayed
//! as entered. Conversion to integer minor units (cents) happens only here,
//! when an amount crosses into the payment provider's request format.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A USD amount in integer cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in cents.
    pub cents: i64,
}

impl Money {
    /// Create a Money value from cents.
    pub fn new(cents: i64) -> Self {
        Self { cents }
    }

    /// Convert a decimal dollar amount, rounding at the cent boundary.
    ///
    /// ```
    /// use maker_commerce::Money;
    /// assert_eq!(Money::from_decimal(49.50).cents, 4950);
    /// assert_eq!(Money::from_decimal(19.999).cents, 2000);
    /// ```
    pub fn from_decimal(amount: f64) -> Self {
        Self::new((amount * 100.0).round() as i64)
    }

    /// Zero dollars.
    pub fn zero() -> Self {
        Self::new(0)
    }

    /// The ISO currency code the provider expects.
    pub fn currency_code(&self) -> &'static str {
        "usd"
    }

    /// Add another amount, saturating on overflow.
    pub fn add(&self, other: Money) -> Money {
        Money::new(self.cents.saturating_add(other.cents))
    }

    /// Format as a display string (e.g., "$49.99").
    pub fn display(&self) -> String {
        let sign = if self.cents < 0 { "-" } else { "" };
        let abs = self.cents.unsigned_abs();
        format!("{}${}.{:02}", sign, abs / 100, abs % 100)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

//! Currency with decimal precision and rounding.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! Amounts are `rust_decimal::Decimal` and are rounded to the currency's
//! rounding factor with banker's rounding (round half to even).

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Number of decimal places used for unit and cost prices.
pub const PRICE_DIGITS: u32 = 4;

/// A company currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Currency {
    /// ISO 4217 currency code (e.g., "USD", "EUR").
    pub code: String,
    /// Smallest representable step (e.g., `0.01`).
    pub rounding: Decimal,
    /// Number of decimal places used to display amounts.
    pub digits: u32,
}

impl Currency {
    /// Creates a currency whose rounding factor follows its display digits.
    #[must_use]
    pub fn new(code: impl Into<String>, digits: u32) -> Self {
        Self {
            code: code.into(),
            rounding: Decimal::new(1, digits),
            digits,
        }
    }

    /// Creates a currency with an explicit rounding factor (e.g., `0.05`).
    #[must_use]
    pub fn with_rounding(code: impl Into<String>, rounding: Decimal, digits: u32) -> Self {
        Self {
            code: code.into(),
            rounding,
            digits,
        }
    }

    /// Rounds an amount to this currency's rounding factor.
    ///
    /// Uses banker's rounding to minimize cumulative errors. A zero rounding
    /// factor falls back to rounding on the display digits.
    #[must_use]
    pub fn round(&self, amount: Decimal) -> Decimal {
        if self.rounding.is_zero() {
            return amount.round_dp_with_strategy(self.digits, RoundingStrategy::MidpointNearestEven);
        }
        let steps = (amount / self.rounding)
            .round_dp_with_strategy(0, RoundingStrategy::MidpointNearestEven);
        (steps * self.rounding).round_dp(self.digits)
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code)
    }
}

#[cfg(test)]
#[path = "money_tests.rs"]
mod tests;
